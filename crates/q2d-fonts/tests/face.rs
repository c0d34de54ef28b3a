//! `FontdueFace` against a real TrueType font.
//!
//! The fixture is DejaVu Sans Mono; see `fixtures/LICENSE-DejaVu.txt`.

use q2d_engine::prelude::*;
use q2d_fonts::{FontRegistry, FontStyle, FontdueFace};

const MONO: &[u8] = include_bytes!("fixtures/DejaVuSansMono.ttf");
const PX: f32 = 16.0;

fn face() -> anyhow::Result<FontdueFace> {
    Ok(FontdueFace::from_bytes(MONO, PX)?)
}

/// Absolute coordinates of every non-transparent pixel.
fn painted(c: &Canvas) -> Vec<(i32, i32)> {
    c.rows()
        .enumerate()
        .flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, px)| !px.is_transparent())
                .map(move |(x, _)| (x as i32, y as i32))
        })
        .collect()
}

// ── metrics / measure ─────────────────────────────────────────────────────

#[test_log::test]
fn metrics_have_positive_extent() -> anyhow::Result<()> {
    let m = face()?.metrics();
    assert!(m.ascent > 0.0, "{m:?}");
    assert!(m.descent > 0.0, "descent must be reported below the baseline: {m:?}");
    assert!(m.line_height() > 0);
    assert!(m.baseline() < m.line_height());
    Ok(())
}

#[test_log::test]
fn measure_grows_with_text() -> anyhow::Result<()> {
    let face = face()?;
    assert_eq!(face.measure(""), 0);
    assert!(face.measure("a") > 0);
    assert!(face.measure("ab") >= face.measure("a"));
    // Monospaced: glyph shape does not change the advance.
    assert_eq!(face.measure("iiii"), face.measure("WWWW"));
    Ok(())
}

// ── rasterize ─────────────────────────────────────────────────────────────

#[test_log::test]
fn rasterize_returns_measured_advance() -> anyhow::Result<()> {
    let face = face()?;
    let mut mask = Canvas::new(200, 32)?;
    let pen = Point::new(0, face.metrics().baseline());

    let advance = face.rasterize("Hello", pen, Color::WHITE, &mut mask)?;
    assert_eq!(advance, face.measure("Hello"));
    assert!(!painted(&mask).is_empty());
    Ok(())
}

#[test_log::test]
fn coverage_scales_alpha_not_color() -> anyhow::Result<()> {
    let face = face()?;
    let color = Color::rgba(10, 20, 30, 128);
    let mut mask = Canvas::new(64, 32)?;
    face.rasterize("Hm", Point::new(0, face.metrics().baseline()), color, &mut mask)?;

    let mut max_alpha = 0;
    for px in mask.rows().flatten().filter(|px| !px.is_transparent()) {
        assert_eq!((px.r, px.g, px.b), (10, 20, 30));
        assert!(px.a <= 128, "{px:?}");
        max_alpha = max_alpha.max(px.a);
    }
    assert!(max_alpha > 64, "stems should be mostly covered, got {max_alpha}");
    Ok(())
}

// ── through Canvas::text ──────────────────────────────────────────────────

#[test_log::test]
fn text_stays_inside_its_line_box() -> anyhow::Result<()> {
    let face = face()?;
    let m = face.metrics();
    let anchor = Point::new(5, 7);

    let mut c = Canvas::new(100, 60)?;
    c.text(anchor, Color::WHITE, &face, false, "Agy")?;

    let px = painted(&c);
    assert!(!px.is_empty());
    for &(x, y) in &px {
        assert!(x >= anchor.x, "({x}, {y})");
        assert!((anchor.y..anchor.y + m.line_height()).contains(&y), "({x}, {y})");
    }
    Ok(())
}

#[test_log::test]
fn descenders_drop_below_capitals() -> anyhow::Result<()> {
    let face = face()?;
    let baseline = face.metrics().baseline();

    let lowest_row = |text: &str| -> anyhow::Result<i32> {
        let mut c = Canvas::new(40, 40)?;
        c.text(Point::zero(), Color::WHITE, &face, false, text)?;
        Ok(painted(&c).into_iter().map(|(_, y)| y).max().unwrap_or(-1))
    };

    let cap = lowest_row("A")?;
    let desc = lowest_row("g")?;
    assert!((0..=baseline).contains(&cap), "A bottom {cap}, baseline {baseline}");
    assert!(desc >= baseline, "g bottom {desc}, baseline {baseline}");
    assert!(desc > cap);
    Ok(())
}

#[test_log::test]
fn wrapped_text_uses_several_lines() -> anyhow::Result<()> {
    let face = face()?;
    let lh = face.metrics().line_height();
    // Room for about four monospaced cells.
    let width = face.measure("abcd") as u32;

    let mut c = Canvas::new(width, 5 * lh as u32)?;
    c.text(Point::zero(), Color::WHITE, &face, true, "ab cd ef")?;

    let lowest = painted(&c).into_iter().map(|(_, y)| y).max().unwrap_or(-1);
    assert!(lowest >= 2 * lh, "expected three lines, lowest row {lowest}");
    Ok(())
}

// ── registry ──────────────────────────────────────────────────────────────

#[test_log::test]
fn registry_serves_loaded_faces() -> anyhow::Result<()> {
    let mut fonts = FontRegistry::new();
    fonts.load(FontStyle::Normal, MONO)?;
    fonts.load(FontStyle::Tall, MONO)?;

    let normal = fonts.get(FontStyle::Normal).ok_or_else(|| anyhow::anyhow!("missing"))?;
    let tall = fonts.get(FontStyle::Tall).ok_or_else(|| anyhow::anyhow!("missing"))?;
    assert_eq!(normal.px(), 8.0);
    assert_eq!(tall.px(), 16.0);
    assert!(tall.measure("x") > normal.measure("x"));
    assert_eq!(fonts.styles().collect::<Vec<_>>(), [FontStyle::Normal, FontStyle::Tall]);

    let mut c = Canvas::new(32, 16)?;
    c.text(Point::zero(), Color::WHITE, tall, false, "q")?;
    assert!(!painted(&c).is_empty());
    Ok(())
}
