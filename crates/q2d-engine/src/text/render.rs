use std::fmt;

use crate::canvas::{Canvas, MAX_DIMENSION};
use crate::coords::Point;
use crate::error::CanvasResult;
use crate::paint::Color;

use super::{split_lines, wrap_lines, FontFace};

impl Canvas {
    /// Draws `text` with the top-left of its first line at local point
    /// `anchor`.
    ///
    /// Lines are limited to the space between `anchor.x` and the right edge
    /// of the current clip; with `wrap` they are word-wrapped to fit,
    /// otherwise only explicit newlines break lines. Glyphs are rasterized
    /// into an offscreen mask and composited pixel by pixel.
    ///
    /// # Errors
    /// Propagates failures from [`FontFace::rasterize`]; nothing is drawn
    /// onto this canvas in that case.
    pub fn text<F>(
        &mut self,
        anchor: Point,
        color: Color,
        face: &F,
        wrap: bool,
        text: &str,
    ) -> CanvasResult<()>
    where
        F: FontFace + ?Sized,
    {
        let max_width = self.view().local_clip().right().saturating_sub(anchor.x);
        if max_width <= 0 {
            return Ok(());
        }

        let lines = if wrap { wrap_lines(text, face, max_width) } else { split_lines(text) };

        let metrics = face.metrics();
        let line_height = metrics.line_height();
        let total_height = (lines.len() as i32).saturating_mul(line_height);
        if total_height <= 0 {
            return Ok(());
        }

        // Text past the addressable limit is dropped rather than failing.
        let mask_w = (max_width as u32).min(MAX_DIMENSION);
        let mask_h = (total_height as u32).min(MAX_DIMENSION);
        let mut mask = Canvas::new(mask_w, mask_h)?;

        let mut pen = Point::new(0, metrics.baseline());
        for line in &lines {
            face.rasterize(line, pen, color, &mut mask).inspect_err(|e| {
                log::warn!("text rasterization failed for {line:?}: {e}");
            })?;
            pen.x = 0;
            pen.y += line_height;
        }

        for (y, row) in mask.rows().enumerate() {
            for (x, &px) in row.iter().enumerate() {
                if px.is_transparent() {
                    continue;
                }
                self.blend_pixel(anchor + Point::new(x as i32, y as i32), px);
            }
        }

        Ok(())
    }

    /// [`text`](Self::text) with `format_args!` input.
    ///
    /// ```ignore
    /// canvas.text_fmt(at, Color::WHITE, &face, false, format_args!("fps: {fps:.1}"))?;
    /// ```
    pub fn text_fmt<F>(
        &mut self,
        anchor: Point,
        color: Color,
        face: &F,
        wrap: bool,
        args: fmt::Arguments<'_>,
    ) -> CanvasResult<()>
    where
        F: FontFace + ?Sized,
    {
        match args.as_str() {
            Some(s) => self.text(anchor, color, face, wrap, s),
            None => self.text(anchor, color, face, wrap, &args.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::error::CanvasError;
    use crate::text::FontMetrics;

    const WHITE: Color = Color::WHITE;
    const EMPTY: Color = Color::TRANSPARENT;

    /// Fixed-pitch block font: each non-space char is a solid
    /// `ADVANCE - 1` by `ASCENT` block sitting on the baseline.
    struct Blocks;

    const ADVANCE: i32 = 4;
    const ASCENT: i32 = 5;
    const DESCENT: i32 = 2;

    impl FontFace for Blocks {
        fn measure(&self, text: &str) -> i32 {
            text.chars().count() as i32 * ADVANCE
        }

        fn metrics(&self) -> FontMetrics {
            FontMetrics::new(ASCENT as f32, DESCENT as f32)
        }

        fn rasterize(
            &self,
            text: &str,
            pen: Point,
            color: Color,
            mask: &mut Canvas,
        ) -> CanvasResult<i32> {
            let mut x = pen.x;
            for ch in text.chars() {
                if !ch.is_whitespace() {
                    mask.fill_rect(Rect::new(x, pen.y - ASCENT, ADVANCE - 1, ASCENT), color);
                }
                x += ADVANCE;
            }
            Ok(x - pen.x)
        }
    }

    struct Broken;

    impl FontFace for Broken {
        fn measure(&self, _: &str) -> i32 {
            0
        }

        fn metrics(&self) -> FontMetrics {
            FontMetrics::new(4.0, 1.0)
        }

        fn rasterize(&self, _: &str, _: Point, _: Color, _: &mut Canvas) -> CanvasResult<i32> {
            Err(CanvasError::Font("no glyphs".into()))
        }
    }

    fn count(c: &Canvas, color: Color) -> usize {
        c.rows().flatten().filter(|&&px| px == color).count()
    }

    #[test]
    fn metrics_round_up() {
        let m = FontMetrics::new(6.2, 1.5);
        assert_eq!(m.line_height(), 8);
        assert_eq!(m.baseline(), 7);
    }

    #[test]
    fn single_glyph_lands_at_anchor() {
        let mut c = Canvas::new(40, 20).unwrap();
        c.text(Point::new(3, 2), WHITE, &Blocks, false, "A").unwrap();

        assert_eq!(count(&c, WHITE), ((ADVANCE - 1) * ASCENT) as usize);
        assert_eq!(c.at(Point::new(3, 2)), WHITE);
        assert_eq!(c.at(Point::new(5, 6)), WHITE);
        assert_eq!(c.at(Point::new(6, 2)), EMPTY);
        assert_eq!(c.at(Point::new(3, 7)), EMPTY);
    }

    #[test]
    fn newlines_advance_by_line_height() {
        let mut c = Canvas::new(40, 40).unwrap();
        c.text(Point::zero(), WHITE, &Blocks, false, "A\n\nB").unwrap();

        let lh = ASCENT + DESCENT;
        assert_eq!(c.at(Point::new(0, 0)), WHITE);
        assert_eq!(c.at(Point::new(0, lh)), EMPTY);
        assert_eq!(c.at(Point::new(0, 2 * lh)), WHITE);
    }

    #[test]
    fn wrap_uses_space_right_of_anchor() {
        // 30 - 10 = 20px available: "ab cd" is 20 wide, "ab cd e" is 28.
        let mut c = Canvas::new(30, 40).unwrap();
        c.text(Point::new(10, 0), WHITE, &Blocks, true, "ab cd e").unwrap();

        let lh = ASCENT + DESCENT;
        assert_eq!(c.at(Point::new(10 + 3 * ADVANCE, 0)), WHITE);
        assert_eq!(c.at(Point::new(10, lh)), WHITE);
        assert_eq!(c.at(Point::new(10 + ADVANCE, lh)), EMPTY);
    }

    #[test]
    fn without_wrap_long_lines_are_cut_at_clip() {
        let mut c = Canvas::new(10, 10).unwrap();
        c.text(Point::zero(), WHITE, &Blocks, false, "abcdef").unwrap();
        // Two full glyphs (0..3, 4..7) and one partial (8..10).
        assert_eq!(count(&c, WHITE), (3 + 3 + 2) * ASCENT as usize);
    }

    #[test]
    fn anchor_at_or_past_clip_edge_is_noop() {
        let mut c = Canvas::new(10, 10).unwrap();
        c.text(Point::new(10, 0), WHITE, &Blocks, false, "a").unwrap();
        c.push_clip(Rect::new(0, 0, 4, 10));
        c.text(Point::new(4, 0), WHITE, &Broken, false, "a").unwrap();
        c.pop_clip();
        assert_eq!(count(&c, WHITE), 0);
    }

    #[test]
    fn respects_clip_and_sub_image_origin() {
        let mut c = Canvas::new(40, 40).unwrap();
        c.push_sub_image(Rect::new(10, 10, 20, 20));
        c.push_clip(Rect::new(0, 0, 20, 3));
        c.text(Point::zero(), WHITE, &Blocks, false, "A").unwrap();
        c.pop_clip();
        c.pop_sub_image();

        assert_eq!(count(&c, WHITE), 3 * 3);
        assert_eq!(c.at(Point::new(10, 10)), WHITE);
        assert_eq!(c.at(Point::new(10, 13)), EMPTY);
    }

    #[test]
    fn translucent_text_blends_over_background() {
        let mut c = Canvas::new(10, 10).unwrap();
        c.fill(Color::BLACK);
        c.text(Point::zero(), Color::rgba(200, 0, 0, 51), &Blocks, false, "A").unwrap();
        let px = c.at(Point::zero());
        assert_eq!((px.r, px.g, px.b), (40, 0, 0));
    }

    #[test]
    fn rasterizer_failure_propagates() {
        let mut c = Canvas::new(10, 10).unwrap();
        let err = c.text(Point::zero(), WHITE, &Broken, false, "x").unwrap_err();
        assert_eq!(err, CanvasError::Font("no glyphs".into()));
        assert!(c.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn text_fmt_formats_arguments() {
        let mut a = Canvas::new(40, 10).unwrap();
        let mut b = Canvas::new(40, 10).unwrap();
        let n = 42;
        a.text_fmt(Point::zero(), WHITE, &Blocks, false, format_args!("n={n}")).unwrap();
        b.text(Point::zero(), WHITE, &Blocks, false, "n=42").unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn works_through_trait_objects() {
        let face: &dyn FontFace = &Blocks;
        let mut c = Canvas::new(10, 10).unwrap();
        c.text(Point::zero(), WHITE, face, false, "A").unwrap();
        assert_eq!(c.at(Point::zero()), WHITE);
    }
}
