use crate::coords::{Point, Rect};
use crate::paint::Color;

use super::Canvas;

impl Canvas {
    /// Writes `color` at local point `p`, unblended. No-op outside the clip.
    pub fn set(&mut self, p: Point, color: Color) {
        let view = self.view();
        let abs = view.to_absolute(p);
        if !view.clip().contains(abs) {
            return;
        }
        let off = self.offset(abs);
        self.px_mut(off).copy_from_slice(&color.to_array());
    }

    /// Reads the pixel at local point `p`. Transparent black outside the clip.
    pub fn at(&self, p: Point) -> Color {
        let view = self.view();
        let abs = view.to_absolute(p);
        if !view.clip().contains(abs) {
            return Color::TRANSPARENT;
        }
        self.read_px(self.offset(abs))
    }

    /// Overwrites every pixel inside the current clip.
    pub fn fill(&mut self, color: Color) {
        let clip = self.clip();
        self.fill_abs(clip, color);
    }

    /// Overwrites the local rectangle `rect`, clipped.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let view = self.view();
        let draw = view.clip().intersect(rect + view.origin());
        self.fill_abs(draw, color);
    }

    /// Horizontal band from `x1` to `x2` (either order, `x2` exclusive after
    /// normalizing) starting at row `y`, `thickness` rows tall.
    pub fn hline(&mut self, y: i32, x1: i32, x2: i32, thickness: i32, color: Color) {
        let local = self.view().local_clip();
        let (x1, x2) = clamp_span(x1, x2, local.x, local.right());
        self.fill_rect(Rect::new(x1, y, x2.saturating_sub(x1), thickness), color);
    }

    /// Vertical band from `y1` to `y2` (either order, `y2` exclusive after
    /// normalizing) starting at column `x`, `thickness` columns wide.
    pub fn vline(&mut self, x: i32, y1: i32, y2: i32, thickness: i32, color: Color) {
        let local = self.view().local_clip();
        let (y1, y2) = clamp_span(y1, y2, local.y, local.bottom());
        self.fill_rect(Rect::new(x, y1, thickness, y2.saturating_sub(y1)), color);
    }

    /// One-pixel frame along the edges of the current view's bounds.
    pub fn border(&mut self, color: Color) {
        let (w, h) = self.size();
        if w <= 0 || h <= 0 {
            return;
        }
        self.hline(0, 0, w, 1, color);
        self.hline(h.saturating_sub(1), 0, w, 1, color);
        self.vline(0, 0, h, 1, color);
        self.vline(w.saturating_sub(1), 0, h, 1, color);
    }

    /// `draw` must already be clipped.
    fn fill_abs(&mut self, draw: Rect, color: Color) {
        if draw.is_empty() {
            log::trace!("fill skipped: empty clip intersection");
            return;
        }
        for y in draw.rows() {
            self.span_mut(draw.x, y, draw.width).fill(color);
        }
    }
}

/// Orders `a`, `b` and limits both to `[lo, hi]`, so the span width fits in
/// an `i32` whatever the inputs.
fn clamp_span(a: i32, b: i32, lo: i32, hi: i32) -> (i32, i32) {
    let (a, b) = if a > b { (b, a) } else { (a, b) };
    (a.clamp(lo, hi), b.clamp(lo, hi))
}
