//! Text layout and compositing.
//!
//! Glyph rasterization and font parsing live outside the engine: callers
//! pass any [`FontFace`] to [`Canvas::text`](crate::canvas::Canvas::text).
//! The engine only wraps lines, stacks them using the face's metrics and
//! composites the rasterized mask onto the canvas.

mod layout;
mod render;

pub use layout::{split_lines, wrap_lines};

use crate::canvas::Canvas;
use crate::coords::Point;
use crate::error::CanvasResult;
use crate::paint::Color;

/// Vertical font metrics in pixels, both measured away from the baseline.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl FontMetrics {
    #[inline]
    pub const fn new(ascent: f32, descent: f32) -> Self {
        Self { ascent, descent }
    }

    /// Distance between consecutive baselines, rounded up.
    #[inline]
    pub fn line_height(self) -> i32 {
        (self.ascent + self.descent).ceil() as i32
    }

    /// Baseline of the first line measured from the top of the text block.
    #[inline]
    pub fn baseline(self) -> i32 {
        self.ascent.ceil() as i32
    }
}

/// A sized font the canvas can measure and draw with.
pub trait FontFace {
    /// Advance width of `text` in whole pixels, rounded up.
    fn measure(&self, text: &str) -> i32;

    fn metrics(&self) -> FontMetrics;

    /// Draws `text` into `mask` starting at baseline point `pen`, writing
    /// straight-alpha `color` scaled by glyph coverage. Returns the advance
    /// in pixels.
    ///
    /// `mask` starts fully transparent and must end up holding straight
    /// (non-premultiplied) alpha; the canvas blends it exactly once.
    fn rasterize(
        &self,
        text: &str,
        pen: Point,
        color: Color,
        mask: &mut Canvas,
    ) -> CanvasResult<i32>;
}
