//! Alpha compositing onto a [`Canvas`](crate::canvas::Canvas).
//!
//! Every compositing operation (blit, scaled draw, text) shares one rule:
//! - source alpha 0: destination untouched
//! - source alpha 255: destination replaced, alpha included
//! - otherwise, with `a = sa / 255`:
//!   `out.rgb = src.rgb * a + dst.rgb * (1 - a)` and
//!   `out.a = sa + dst.a * (1 - a)`, computed in `f64` and truncated.
//!
//! The alpha update is not clamped explicitly. Its exact maximum is 255 and
//! float-to-`u8` casts saturate, so it cannot wrap.

mod blit;
mod scaled;

use crate::canvas::Canvas;
use crate::coords::Point;
use crate::paint::Color;

/// Composites `src` over `dst`. Returns `None` when `src` is fully transparent
/// and the destination must not be written.
#[inline]
pub fn blend(src: Color, dst: Color) -> Option<Color> {
    match src.a {
        0 => None,
        255 => Some(src),
        sa => {
            let a = f64::from(sa) / 255.0;
            let inv = 1.0 - a;
            let mix = |s: u8, d: u8| (f64::from(s) * a + f64::from(d) * inv) as u8;
            Some(Color::rgba(
                mix(src.r, dst.r),
                mix(src.g, dst.g),
                mix(src.b, dst.b),
                (f64::from(sa) + f64::from(dst.a) * inv) as u8,
            ))
        }
    }
}

/// Composites `src` into a 4-byte RGBA slot in place.
#[inline]
pub(crate) fn blend_into(px: &mut [u8], src: Color) {
    let dst = Color::rgba(px[0], px[1], px[2], px[3]);
    if let Some(out) = blend(src, dst) {
        px.copy_from_slice(&out.to_array());
    }
}

impl Canvas {
    /// Composites `color` over the pixel at local point `p`, reading the
    /// background through [`at`](Canvas::at) and writing through
    /// [`set`](Canvas::set). No-op outside the clip.
    pub fn blend_pixel(&mut self, p: Point, color: Color) {
        if !self.clip().contains(self.view().to_absolute(p)) {
            return;
        }
        if let Some(out) = blend(color, self.at(p)) {
            self.set(p, out);
        }
    }
}
