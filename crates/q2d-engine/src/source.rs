//! External pixel sources for scaled drawing.
//!
//! A source exposes its size and a per-pixel accessor. Sources backed by a
//! flat RGBA buffer may also expose [`RawPixels`] so drawing can index bytes
//! directly instead of going through [`PixelSource::pixel_at`].

use crate::canvas::Canvas;
use crate::paint::Color;

/// Borrowed view of a row-major RGBA8 buffer.
#[derive(Debug, Copy, Clone)]
pub struct RawPixels<'a> {
    /// Bytes per row.
    pub stride: usize,
    pub data: &'a [u8],
}

impl RawPixels<'_> {
    /// Pixel at `(x, y)`. Callers bounds-check against the source size.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        let off = y as usize * self.stride + x as usize * 4;
        let px = &self.data[off..off + 4];
        Color::rgba(px[0], px[1], px[2], px[3])
    }

    /// Whether every pixel of a `width` by `height` image lies inside `data`.
    pub fn covers(&self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return true;
        }
        let row = width as usize * 4;
        self.stride >= row
            && (height as usize - 1)
                .checked_mul(self.stride)
                .and_then(|n| n.checked_add(row))
                .is_some_and(|n| n <= self.data.len())
    }
}

/// Read-only RGBA image consumed by [`Canvas::draw_image_scaled`].
pub trait PixelSource {
    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Straight-alpha color at `(x, y)`, `0 <= x < width`, `0 <= y < height`.
    fn pixel_at(&self, x: u32, y: u32) -> Color;

    /// Direct buffer access, when the source has one.
    ///
    /// The view should [cover](RawPixels::covers) the full
    /// [`dimensions`](Self::dimensions); drawing ignores views that do not
    /// and uses [`pixel_at`](Self::pixel_at) instead.
    fn raw_pixels(&self) -> Option<RawPixels<'_>> {
        None
    }
}

/// The whole buffer, ignoring the canvas's current view.
impl PixelSource for Canvas {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn pixel_at(&self, x: u32, y: u32) -> Color {
        self.raw_pixels().map_or(Color::TRANSPARENT, |raw| raw.get(x, y))
    }

    fn raw_pixels(&self) -> Option<RawPixels<'_>> {
        Some(RawPixels { stride: self.stride(), data: self.as_bytes() })
    }
}

#[cfg(feature = "image")]
mod image_impls {
    use image::{DynamicImage, GenericImageView, RgbaImage};

    use super::{PixelSource, RawPixels};
    use crate::canvas::Canvas;
    use crate::error::CanvasResult;
    use crate::paint::Color;

    impl PixelSource for RgbaImage {
        fn dimensions(&self) -> (u32, u32) {
            RgbaImage::dimensions(self)
        }

        fn pixel_at(&self, x: u32, y: u32) -> Color {
            Color::from(self.get_pixel(x, y).0)
        }

        fn raw_pixels(&self) -> Option<RawPixels<'_>> {
            Some(RawPixels { stride: self.width() as usize * 4, data: self.as_raw() })
        }
    }

    /// Goes through the generic accessor; only `ImageRgba8` has a flat view.
    impl PixelSource for DynamicImage {
        fn dimensions(&self) -> (u32, u32) {
            GenericImageView::dimensions(self)
        }

        fn pixel_at(&self, x: u32, y: u32) -> Color {
            Color::from(self.get_pixel(x, y).0)
        }

        fn raw_pixels(&self) -> Option<RawPixels<'_>> {
            self.as_rgba8().and_then(|img| img.raw_pixels())
        }
    }

    impl Canvas {
        /// Copies the full buffer into an [`RgbaImage`].
        pub fn to_rgba_image(&self) -> RgbaImage {
            let (w, h) = (self.width(), self.height());
            let mut out = RgbaImage::new(w, h);
            for (dst, src) in out.rows_mut().zip(self.rows()) {
                for (d, s) in dst.zip(src) {
                    d.0 = s.to_array();
                }
            }
            out
        }

        /// Builds a canvas holding a copy of `img`.
        ///
        /// # Errors
        /// Fails when `img` is empty or exceeds the canvas size limit.
        pub fn from_rgba_image(img: &RgbaImage) -> CanvasResult<Self> {
            let (w, h) = img.dimensions();
            Canvas::from_rgba(w, h, img.as_raw().clone())
        }
    }

}
