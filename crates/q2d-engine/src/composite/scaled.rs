use crate::canvas::Canvas;
use crate::coords::{Point, Rect};
use crate::error::{CanvasError, CanvasResult};
use crate::source::PixelSource;

use super::blend_into;

impl Canvas {
    /// Composites `src` at local point `p`, enlarged by an integer `scale`
    /// with nearest-neighbor sampling.
    ///
    /// Uses the source's [`raw_pixels`](PixelSource::raw_pixels) view when it
    /// has one covering the whole source and falls back to
    /// [`pixel_at`](PixelSource::pixel_at) otherwise.
    ///
    /// # Errors
    /// [`CanvasError::InvalidScale`] when `scale == 0`; nothing is drawn.
    pub fn draw_image_scaled<S>(&mut self, src: &S, p: Point, scale: u32) -> CanvasResult<()>
    where
        S: PixelSource + ?Sized,
    {
        if scale == 0 {
            log::warn!("draw_image_scaled rejected scale 0");
            return Err(CanvasError::InvalidScale(scale));
        }

        let (src_w, src_h) = src.dimensions();
        let raw = src.raw_pixels().filter(|raw| {
            let ok = raw.covers(src_w, src_h);
            if !ok {
                log::debug!("raw view shorter than {src_w}x{src_h} source, using pixel_at");
            }
            ok
        });

        let scale = i32::try_from(scale).unwrap_or(i32::MAX);
        let src_w = i32::try_from(src_w).unwrap_or(i32::MAX);
        let src_h = i32::try_from(src_h).unwrap_or(i32::MAX);

        let view = self.view();
        let abs_dst = Rect::from_origin_size(
            view.to_absolute(p),
            src_w.saturating_mul(scale),
            src_h.saturating_mul(scale),
        );
        let draw = view.clip().intersect(abs_dst);

        if draw.is_empty() {
            log::trace!("scaled draw skipped: {abs_dst:?} outside clip");
            return Ok(());
        }

        for y in draw.rows() {
            let sy = (y - abs_dst.y) / scale;
            if !(0..src_h).contains(&sy) {
                continue;
            }

            for x in draw.cols() {
                let sx = (x - abs_dst.x) / scale;
                if !(0..src_w).contains(&sx) {
                    continue;
                }

                let color = match &raw {
                    Some(raw) => raw.get(sx as u32, sy as u32),
                    None => src.pixel_at(sx as u32, sy as u32),
                };
                if color.is_transparent() {
                    continue;
                }

                let off = self.offset(Point::new(x, y));
                blend_into(self.px_mut(off), color);
            }
        }

        Ok(())
    }
}
