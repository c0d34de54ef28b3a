use crate::canvas::Canvas;
use crate::coords::{Point, Rect};

use super::blend_into;

impl Canvas {
    /// Composites `src`'s current view onto this canvas with its top-left at
    /// local point `p`.
    ///
    /// The copied extent is the size of `src`'s current bounds. Destination
    /// pixels are limited to this canvas's clip; source pixels outside `src`'s
    /// own clip are skipped individually. Fully transparent source pixels
    /// leave the destination untouched.
    pub fn blit(&mut self, src: &Canvas, p: Point) {
        let (w, h) = src.size();
        let dst_view = self.view();
        let abs_dst = Rect::from_origin_size(dst_view.to_absolute(p), w, h);
        let draw = dst_view.clip().intersect(abs_dst);

        if draw.is_empty() {
            log::trace!("blit skipped: {abs_dst:?} outside clip");
            return;
        }

        let src_origin = src.origin();
        let src_clip = src.clip();
        if src_clip.is_empty() {
            log::trace!("blit skipped: source clip is empty");
            return;
        }

        for y in draw.rows() {
            let sy = src_origin.y.saturating_add(y.saturating_sub(abs_dst.y));
            if sy < src_clip.y || sy >= src_clip.bottom() {
                continue;
            }

            for x in draw.cols() {
                let sx = src_origin.x.saturating_add(x.saturating_sub(abs_dst.x));
                if sx < src_clip.x || sx >= src_clip.right() {
                    continue;
                }

                let color = src.read_px(src.offset(Point::new(sx, sy)));
                let off = self.offset(Point::new(x, y));
                blend_into(self.px_mut(off), color);
            }
        }
    }
}
