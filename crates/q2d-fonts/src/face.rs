use q2d_engine::canvas::Canvas;
use q2d_engine::coords::Point;
use q2d_engine::error::{CanvasError, CanvasResult};
use q2d_engine::paint::Color;
use q2d_engine::text::{FontFace, FontMetrics};

/// A TrueType/OpenType font rasterized by `fontdue` at a fixed pixel size.
pub struct FontdueFace {
    font: fontdue::Font,
    px: f32,
}

impl FontdueFace {
    /// Parses `bytes` and prepares the face at `px` pixels per em.
    ///
    /// # Errors
    /// [`CanvasError::Font`] when `px` is not a positive finite size or the
    /// font data cannot be parsed.
    pub fn from_bytes(bytes: &[u8], px: f32) -> CanvasResult<Self> {
        if !(px.is_finite() && px > 0.0) {
            return Err(CanvasError::Font(format!("invalid pixel size {px}")));
        }

        let settings = fontdue::FontSettings { scale: px, ..fontdue::FontSettings::default() };
        let font = fontdue::Font::from_bytes(bytes, settings)
            .map_err(|e| CanvasError::Font(e.to_string()))?;

        Ok(Self { font, px })
    }

    #[inline]
    pub fn px(&self) -> f32 {
        self.px
    }

    #[inline]
    pub fn font(&self) -> &fontdue::Font {
        &self.font
    }

    /// Kerning-adjusted pen advance for `ch` following `prev`.
    fn advance(&self, prev: Option<char>, ch: char) -> f32 {
        let kern = prev
            .and_then(|p| self.font.horizontal_kern(p, ch, self.px))
            .unwrap_or(0.0);
        kern + self.font.metrics(ch, self.px).advance_width
    }
}

impl std::fmt::Debug for FontdueFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontdueFace")
            .field("name", &self.font.name())
            .field("px", &self.px)
            .finish()
    }
}

impl FontFace for FontdueFace {
    fn measure(&self, text: &str) -> i32 {
        let mut prev = None;
        let mut width = 0.0f32;
        for ch in text.chars() {
            width += self.advance(prev, ch);
            prev = Some(ch);
        }
        width.ceil() as i32
    }

    fn metrics(&self) -> FontMetrics {
        match self.font.horizontal_line_metrics(self.px) {
            // fontdue reports descent below the baseline as negative.
            Some(m) => FontMetrics::new(m.ascent, -m.descent),
            None => FontMetrics::new(self.px, 0.0),
        }
    }

    fn rasterize(
        &self,
        text: &str,
        pen: Point,
        color: Color,
        mask: &mut Canvas,
    ) -> CanvasResult<i32> {
        let mut x = pen.x as f32;
        let mut prev = None;

        for ch in text.chars() {
            if let Some(kern) = prev.and_then(|p| self.font.horizontal_kern(p, ch, self.px)) {
                x += kern;
            }

            let (m, coverage) = self.font.rasterize(ch, self.px);
            if m.width > 0 && m.height > 0 {
                // Bitmap rows run top-down; `ymin` is the bottom edge above the baseline.
                let left = x.round() as i32 + m.xmin;
                let top = pen.y - (m.ymin + m.height as i32);

                for (row, line) in coverage.chunks_exact(m.width).enumerate() {
                    for (col, &cov) in line.iter().enumerate() {
                        if cov == 0 {
                            continue;
                        }
                        let a = (u16::from(color.a) * u16::from(cov) / 255) as u8;
                        let p = Point::new(left + col as i32, top + row as i32);
                        // Overlapping glyph edges keep the stronger coverage.
                        if a > mask.at(p).a {
                            mask.set(p, color.with_alpha(a));
                        }
                    }
                }
            }

            x += m.advance_width;
            prev = Some(ch);
        }

        Ok((x - pen.x as f32).ceil() as i32)
    }
}
