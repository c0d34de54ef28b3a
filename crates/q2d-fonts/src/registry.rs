use std::collections::HashMap;

use q2d_engine::error::CanvasResult;

use crate::FontdueFace;

/// Built-in font slots.
///
/// The registry does not embed font data; each slot is filled by the
/// application with whatever bytes it ships for that style.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FontStyle {
    Alternative,
    Fantasy,
    SciFi,
    TallChunky,
    Thin,
    Normal,
    /// Double-height variant.
    Tall,
}

impl FontStyle {
    pub const ALL: [FontStyle; 7] = [
        FontStyle::Alternative,
        FontStyle::Fantasy,
        FontStyle::SciFi,
        FontStyle::TallChunky,
        FontStyle::Thin,
        FontStyle::Normal,
        FontStyle::Tall,
    ];

    /// Pixel size used by [`FontRegistry::load`].
    #[inline]
    pub const fn default_px(self) -> f32 {
        match self {
            FontStyle::Tall => 16.0,
            _ => 8.0,
        }
    }
}

/// Owns the faces an application draws text with.
///
/// Faces are immutable after loading; reloading a style replaces it.
#[derive(Debug, Default)]
pub struct FontRegistry {
    faces: HashMap<FontStyle, FontdueFace>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `bytes` into `style` at the style's default pixel size.
    pub fn load(&mut self, style: FontStyle, bytes: &[u8]) -> CanvasResult<&FontdueFace> {
        self.load_with_size(style, bytes, style.default_px())
    }

    /// Loads `bytes` into `style` at `px` pixels per em.
    ///
    /// On failure the previous face for `style`, if any, is kept.
    pub fn load_with_size(
        &mut self,
        style: FontStyle,
        bytes: &[u8],
        px: f32,
    ) -> CanvasResult<&FontdueFace> {
        let face = FontdueFace::from_bytes(bytes, px).inspect_err(|e| {
            log::warn!("FontRegistry: failed to load {style:?}: {e}");
        })?;

        log::debug!("FontRegistry: loaded {style:?} at {px}px");
        self.faces.insert(style, face);
        Ok(&self.faces[&style])
    }

    #[inline]
    pub fn get(&self, style: FontStyle) -> Option<&FontdueFace> {
        self.faces.get(&style)
    }

    #[inline]
    pub fn contains(&self, style: FontStyle) -> bool {
        self.faces.contains_key(&style)
    }

    /// Removes and returns the face for `style`.
    pub fn unload(&mut self, style: FontStyle) -> Option<FontdueFace> {
        self.faces.remove(&style)
    }

    /// Loaded styles in declaration order.
    pub fn styles(&self) -> impl Iterator<Item = FontStyle> + '_ {
        FontStyle::ALL.into_iter().filter(|s| self.faces.contains_key(s))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}
