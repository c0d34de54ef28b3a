//! In-memory RGBA canvas with a nested view/clip stack.
//!
//! Responsibilities:
//! - own the pixel buffer (row-major, 4 bytes per pixel, zero-initialized)
//! - track nested coordinate frames ([`push_sub_image`](Canvas::push_sub_image))
//!   and clip scopes ([`push_clip`](Canvas::push_clip))
//! - raw pixel primitives that map local coordinates through the current view
//!
//! Sub-images never allocate: they are frames over the same buffer.

mod pixels;
mod view;

pub use view::ViewState;

use crate::coords::{Point, Rect};
use crate::error::{CanvasError, CanvasResult};
use crate::paint::Color;

use view::ViewStack;

/// Largest accepted width or height, in pixels.
///
/// Keeps every absolute coordinate (and every `x * 4` byte offset) well
/// inside `i32`.
pub const MAX_DIMENSION: u32 = 1 << 15;

pub(crate) const BYTES_PER_PIXEL: usize = 4;

/// Software RGBA raster surface.
#[derive(Debug, Clone)]
pub struct Canvas {
    pix: Vec<u8>,
    stride: usize,
    width: i32,
    height: i32,
    views: ViewStack,
}

impl Canvas {
    /// Creates a fully transparent black canvas.
    ///
    /// # Errors
    /// [`CanvasError::InvalidDimensions`] when either side is zero or larger
    /// than [`MAX_DIMENSION`].
    pub fn new(width: u32, height: u32) -> CanvasResult<Self> {
        validate_dimensions(width, height)?;

        let stride = width as usize * BYTES_PER_PIXEL;
        log::debug!("canvas created: {width}x{height}");

        Ok(Self {
            pix: vec![0; stride * height as usize],
            stride,
            width: width as i32,
            height: height as i32,
            views: ViewStack::new(Rect::new(0, 0, width as i32, height as i32)),
        })
    }

    /// Wraps an existing tightly packed RGBA buffer (`width * height * 4` bytes).
    ///
    /// # Errors
    /// [`CanvasError::InvalidDimensions`] for out-of-range sizes and
    /// [`CanvasError::Image`] when the buffer length does not match.
    pub fn from_rgba(width: u32, height: u32, pix: Vec<u8>) -> CanvasResult<Self> {
        validate_dimensions(width, height)?;

        let stride = width as usize * BYTES_PER_PIXEL;
        let expected = stride * height as usize;
        if pix.len() != expected {
            return Err(CanvasError::Image(format!(
                "expected {expected} bytes for {width}x{height}, got {}",
                pix.len()
            )));
        }

        Ok(Self {
            pix,
            stride,
            width: width as i32,
            height: height as i32,
            views: ViewStack::new(Rect::new(0, 0, width as i32, height as i32)),
        })
    }

    // ── buffer queries ────────────────────────────────────────────────────

    /// Full buffer width in pixels, regardless of the current view.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width as u32
    }

    /// Full buffer height in pixels, regardless of the current view.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height as u32
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Raw RGBA bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pix
    }

    /// Consumes the canvas and returns its RGBA bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.pix
    }

    /// Iterates rows of the full buffer as pixel slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        let row_bytes = self.width as usize * BYTES_PER_PIXEL;
        self.pix
            .chunks_exact(self.stride)
            .map(move |row| bytemuck::cast_slice(&row[..row_bytes]))
    }

    // ── view stack ────────────────────────────────────────────────────────

    /// The current (innermost) view state.
    #[inline]
    pub fn view(&self) -> &ViewState {
        self.views.current()
    }

    /// Number of view frames, including the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.views.depth()
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.view().origin()
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.view().bounds()
    }

    #[inline]
    pub fn clip(&self) -> Rect {
        self.view().clip()
    }

    /// Size of the current view's bounds as `(width, height)`.
    #[inline]
    pub fn size(&self) -> (i32, i32) {
        let b = self.bounds();
        (b.width, b.height)
    }

    /// Enters a sub-region. Local `(0, 0)` becomes `rect`'s top-left and
    /// drawing is clipped to `rect` and to every enclosing clip.
    ///
    /// Calls should be balanced with [`pop_sub_image`](Self::pop_sub_image).
    pub fn push_sub_image(&mut self, rect: Rect) {
        self.views.push_sub_image(rect);
    }

    /// Leaves the innermost sub-region. No-op at the root.
    pub fn pop_sub_image(&mut self) {
        if !self.views.pop_sub_image() {
            log::warn!("pop_sub_image at root view ignored");
        }
    }

    /// Narrows the current clip to `rect` (local coordinates) without
    /// changing the coordinate frame. Never widens the clip.
    pub fn push_clip(&mut self, rect: Rect) {
        self.views.push_clip(rect);
    }

    /// Restores the clip active before the last [`push_clip`](Self::push_clip)
    /// in the current view. No-op when there is none.
    pub fn pop_clip(&mut self) {
        if !self.views.pop_clip() {
            log::warn!("pop_clip without matching push_clip ignored");
        }
    }

    // ── internal ──────────────────────────────────────────────────────────

    /// Byte offset of an absolute point. Callers must have clip-tested `p`.
    #[inline]
    pub(crate) fn offset(&self, p: Point) -> usize {
        p.y as usize * self.stride + p.x as usize * BYTES_PER_PIXEL
    }

    #[inline]
    pub(crate) fn read_px(&self, off: usize) -> Color {
        let px = &self.pix[off..off + BYTES_PER_PIXEL];
        Color::rgba(px[0], px[1], px[2], px[3])
    }

    #[inline]
    pub(crate) fn px_mut(&mut self, off: usize) -> &mut [u8] {
        &mut self.pix[off..off + BYTES_PER_PIXEL]
    }

    /// Pixels `[x, x + len)` of absolute row `y`.
    #[inline]
    pub(crate) fn span_mut(&mut self, x: i32, y: i32, len: i32) -> &mut [Color] {
        let start = self.offset(Point::new(x, y));
        let end = start + len as usize * BYTES_PER_PIXEL;
        bytemuck::cast_slice_mut(&mut self.pix[start..end])
    }
}

fn validate_dimensions(width: u32, height: u32) -> CanvasResult<()> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(CanvasError::InvalidDimensions { width, height });
    }
    Ok(())
}
