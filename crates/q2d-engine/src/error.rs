//! Canvas error types.

use thiserror::Error;

/// Result type for fallible canvas operations.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Errors surfaced by the canvas.
///
/// Pixel-level operations never fail; only construction, scaled drawing and
/// external capabilities (fonts, image buffers) can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    /// Width or height is zero or exceeds [`MAX_DIMENSION`](crate::canvas::MAX_DIMENSION).
    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Scaled drawing requires a scale of at least 1.
    #[error("invalid scale factor {0}; must be >= 1")]
    InvalidScale(u32),

    /// A font face failed to load or rasterize.
    #[error("font error: {0}")]
    Font(String),

    /// An external pixel buffer did not match its declared size.
    #[error("image buffer error: {0}")]
    Image(String),
}
