//! Software 2D raster canvas.
//!
//! An in-memory RGBA surface with nested coordinate/clip scopes, opaque
//! primitive fills, alpha-composited blits, nearest-neighbor scaled image
//! drawing and word-wrapped text. No GPU or window system involved.
//!
//! ```
//! use q2d_engine::prelude::*;
//!
//! let mut canvas = Canvas::new(64, 64)?;
//! canvas.fill(Color::BLACK);
//!
//! canvas.push_sub_image(Rect::new(8, 8, 32, 32));
//! canvas.border(Color::WHITE);
//! canvas.set(Point::new(1, 1), Color::rgb(255, 0, 0));
//! canvas.pop_sub_image();
//!
//! assert_eq!(canvas.at(Point::new(9, 9)), Color::rgb(255, 0, 0));
//! # Ok::<(), q2d_engine::error::CanvasError>(())
//! ```

pub mod canvas;
pub mod composite;
pub mod coords;
pub mod error;
pub mod logging;
pub mod paint;
pub mod source;
pub mod text;

/// Common imports for drawing code.
pub mod prelude {
    pub use crate::canvas::{Canvas, ViewState};
    pub use crate::coords::{Point, Rect};
    pub use crate::error::{CanvasError, CanvasResult};
    pub use crate::paint::{Color, Hsl};
    pub use crate::source::{PixelSource, RawPixels};
    pub use crate::text::{FontFace, FontMetrics};
}
