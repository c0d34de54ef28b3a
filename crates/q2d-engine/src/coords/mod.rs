//! Integer geometry shared by the canvas and its compositors.
//!
//! Canonical space:
//! - whole pixels
//! - origin top-left
//! - +X right, +Y down
//!
//! A rectangle with a non-positive width or height is empty. Operations that
//! could produce negative extents clamp them to zero instead.

mod point;
mod rect;

pub use point::Point;
pub use rect::Rect;
