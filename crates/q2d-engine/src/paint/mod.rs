//! Color model.
//!
//! Scope:
//! - 8-bit straight-alpha RGBA (no premultiplication)
//! - HSL round-trip and the adjustments built on it
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod hsl;

pub use color::Color;
pub use hsl::Hsl;
