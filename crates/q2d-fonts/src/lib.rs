//! Fonts for `q2d-engine`.
//!
//! The engine draws text through its `FontFace` trait and never owns fonts.
//! This crate supplies a `fontdue`-backed face and an explicit registry the
//! application builds and passes around; there is no process-wide font table.
//!
//! ```rust,ignore
//! use q2d_fonts::{FontRegistry, FontStyle};
//!
//! let mut fonts = FontRegistry::new();
//! fonts.load(FontStyle::Normal, include_bytes!("DejaVuSansMono.ttf"))?;
//!
//! let face = fonts.get(FontStyle::Normal).unwrap();
//! canvas.text(Point::new(2, 2), Color::WHITE, face, true, "hello")?;
//! ```

mod face;
mod registry;

pub use face::FontdueFace;
pub use registry::{FontRegistry, FontStyle};
