//! Logging setup.
//!
//! The engine writes through the `log` facade only:
//! - `debug`: canvas allocation, raw views rejected by scaled drawing
//! - `warn`: ignored pops, rejected scales, font rasterization failures
//! - `trace`: draws skipped because nothing intersects the clip
//!
//! Hosts that already install a logger need nothing from here. Tools and
//! tests that do not can call [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
