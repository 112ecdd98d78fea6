//! Clawkit Core - shared primitives
//!
//! Clawkit is the asset and presentation tooling for Clawdbot Arena. This
//! crate holds the types every other crate speaks in: integer rectangle
//! geometry in source-image coordinates, the RGBA8 pixel buffer that crops
//! and filters operate on, and the color type used by deck themes.
//!
//! Nothing here performs I/O; decoding, encoding, and document emission live
//! in the backend crates.

pub mod color;
pub mod frame;
pub mod geometry;

pub use color::Color;
pub use frame::PixelFrame;
pub use geometry::Rect;
