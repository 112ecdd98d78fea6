//! Clawkit PDF Backend
//!
//! Turns a deck's page list into a PDF document. The deck model knows
//! nothing about PDFs; this crate owns the whole mapping - built-in
//! Helvetica faces, curves approximated as polygon paths, dash patterns,
//! and text alignment resolved against the shared width metrics.

pub mod emitter;
pub mod shapes;

pub use emitter::{write_deck, PdfError};
