//! The two Arena deck definitions
//!
//! Each module exposes `pages()` returning the fully-built page list, plus
//! the document title and default output filename. Layout coordinates and
//! copy are literal transcriptions of the approved slide designs.

pub mod arena_v2;
pub mod product;
