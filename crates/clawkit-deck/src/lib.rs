//! Clawkit Deck - declarative presentation model
//!
//! A deck is a list of [`Page`]s; a page is a list of [`DrawCmd`] records
//! with absolute positions on a landscape-letter canvas. The deck
//! definitions under [`decks`] only build data - what to draw - and know
//! nothing about documents; emitting a file is a backend's job (see
//! `clawkit-backend-pdf`). That split keeps the layout tables testable
//! without a PDF library in the loop.
//!
//! Coordinates are PostScript-style: points, origin at the bottom-left.

pub mod command;
pub mod decks;
pub mod text;

pub use command::{DrawCmd, Font, Page, Stroke, TextAlign, PAGE_HEIGHT, PAGE_WIDTH};
pub use text::text_width;
