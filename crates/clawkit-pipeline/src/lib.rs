//! Clawkit Pipeline - the asset extraction run
//!
//! Drives the full extraction over the domain tables in `clawkit-assets`:
//! load the composite, crop and key every region, split the fighter and
//! effect sheets into frames, write the animation manifest. The run is
//! best-effort: a failed region or a missing sheet is logged and skipped,
//! only a missing source or an unwritable manifest aborts.

pub mod extract;

pub use extract::{ExtractError, ExtractReport, Extractor};
