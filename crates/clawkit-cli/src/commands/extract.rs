//! Extract command

use clawkit_pipeline::Extractor;
use tracing::{info, warn};

pub fn run(source: &str, out_dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    info!("extracting assets from {source}");

    let report = Extractor::new(source, out_dir).run()?;

    println!(
        "Extracted {} of {} regions",
        report.regions_extracted, report.regions_total
    );
    println!(
        "Split {} of {} fighter sheets and {} of {} effect sheets ({} frames)",
        report.fighters_split,
        report.fighters_total,
        report.effects_split,
        report.effects_total,
        report.frames_written
    );
    println!("Output location: {out_dir}");

    if !report.is_complete() {
        warn!("extraction finished with skipped items");
    }

    Ok(())
}
