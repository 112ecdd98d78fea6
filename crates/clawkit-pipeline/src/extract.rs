//! Extraction run

use clawkit_assets::regions::{
    ASSET_REGIONS, EFFECT_SHEETS, FIGHTERS, FIGHTER_FRAME_NAMES, FIGHTER_SHEET_GRID, OUTPUT_DIRS,
};
use clawkit_assets::AnimationManifest;
use clawkit_core::PixelFrame;
use clawkit_raster::{extract_region, frame_name, io, slice, GrayKey, RasterError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Fatal pipeline errors; per-item failures never surface here
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Source image not found: {0}")]
    SourceNotFound(PathBuf),

    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error("Manifest serialization failed: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Counts from one extraction run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractReport {
    /// Regions saved / regions attempted
    pub regions_extracted: usize,
    pub regions_total: usize,
    /// Fighter sheets split / fighters in the roster
    pub fighters_split: usize,
    pub fighters_total: usize,
    /// Effect strips split / effects in the roster
    pub effects_split: usize,
    pub effects_total: usize,
    /// Individual frame files written
    pub frames_written: usize,
}

impl ExtractReport {
    /// Whether every table entry was processed
    pub fn is_complete(&self) -> bool {
        self.regions_extracted == self.regions_total
            && self.fighters_split == self.fighters_total
            && self.effects_split == self.effects_total
    }
}

/// The asset extraction run
pub struct Extractor {
    source: PathBuf,
    out_dir: PathBuf,
    key: GrayKey,
}

impl Extractor {
    /// Extract from `source` into the tree under `out_dir`
    pub fn new(source: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            out_dir: out_dir.into(),
            key: GrayKey::default(),
        }
    }

    /// Use a different keying calibration
    pub fn with_key(mut self, key: GrayKey) -> Self {
        self.key = key;
        self
    }

    /// Run the full extraction
    pub fn run(&self) -> Result<ExtractReport, ExtractError> {
        let composite = match io::load_rgba(&self.source) {
            Ok(frame) => frame,
            Err(RasterError::SourceNotFound(path)) => {
                return Err(ExtractError::SourceNotFound(path))
            }
            Err(other) => return Err(other.into()),
        };
        info!(
            width = composite.width,
            height = composite.height,
            source = %self.source.display(),
            "loaded composite"
        );

        self.create_directories()?;

        let mut report = ExtractReport::default();
        self.extract_regions(&composite, &mut report);
        self.split_fighters(&mut report);
        self.split_effects(&mut report);
        self.write_manifest()?;

        Ok(report)
    }

    fn create_directories(&self) -> Result<(), ExtractError> {
        for dir in OUTPUT_DIRS {
            let path = self.out_dir.join(dir);
            fs::create_dir_all(&path)?;
            debug!(dir = %path.display(), "created directory");
        }
        Ok(())
    }

    fn extract_regions(&self, composite: &PixelFrame, report: &mut ExtractReport) {
        report.regions_total = ASSET_REGIONS.len();

        for region in ASSET_REGIONS {
            let mut cropped = extract_region(composite, region.rect);
            self.key.apply(&mut cropped);

            let out_path = self.out_dir.join(region.path);
            match io::save_png(&cropped, &out_path) {
                Ok(()) => {
                    info!(
                        path = region.path,
                        width = cropped.width,
                        height = cropped.height,
                        "extracted {}",
                        region.description
                    );
                    report.regions_extracted += 1;
                }
                Err(e) => {
                    warn!(path = region.path, "extraction failed: {e}");
                }
            }
        }

        info!(
            "extracted {}/{} regions",
            report.regions_extracted, report.regions_total
        );
    }

    fn split_fighters(&self, report: &mut ExtractReport) {
        report.fighters_total = FIGHTERS.len();

        for &fighter in FIGHTERS {
            let dir = self.out_dir.join("sprites/fighters").join(fighter);
            let sheet_path = dir.join("spritesheet.png");
            if !sheet_path.exists() {
                warn!(fighter, "spritesheet not found, skipping split");
                continue;
            }

            match self.split_fighter_sheet(fighter, &sheet_path, &dir) {
                Ok(frames) => {
                    info!(fighter, frames, "split fighter sheet");
                    report.fighters_split += 1;
                    report.frames_written += frames;
                }
                Err(e) => warn!(fighter, "sheet split failed: {e}"),
            }
        }
    }

    fn split_fighter_sheet(
        &self,
        fighter: &str,
        sheet_path: &Path,
        out_dir: &Path,
    ) -> Result<usize, ExtractError> {
        let sheet = io::load_rgba(sheet_path)?;
        let (tile_w, tile_h) = FIGHTER_SHEET_GRID.tile_size(sheet.width, sheet.height);
        debug!(
            fighter,
            sheet_w = sheet.width,
            sheet_h = sheet.height,
            tile_w,
            tile_h,
            "slicing fighter sheet"
        );

        let tiles = slice(&sheet, FIGHTER_SHEET_GRID);
        for (i, tile) in tiles.iter().enumerate() {
            let name = frame_name(i, FIGHTER_FRAME_NAMES);
            io::save_png(tile, out_dir.join(format!("{name}.png")))?;
        }
        Ok(tiles.len())
    }

    fn split_effects(&self, report: &mut ExtractReport) {
        report.effects_total = EFFECT_SHEETS.len();

        for &(effect, frames) in EFFECT_SHEETS {
            let sheet_path = self
                .out_dir
                .join("sprites/effects")
                .join(format!("{effect}.png"));
            if !sheet_path.exists() {
                warn!(effect, "effect sheet not found, skipping split");
                continue;
            }

            match self.split_effect_sheet(&sheet_path, effect, frames) {
                Ok(written) => {
                    info!(effect, frames = written, "split effect sheet");
                    report.effects_split += 1;
                    report.frames_written += written;
                }
                Err(e) => warn!(effect, "effect split failed: {e}"),
            }
        }
    }

    fn split_effect_sheet(
        &self,
        sheet_path: &Path,
        effect: &str,
        frames: u32,
    ) -> Result<usize, ExtractError> {
        let out_dir = self.out_dir.join("sprites/effects").join(effect);
        fs::create_dir_all(&out_dir)?;

        let sheet = io::load_rgba(sheet_path)?;
        let tiles = slice(&sheet, clawkit_raster::SliceGrid::strip(frames));
        for (i, tile) in tiles.iter().enumerate() {
            io::save_png(tile, out_dir.join(format!("frame_{i:02}.png")))?;
        }
        Ok(tiles.len())
    }

    fn write_manifest(&self) -> Result<(), ExtractError> {
        let manifest = AnimationManifest::standard();
        let json = serde_json::to_string_pretty(&manifest)?;
        let path = self.out_dir.join("animations.json");
        fs::write(&path, json)?;
        info!(path = %path.display(), "wrote animation manifest");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clawkit_assets::regions::{COMPOSITE_HEIGHT, COMPOSITE_WIDTH};

    /// Full-size opaque composite with a keyable gray band across the top
    fn synthetic_composite(dir: &Path) -> PathBuf {
        let mut frame = PixelFrame::new(COMPOSITE_WIDTH, COMPOSITE_HEIGHT);
        frame.fill([60, 90, 180, 255]);
        for y in 0..20 {
            for x in 0..COMPOSITE_WIDTH {
                frame.set_pixel(x, y, [200, 200, 200, 255]);
            }
        }
        let path = dir.join("composite.png");
        io::save_png(&frame, &path).unwrap();
        path
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let extractor = Extractor::new(dir.path().join("nope.png"), dir.path().join("out"));
        let err = extractor.run().unwrap_err();
        assert!(matches!(err, ExtractError::SourceNotFound(_)));
    }

    #[test]
    fn test_full_run() {
        let dir = tempfile::tempdir().unwrap();
        let source = synthetic_composite(dir.path());
        let out = dir.path().join("assets");

        let report = Extractor::new(&source, &out).run().unwrap();

        assert!(report.is_complete());
        assert_eq!(report.regions_extracted, ASSET_REGIONS.len());
        assert_eq!(report.fighters_split, FIGHTERS.len());
        assert_eq!(report.effects_split, EFFECT_SHEETS.len());
        // 4 fighters x 8 frames + effect strips
        let effect_frames: usize = EFFECT_SHEETS.iter().map(|(_, n)| *n as usize).sum();
        assert_eq!(report.frames_written, 4 * 8 + effect_frames);

        // extracted dimensions match the table
        let sheet = io::load_rgba(out.join("sprites/fighters/alphabot/spritesheet.png")).unwrap();
        assert_eq!(sheet.dimensions(), (295, 115));

        // fighter frames carry the positional names
        for name in FIGHTER_FRAME_NAMES {
            assert!(out.join(format!("sprites/fighters/ironlogic/{name}.png")).exists());
        }

        // effect frames are zero-padded
        assert!(out.join("sprites/effects/block/frame_02.png").exists());
        assert!(!out.join("sprites/effects/block/frame_03.png").exists());

        // manifest parses back
        let json = fs::read_to_string(out.join("animations.json")).unwrap();
        let manifest: AnimationManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(manifest, AnimationManifest::standard());
    }

    #[test]
    fn test_keying_applied_to_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let source = synthetic_composite(dir.path());
        let out = dir.path().join("assets");

        Extractor::new(&source, &out).run().unwrap();

        // the gray band at the sheet top must have been keyed transparent
        let sheet = io::load_rgba(out.join("sprites/fighters/alphabot/spritesheet.png")).unwrap();
        let keyed = sheet.get_pixel(10, 2).unwrap();
        assert_eq!(keyed[3], 0);
        let kept = sheet.get_pixel(10, 50).unwrap();
        assert_eq!(kept[3], 255);
    }

    #[test]
    fn test_undersized_source_is_best_effort() {
        // A 100x100 source: left-column regions clamp and save, regions
        // past x=100 crop to zero pixels and fail to encode, the run keeps
        // going and still writes the manifest.
        let dir = tempfile::tempdir().unwrap();
        let mut frame = PixelFrame::new(100, 100);
        frame.fill([60, 90, 180, 255]);
        let source = dir.path().join("small.png");
        io::save_png(&frame, &source).unwrap();
        let out = dir.path().join("assets");

        let report = Extractor::new(&source, &out).run().unwrap();

        assert!(report.regions_extracted > 0);
        assert!(report.regions_extracted < report.regions_total);
        assert!(!report.is_complete());
        assert!(out.join("animations.json").exists());

        // clamped sheet still splits into 8 (smaller) frames
        assert_eq!(report.fighters_split, 1);
        assert!(out.join("sprites/fighters/alphabot/idle.png").exists());
    }
}
