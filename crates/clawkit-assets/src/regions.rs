//! Asset region table for the combined sheet
//!
//! The art drop is a single 1024x559 composite. Every deliverable asset is
//! a fixed rectangle inside it; the table below maps each rectangle to its
//! output path. Coordinates were measured once against that export and are
//! meaningless for any other image.

use clawkit_core::Rect;
use clawkit_raster::SliceGrid;

/// Width of the combined asset sheet
pub const COMPOSITE_WIDTH: u32 = 1024;
/// Height of the combined asset sheet
pub const COMPOSITE_HEIGHT: u32 = 559;

/// A named crop target inside the composite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetRegion {
    /// Output path relative to the asset root
    pub path: &'static str,
    /// Source rectangle
    pub rect: Rect,
    /// What the region holds
    pub description: &'static str,
}

impl AssetRegion {
    const fn new(path: &'static str, x: i32, y: i32, w: u32, h: u32, desc: &'static str) -> Self {
        Self {
            path,
            rect: Rect::new(x, y, w, h),
            description: desc,
        }
    }
}

/// Directories created under the asset root before extraction
pub const OUTPUT_DIRS: &[&str] = &[
    "sprites/fighters/alphabot",
    "sprites/fighters/neuralknight",
    "sprites/fighters/quantumfist",
    "sprites/fighters/ironlogic",
    "sprites/effects",
    "backgrounds/cyber-colosseum",
    "backgrounds/factory-floor",
    "backgrounds/digital-void",
    "ui",
];

/// Fighter roster, in sheet order
pub const FIGHTERS: &[&str] = &["alphabot", "neuralknight", "quantumfist", "ironlogic"];

/// Frame names on a fighter sheet, row-major
pub const FIGHTER_FRAME_NAMES: &[&str] = &[
    "idle", "walk", "jump", "attack1", "attack2", "special", "hit", "ko",
];

/// Fighter sheets are 2 rows of 4 frames
pub const FIGHTER_SHEET_GRID: SliceGrid = SliceGrid::new(2, 4);

/// Effect strips and their frame counts
pub const EFFECT_SHEETS: &[(&str, u32)] = &[
    ("hit-spark", 4),
    ("heavy-hit", 4),
    ("block", 3),
    ("dust", 4),
    ("ko-explosion", 4),
    ("energy-charge", 4),
];

/// Every crop target on the combined sheet
pub const ASSET_REGIONS: &[AssetRegion] = &[
    // Fighter sprite sheets, left column, one row per fighter
    AssetRegion::new(
        "sprites/fighters/alphabot/spritesheet.png",
        0, 12, 295, 115,
        "AlphaBot fighter sprites (8 frames)",
    ),
    AssetRegion::new(
        "sprites/fighters/neuralknight/spritesheet.png",
        0, 140, 295, 115,
        "NeuralKnight fighter sprites (8 frames)",
    ),
    AssetRegion::new(
        "sprites/fighters/quantumfist/spritesheet.png",
        0, 268, 295, 115,
        "QuantumFist fighter sprites (8 frames)",
    ),
    AssetRegion::new(
        "sprites/fighters/ironlogic/spritesheet.png",
        0, 396, 295, 115,
        "IronLogic fighter sprites (8 frames)",
    ),
    // Cyber Colosseum background layers (column 2)
    AssetRegion::new(
        "backgrounds/cyber-colosseum/layer1-far.png",
        305, 12, 175, 45,
        "Cyber Colosseum far background",
    ),
    AssetRegion::new(
        "backgrounds/cyber-colosseum/layer2-mid.png",
        305, 62, 175, 45,
        "Cyber Colosseum mid background",
    ),
    AssetRegion::new(
        "backgrounds/cyber-colosseum/layer3-near.png",
        305, 112, 175, 60,
        "Cyber Colosseum near background",
    ),
    // Factory Floor background layers (column 3)
    AssetRegion::new(
        "backgrounds/factory-floor/layer1-far.png",
        490, 12, 175, 45,
        "Factory Floor far background",
    ),
    AssetRegion::new(
        "backgrounds/factory-floor/layer2-mid.png",
        490, 62, 175, 45,
        "Factory Floor mid background",
    ),
    AssetRegion::new(
        "backgrounds/factory-floor/layer3-near.png",
        490, 112, 175, 60,
        "Factory Floor near background",
    ),
    // Digital Void background layers (column 4)
    AssetRegion::new(
        "backgrounds/digital-void/layer1-far.png",
        675, 12, 175, 45,
        "Digital Void far background",
    ),
    AssetRegion::new(
        "backgrounds/digital-void/layer2-mid.png",
        675, 62, 175, 45,
        "Digital Void mid background",
    ),
    AssetRegion::new(
        "backgrounds/digital-void/layer3-near.png",
        675, 112, 175, 60,
        "Digital Void near background",
    ),
    // UI elements, middle section
    AssetRegion::new("ui/health-bar.png", 305, 185, 200, 40, "Health bar UI"),
    AssetRegion::new("ui/combo-counter.png", 515, 185, 80, 70, "Combo counter UI"),
    AssetRegion::new("ui/round-indicators.png", 605, 185, 100, 70, "Round indicators"),
    AssetRegion::new(
        "ui/announcer-text.png",
        860, 12, 155, 160,
        "Announcer text (FIGHT, KO, etc)",
    ),
    AssetRegion::new("ui/timer.png", 715, 185, 85, 50, "Timer display"),
    AssetRegion::new(
        "ui/betting-frame.png",
        860, 185, 155, 200,
        "Betting panel frame",
    ),
    // Effect strips, middle area
    AssetRegion::new(
        "sprites/effects/hit-spark.png",
        305, 240, 140, 75,
        "Hit spark effect frames",
    ),
    AssetRegion::new(
        "sprites/effects/heavy-hit.png",
        455, 240, 140, 75,
        "Heavy hit effect frames",
    ),
    AssetRegion::new(
        "sprites/effects/block.png",
        605, 240, 90, 90,
        "Block/parry effect frames",
    ),
    AssetRegion::new(
        "sprites/effects/dust.png",
        700, 270, 100, 50,
        "Dust cloud effect frames",
    ),
    AssetRegion::new(
        "sprites/effects/ko-explosion.png",
        305, 330, 100, 90,
        "KO explosion effect",
    ),
    AssetRegion::new(
        "sprites/effects/energy-charge.png",
        415, 330, 100, 90,
        "Energy charge effect",
    ),
    // Character portraits, bottom right
    AssetRegion::new(
        "sprites/fighters/alphabot/portrait.png",
        525, 400, 90, 110,
        "AlphaBot portrait",
    ),
    AssetRegion::new(
        "sprites/fighters/neuralknight/portrait.png",
        625, 400, 90, 110,
        "NeuralKnight portrait",
    ),
    AssetRegion::new(
        "sprites/fighters/quantumfist/portrait.png",
        725, 400, 90, 110,
        "QuantumFist portrait",
    ),
    AssetRegion::new(
        "sprites/fighters/ironlogic/portrait.png",
        825, 400, 90, 110,
        "IronLogic portrait",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        // 4 sheets + 9 backgrounds + 6 ui + 6 effects + 4 portraits
        assert_eq!(ASSET_REGIONS.len(), 29);
    }

    #[test]
    fn test_all_regions_fit_composite() {
        for region in ASSET_REGIONS {
            let clamped = region.rect.clamped_to(COMPOSITE_WIDTH, COMPOSITE_HEIGHT);
            assert_eq!(
                clamped, region.rect,
                "region {} spills outside the composite",
                region.path
            );
        }
    }

    #[test]
    fn test_paths_unique() {
        for (i, a) in ASSET_REGIONS.iter().enumerate() {
            for b in &ASSET_REGIONS[i + 1..] {
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn test_every_path_has_an_output_dir() {
        for region in ASSET_REGIONS {
            let parent = region.path.rsplit_once('/').map(|(dir, _)| dir).unwrap();
            assert!(
                OUTPUT_DIRS.contains(&parent),
                "no output dir for {}",
                region.path
            );
        }
    }

    #[test]
    fn test_fighter_sheet_grid_matches_names() {
        assert_eq!(FIGHTER_SHEET_GRID.len(), FIGHTER_FRAME_NAMES.len());
    }

    #[test]
    fn test_every_fighter_has_sheet_and_portrait() {
        for fighter in FIGHTERS {
            let sheet = format!("sprites/fighters/{fighter}/spritesheet.png");
            let portrait = format!("sprites/fighters/{fighter}/portrait.png");
            assert!(ASSET_REGIONS.iter().any(|r| r.path == sheet));
            assert!(ASSET_REGIONS.iter().any(|r| r.path == portrait));
        }
    }

    #[test]
    fn test_every_effect_has_a_strip() {
        for (effect, frames) in EFFECT_SHEETS {
            let path = format!("sprites/effects/{effect}.png");
            assert!(ASSET_REGIONS.iter().any(|r| r.path == path));
            assert!(*frames > 0);
        }
    }
}
