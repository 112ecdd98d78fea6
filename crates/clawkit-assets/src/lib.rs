//! Clawkit Assets - Clawdbot Arena domain tables
//!
//! This crate is nothing but data: the crop-region table for the combined
//! asset sheet, the fighter and effect rosters, the frame-name table for
//! fighter sheets, and the animation-timing manifest the game front end
//! consumes. The pipeline crate iterates these tables; nothing here touches
//! pixels or the filesystem.
//!
//! # Rosters
//!
//! - **Fighters**: AlphaBot, NeuralKnight, QuantumFist, IronLogic — one
//!   2x4 spritesheet and one portrait each.
//! - **Arenas**: Cyber Colosseum, Factory Floor, Digital Void — three
//!   parallax background layers each.
//! - **Effects**: hit-spark, heavy-hit, block, dust, ko-explosion,
//!   energy-charge — one horizontal frame strip each.

pub mod animations;
pub mod regions;

pub use animations::{AnimationManifest, EffectClip, FighterClip, LOOP};
pub use regions::{AssetRegion, ASSET_REGIONS, COMPOSITE_HEIGHT, COMPOSITE_WIDTH};
