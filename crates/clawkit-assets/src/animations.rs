//! Animation timing manifest
//!
//! The game front end loads `animations.json` to build its animation clips.
//! The structure below serializes to exactly that file: `frameRate` keys,
//! hyphenated effect names, `repeat: -1` for looping clips. Fighter clips
//! carry frame-index lists into the fighter's sliced sheet; effect clips
//! only carry a frame count because their strips are consumed whole.

use serde::{Deserialize, Serialize};

/// Repeat value meaning "loop forever"
pub const LOOP: i32 = -1;

/// One fighter animation clip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FighterClip {
    /// Frame indices into the sliced sheet
    pub frames: Vec<u32>,
    /// Playback rate in frames per second
    #[serde(rename = "frameRate")]
    pub frame_rate: u32,
    /// Repeat count, `LOOP` for endless
    pub repeat: i32,
}

impl FighterClip {
    fn new(frames: &[u32], frame_rate: u32, repeat: i32) -> Self {
        Self {
            frames: frames.to_vec(),
            frame_rate,
            repeat,
        }
    }
}

/// One effect animation clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectClip {
    /// Number of frames in the strip
    pub frames: u32,
    /// Playback rate in frames per second
    #[serde(rename = "frameRate")]
    pub frame_rate: u32,
    /// Repeat count, `LOOP` for endless
    pub repeat: i32,
}

impl EffectClip {
    const fn new(frames: u32, frame_rate: u32, repeat: i32) -> Self {
        Self {
            frames,
            frame_rate,
            repeat,
        }
    }
}

/// The eight standard clips every fighter ships with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FighterClips {
    pub idle: FighterClip,
    pub walk: FighterClip,
    pub jump: FighterClip,
    pub attack1: FighterClip,
    pub attack2: FighterClip,
    pub special: FighterClip,
    pub hit: FighterClip,
    pub ko: FighterClip,
}

impl FighterClips {
    /// The shared timing table: one frame per clip, rates tuned per move
    fn standard() -> Self {
        Self {
            idle: FighterClip::new(&[0], 8, LOOP),
            walk: FighterClip::new(&[1], 10, LOOP),
            jump: FighterClip::new(&[2], 8, 0),
            attack1: FighterClip::new(&[3], 12, 0),
            attack2: FighterClip::new(&[4], 10, 0),
            special: FighterClip::new(&[5], 8, 0),
            hit: FighterClip::new(&[6], 8, 0),
            ko: FighterClip::new(&[7], 6, 0),
        }
    }
}

/// Per-fighter clip sets, in roster order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FighterAnimations {
    pub alphabot: FighterClips,
    pub neuralknight: FighterClips,
    pub quantumfist: FighterClips,
    pub ironlogic: FighterClips,
}

/// Effect clip set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectAnimations {
    #[serde(rename = "hit-spark")]
    pub hit_spark: EffectClip,
    #[serde(rename = "heavy-hit")]
    pub heavy_hit: EffectClip,
    pub block: EffectClip,
    pub dust: EffectClip,
    #[serde(rename = "ko-explosion")]
    pub ko_explosion: EffectClip,
    #[serde(rename = "energy-charge")]
    pub energy_charge: EffectClip,
}

/// The complete manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationManifest {
    pub fighters: FighterAnimations,
    pub effects: EffectAnimations,
}

impl AnimationManifest {
    /// The shipped timing tables
    pub fn standard() -> Self {
        Self {
            fighters: FighterAnimations {
                alphabot: FighterClips::standard(),
                neuralknight: FighterClips::standard(),
                quantumfist: FighterClips::standard(),
                ironlogic: FighterClips::standard(),
            },
            effects: EffectAnimations {
                hit_spark: EffectClip::new(4, 15, 0),
                heavy_hit: EffectClip::new(4, 12, 0),
                block: EffectClip::new(3, 12, 0),
                dust: EffectClip::new(4, 15, 0),
                ko_explosion: EffectClip::new(4, 10, 0),
                energy_charge: EffectClip::new(4, 12, LOOP),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_key_spellings() {
        let manifest = AnimationManifest::standard();
        let json = serde_json::to_string(&manifest).unwrap();

        assert!(json.contains("\"frameRate\""));
        assert!(json.contains("\"hit-spark\""));
        assert!(json.contains("\"ko-explosion\""));
        assert!(json.contains("\"energy-charge\""));
        assert!(!json.contains("frame_rate"));
    }

    #[test]
    fn test_loop_sentinel() {
        let manifest = AnimationManifest::standard();
        assert_eq!(manifest.fighters.alphabot.idle.repeat, LOOP);
        assert_eq!(manifest.fighters.alphabot.jump.repeat, 0);
        assert_eq!(manifest.effects.energy_charge.repeat, LOOP);

        let json = serde_json::to_string(&manifest).unwrap();
        assert!(json.contains("\"repeat\":-1"));
    }

    #[test]
    fn test_round_trip() {
        let manifest = AnimationManifest::standard();
        let json = serde_json::to_string_pretty(&manifest).unwrap();
        let decoded: AnimationManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, manifest);
    }

    #[test]
    fn test_frame_indices_cover_sheet() {
        let clips = FighterClips::standard();
        let all = [
            &clips.idle, &clips.walk, &clips.jump, &clips.attack1,
            &clips.attack2, &clips.special, &clips.hit, &clips.ko,
        ];
        for (i, clip) in all.iter().enumerate() {
            assert_eq!(clip.frames, vec![i as u32]);
        }
    }
}
