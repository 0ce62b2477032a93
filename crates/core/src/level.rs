//! Level data contract.
//!
//! An ordered catalog of immutable level records, consumed read-only by
//! session construction: every level load deep-copies the record into live
//! state. Catalogs are built in code (see the campaign crate) or parsed
//! from RON text; either way they validate on construction.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::{Archetype, Axis, Platform, PowerUp};
use crate::physics::Rect;

/// Oscillation descriptor for a dynamic platform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OscillationSpec {
    pub axis: Axis,
    pub speed: f32,
    pub range: f32,
}

/// A platform record. Static platforms omit the motion descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub rect: Rect,
    #[serde(default)]
    pub motion: Option<OscillationSpec>,
}

impl PlatformSpec {
    /// Instantiate the live platform, anchored at the record's position.
    pub fn to_platform(&self) -> Platform {
        match self.motion {
            Some(osc) => Platform::oscillating(self.rect, osc.axis, osc.speed, osc.range),
            None => Platform::fixed(self.rect),
        }
    }
}

/// An enemy spawn record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub health: f32,
    pub speed: f32,
    /// +1.0 or -1.0; initial patrol direction.
    pub direction: f32,
    pub archetype: Archetype,
    /// Left edge of the patrol band.
    pub patrol_origin: f32,
    #[serde(default)]
    pub patrol_range: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    Spikes,
}

/// A static hazard strip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub rect: Rect,
    pub kind: HazardKind,
}

/// One level's complete static description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelData {
    pub world_width: f32,
    pub world_height: f32,
    pub player_start: Vec2,
    pub platforms: Vec<PlatformSpec>,
    pub enemies: Vec<EnemySpawn>,
    pub power_ups: Vec<PowerUp>,
    #[serde(default)]
    pub hazards: Vec<Hazard>,
    pub goal: Rect,
    /// Boss-gated goal reveal: when set, the goal starts wherever `goal`
    /// says (typically out of bounds) and relocates here once no
    /// boss-archetype enemy remains alive.
    #[serde(default)]
    pub boss_reveal: Option<Rect>,
}

impl LevelData {
    pub fn has_boss(&self) -> bool {
        self.enemies
            .iter()
            .any(|e| e.archetype == Archetype::Boss)
    }
}

/// Errors surfaced while building or parsing a level catalog.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("catalog contains no levels")]
    Empty,

    #[error("level {index}: world dimensions must be positive")]
    InvalidWorld { index: usize },

    #[error("level {index}: player spawn lies outside the world bounds")]
    SpawnOutOfBounds { index: usize },

    #[error("failed to parse level catalog: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Validated, ordered collection of levels.
#[derive(Debug, Clone)]
pub struct LevelCatalog {
    levels: Vec<LevelData>,
}

impl LevelCatalog {
    pub fn new(levels: Vec<LevelData>) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::Empty);
        }
        for (index, level) in levels.iter().enumerate() {
            if level.world_width <= 0.0 || level.world_height <= 0.0 {
                return Err(LevelError::InvalidWorld { index });
            }
            let spawn = level.player_start;
            if spawn.x < 0.0
                || spawn.x > level.world_width
                || spawn.y < 0.0
                || spawn.y > level.world_height
            {
                return Err(LevelError::SpawnOutOfBounds { index });
            }
        }

        tracing::info!(levels = levels.len(), "level catalog validated");
        Ok(Self { levels })
    }

    /// Parse a catalog from RON text (a sequence of level records).
    pub fn from_ron_str(text: &str) -> Result<Self, LevelError> {
        let levels: Vec<LevelData> = ron::from_str(text)?;
        Self::new(levels)
    }

    pub fn get(&self, index: usize) -> Option<&LevelData> {
        self.levels.get(index)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 >= self.levels.len()
    }
}
