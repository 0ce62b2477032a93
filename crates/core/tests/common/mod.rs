//! Shared fixtures for the integration tests.
#![allow(dead_code)] // not every test binary uses every fixture

use glam::Vec2;

use silvervein_core::entities::Archetype;
use silvervein_core::level::{EnemySpawn, LevelData, PlatformSpec};
use silvervein_core::physics::Rect;
use silvervein_core::{FrameInput, Progression, SessionState};

/// A long flat floor with the goal far to the right.
pub fn flat_level() -> LevelData {
    LevelData {
        world_width: 2000.0,
        world_height: 600.0,
        player_start: Vec2::new(100.0, 452.0),
        platforms: vec![PlatformSpec {
            rect: Rect::new(0.0, 500.0, 2000.0, 100.0),
            motion: None,
        }],
        enemies: Vec::new(),
        power_ups: Vec::new(),
        hazards: Vec::new(),
        goal: Rect::new(1900.0, 400.0, 60.0, 100.0),
        boss_reveal: None,
    }
}

/// A stationary enforcer standing on the fixture floor.
pub fn enforcer_at(id: u32, x: f32) -> EnemySpawn {
    EnemySpawn {
        id,
        pos: Vec2::new(x, 452.0),
        size: Vec2::new(32.0, 48.0),
        health: 30.0,
        speed: 0.0,
        direction: 1.0,
        archetype: Archetype::Enforcer,
        patrol_origin: x,
        patrol_range: 0.0,
    }
}

pub fn fresh_state(level: &LevelData) -> SessionState {
    SessionState::from_level(level, &Progression::new(), 0, 42)
}

pub fn held(bits: u16) -> FrameInput {
    FrameInput::from_bits(bits)
}

/// Let the spawned player drop onto the floor.
pub fn settle(state: &mut SessionState) {
    for _ in 0..3 {
        silvervein_core::sim::tick(state, FrameInput::new());
    }
    assert!(state.player.on_ground, "player should have landed");
    state.events.clear();
}
