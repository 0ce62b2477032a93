//! The session state: the complete mutable snapshot of one level attempt.
//!
//! Owned exclusively by the game loop, rebuilt wholesale on level load or
//! restart-after-death. Persistent progression (experience, upgrades,
//! lives) is threaded through reconstruction by the session wrapper
//! rather than stored here.

use glam::Vec2;

use crate::entities::{Enemy, Particle, Platform, Player, PowerUp, Projectile};
use crate::events::GameEvent;
use crate::level::{Hazard, LevelData};
use crate::physics::Rect;
use crate::progression::Progression;
use crate::random::SeededRandom;

/// Damage values baked at level load from the purchased upgrade tiers.
/// Purchases only happen between levels, so this never goes stale
/// mid-attempt.
#[derive(Debug, Clone, Copy)]
pub struct Loadout {
    pub dagger_damage: f32,
    pub claw_damage: f32,
}

/// Screen-shake envelope set by heavy impacts, decayed each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenShake {
    pub magnitude: f32,
    pub timer: u32,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub frame: u32,
    pub level_index: usize,
    pub world_width: f32,
    pub world_height: f32,

    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub particles: Vec<Particle>,
    pub power_ups: Vec<PowerUp>,
    pub platforms: Vec<Platform>,
    pub hazards: Vec<Hazard>,

    pub camera: Vec2,
    pub goal: Rect,
    /// Pending boss-gated goal relocation; taken (once) when the last
    /// boss-archetype enemy dies.
    pub boss_reveal: Option<Rect>,

    /// Ally-assist countdown armed by the aid pickup; zero when idle.
    pub assist_timer: u32,
    pub screen_shake: ScreenShake,

    /// Per-attempt score counter.
    pub score: u32,
    /// Experience earned this tick, drained into persistent progression
    /// by the session wrapper.
    pub experience_gained: u32,

    pub loadout: Loadout,
    pub rng: SeededRandom,
    /// Cues emitted this tick, drained by the presentation layer.
    pub events: Vec<GameEvent>,
}

impl SessionState {
    /// Camera viewport dimensions.
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;

    /// Falling this far past the world bottom is fatal.
    pub const FALL_MARGIN: f32 = 100.0;

    /// Build a fresh attempt for one level. Deep-copies the static level
    /// layout and derives the player's effective caps and damage from the
    /// purchased upgrades.
    pub fn from_level(
        level: &LevelData,
        progression: &Progression,
        level_index: usize,
        seed: u32,
    ) -> Self {
        let player = Player::spawn(
            level.player_start,
            progression.max_health(),
            progression.max_mana(),
        );

        let mut state = Self {
            frame: 0,
            level_index,
            world_width: level.world_width,
            world_height: level.world_height,
            player,
            enemies: level.enemies.iter().map(Enemy::from_spawn).collect(),
            projectiles: Vec::with_capacity(64),
            particles: Vec::with_capacity(256),
            power_ups: level.power_ups.clone(),
            platforms: level.platforms.iter().map(|p| p.to_platform()).collect(),
            hazards: level.hazards.clone(),
            camera: Vec2::ZERO,
            goal: level.goal,
            boss_reveal: level.boss_reveal,
            assist_timer: 0,
            screen_shake: ScreenShake::default(),
            score: 0,
            experience_gained: 0,
            loadout: Loadout {
                dagger_damage: progression.dagger_damage(),
                claw_damage: progression.claw_damage(),
            },
            rng: SeededRandom::new(seed),
            events: Vec::with_capacity(16),
        };
        state.update_camera();
        state
    }

    /// The world-space rectangle currently visible to the camera.
    pub fn camera_view(&self) -> Rect {
        Rect {
            pos: self.camera,
            size: Vec2::new(Self::VIEW_WIDTH, Self::VIEW_HEIGHT),
        }
    }

    /// Center the camera on the player, clamped to the world.
    pub fn update_camera(&mut self) {
        let target = self.player.center() - Vec2::new(Self::VIEW_WIDTH, Self::VIEW_HEIGHT) * 0.5;
        let max_x = (self.world_width - Self::VIEW_WIDTH).max(0.0);
        let max_y = (self.world_height - Self::VIEW_HEIGHT).max(0.0);
        self.camera = Vec2::new(target.x.clamp(0.0, max_x), target.y.clamp(0.0, max_y));
    }

    pub fn has_boss(&self) -> bool {
        self.enemies.iter().any(Enemy::is_boss)
    }

    /// Drain the experience earned since the last call.
    pub fn take_experience(&mut self) -> u32 {
        std::mem::take(&mut self.experience_gained)
    }
}
