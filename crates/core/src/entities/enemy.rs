//! Enemy entities.
//!
//! Every enemy shares one physics/combat substrate (position, vertical
//! velocity, patrol band, hit flash, experience-credit guard). The
//! archetype-specific transient state lives in the [`EnemyKind`] variant,
//! so a patrol grunt carries no boss phase timers and the AI engine
//! pattern-matches on the tag instead of probing optional fields.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::level::EnemySpawn;
use crate::physics::Rect;

/// Behavioral category, as tagged in level data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Archetype {
    /// Ground patroller that aggros, telegraphs, and dashes at the player.
    Enforcer,
    /// Hovering kiter that fires aimed bolts.
    Seeker,
    /// Stationary perched shooter.
    Gargoyle,
    /// Floating ambusher, contact damage only.
    Specter,
    /// Multi-pattern boss.
    Boss,
}

/// Aggro cycle of the patrol-melee archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnforcerState {
    Patrol,
    Approach,
    /// Telegraph before the dash; counts down to zero.
    Tell { timer: u32 },
    Dash { timer: u32, dir: f32 },
}

/// The three telegraphed boss attacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossAttack {
    Dash,
    Spread,
    Slam,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BossPattern {
    /// Walking toward the player, waiting out the attack cooldown.
    Advance,
    Tell { attack: BossAttack, timer: u32 },
    Dash { timer: u32, dir: f32 },
    /// Airborne after the slam jump; the shockwave fires on landing.
    Slam,
}

/// Archetype-specific transient state.
#[derive(Debug, Clone, PartialEq)]
pub enum EnemyKind {
    Enforcer {
        state: EnforcerState,
        dash_cooldown: u32,
    },
    Seeker {
        attack_cooldown: u32,
    },
    Gargoyle {
        attack_cooldown: u32,
    },
    Specter,
    Boss {
        pattern: BossPattern,
        attack_cooldown: u32,
    },
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal motion is speed × direction; only vertical velocity is
    /// integrated.
    pub vel_y: f32,
    pub speed: f32,
    pub direction: f32,
    pub health: f32,
    pub max_health: f32,
    pub on_ground: bool,
    /// Hit-flash countdown for the render layer.
    pub hit_timer: u32,
    pub patrol_origin: f32,
    pub patrol_range: f32,
    /// Experience is credited at most once per enemy, no matter how many
    /// damage sources land on the killing tick.
    pub xp_credited: bool,
    pub kind: EnemyKind,
}

impl Enemy {
    pub const CONTACT_DAMAGE: f32 = 10.0;
    pub const BOSS_CONTACT_DAMAGE: f32 = 20.0;
    /// Invincibility granted to the player on contact. 1 second.
    pub const CONTACT_INVINCIBILITY: u32 = 60;
    pub const HIT_FLASH: u32 = 10;

    pub const XP_ENFORCER: u32 = 100;
    pub const XP_SEEKER: u32 = 150;
    pub const XP_GARGOYLE: u32 = 120;
    pub const XP_SPECTER: u32 = 200;
    pub const XP_BOSS: u32 = 1000;

    /// Build a live enemy from its level-data spawn record. All archetype
    /// transients start at their defaults.
    pub fn from_spawn(spawn: &EnemySpawn) -> Self {
        let kind = match spawn.archetype {
            Archetype::Enforcer => EnemyKind::Enforcer {
                state: EnforcerState::Patrol,
                dash_cooldown: 0,
            },
            Archetype::Seeker => EnemyKind::Seeker { attack_cooldown: 0 },
            Archetype::Gargoyle => EnemyKind::Gargoyle { attack_cooldown: 0 },
            Archetype::Specter => EnemyKind::Specter,
            Archetype::Boss => EnemyKind::Boss {
                pattern: BossPattern::Advance,
                attack_cooldown: crate::sim::enemy::BOSS_ATTACK_CYCLE,
            },
        };

        Self {
            id: spawn.id,
            pos: spawn.pos,
            size: spawn.size,
            vel_y: 0.0,
            speed: spawn.speed,
            direction: spawn.direction,
            health: spawn.health,
            max_health: spawn.health,
            on_ground: false,
            hit_timer: 0,
            patrol_origin: spawn.patrol_origin,
            patrol_range: spawn.patrol_range,
            xp_credited: false,
            kind,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn is_boss(&self) -> bool {
        matches!(self.kind, EnemyKind::Boss { .. })
    }

    /// Hovering archetypes ignore gravity and platform resolution.
    pub fn is_airborne_kind(&self) -> bool {
        matches!(
            self.kind,
            EnemyKind::Seeker { .. } | EnemyKind::Gargoyle { .. } | EnemyKind::Specter
        )
    }

    /// Experience and score awarded for the kill, scaled by archetype.
    pub fn xp_value(&self) -> u32 {
        match self.kind {
            EnemyKind::Enforcer { .. } => Self::XP_ENFORCER,
            EnemyKind::Seeker { .. } => Self::XP_SEEKER,
            EnemyKind::Gargoyle { .. } => Self::XP_GARGOYLE,
            EnemyKind::Specter => Self::XP_SPECTER,
            EnemyKind::Boss { .. } => Self::XP_BOSS,
        }
    }

    /// Whether the enemy is in a telegraph phase (rendered distinctly).
    pub fn is_telegraphing(&self) -> bool {
        matches!(
            self.kind,
            EnemyKind::Enforcer {
                state: EnforcerState::Tell { .. },
                ..
            } | EnemyKind::Boss {
                pattern: BossPattern::Tell { .. },
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::EnemySpawn;

    fn spawn(archetype: Archetype) -> EnemySpawn {
        EnemySpawn {
            id: 1,
            pos: Vec2::new(400.0, 452.0),
            size: Vec2::new(32.0, 48.0),
            health: 30.0,
            speed: 1.0,
            direction: 1.0,
            archetype,
            patrol_origin: 360.0,
            patrol_range: 120.0,
        }
    }

    #[test]
    fn spawn_defaults_archetype_transients() {
        let enforcer = Enemy::from_spawn(&spawn(Archetype::Enforcer));
        assert_eq!(
            enforcer.kind,
            EnemyKind::Enforcer {
                state: EnforcerState::Patrol,
                dash_cooldown: 0
            }
        );
        assert!(!enforcer.is_telegraphing());
        assert!(!enforcer.xp_credited);

        let boss = Enemy::from_spawn(&spawn(Archetype::Boss));
        assert!(boss.is_boss());
        assert!(!boss.is_airborne_kind());
        assert_eq!(boss.xp_value(), Enemy::XP_BOSS);

        let seeker = Enemy::from_spawn(&spawn(Archetype::Seeker));
        assert!(seeker.is_airborne_kind());
    }
}
