//! Entity types for the simulation.
//!
//! Array-based storage in the session state, deterministic iteration
//! order, value-like lifecycles: created from level data, mutated in
//! place by the tick stages, filtered out when spent.

pub mod enemy;
pub mod particle;
pub mod platform;
pub mod player;
pub mod powerup;
pub mod projectile;

pub use enemy::{Archetype, BossAttack, BossPattern, Enemy, EnemyKind, EnforcerState};
pub use particle::{Particle, ParticleKind};
pub use platform::{Axis, Platform};
pub use player::{AnimState, Animation, Player, TrailGhost};
pub use powerup::{PowerUp, PowerUpKind};
pub use projectile::{Faction, Projectile, ProjectileKind};
