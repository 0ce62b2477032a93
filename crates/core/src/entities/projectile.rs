//! Projectile entities.

use glam::Vec2;

use crate::physics::Rect;

/// Which side a projectile belongs to; it only ever resolves hits against
/// the opposing faction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Faction {
    Player,
    Enemy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileKind {
    /// Thrown dagger, flies flat in the facing direction.
    Dagger,
    /// Dark-energy bolt fired by seekers, gargoyles and the boss.
    DarkEnergy,
}

/// A straight-line movable. Damage is baked in at creation time, so
/// upgrades affect future throws, not ones already in flight.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub kind: ProjectileKind,
    pub faction: Faction,
    pub damage: f32,
}

impl Projectile {
    pub const DAGGER_SPEED: f32 = 12.0;
    const DAGGER_SIZE: Vec2 = Vec2::new(18.0, 6.0);
    const BOLT_SIZE: Vec2 = Vec2::new(12.0, 12.0);

    /// A thrown dagger launched from the player.
    pub fn dagger(pos: Vec2, facing: f32, damage: f32) -> Self {
        Self {
            pos,
            size: Self::DAGGER_SIZE,
            vel: Vec2::new(Self::DAGGER_SPEED * facing, 0.0),
            kind: ProjectileKind::Dagger,
            faction: Faction::Player,
            damage,
        }
    }

    /// An enemy bolt with an arbitrary velocity vector.
    pub fn dark_energy(pos: Vec2, vel: Vec2, damage: f32) -> Self {
        Self {
            pos,
            size: Self::BOLT_SIZE,
            vel,
            kind: ProjectileKind::DarkEnergy,
            faction: Faction::Enemy,
            damage,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}
