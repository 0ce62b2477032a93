//! Ephemeral visual-feedback particles.
//!
//! Purely cosmetic: combat and AI spawn them, the render layer draws them,
//! nothing reads them back. They still live in the session state so the
//! simulation stays the single source of truth for a frame.

use glam::Vec2;

use crate::random::SeededRandom;

/// RGB color triple handed to the render layer untouched.
pub type Color = [u8; 3];

pub const HIT_RED: Color = [255, 77, 77];
pub const LUNAR_PURPLE: Color = [168, 85, 247];
pub const HEAL_GREEN: Color = [74, 222, 128];
pub const PARRY_SILVER: Color = [224, 224, 224];
pub const SHOCKWAVE_WHITE: Color = [245, 245, 245];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Small square fleck with velocity.
    Spark,
    /// Expanding ring; `size` is the target radius at end of life.
    Shockwave,
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: u32,
    pub max_life: u32,
    pub size: f32,
    pub color: Color,
    pub kind: ParticleKind,
}

impl Particle {
    const SPARK_LIFE: u32 = 20;
    const SHOCKWAVE_LIFE: u32 = 30;

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }
}

/// Scatter a burst of sparks around a point.
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    rng: &mut SeededRandom,
    pos: Vec2,
    count: usize,
    color: Color,
) {
    for _ in 0..count {
        particles.push(Particle {
            pos,
            vel: Vec2::new(rng.next_range(-2.5, 2.5), rng.next_range(-2.5, 2.5)),
            life: Particle::SPARK_LIFE,
            max_life: Particle::SPARK_LIFE,
            size: rng.next_range(1.0, 4.0),
            color,
            kind: ParticleKind::Spark,
        });
    }
}

/// Spawn an expanding shockwave ring.
pub fn spawn_shockwave(particles: &mut Vec<Particle>, pos: Vec2, radius: f32) {
    particles.push(Particle {
        pos,
        vel: Vec2::ZERO,
        life: Particle::SHOCKWAVE_LIFE,
        max_life: Particle::SHOCKWAVE_LIFE,
        size: radius,
        color: SHOCKWAVE_WHITE,
        kind: ParticleKind::Shockwave,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_spawns_requested_count() {
        let mut particles = Vec::new();
        let mut rng = SeededRandom::new(7);
        spawn_burst(&mut particles, &mut rng, Vec2::new(10.0, 10.0), 8, HIT_RED);
        assert_eq!(particles.len(), 8);
        assert!(particles.iter().all(|p| p.is_alive()));
    }
}
