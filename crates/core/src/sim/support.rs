//! Particle pool, moving-platform updater and screen-shake decay.

use crate::entities::Particle;
use crate::state::SessionState;

pub fn update_particles(state: &mut SessionState) {
    for particle in &mut state.particles {
        particle.pos += particle.vel;
        particle.life = particle.life.saturating_sub(1);
    }
    state.particles.retain(Particle::is_alive);
}

pub fn update_platforms(state: &mut SessionState) {
    for platform in &mut state.platforms {
        platform.advance();
    }
}

pub fn update_screen_shake(state: &mut SessionState) {
    let shake = &mut state.screen_shake;
    if shake.timer > 0 {
        shake.timer -= 1;
        if shake.timer == 0 {
            shake.magnitude = 0.0;
        }
    }
}
