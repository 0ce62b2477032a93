//! The per-tick update engine.
//!
//! One call to [`tick`] advances the whole session state by a single
//! frame. Stage order is fixed and significant: player, enemies,
//! projectiles, particles/platforms, camera, terminal checks. Later
//! stages read mutations made by earlier ones within the same tick, and
//! enemies are filtered out the instant their health reaches zero so a
//! melee kill never leaks into the projectile stage.

pub mod enemy;
pub mod player;
pub mod projectile;
pub mod support;

use crate::entities::particle::{self, spawn_burst};
use crate::entities::{Enemy, Particle};
use crate::events::GameEvent;
use crate::input::FrameInput;
use crate::random::SeededRandom;
use crate::state::SessionState;

/// Outcome of one simulation tick, surfaced to the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    GoalReached,
    PlayerDied,
}

/// Advance the simulation by one frame with the given input snapshot.
pub fn tick(state: &mut SessionState, input: FrameInput) -> TickOutcome {
    state.frame = state.frame.wrapping_add(1);

    player::update(state, input);
    reap_enemies(state);

    enemy::update(state);
    reap_enemies(state);

    projectile::update(state);
    reap_enemies(state);

    support::update_particles(state);
    support::update_platforms(state);
    support::update_screen_shake(state);

    state.update_camera();

    // Boss-gated goal reveal: once no boss remains, relocate the goal
    // into the playable area exactly once.
    if state.boss_reveal.is_some() && !state.has_boss() {
        if let Some(rect) = state.boss_reveal.take() {
            state.goal = rect;
            state.events.push(GameEvent::GoalRevealed);
        }
    }

    if !state.player.is_alive() {
        return TickOutcome::PlayerDied;
    }

    // Slight horizontal inset so grazing the portal frame doesn't count.
    if state.player.rect().inset_x(10.0).overlaps(&state.goal) {
        state.events.push(GameEvent::GoalReached);
        return TickOutcome::GoalReached;
    }

    TickOutcome::Continue
}

/// Damage an enemy, flash it, and scatter hit particles. Returns the
/// experience awarded if this blow newly killed it. The `xp_credited`
/// guard keeps an enemy killed twice in one tick (area clear plus melee)
/// from being counted twice.
pub(crate) fn apply_damage(
    enemy: &mut Enemy,
    amount: f32,
    particles: &mut Vec<Particle>,
    rng: &mut SeededRandom,
    events: &mut Vec<GameEvent>,
) -> u32 {
    enemy.health = (enemy.health - amount).max(0.0);
    enemy.hit_timer = Enemy::HIT_FLASH;
    spawn_burst(particles, rng, enemy.center(), 6, particle::HIT_RED);
    events.push(GameEvent::EnemyHit);

    if !enemy.is_alive() && !enemy.xp_credited {
        enemy.xp_credited = true;
        spawn_burst(particles, rng, enemy.center(), 18, particle::HIT_RED);
        events.push(GameEvent::EnemyDefeated);
        enemy.xp_value()
    } else {
        0
    }
}

fn reap_enemies(state: &mut SessionState) {
    state.enemies.retain(Enemy::is_alive);
}
