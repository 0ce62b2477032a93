//! Projectile system.
//!
//! Every projectile advances by its velocity each tick and resolves at
//! most once per frame: either it expires outside the camera margin or it
//! hits its first valid target and disappears.

use crate::entities::particle::{self, spawn_burst};
use crate::entities::{Faction, Player};
use crate::events::GameEvent;
use crate::state::SessionState;

/// Projectiles are culled this far beyond the camera viewport.
const CULL_MARGIN: f32 = 100.0;

pub fn update(state: &mut SessionState) {
    let view = state.camera_view().expanded(CULL_MARGIN);
    let SessionState {
        player,
        enemies,
        projectiles,
        particles,
        rng,
        events,
        score,
        experience_gained,
        ..
    } = state;

    projectiles.retain_mut(|proj| {
        proj.pos += proj.vel;

        if !view.overlaps(&proj.rect()) {
            return false;
        }

        match proj.faction {
            Faction::Player => {
                for enemy in enemies.iter_mut() {
                    if !enemy.is_alive() {
                        continue;
                    }
                    if proj.rect().overlaps(&enemy.rect()) {
                        let xp =
                            super::apply_damage(enemy, proj.damage, particles, rng, events);
                        *score += xp;
                        *experience_gained += xp;
                        return false; // one target per projectile
                    }
                }
                true
            }
            Faction::Enemy => {
                if !proj.rect().overlaps(&player.rect()) {
                    return true;
                }
                if player.is_parrying {
                    // Guard up: the bolt shatters harmlessly.
                    player.invincibility =
                        player.invincibility.max(Player::PARRY_BLOCK_INVINCIBILITY);
                    spawn_burst(particles, rng, player.center(), 6, particle::PARRY_SILVER);
                    events.push(GameEvent::ParryBlock);
                    return false;
                }
                if player.invincibility == 0 {
                    player.take_damage(proj.damage);
                    player.invincibility = Player::PROJECTILE_HIT_INVINCIBILITY;
                    spawn_burst(particles, rng, player.center(), 8, particle::HIT_RED);
                    events.push(GameEvent::PlayerHurt);
                    return false;
                }
                true // invincible: the bolt passes through
            }
        }
    });
}
