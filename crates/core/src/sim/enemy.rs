//! Enemy AI engine.
//!
//! Each enemy updates independently once per frame: archetype behavior
//! first, then the shared physics substrate (gravity + platform landing
//! for anything that walks), then hit-flash decay and contact damage.
//! Projectiles are queued during the walk over the enemy list and pushed
//! afterwards.

use glam::Vec2;

use crate::entities::particle::{self, spawn_burst, spawn_shockwave};
use crate::entities::{
    BossAttack, BossPattern, Enemy, EnemyKind, EnforcerState, Particle, Player, Projectile,
};
use crate::events::GameEvent;
use crate::physics;
use crate::random::SeededRandom;
use crate::state::SessionState;

// Patrol-melee
const ENFORCER_AGGRO_RANGE: f32 = 350.0;
const ENFORCER_DISENGAGE_FACTOR: f32 = 1.5;
const ENFORCER_CLOSE_RANGE: f32 = 60.0;
const ENFORCER_TELL: u32 = 40;
const ENFORCER_DASH_SPEED: f32 = 8.0;
const ENFORCER_DASH_DURATION: u32 = 25;
const ENFORCER_DASH_COOLDOWN: u32 = 180; // 3 seconds

// Ranged-hover
const SEEKER_ATTACK_RANGE: f32 = 400.0;
const SEEKER_ATTACK_COOLDOWN: u32 = 120;
const SEEKER_PROJECTILE_SPEED: f32 = 4.0;
const SEEKER_PROJECTILE_DAMAGE: f32 = 10.0;
const SEEKER_REPOSITION_DISTANCE: f32 = 200.0;
/// Phase advance per tick; matches the original's ~300ms wall-clock
/// period at 60 ticks per second.
const SEEKER_BOB_RATE: f32 = 0.055;
const SEEKER_BOB_AMPLITUDE: f32 = 0.5;

// Stationary shooter
const GARGOYLE_ATTACK_RANGE: f32 = 300.0;
const GARGOYLE_ATTACK_COOLDOWN: u32 = 150;

// Floating ambusher
const SPECTER_AGGRO_RANGE: f32 = 260.0;
const SPECTER_DRIFT_SPEED: f32 = 1.2;

// Boss
/// Picks a new attack every 4 seconds once the previous cycle lapses.
pub const BOSS_ATTACK_CYCLE: u32 = 240;
const BOSS_DASH_TELL: u32 = 50;
const BOSS_DASH_SPEED: f32 = 10.0;
const BOSS_DASH_DURATION: u32 = 40;
const BOSS_SHOOT_TELL: u32 = 70;
const BOSS_PROJECTILE_COUNT: u32 = 3;
const BOSS_PROJECTILE_SPREAD: f32 = 0.4; // radians between bolts
const BOSS_PROJECTILE_SPEED: f32 = 5.0;
const BOSS_PROJECTILE_DAMAGE: f32 = 15.0;
const BOSS_SLAM_TELL: u32 = 60;
const BOSS_SLAM_JUMP: f32 = 18.0;
const BOSS_SLAM_RADIUS: f32 = 250.0;
const BOSS_SLAM_DAMAGE: f32 = 25.0;

pub fn update(state: &mut SessionState) {
    let frame = state.frame;
    let SessionState {
        player,
        enemies,
        projectiles,
        particles,
        platforms,
        rng,
        events,
        screen_shake,
        ..
    } = state;

    let player_center = player.center();
    let mut shots: Vec<Projectile> = Vec::new();

    for enemy in enemies.iter_mut() {
        behave(enemy, player_center, frame, rng, &mut shots);

        // Shared substrate: everything that walks gets gravity and
        // platform landing identical in kind to the player's.
        if !enemy.is_airborne_kind() {
            physics::apply_gravity(&mut enemy.vel_y);
            enemy.pos.y += enemy.vel_y;
            let mut rect = enemy.rect();
            physics::land_on_platforms(&mut rect, &mut enemy.vel_y, &mut enemy.on_ground, platforms);
            enemy.pos = rect.pos;
        }

        // The slam shockwave fires the tick the boss touches down.
        if enemy.on_ground {
            if let EnemyKind::Boss {
                pattern,
                attack_cooldown,
            } = &mut enemy.kind
            {
                if *pattern == BossPattern::Slam {
                    *pattern = BossPattern::Advance;
                    *attack_cooldown = BOSS_ATTACK_CYCLE;

                    let center = enemy.pos + enemy.size * 0.5;
                    spawn_shockwave(particles, center, BOSS_SLAM_RADIUS);
                    screen_shake.magnitude = 8.0;
                    screen_shake.timer = 20;

                    // Only a grounded player inside the radius is hit.
                    if player.on_ground
                        && player.invincibility == 0
                        && !player.is_parrying
                        && player.center().distance(center) <= BOSS_SLAM_RADIUS
                    {
                        hurt_player(player, BOSS_SLAM_DAMAGE, center, particles, rng, events);
                    }
                }
            }
        }

        if enemy.hit_timer > 0 {
            enemy.hit_timer -= 1;
        }

        // Contact damage, gated by the player's invincibility and guard.
        if player.rect().overlaps(&enemy.rect()) {
            if player.is_parrying {
                if player.invincibility == 0 {
                    player.invincibility = Player::PARRY_BLOCK_INVINCIBILITY;
                    spawn_burst(particles, rng, player.center(), 6, particle::PARRY_SILVER);
                    events.push(GameEvent::ParryBlock);
                }
            } else if player.invincibility == 0 {
                let damage = if enemy.is_boss() {
                    Enemy::BOSS_CONTACT_DAMAGE
                } else {
                    Enemy::CONTACT_DAMAGE
                };
                let from = enemy.pos + enemy.size * 0.5;
                hurt_player(player, damage, from, particles, rng, events);
            }
        }
    }

    for shot in shots {
        projectiles.push(shot);
        events.push(GameEvent::EnemyShoot);
    }
}

/// Damage the player with knockback away from the attacker and the
/// standard invincibility grant.
fn hurt_player(
    player: &mut Player,
    damage: f32,
    from: Vec2,
    particles: &mut Vec<Particle>,
    rng: &mut SeededRandom,
    events: &mut Vec<GameEvent>,
) {
    player.take_damage(damage);
    player.invincibility = Enemy::CONTACT_INVINCIBILITY;
    player.vel.y = -5.0;
    player.vel.x = 5.0 * if player.center().x < from.x { -1.0 } else { 1.0 };
    spawn_burst(particles, rng, player.center(), 8, particle::HIT_RED);
    events.push(GameEvent::PlayerHurt);
}

/// Archetype behavior dispatch.
fn behave(
    enemy: &mut Enemy,
    player_center: Vec2,
    frame: u32,
    rng: &mut SeededRandom,
    shots: &mut Vec<Projectile>,
) {
    let center = enemy.pos + enemy.size * 0.5;
    let Enemy {
        id,
        pos,
        speed,
        direction,
        patrol_origin,
        patrol_range,
        vel_y,
        on_ground,
        kind,
        ..
    } = enemy;

    match kind {
        EnemyKind::Enforcer {
            state,
            dash_cooldown,
        } => {
            *dash_cooldown = dash_cooldown.saturating_sub(1);
            let distance = center.distance(player_center);

            match state {
                EnforcerState::Patrol => {
                    pos.x += *speed * *direction;
                    if pos.x < *patrol_origin || pos.x > *patrol_origin + *patrol_range {
                        *direction = -*direction;
                    }
                    if distance < ENFORCER_AGGRO_RANGE {
                        *state = EnforcerState::Approach;
                    }
                }
                EnforcerState::Approach => {
                    if distance > ENFORCER_AGGRO_RANGE * ENFORCER_DISENGAGE_FACTOR {
                        *state = EnforcerState::Patrol;
                    } else {
                        let dx = player_center.x - center.x;
                        if dx.abs() > ENFORCER_CLOSE_RANGE {
                            *direction = dx.signum();
                            pos.x += *speed * *direction;
                        } else if *dash_cooldown == 0 {
                            *state = EnforcerState::Tell {
                                timer: ENFORCER_TELL,
                            };
                        }
                    }
                }
                EnforcerState::Tell { timer } => {
                    *timer -= 1;
                    if *timer == 0 {
                        // Dash toward the player's last-known side.
                        let dir = (player_center.x - center.x).signum();
                        *state = EnforcerState::Dash {
                            timer: ENFORCER_DASH_DURATION,
                            dir,
                        };
                    }
                }
                EnforcerState::Dash { timer, dir } => {
                    pos.x += ENFORCER_DASH_SPEED * *dir;
                    *timer -= 1;
                    if *timer == 0 {
                        *dash_cooldown = ENFORCER_DASH_COOLDOWN;
                        *state = EnforcerState::Approach;
                    }
                }
            }
        }

        EnemyKind::Seeker { attack_cooldown } => {
            // Continuous bob layered on the patrol, phase-offset by id so
            // a flock doesn't move in lockstep.
            pos.y += (frame as f32 * SEEKER_BOB_RATE + *id as f32).sin() * SEEKER_BOB_AMPLITUDE;

            let dx = player_center.x - center.x;
            if dx.abs() < SEEKER_REPOSITION_DISTANCE {
                // Too close: back off to keep firing distance.
                *direction = -dx.signum();
                pos.x += *speed * *direction;
            } else {
                pos.x += *speed * *direction;
                if pos.x < *patrol_origin || pos.x > *patrol_origin + *patrol_range {
                    *direction = -*direction;
                }
            }

            *attack_cooldown = attack_cooldown.saturating_sub(1);
            if *attack_cooldown == 0 && center.distance(player_center) < SEEKER_ATTACK_RANGE {
                let vel = (player_center - center).normalize_or_zero() * SEEKER_PROJECTILE_SPEED;
                shots.push(Projectile::dark_energy(center, vel, SEEKER_PROJECTILE_DAMAGE));
                *attack_cooldown = SEEKER_ATTACK_COOLDOWN;
            }
        }

        EnemyKind::Gargoyle { attack_cooldown } => {
            *attack_cooldown = attack_cooldown.saturating_sub(1);
            if *attack_cooldown == 0 && center.distance(player_center) < GARGOYLE_ATTACK_RANGE {
                let vel = (player_center - center).normalize_or_zero() * SEEKER_PROJECTILE_SPEED;
                shots.push(Projectile::dark_energy(center, vel, SEEKER_PROJECTILE_DAMAGE));
                *attack_cooldown = GARGOYLE_ATTACK_COOLDOWN;
            }
        }

        EnemyKind::Specter => {
            let offset = player_center - center;
            if offset.length() < SPECTER_AGGRO_RANGE {
                *pos += offset.normalize_or_zero() * SPECTER_DRIFT_SPEED;
            }
        }

        EnemyKind::Boss {
            pattern,
            attack_cooldown,
        } => match pattern {
            BossPattern::Advance => {
                let dx = player_center.x - center.x;
                if dx.abs() > 4.0 {
                    pos.x += *speed * dx.signum();
                }
                if *attack_cooldown == 0 {
                    let attack = match rng.next_int(3) {
                        0 => BossAttack::Dash,
                        1 => BossAttack::Spread,
                        _ => BossAttack::Slam,
                    };
                    let timer = match attack {
                        BossAttack::Dash => BOSS_DASH_TELL,
                        BossAttack::Spread => BOSS_SHOOT_TELL,
                        BossAttack::Slam => BOSS_SLAM_TELL,
                    };
                    *pattern = BossPattern::Tell { attack, timer };
                } else {
                    *attack_cooldown -= 1;
                }
            }
            BossPattern::Tell { attack, timer } => {
                *timer -= 1;
                if *timer == 0 {
                    let attack = *attack;
                    match attack {
                        BossAttack::Dash => {
                            let dir = (player_center.x - center.x).signum();
                            *pattern = BossPattern::Dash {
                                timer: BOSS_DASH_DURATION,
                                dir,
                            };
                        }
                        BossAttack::Spread => {
                            let aim = (player_center - center).normalize_or_zero();
                            let base = aim.y.atan2(aim.x);
                            for i in 0..BOSS_PROJECTILE_COUNT {
                                let step = i as f32
                                    - (BOSS_PROJECTILE_COUNT - 1) as f32 / 2.0;
                                let angle = base + step * BOSS_PROJECTILE_SPREAD;
                                let vel = Vec2::new(angle.cos(), angle.sin())
                                    * BOSS_PROJECTILE_SPEED;
                                shots.push(Projectile::dark_energy(
                                    center,
                                    vel,
                                    BOSS_PROJECTILE_DAMAGE,
                                ));
                            }
                            *pattern = BossPattern::Advance;
                            *attack_cooldown = BOSS_ATTACK_CYCLE;
                        }
                        BossAttack::Slam => {
                            *vel_y = -BOSS_SLAM_JUMP;
                            *on_ground = false;
                            *pattern = BossPattern::Slam;
                        }
                    }
                }
            }
            BossPattern::Dash { timer, dir } => {
                pos.x += BOSS_DASH_SPEED * *dir;
                *timer -= 1;
                if *timer == 0 {
                    *pattern = BossPattern::Advance;
                    *attack_cooldown = BOSS_ATTACK_CYCLE;
                }
            }
            // Airborne; the shockwave resolves on landing.
            BossPattern::Slam => {}
        },
    }
}
