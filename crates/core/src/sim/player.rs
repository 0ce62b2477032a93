//! Player controller stage.
//!
//! Evaluation order within the stage is fixed: timer decay, pickups, the
//! armed ally assist, charged attack, melee, ranged throw, dash, parry,
//! movement/physics, hazards, animation selection. Inputs that arrive
//! while the player is in an incompatible state are ignored for the
//! frame; missing mana silently cancels the action.

use glam::Vec2;

use crate::entities::particle::{self, spawn_burst, spawn_shockwave};
use crate::entities::{AnimState, Player, PowerUp, PowerUpKind, Projectile, TrailGhost};
use crate::events::GameEvent;
use crate::input::FrameInput;
use crate::physics::{self, lerp};
use crate::state::SessionState;

// Spike hazards
const HAZARD_DAMAGE: f32 = 10.0;
const HAZARD_KNOCKBACK: f32 = -8.0;
const HAZARD_INVINCIBILITY: u32 = 60;

// Ally assist: armed countdown; the strike lands mid-animation.
const ASSIST_DURATION: u32 = 60;
const ASSIST_STRIKE_AT: u32 = 30;
const ASSIST_BOSS_DAMAGE: f32 = 200.0;

pub fn update(state: &mut SessionState, input: FrameInput) {
    decay_timers(state);
    resolve_pickups(state);
    run_assist(state);
    resolve_charge(state, input);
    resolve_melee(state, input);
    resolve_throw(state, input);
    resolve_dash(state, input);
    resolve_parry(state, input);
    integrate_movement(state, input);
    resolve_hazards(state);
    select_animation(state);
}

fn decay_timers(state: &mut SessionState) {
    let p = &mut state.player;

    p.attack_cooldown = p.attack_cooldown.saturating_sub(1);
    p.throw_cooldown = p.throw_cooldown.saturating_sub(1);
    p.invincibility = p.invincibility.saturating_sub(1);
    p.dash_cooldown = p.dash_cooldown.saturating_sub(1);
    p.parry_cooldown = p.parry_cooldown.saturating_sub(1);

    if p.werewolf_timer > 0 {
        p.werewolf_timer -= 1;
        if p.werewolf_timer == 0 {
            p.is_werewolf = false;
        }
    }

    if p.parry_timer > 0 {
        p.parry_timer -= 1;
        if p.parry_timer == 0 {
            p.is_parrying = false;
        }
    }

    if p.is_dashing {
        p.dash_timer = p.dash_timer.saturating_sub(1);
        if p.dash_timer == 0 {
            p.is_dashing = false;
            p.vel.x *= 0.5; // momentum retention
        }
    } else if !p.dash_trail.is_empty() {
        p.dash_trail.remove(0);
    }

    p.regen_mana();
}

fn resolve_pickups(state: &mut SessionState) {
    let SessionState {
        player,
        power_ups,
        particles,
        rng,
        events,
        assist_timer,
        ..
    } = state;
    let player_rect = player.rect();

    power_ups.retain(|pickup| {
        if !player_rect.overlaps(&pickup.rect) {
            return true;
        }
        match pickup.kind {
            PowerUpKind::LunarFragment => {
                // An already-active buff neither stacks nor refreshes.
                if !player.is_werewolf {
                    player.is_werewolf = true;
                    player.werewolf_timer = Player::WEREWOLF_DURATION;
                }
                spawn_burst(particles, rng, player.center(), 20, particle::LUNAR_PURPLE);
            }
            PowerUpKind::IsoldeAid => {
                *assist_timer = ASSIST_DURATION;
            }
            PowerUpKind::HealthVial => {
                player.heal(PowerUp::VIAL_HEAL);
                spawn_burst(particles, rng, player.center(), 10, particle::HEAL_GREEN);
            }
        }
        events.push(GameEvent::PowerUp);
        false
    });
}

/// The armed ally assist counts down and wipes on-screen enemies when it
/// hits the strike tick. Bosses take heavy damage instead of dying
/// outright.
fn run_assist(state: &mut SessionState) {
    if state.assist_timer == 0 {
        return;
    }
    state.assist_timer -= 1;
    if state.assist_timer != ASSIST_STRIKE_AT {
        return;
    }

    let view = state.camera_view();
    let SessionState {
        enemies,
        particles,
        rng,
        events,
        score,
        experience_gained,
        ..
    } = state;

    events.push(GameEvent::AssistStrike);
    for enemy in enemies.iter_mut() {
        if !view.overlaps(&enemy.rect()) {
            continue;
        }
        let amount = if enemy.is_boss() {
            ASSIST_BOSS_DAMAGE
        } else {
            enemy.health
        };
        let xp = super::apply_damage(enemy, amount, particles, rng, events);
        *score += xp;
        *experience_gained += xp;
    }
}

fn resolve_charge(state: &mut SessionState, input: FrameInput) {
    let eligible = {
        let p = &state.player;
        p.on_ground
            && !p.attacking
            && !p.is_dashing
            && !p.is_parrying
            && p.mana >= Player::CHARGE_COST_MIN
    };

    if input.charge() && eligible {
        if state.player.charge_timer == 0 {
            state.events.push(GameEvent::ChargeStart);
        }
        state.player.charge_timer =
            (state.player.charge_timer + 1).min(Player::CHARGE_MAX_TIME);
        return;
    }

    // Key released or eligibility lost: the charge resolves now.
    let held = state.player.charge_timer;
    if held == 0 {
        return;
    }
    state.player.charge_timer = 0;
    if held < Player::CHARGE_MIN_TIME {
        return; // under the activation threshold: cancelled, no effect
    }

    let t = (held - Player::CHARGE_MIN_TIME) as f32
        / (Player::CHARGE_MAX_TIME - Player::CHARGE_MIN_TIME) as f32;
    let cost = lerp(Player::CHARGE_COST_MIN, Player::CHARGE_COST_MAX, t);
    let damage = lerp(Player::CHARGE_DAMAGE_MIN, Player::CHARGE_DAMAGE_MAX, t);
    let radius = lerp(Player::CHARGE_RADIUS_MIN, Player::CHARGE_RADIUS_MAX, t);

    state.player.mana = (state.player.mana - cost).max(0.0);
    let center = state.player.center();
    state.events.push(GameEvent::ChargeRelease);

    let SessionState {
        enemies,
        particles,
        rng,
        events,
        score,
        experience_gained,
        ..
    } = state;
    spawn_shockwave(particles, center, radius);
    for enemy in enemies.iter_mut() {
        if enemy.center().distance(center) <= radius {
            let xp = super::apply_damage(enemy, damage, particles, rng, events);
            *score += xp;
            *experience_gained += xp;
        }
    }
}

fn resolve_melee(state: &mut SessionState, input: FrameInput) {
    {
        let p = &state.player;
        if !input.attack()
            || p.attacking
            || p.attack_cooldown > 0
            || p.charge_timer > 0
            || p.is_dashing
            || p.is_parrying
        {
            return;
        }
    }

    let hitbox = state.player.melee_hitbox();
    let werewolf = state.player.is_werewolf;
    let damage = if werewolf {
        state.loadout.claw_damage
    } else {
        state.loadout.dagger_damage
    };

    let p = &mut state.player;
    p.attacking = true;
    p.animation.frame_timer = 0;
    if werewolf {
        p.attack_cooldown = Player::CLAW_COOLDOWN;
        p.animation.state = AnimState::ClawAttack;
        p.vel.x = Player::CLAW_LUNGE * p.facing; // lunge forward
    } else {
        p.attack_cooldown = Player::ATTACK_COOLDOWN;
        p.animation.state = AnimState::Attack;
    }
    state.events.push(if werewolf {
        GameEvent::ClawAttack
    } else {
        GameEvent::DaggerAttack
    });

    let SessionState {
        enemies,
        particles,
        rng,
        events,
        score,
        experience_gained,
        ..
    } = state;
    for enemy in enemies.iter_mut() {
        if hitbox.overlaps(&enemy.rect()) {
            let xp = super::apply_damage(enemy, damage, particles, rng, events);
            *score += xp;
            *experience_gained += xp;
        }
    }
}

fn resolve_throw(state: &mut SessionState, input: FrameInput) {
    let p = &mut state.player;
    if !input.throw() || p.throw_cooldown > 0 || p.charge_timer > 0 || p.is_dashing {
        return;
    }
    if !p.spend_mana(Player::THROW_COST) {
        return;
    }
    p.throw_cooldown = Player::THROW_COOLDOWN;

    let facing = p.facing;
    let origin = Vec2::new(
        if facing >= 0.0 {
            p.pos.x + p.size.x
        } else {
            p.pos.x - 18.0
        },
        p.pos.y + p.size.y * 0.4,
    );
    let damage = state.loadout.dagger_damage;
    state
        .projectiles
        .push(Projectile::dagger(origin, facing, damage));
    state.events.push(GameEvent::DaggerThrow);
}

fn resolve_dash(state: &mut SessionState, input: FrameInput) {
    let p = &mut state.player;
    if !input.dash()
        || p.is_dashing
        || p.dash_cooldown > 0
        || p.attacking
        || p.charge_timer > 0
        || p.is_parrying
    {
        return;
    }
    if !p.spend_mana(Player::DASH_COST) {
        return;
    }

    p.is_dashing = true;
    p.dash_timer = Player::DASH_DURATION;
    p.dash_cooldown = Player::DASH_COOLDOWN;
    p.vel.x = Player::DASH_SPEED * p.facing;
    p.vel.y = 0.0;
    p.invincibility = p.invincibility.max(Player::DASH_INVINCIBILITY);
    p.dash_trail.clear();
    state.events.push(GameEvent::Dash);
}

fn resolve_parry(state: &mut SessionState, input: FrameInput) {
    let p = &mut state.player;
    if !input.parry()
        || p.is_parrying
        || p.parry_cooldown > 0
        || !p.on_ground
        || p.attacking
        || p.charge_timer > 0
        || p.is_dashing
    {
        return;
    }
    p.is_parrying = true;
    p.parry_timer = Player::PARRY_DURATION;
    p.parry_cooldown = Player::PARRY_COOLDOWN;
}

fn integrate_movement(state: &mut SessionState, input: FrameInput) {
    let SessionState {
        player: p,
        platforms,
        events,
        world_width,
        world_height,
        ..
    } = state;

    let can_steer =
        !p.is_dashing && p.charge_timer == 0 && !p.is_parrying && (!p.attacking || p.is_werewolf);
    if can_steer {
        match input.horizontal() {
            -1 => {
                p.vel.x = -Player::SPEED;
                p.facing = -1.0;
            }
            1 => {
                p.vel.x = Player::SPEED;
                p.facing = 1.0;
            }
            _ => {
                if !p.attacking {
                    p.vel.x *= physics::FRICTION;
                }
            }
        }

        if input.jump() {
            if p.on_ground {
                p.vel.y = -Player::JUMP_POWER;
                p.on_ground = false;
                events.push(GameEvent::Jump);
            } else if p.can_double_jump && !p.jump_was_held {
                p.vel.y = -Player::DOUBLE_JUMP_POWER;
                p.can_double_jump = false;
                events.push(GameEvent::DoubleJump);
            }
        }
    } else if (p.charge_timer > 0 || p.is_parrying) && !p.is_dashing {
        p.vel.x *= physics::FRICTION;
    }
    p.jump_was_held = input.jump();

    // Dashing suspends gravity for its whole duration.
    if p.is_dashing {
        p.vel.y = 0.0;
    } else {
        physics::apply_gravity(&mut p.vel.y);
    }

    p.pos += p.vel;

    let mut rect = p.rect();
    physics::land_on_platforms(&mut rect, &mut p.vel.y, &mut p.on_ground, platforms);
    p.pos = rect.pos;
    if p.on_ground {
        p.can_double_jump = true;
    }

    if p.is_dashing {
        p.dash_trail.push(TrailGhost {
            pos: p.pos,
            facing: p.facing,
        });
        if p.dash_trail.len() > Player::DASH_TRAIL_LEN {
            p.dash_trail.remove(0);
        }
    }

    // World bounds: clamp horizontally, treat a deep fall as fatal.
    p.pos.x = p.pos.x.clamp(0.0, (*world_width - p.size.x).max(0.0));
    if p.pos.y > *world_height + SessionState::FALL_MARGIN {
        p.health = 0.0;
    }
}

fn resolve_hazards(state: &mut SessionState) {
    let SessionState {
        player: p,
        hazards,
        particles,
        rng,
        events,
        ..
    } = state;
    if p.invincibility > 0 {
        return;
    }
    let rect = p.rect();
    for hazard in hazards.iter() {
        if rect.overlaps(&hazard.rect) {
            p.take_damage(HAZARD_DAMAGE);
            p.invincibility = HAZARD_INVINCIBILITY;
            p.vel.y = HAZARD_KNOCKBACK;
            p.on_ground = false;
            spawn_burst(particles, rng, p.center(), 8, particle::HIT_RED);
            events.push(GameEvent::PlayerHurt);
            break;
        }
    }
}

fn select_animation(state: &mut SessionState) {
    let p = &mut state.player;
    p.animation.frame_timer += 1;

    if p.attacking {
        let hold = if p.animation.state == AnimState::ClawAttack {
            Player::CLAW_HOLD // claw recovers faster
        } else {
            Player::ATTACK_HOLD
        };
        if p.animation.frame_timer > hold {
            p.attacking = false;
        }
    }

    if !p.attacking {
        let next = if p.is_dashing {
            AnimState::Dash
        } else if p.is_parrying {
            AnimState::Parry
        } else if !p.on_ground {
            AnimState::Jump
        } else if p.vel.x.abs() > 0.1 {
            AnimState::Run
        } else {
            AnimState::Idle
        };
        p.animation.set(next);
    }
}
