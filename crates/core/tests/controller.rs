//! Player-controller scenarios: jumping, dashing, ability gating,
//! platform riding, resource clamping.

mod common;

use common::{flat_level, fresh_state, held, settle};

use silvervein_core::entities::Enemy;
use silvervein_core::level::{OscillationSpec, PlatformSpec};
use silvervein_core::entities::Axis;
use silvervein_core::physics::Rect;
use silvervein_core::{sim, FrameInput, GameEvent};

fn count_events(state: &silvervein_core::SessionState, event: GameEvent) -> usize {
    state.events.iter().filter(|e| **e == event).count()
}

#[test]
fn double_jump_fires_exactly_once_per_airborne_period() {
    let level = flat_level();
    let mut state = fresh_state(&level);
    settle(&mut state);

    // First jump from the ground.
    sim::tick(&mut state, held(FrameInput::JUMP));
    assert!(!state.player.on_ground);
    assert_eq!(count_events(&state, GameEvent::Jump), 1);

    // Holding the key while airborne must not double-jump.
    for _ in 0..3 {
        sim::tick(&mut state, held(FrameInput::JUMP));
    }
    assert_eq!(count_events(&state, GameEvent::DoubleJump), 0);

    // Release, then a fresh press triggers the double jump once.
    sim::tick(&mut state, FrameInput::new());
    sim::tick(&mut state, held(FrameInput::JUMP));
    assert_eq!(count_events(&state, GameEvent::DoubleJump), 1);

    // A further press before landing does nothing.
    sim::tick(&mut state, FrameInput::new());
    sim::tick(&mut state, held(FrameInput::JUMP));
    assert_eq!(count_events(&state, GameEvent::DoubleJump), 1);

    // Land, and the double jump is available again.
    for _ in 0..120 {
        sim::tick(&mut state, FrameInput::new());
        if state.player.on_ground {
            break;
        }
    }
    assert!(state.player.on_ground);
    assert!(state.player.can_double_jump);
}

#[test]
fn dash_and_attack_and_charge_are_mutually_exclusive() {
    let level = flat_level();
    let mut state = fresh_state(&level);
    settle(&mut state);

    // Start a dash; an attack pressed mid-dash is ignored.
    sim::tick(&mut state, held(FrameInput::DASH));
    assert!(state.player.is_dashing);
    sim::tick(&mut state, held(FrameInput::DASH | FrameInput::ATTACK));
    assert!(!state.player.attacking);
    assert_eq!(count_events(&state, GameEvent::DaggerAttack), 0);

    // Charge cannot accumulate while dashing.
    sim::tick(&mut state, held(FrameInput::CHARGE));
    assert_eq!(state.player.charge_timer, 0);

    // Wait the dash out, then start charging.
    for _ in 0..60 {
        sim::tick(&mut state, FrameInput::new());
    }
    state.events.clear();
    for _ in 0..10 {
        sim::tick(&mut state, held(FrameInput::CHARGE));
    }
    assert_eq!(state.player.charge_timer, 10);

    // Melee and dash are both refused while the charge is held.
    sim::tick(&mut state, held(FrameInput::CHARGE | FrameInput::ATTACK));
    assert!(!state.player.attacking);
    sim::tick(&mut state, held(FrameInput::CHARGE | FrameInput::DASH));
    assert!(!state.player.is_dashing);
    assert!(state.player.charge_timer >= 10);
}

#[test]
fn dash_invincibility_outlasts_the_dash() {
    let level = flat_level();
    let mut state = fresh_state(&level);
    settle(&mut state);

    sim::tick(&mut state, held(FrameInput::DASH));
    assert!(state.player.is_dashing);
    assert!(state.player.invincibility > 0);

    // Keep an enemy glued to the player the whole time: no contact damage
    // may land while the dash invincibility runs.
    let max_health = state.player.max_health;
    for tick in 2..=12 {
        let mut enemy = Enemy::from_spawn(&common::enforcer_at(99, 0.0));
        enemy.pos = state.player.pos;
        state.enemies.push(enemy);
        sim::tick(&mut state, FrameInput::new());
        state.enemies.clear();
        assert_eq!(state.player.health, max_health, "hurt on tick {tick}");
        if tick <= 10 {
            assert!(state.player.invincibility > 0 || state.player.is_dashing);
        }
    }
    assert!(!state.player.is_dashing);

    // Once the window lapses, contact damage applies again.
    for _ in 0..5 {
        let mut enemy = Enemy::from_spawn(&common::enforcer_at(99, 0.0));
        enemy.pos = state.player.pos;
        state.enemies.push(enemy);
        sim::tick(&mut state, FrameInput::new());
        state.enemies.clear();
    }
    assert!(state.player.health < max_health);
}

#[test]
fn fatal_fall_zeroes_health() {
    let mut level = flat_level();
    level.platforms.clear();
    let mut state = fresh_state(&level);

    let mut died = false;
    for _ in 0..200 {
        if sim::tick(&mut state, FrameInput::new()) == silvervein_core::TickOutcome::PlayerDied {
            died = true;
            break;
        }
    }
    assert!(died);
    assert_eq!(state.player.health, 0.0);
}

#[test]
fn horizontal_position_clamped_to_world() {
    let level = flat_level();
    let mut state = fresh_state(&level);
    settle(&mut state);

    for _ in 0..200 {
        sim::tick(&mut state, held(FrameInput::LEFT));
        assert!(state.player.pos.x >= 0.0);
    }
    assert_eq!(state.player.pos.x, 0.0);
}

#[test]
fn rider_is_carried_by_an_oscillating_platform() {
    let mut level = flat_level();
    level.platforms = vec![PlatformSpec {
        rect: Rect::new(100.0, 500.0, 100.0, 30.0),
        motion: Some(OscillationSpec {
            axis: Axis::Horizontal,
            speed: 2.0,
            range: 50.0,
        }),
    }];
    level.player_start = glam::Vec2::new(120.0, 452.0);

    let mut state = fresh_state(&level);
    for _ in 0..20 {
        sim::tick(&mut state, FrameInput::new());
    }

    assert!(state.player.on_ground);
    // The platform drifted right and took the player with it.
    assert!(
        state.player.pos.x > 150.0,
        "player was not carried: x = {}",
        state.player.pos.x
    );
    let platform_x = state.platforms[0].rect.pos.x;
    assert!((100.0..=150.0).contains(&platform_x));
}

#[test]
fn health_and_mana_stay_clamped_under_arbitrary_input() {
    let mut level = flat_level();
    level.enemies = vec![common::enforcer_at(1, 300.0)];
    let mut state = fresh_state(&level);

    let scripts = [
        held(FrameInput::RIGHT | FrameInput::JUMP),
        held(FrameInput::ATTACK),
        held(FrameInput::DASH),
        held(FrameInput::CHARGE),
        held(FrameInput::THROW),
        held(FrameInput::LEFT),
        FrameInput::new(),
    ];

    for tick in 0..400 {
        sim::tick(&mut state, scripts[tick % scripts.len()]);
        let p = &state.player;
        assert!(p.health >= 0.0 && p.health <= p.max_health);
        assert!(p.mana >= 0.0 && p.mana <= p.max_mana);
    }
}
