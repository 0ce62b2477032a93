//! Session state-machine scenarios: status transitions, pause, death and
//! restart with preserved progression, victory and upgrades.

mod common;

use common::{enforcer_at, flat_level, held};

use silvervein_core::level::LevelCatalog;
use silvervein_core::physics::Rect;
use silvervein_core::{FrameInput, GameEvent, GameSession, GameStatus, MusicRole, UpgradeStat};

fn session_with(levels: Vec<silvervein_core::LevelData>) -> GameSession {
    GameSession::new(LevelCatalog::new(levels).unwrap(), 42)
}

#[test]
fn status_flow_from_title_to_playing() {
    let mut session = session_with(vec![flat_level(), flat_level()]);
    assert_eq!(session.status(), GameStatus::Title);
    assert!(session.state().is_none());

    session.start();
    assert_eq!(session.status(), GameStatus::Intro);
    assert!(session.state().is_some());

    session.begin_level();
    assert_eq!(session.status(), GameStatus::Playing);
    assert!(session
        .drain_events()
        .contains(&GameEvent::MusicChange(MusicRole::Stage)));
}

#[test]
fn pause_toggles_and_freezes_the_simulation() {
    let mut session = session_with(vec![flat_level()]);
    session.start();
    session.begin_level();

    session.tick(FrameInput::new());
    let frame = session.state().unwrap().frame;

    // Pause edge.
    session.tick(held(FrameInput::PAUSE));
    assert_eq!(session.status(), GameStatus::Paused);

    // Held key is not a new edge; nothing simulates while paused.
    session.tick(held(FrameInput::PAUSE));
    assert_eq!(session.status(), GameStatus::Paused);
    session.tick(FrameInput::new());
    assert_eq!(session.state().unwrap().frame, frame);

    // Fresh press resumes.
    session.tick(held(FrameInput::PAUSE));
    assert_eq!(session.status(), GameStatus::Playing);
    session.tick(FrameInput::new());
    assert_eq!(session.state().unwrap().frame, frame + 1);
}

#[test]
fn mute_key_toggles_on_edges() {
    let mut session = session_with(vec![flat_level()]);
    session.start();
    session.begin_level();

    assert!(!session.is_muted());
    session.tick(held(FrameInput::MUTE));
    assert!(session.is_muted());
    session.tick(held(FrameInput::MUTE)); // still held: no new edge
    assert!(session.is_muted());
    session.tick(FrameInput::new());
    session.tick(held(FrameInput::MUTE));
    assert!(!session.is_muted());
}

#[test]
fn death_with_lives_left_restarts_preserving_progression() {
    // Short floor: the player can walk off the right edge to their death.
    let mut level = flat_level();
    level.platforms[0].rect = Rect::new(0.0, 500.0, 400.0, 100.0);
    level.enemies = vec![enforcer_at(1, 160.5)];

    let mut session = session_with(vec![level.clone(), level]);
    session.start();
    session.begin_level();

    // Earn experience with a melee kill.
    for _ in 0..40 {
        session.tick(held(FrameInput::ATTACK));
    }
    assert_eq!(session.progression().experience, 100);
    assert!(session.state().unwrap().enemies.is_empty());

    // Walk off the ledge and fall to a death.
    for _ in 0..300 {
        session.tick(held(FrameInput::RIGHT));
        if session.drain_events().contains(&GameEvent::PlayerDied) {
            break;
        }
    }

    // The level was rebuilt fresh with progression intact.
    assert_eq!(session.status(), GameStatus::Playing);
    let hud = session.hud().unwrap();
    assert_eq!(hud.lives, 2, "exactly one life spent");
    assert_eq!(hud.experience, 100, "experience survives the restart");
    assert_eq!(hud.score, 0, "score is per-attempt");
    let state = session.state().unwrap();
    assert_eq!(state.enemies.len(), 1, "enemy layout restored");
    assert_eq!(state.player.pos.x, 100.0, "back at the spawn point");
}

#[test]
fn running_out_of_lives_is_game_over() {
    let mut level = flat_level();
    level.platforms.clear(); // instant fall

    let mut session = session_with(vec![level]);
    session.start();
    session.begin_level();

    for _ in 0..1000 {
        session.tick(FrameInput::new());
        if session.status() == GameStatus::GameOver {
            break;
        }
    }

    assert_eq!(session.status(), GameStatus::GameOver);
    assert!(session.state().is_none());
    assert_eq!(session.progression().lives, 0);
    assert!(session.drain_events().contains(&GameEvent::GameOver));

    // A new run resets progression.
    session.start();
    assert_eq!(session.status(), GameStatus::Intro);
    assert_eq!(session.progression().lives, 3);
}

#[test]
fn victory_leads_through_upgrades_to_the_next_level() {
    // Goal right on top of the spawn: victory on the first tick.
    let mut level = flat_level();
    level.goal = Rect::new(90.0, 400.0, 60.0, 110.0);

    let mut session = session_with(vec![level.clone(), level]);
    session.start();
    session.begin_level();
    session.tick(FrameInput::new());
    assert_eq!(session.status(), GameStatus::Victory);

    session.advance();
    assert_eq!(session.status(), GameStatus::Upgrade);

    // Not enough experience: the purchase silently no-ops.
    assert!(!session.purchase(UpgradeStat::MaxHealth));

    session.finish_upgrades();
    assert_eq!(session.status(), GameStatus::Intro);
    assert_eq!(session.level_index(), 1);

    // Clearing the final level returns to the title.
    session.begin_level();
    session.tick(FrameInput::new());
    assert_eq!(session.status(), GameStatus::Victory);
    session.advance();
    assert_eq!(session.status(), GameStatus::Title);
}

#[test]
fn purchases_only_apply_in_the_upgrade_screen() {
    let mut session = session_with(vec![flat_level()]);
    session.start();
    session.begin_level();
    assert!(!session.purchase(UpgradeStat::MaxMana));
}
