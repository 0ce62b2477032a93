//! Two sessions fed identical seeds and inputs must stay identical.

mod common;

use common::{flat_level, fresh_state, held};

use glam::Vec2;
use silvervein_core::entities::Archetype;
use silvervein_core::level::EnemySpawn;
use silvervein_core::{sim, FrameInput};

#[test]
fn simulation_determinism() {
    let mut level = flat_level();
    level.enemies = vec![
        common::enforcer_at(1, 500.0),
        EnemySpawn {
            id: 2,
            pos: Vec2::new(700.0, 300.0),
            size: Vec2::new(40.0, 40.0),
            health: 50.0,
            speed: 1.5,
            direction: -1.0,
            archetype: Archetype::Seeker,
            patrol_origin: 600.0,
            patrol_range: 300.0,
        },
        EnemySpawn {
            id: 3,
            pos: Vec2::new(900.0, 404.0),
            size: Vec2::new(80.0, 96.0),
            health: 800.0,
            speed: 0.6,
            direction: -1.0,
            archetype: Archetype::Boss,
            patrol_origin: 100.0,
            patrol_range: 1400.0,
        },
    ];

    let mut a = fresh_state(&level);
    let mut b = fresh_state(&level);

    let scripts = [
        held(FrameInput::RIGHT),
        held(FrameInput::RIGHT | FrameInput::JUMP),
        held(FrameInput::ATTACK),
        held(FrameInput::THROW),
        FrameInput::new(),
        held(FrameInput::DASH),
    ];

    for tick in 0..1000 {
        let input = scripts[tick % scripts.len()];
        sim::tick(&mut a, input);
        sim::tick(&mut b, input);
    }

    assert_eq!(a.frame, b.frame);
    assert_eq!(a.score, b.score);
    assert_eq!(a.player.pos, b.player.pos);
    assert_eq!(a.player.health, b.player.health);
    assert_eq!(a.player.mana, b.player.mana);
    assert_eq!(a.enemies.len(), b.enemies.len());
    for (ea, eb) in a.enemies.iter().zip(b.enemies.iter()) {
        assert_eq!(ea.pos, eb.pos);
        assert_eq!(ea.health, eb.health);
    }
    assert_eq!(a.projectiles.len(), b.projectiles.len());
}
