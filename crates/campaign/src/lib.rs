//! Built-in campaign: ten levels with a smoothed difficulty curve,
//! ending in the boss arena. Level layouts are constructed in code and
//! validated through [`LevelCatalog`] at build time.

use glam::Vec2;

use silvervein_core::entities::{Archetype, Axis, PowerUp, PowerUpKind};
use silvervein_core::level::{
    EnemySpawn, Hazard, HazardKind, LevelCatalog, LevelData, OscillationSpec, PlatformSpec,
};
use silvervein_core::physics::Rect;

const ENFORCER_SIZE: Vec2 = Vec2::new(32.0, 48.0);
const SEEKER_SIZE: Vec2 = Vec2::new(40.0, 40.0);
const GARGOYLE_SIZE: Vec2 = Vec2::new(32.0, 40.0);
const SPECTER_SIZE: Vec2 = Vec2::new(32.0, 48.0);
const BOSS_SIZE: Vec2 = Vec2::new(80.0, 96.0);
const PICKUP_SIZE: f32 = 24.0;

fn platform(x: f32, y: f32, w: f32, h: f32) -> PlatformSpec {
    PlatformSpec {
        rect: Rect::new(x, y, w, h),
        motion: None,
    }
}

fn moving(x: f32, y: f32, w: f32, h: f32, axis: Axis, speed: f32, range: f32) -> PlatformSpec {
    PlatformSpec {
        rect: Rect::new(x, y, w, h),
        motion: Some(OscillationSpec { axis, speed, range }),
    }
}

fn enforcer(id: u32, x: f32, y: f32, speed: f32, direction: f32, origin: f32, range: f32) -> EnemySpawn {
    EnemySpawn {
        id,
        pos: Vec2::new(x, y),
        size: ENFORCER_SIZE,
        health: 30.0,
        speed,
        direction,
        archetype: Archetype::Enforcer,
        patrol_origin: origin,
        patrol_range: range,
    }
}

fn seeker(id: u32, x: f32, y: f32, speed: f32, direction: f32, origin: f32, range: f32) -> EnemySpawn {
    EnemySpawn {
        id,
        pos: Vec2::new(x, y),
        size: SEEKER_SIZE,
        health: 50.0,
        speed,
        direction,
        archetype: Archetype::Seeker,
        patrol_origin: origin,
        patrol_range: range,
    }
}

fn gargoyle(id: u32, x: f32, y: f32) -> EnemySpawn {
    EnemySpawn {
        id,
        pos: Vec2::new(x, y),
        size: GARGOYLE_SIZE,
        health: 40.0,
        speed: 0.0,
        direction: 1.0,
        archetype: Archetype::Gargoyle,
        patrol_origin: x,
        patrol_range: 0.0,
    }
}

fn specter(id: u32, x: f32, y: f32) -> EnemySpawn {
    EnemySpawn {
        id,
        pos: Vec2::new(x, y),
        size: SPECTER_SIZE,
        health: 60.0,
        speed: 0.0,
        direction: 1.0,
        archetype: Archetype::Specter,
        patrol_origin: x,
        patrol_range: 0.0,
    }
}

fn pickup(id: u32, x: f32, y: f32, kind: PowerUpKind) -> PowerUp {
    PowerUp {
        id,
        rect: Rect::new(x, y, PICKUP_SIZE, PICKUP_SIZE),
        kind,
    }
}

fn spikes(x: f32, y: f32, w: f32, h: f32) -> Hazard {
    Hazard {
        rect: Rect::new(x, y, w, h),
        kind: HazardKind::Spikes,
    }
}

/// The validated ten-level catalog.
pub fn campaign() -> LevelCatalog {
    LevelCatalog::new(levels()).expect("campaign data is valid")
}

/// The raw level records, in play order.
pub fn levels() -> Vec<LevelData> {
    vec![
        // Level 1: The Escape
        LevelData {
            world_width: 3000.0,
            world_height: 600.0,
            player_start: Vec2::new(100.0, 400.0),
            goal: Rect::new(2900.0, 300.0, 60.0, 100.0),
            platforms: vec![
                platform(0.0, 550.0, 300.0, 50.0),
                platform(350.0, 500.0, 200.0, 50.0),
                platform(600.0, 450.0, 150.0, 50.0),
                platform(800.0, 400.0, 200.0, 50.0),
                platform(1100.0, 500.0, 150.0, 50.0),
                platform(1300.0, 420.0, 200.0, 50.0),
                platform(1600.0, 450.0, 300.0, 50.0),
                platform(1950.0, 400.0, 150.0, 50.0),
                platform(2200.0, 500.0, 250.0, 50.0),
                platform(2500.0, 450.0, 100.0, 30.0),
                platform(2650.0, 400.0, 100.0, 30.0),
                platform(2850.0, 400.0, 150.0, 50.0),
            ],
            enemies: vec![
                enforcer(1, 400.0, 452.0, 1.0, 1.0, 360.0, 120.0),
                enforcer(2, 850.0, 352.0, 1.0, -1.0, 810.0, 120.0),
                enforcer(4, 1400.0, 372.0, 1.0, -1.0, 1310.0, 150.0),
                enforcer(5, 1700.0, 402.0, 1.2, 1.0, 1650.0, 180.0),
                enforcer(101, 2300.0, 452.0, 1.0, 1.0, 2210.0, 220.0),
            ],
            power_ups: vec![pickup(4, 1250.0, 390.0, PowerUpKind::LunarFragment)],
            hazards: vec![],
            boss_reveal: None,
        },
        // Level 2: The Underbelly, with moving platforms
        LevelData {
            world_width: 3500.0,
            world_height: 800.0,
            player_start: Vec2::new(50.0, 100.0),
            goal: Rect::new(3400.0, 650.0, 60.0, 100.0),
            platforms: vec![
                platform(0.0, 200.0, 200.0, 50.0),
                platform(300.0, 300.0, 150.0, 30.0),
                platform(500.0, 400.0, 150.0, 30.0),
                platform(700.0, 500.0, 300.0, 50.0),
                moving(1100.0, 450.0, 100.0, 30.0, Axis::Horizontal, 1.0, 150.0),
                platform(1400.0, 400.0, 100.0, 30.0),
                platform(1600.0, 350.0, 100.0, 30.0),
                moving(1800.0, 450.0, 200.0, 30.0, Axis::Horizontal, 1.5, 200.0),
                platform(2250.0, 550.0, 200.0, 30.0),
                platform(2500.0, 650.0, 150.0, 30.0),
                platform(2800.0, 750.0, 400.0, 50.0),
                platform(3300.0, 650.0, 150.0, 30.0),
                platform(3350.0, 750.0, 200.0, 50.0),
            ],
            enemies: vec![
                enforcer(6, 750.0, 452.0, 1.5, 1.0, 710.0, 250.0),
                enforcer(7, 1850.0, 402.0, 1.0, -1.0, 1810.0, 150.0),
                seeker(8, 550.0, 250.0, 1.5, 1.0, 400.0, 400.0),
                seeker(9, 2000.0, 400.0, 1.0, -1.0, 1900.0, 300.0),
                enforcer(102, 2900.0, 702.0, 1.5, 1.0, 2810.0, 350.0),
            ],
            power_ups: vec![
                pickup(1, 1625.0, 320.0, PowerUpKind::LunarFragment),
                pickup(7, 1900.0, 420.0, PowerUpKind::HealthVial),
            ],
            hazards: vec![
                spikes(2800.0, 740.0, 400.0, 10.0),
                spikes(1400.0, 390.0, 100.0, 10.0),
            ],
            boss_reveal: None,
        },
        // Level 3: The Ruined Spire
        LevelData {
            world_width: 4000.0,
            world_height: 800.0,
            player_start: Vec2::new(100.0, 650.0),
            goal: Rect::new(3850.0, 150.0, 60.0, 100.0),
            platforms: vec![
                platform(0.0, 750.0, 900.0, 50.0),
                platform(1000.0, 750.0, 1500.0, 50.0),
                platform(750.0, 650.0, 100.0, 30.0),
                platform(600.0, 550.0, 100.0, 30.0),
                platform(750.0, 450.0, 100.0, 30.0),
                platform(900.0, 350.0, 400.0, 40.0),
                platform(1400.0, 350.0, 1100.0, 40.0),
                platform(2600.0, 350.0, 1300.0, 40.0),
                platform(2800.0, 250.0, 150.0, 30.0),
                platform(3050.0, 250.0, 150.0, 30.0),
                platform(3400.0, 250.0, 300.0, 30.0),
                platform(3800.0, 250.0, 200.0, 100.0),
            ],
            enemies: vec![
                enforcer(16, 500.0, 702.0, 1.0, 1.0, 400.0, 400.0),
                enforcer(17, 1300.0, 702.0, 1.5, -1.0, 1100.0, 500.0),
                seeker(18, 650.0, 350.0, 1.5, 1.0, 500.0, 400.0),
                enforcer(19, 1500.0, 302.0, 1.0, 1.0, 1450.0, 300.0),
                enforcer(20, 2200.0, 302.0, 2.0, -1.0, 2000.0, 300.0),
                enforcer(103, 2700.0, 302.0, 1.0, 1.0, 2650.0, 400.0),
                seeker(104, 3500.0, 200.0, 1.2, 1.0, 3410.0, 250.0),
            ],
            power_ups: vec![
                pickup(6, 2400.0, 320.0, PowerUpKind::IsoldeAid),
                pickup(8, 790.0, 420.0, PowerUpKind::HealthVial),
                pickup(10, 1000.0, 320.0, PowerUpKind::LunarFragment),
            ],
            hazards: vec![
                spikes(900.0, 740.0, 100.0, 10.0),
                spikes(1400.0, 340.0, 1100.0, 10.0),
                spikes(2800.0, 240.0, 150.0, 10.0),
            ],
            boss_reveal: None,
        },
        // Level 4: Sanctuary Siege
        LevelData {
            world_width: 4500.0,
            world_height: 600.0,
            player_start: Vec2::new(100.0, 450.0),
            goal: Rect::new(4400.0, 450.0, 60.0, 100.0),
            platforms: vec![
                platform(0.0, 550.0, 800.0, 50.0),
                platform(900.0, 500.0, 300.0, 50.0),
                platform(1300.0, 450.0, 300.0, 50.0),
                platform(1700.0, 500.0, 300.0, 50.0),
                platform(2100.0, 400.0, 150.0, 30.0),
                platform(2300.0, 450.0, 150.0, 30.0),
                platform(2500.0, 500.0, 150.0, 30.0),
                platform(2800.0, 550.0, 500.0, 50.0),
                moving(3300.0, 500.0, 80.0, 30.0, Axis::Vertical, 1.0, 150.0),
                platform(3400.0, 500.0, 400.0, 50.0),
                platform(3900.0, 450.0, 150.0, 30.0),
                platform(4100.0, 400.0, 150.0, 30.0),
                platform(4350.0, 550.0, 200.0, 50.0),
            ],
            enemies: vec![
                enforcer(10, 500.0, 502.0, 2.0, 1.0, 400.0, 300.0),
                enforcer(11, 600.0, 502.0, 2.0, -1.0, 400.0, 300.0),
                enforcer(12, 1400.0, 402.0, 1.2, 1.0, 1310.0, 250.0),
                seeker(13, 1800.0, 350.0, 2.8, -1.0, 1700.0, 300.0),
                seeker(14, 2600.0, 350.0, 1.5, 1.0, 2300.0, 400.0),
                enforcer(105, 3000.0, 502.0, 1.5, 1.0, 2850.0, 400.0),
                enforcer(106, 3200.0, 502.0, 1.5, -1.0, 2850.0, 400.0),
                seeker(107, 3600.0, 350.0, 2.0, -1.0, 3450.0, 300.0),
            ],
            power_ups: vec![
                pickup(2, 1050.0, 470.0, PowerUpKind::IsoldeAid),
                pickup(5, 2700.0, 470.0, PowerUpKind::LunarFragment),
                pickup(9, 2200.0, 370.0, PowerUpKind::HealthVial),
            ],
            hazards: vec![spikes(800.0, 540.0, 100.0, 10.0)],
            boss_reveal: None,
        },
        // Level 5: The Grand Library
        LevelData {
            world_width: 3000.0,
            world_height: 900.0,
            player_start: Vec2::new(100.0, 750.0),
            goal: Rect::new(2800.0, 100.0, 60.0, 100.0),
            platforms: vec![
                platform(0.0, 850.0, 500.0, 50.0),
                platform(300.0, 700.0, 40.0, 150.0), // bookshelf
                platform(400.0, 600.0, 150.0, 30.0),
                platform(600.0, 750.0, 40.0, 100.0), // bookshelf
                moving(650.0, 800.0, 80.0, 30.0, Axis::Vertical, 1.5, 220.0),
                platform(700.0, 850.0, 600.0, 50.0),
                platform(1000.0, 700.0, 150.0, 30.0),
                platform(1200.0, 600.0, 150.0, 30.0),
                platform(1400.0, 500.0, 800.0, 50.0), // mid-floor
                platform(1500.0, 350.0, 150.0, 30.0),
                platform(1750.0, 300.0, 150.0, 30.0),
                platform(2000.0, 250.0, 150.0, 30.0),
                platform(2300.0, 200.0, 500.0, 50.0), // top floor
                platform(2750.0, 200.0, 200.0, 150.0),
            ],
            enemies: vec![
                enforcer(201, 800.0, 802.0, 1.0, 1.0, 710.0, 550.0),
                gargoyle(205, 1250.0, 400.0),
                enforcer(202, 1500.0, 452.0, 1.0, 1.0, 1410.0, 750.0),
                seeker(203, 1800.0, 200.0, 1.5, 1.0, 1600.0, 400.0),
                EnemySpawn {
                    health: 60.0,
                    ..enforcer(204, 2400.0, 152.0, 2.5, -1.0, 2310.0, 450.0)
                },
            ],
            power_ups: vec![
                pickup(20, 1250.0, 570.0, PowerUpKind::HealthVial),
                pickup(21, 1450.0, 470.0, PowerUpKind::LunarFragment),
            ],
            hazards: vec![spikes(1600.0, 490.0, 400.0, 10.0)],
            boss_reveal: None,
        },
        // Level 6: The Corrupted Aqueducts
        LevelData {
            world_width: 4000.0,
            world_height: 700.0,
            player_start: Vec2::new(50.0, 100.0),
            goal: Rect::new(3850.0, 50.0, 60.0, 100.0),
            platforms: vec![
                platform(0.0, 200.0, 300.0, 30.0),
                platform(450.0, 250.0, 200.0, 30.0),
                platform(800.0, 300.0, 400.0, 30.0),
                platform(1350.0, 350.0, 100.0, 30.0),
                platform(1550.0, 350.0, 100.0, 30.0),
                platform(1750.0, 350.0, 100.0, 30.0),
                platform(2000.0, 300.0, 500.0, 30.0),
                platform(2650.0, 250.0, 200.0, 30.0),
                platform(3000.0, 200.0, 200.0, 30.0),
                platform(3350.0, 150.0, 550.0, 30.0),
            ],
            enemies: vec![
                seeker(301, 900.0, 150.0, 1.8, 1.0, 810.0, 350.0),
                specter(306, 1450.0, 200.0),
                seeker(302, 1600.0, 200.0, 2.0, -1.0, 1400.0, 400.0),
                enforcer(303, 2200.0, 252.0, 1.5, 1.0, 2010.0, 450.0),
                seeker(304, 3100.0, 50.0, 2.2, -1.0, 3010.0, 150.0),
                enforcer(305, 3500.0, 102.0, 2.0, 1.0, 3360.0, 400.0),
            ],
            power_ups: vec![
                pickup(30, 2300.0, 270.0, PowerUpKind::IsoldeAid),
                pickup(31, 1650.0, 320.0, PowerUpKind::HealthVial),
            ],
            hazards: vec![spikes(800.0, 690.0, 3000.0, 10.0)],
            boss_reveal: None,
        },
        // Level 7: The Gilded Prison, with moving platforms
        LevelData {
            world_width: 4500.0,
            world_height: 1000.0,
            player_start: Vec2::new(100.0, 850.0),
            goal: Rect::new(4300.0, 100.0, 60.0, 100.0),
            platforms: vec![
                // Floors, bottom to top
                platform(0.0, 950.0, 1500.0, 50.0),
                platform(500.0, 650.0, 2000.0, 50.0),
                platform(1000.0, 350.0, 1000.0, 50.0),
                platform(2500.0, 350.0, 1900.0, 50.0),
                // Connecting platforms
                platform(1400.0, 850.0, 100.0, 30.0),
                platform(1200.0, 750.0, 100.0, 30.0),
                moving(1800.0, 600.0, 100.0, 30.0, Axis::Vertical, 2.0, 220.0),
                moving(2400.0, 550.0, 100.0, 30.0, Axis::Horizontal, 2.0, 300.0),
                platform(2200.0, 250.0, 100.0, 30.0),
                platform(2000.0, 200.0, 100.0, 30.0),
                platform(4250.0, 350.0, 200.0, 150.0),
            ],
            enemies: vec![
                enforcer(401, 700.0, 902.0, 1.2, 1.0, 510.0, 950.0),
                gargoyle(407, 1100.0, 310.0),
                enforcer(402, 900.0, 902.0, 1.2, -1.0, 510.0, 950.0),
                enforcer(403, 600.0, 602.0, 1.5, 1.0, 510.0, 1950.0),
                enforcer(404, 1800.0, 602.0, 1.5, -1.0, 510.0, 1950.0),
                enforcer(405, 2800.0, 302.0, 2.0, 1.0, 2510.0, 1800.0),
                seeker(406, 3500.0, 150.0, 2.0, 1.0, 3000.0, 1000.0),
            ],
            power_ups: vec![
                pickup(40, 2000.0, 620.0, PowerUpKind::LunarFragment),
                pickup(41, 1500.0, 620.0, PowerUpKind::HealthVial),
            ],
            hazards: vec![
                spikes(100.0, 940.0, 300.0, 10.0),
                spikes(500.0, 640.0, 100.0, 10.0),
                spikes(2000.0, 340.0, 500.0, 10.0),
            ],
            boss_reveal: None,
        },
        // Level 8: The Skybridge
        LevelData {
            world_width: 5000.0,
            world_height: 600.0,
            player_start: Vec2::new(100.0, 450.0),
            goal: Rect::new(4900.0, 450.0, 60.0, 100.0),
            platforms: vec![
                platform(0.0, 550.0, 200.0, 50.0),
                moving(220.0, 550.0, 100.0, 30.0, Axis::Horizontal, 1.5, 80.0),
                platform(400.0, 550.0, 500.0, 50.0),
                platform(1100.0, 550.0, 400.0, 50.0),
                platform(1700.0, 500.0, 100.0, 30.0),
                platform(1900.0, 450.0, 100.0, 30.0),
                platform(2100.0, 400.0, 100.0, 30.0),
                platform(2400.0, 400.0, 800.0, 50.0),
                platform(3400.0, 450.0, 100.0, 30.0),
                platform(3600.0, 500.0, 100.0, 30.0),
                platform(3800.0, 550.0, 1200.0, 50.0),
            ],
            enemies: vec![
                enforcer(501, 600.0, 502.0, 1.5, 1.0, 410.0, 480.0),
                seeker(502, 1200.0, 400.0, 2.0, 1.0, 1110.0, 380.0),
                enforcer(503, 2500.0, 352.0, 2.0, 1.0, 2410.0, 780.0),
                specter(507, 2800.0, 250.0),
                enforcer(504, 3000.0, 352.0, 2.0, -1.0, 2410.0, 780.0),
                seeker(505, 3900.0, 400.0, 2.5, 1.0, 3810.0, 1100.0),
                seeker(506, 4500.0, 400.0, 2.5, -1.0, 3810.0, 1100.0),
            ],
            power_ups: vec![
                pickup(50, 2800.0, 370.0, PowerUpKind::LunarFragment),
                pickup(51, 1950.0, 420.0, PowerUpKind::HealthVial),
            ],
            hazards: vec![
                spikes(200.0, 590.0, 200.0, 10.0),
                spikes(900.0, 590.0, 200.0, 10.0),
                spikes(1500.0, 590.0, 200.0, 10.0),
            ],
            boss_reveal: None,
        },
        // Level 9: The Outer Citadel
        LevelData {
            world_width: 6000.0,
            world_height: 700.0,
            player_start: Vec2::new(100.0, 550.0),
            goal: Rect::new(5850.0, 550.0, 60.0, 100.0),
            platforms: vec![
                platform(0.0, 650.0, 1000.0, 50.0),
                platform(1200.0, 600.0, 500.0, 50.0),
                platform(1900.0, 650.0, 1500.0, 50.0),
                platform(2200.0, 550.0, 100.0, 30.0),
                platform(2400.0, 500.0, 100.0, 30.0),
                platform(2600.0, 450.0, 400.0, 40.0),
                platform(3600.0, 650.0, 2400.0, 50.0),
                platform(4000.0, 550.0, 300.0, 30.0),
                platform(4500.0, 550.0, 300.0, 30.0),
                platform(5000.0, 550.0, 300.0, 30.0),
            ],
            enemies: vec![
                enforcer(601, 800.0, 602.0, 2.0, 1.0, 10.0, 980.0),
                gargoyle(609, 1800.0, 500.0),
                enforcer(602, 1400.0, 552.0, 1.5, 1.0, 1210.0, 480.0),
                seeker(603, 2000.0, 500.0, 2.2, -1.0, 1910.0, 1480.0),
                enforcer(604, 2800.0, 402.0, 2.0, 1.0, 2610.0, 380.0),
                enforcer(605, 3800.0, 602.0, 2.0, 1.0, 3610.0, 2300.0),
                enforcer(606, 4200.0, 502.0, 2.5, -1.0, 4010.0, 280.0),
                enforcer(607, 4600.0, 502.0, 2.5, 1.0, 4510.0, 280.0),
                seeker(608, 5200.0, 400.0, 3.0, -1.0, 5010.0, 700.0),
            ],
            power_ups: vec![
                pickup(60, 2700.0, 420.0, PowerUpKind::LunarFragment),
                pickup(61, 4150.0, 520.0, PowerUpKind::IsoldeAid),
                pickup(62, 3050.0, 620.0, PowerUpKind::HealthVial),
            ],
            hazards: vec![],
            boss_reveal: None,
        },
        // Level 10: The Citadel's Throne. The exit portal starts far
        // off-screen and only appears once the boss falls.
        LevelData {
            world_width: 1600.0,
            world_height: 600.0,
            player_start: Vec2::new(80.0, 450.0),
            goal: Rect::new(-1000.0, 400.0, 60.0, 100.0),
            platforms: vec![
                platform(0.0, 550.0, 1600.0, 50.0),
                platform(200.0, 450.0, 200.0, 30.0),
                platform(1200.0, 450.0, 200.0, 30.0),
            ],
            enemies: vec![EnemySpawn {
                id: 15,
                pos: Vec2::new(800.0, 454.0),
                size: BOSS_SIZE,
                health: 800.0,
                speed: 0.6,
                direction: -1.0,
                archetype: Archetype::Boss,
                patrol_origin: 100.0,
                patrol_range: 1400.0,
            }],
            power_ups: vec![
                pickup(3, 788.0, 300.0, PowerUpKind::LunarFragment),
                pickup(11, 1250.0, 420.0, PowerUpKind::HealthVial),
            ],
            hazards: vec![],
            boss_reveal: Some(Rect::new(1480.0, 450.0, 60.0, 100.0)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campaign_has_ten_levels() {
        assert_eq!(campaign().len(), 10);
    }

    #[test]
    fn only_the_final_level_has_a_boss() {
        let levels = levels();
        for (index, level) in levels.iter().enumerate() {
            assert_eq!(level.has_boss(), index == levels.len() - 1);
        }
    }

    #[test]
    fn final_level_gates_the_goal_behind_the_boss() {
        let levels = levels();
        let last = levels.last().unwrap();
        assert!(last.boss_reveal.is_some());
        // The portal starts unreachable, outside the playable area.
        assert!(last.goal.right() < 0.0);
        // The reveal rectangle is inside the world.
        let reveal = last.boss_reveal.unwrap();
        assert!(reveal.left() >= 0.0 && reveal.right() <= last.world_width);
    }

    #[test]
    fn earlier_levels_keep_their_goal_reachable() {
        for level in levels().iter().take(9) {
            assert!(level.goal.left() >= 0.0);
            assert!(level.goal.right() <= level.world_width);
            assert!(level.boss_reveal.is_none());
        }
    }

    #[test]
    fn moving_platforms_present() {
        let count: usize = levels()
            .iter()
            .flat_map(|l| &l.platforms)
            .filter(|p| p.motion.is_some())
            .count();
        assert!(count >= 7);
    }

    #[test]
    fn every_archetype_appears_in_the_campaign() {
        let levels = levels();
        for archetype in [
            Archetype::Enforcer,
            Archetype::Seeker,
            Archetype::Gargoyle,
            Archetype::Specter,
            Archetype::Boss,
        ] {
            assert!(
                levels
                    .iter()
                    .flat_map(|l| &l.enemies)
                    .any(|e| e.archetype == archetype),
                "missing {archetype:?}"
            );
        }
    }
}
