//! The player entity.

use glam::Vec2;

use crate::physics::Rect;

/// Discrete animation state; exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimState {
    Idle,
    Run,
    Jump,
    Attack,
    ClawAttack,
    Dash,
    Parry,
}

/// Animation tag plus the tick counter driving frame selection.
#[derive(Debug, Clone)]
pub struct Animation {
    pub state: AnimState,
    pub frame_timer: u32,
}

impl Animation {
    pub fn new() -> Self {
        Self {
            state: AnimState::Idle,
            frame_timer: 0,
        }
    }

    /// Switch state, resetting the frame timer on an actual change.
    pub fn set(&mut self, state: AnimState) {
        if self.state != state {
            self.state = state;
            self.frame_timer = 0;
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new()
    }
}

/// Ghost position recorded while dashing, rendered as a fading trail.
#[derive(Debug, Clone, Copy)]
pub struct TrailGhost {
    pub pos: Vec2,
    pub facing: f32,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// +1.0 facing right, -1.0 facing left.
    pub facing: f32,
    pub on_ground: bool,

    pub health: f32,
    pub max_health: f32,
    pub mana: f32,
    pub max_mana: f32,

    pub attacking: bool,
    pub attack_cooldown: u32,
    pub throw_cooldown: u32,
    pub invincibility: u32,

    pub is_werewolf: bool,
    pub werewolf_timer: u32,

    pub charge_timer: u32,

    pub is_dashing: bool,
    pub dash_timer: u32,
    pub dash_cooldown: u32,
    pub dash_trail: Vec<TrailGhost>,

    pub is_parrying: bool,
    pub parry_timer: u32,
    pub parry_cooldown: u32,

    pub can_double_jump: bool,
    /// Previous tick's jump-key state, for double-jump edge detection.
    pub jump_was_held: bool,

    pub animation: Animation,
}

impl Player {
    pub const WIDTH: f32 = 32.0;
    pub const HEIGHT: f32 = 48.0;
    pub const SPEED: f32 = 5.0;
    pub const JUMP_POWER: f32 = 15.0;
    pub const DOUBLE_JUMP_POWER: f32 = 12.0;

    /// Passive mana recovery per tick.
    pub const MANA_REGEN: f32 = 0.05;

    // Dagger melee
    pub const ATTACK_COOLDOWN: u32 = 20;
    pub const DAGGER_HITBOX_REACH: f32 = 30.0;
    /// Dagger attack animation hold, in ticks.
    pub const ATTACK_HOLD: u32 = 15;

    // Claw melee (werewolf)
    pub const CLAW_COOLDOWN: u32 = 15;
    pub const CLAW_HITBOX_REACH: f32 = 45.0;
    pub const CLAW_HOLD: u32 = 12;
    pub const CLAW_LUNGE: f32 = 5.0;

    pub const WEREWOLF_DURATION: u32 = 600; // 10 seconds

    // Dagger throw
    pub const THROW_COST: f32 = 10.0;
    pub const THROW_COOLDOWN: u32 = 30;

    // Charged attack
    pub const CHARGE_MIN_TIME: u32 = 20;
    pub const CHARGE_MAX_TIME: u32 = 120;
    pub const CHARGE_COST_MIN: f32 = 15.0;
    pub const CHARGE_COST_MAX: f32 = 40.0;
    pub const CHARGE_DAMAGE_MIN: f32 = 20.0;
    pub const CHARGE_DAMAGE_MAX: f32 = 70.0;
    pub const CHARGE_RADIUS_MIN: f32 = 50.0;
    pub const CHARGE_RADIUS_MAX: f32 = 150.0;

    // Dash
    pub const DASH_DURATION: u32 = 10;
    pub const DASH_SPEED: f32 = 18.0;
    pub const DASH_COOLDOWN: u32 = 45;
    pub const DASH_COST: f32 = 8.0;
    /// A bit longer than the dash itself.
    pub const DASH_INVINCIBILITY: u32 = 12;
    pub const DASH_TRAIL_LEN: usize = 5;

    // Parry
    pub const PARRY_DURATION: u32 = 20;
    pub const PARRY_COOLDOWN: u32 = 60;
    pub const PARRY_BLOCK_INVINCIBILITY: u32 = 30;

    /// Invincibility window after eating an enemy projectile.
    pub const PROJECTILE_HIT_INVINCIBILITY: u32 = 30;

    pub fn spawn(pos: Vec2, max_health: f32, max_mana: f32) -> Self {
        Self {
            pos,
            size: Vec2::new(Self::WIDTH, Self::HEIGHT),
            vel: Vec2::ZERO,
            facing: 1.0,
            on_ground: false,
            health: max_health,
            max_health,
            mana: max_mana,
            max_mana,
            attacking: false,
            attack_cooldown: 0,
            throw_cooldown: 0,
            invincibility: 0,
            is_werewolf: false,
            werewolf_timer: 0,
            charge_timer: 0,
            is_dashing: false,
            dash_timer: 0,
            dash_cooldown: 0,
            dash_trail: Vec::new(),
            is_parrying: false,
            parry_timer: 0,
            parry_cooldown: 0,
            can_double_jump: false,
            jump_was_held: false,
            animation: Animation::new(),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Apply damage, clamped at zero.
    pub fn take_damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
    }

    /// Heal up to the cap.
    pub fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    /// Spend mana if enough is available. Returns false (and spends
    /// nothing) otherwise.
    pub fn spend_mana(&mut self, amount: f32) -> bool {
        if self.mana >= amount {
            self.mana -= amount;
            true
        } else {
            false
        }
    }

    pub fn regen_mana(&mut self) {
        self.mana = (self.mana + Self::MANA_REGEN).min(self.max_mana);
    }

    /// Fraction of a full charge, 0.0 at the minimum hold and 1.0 at the
    /// cap. Only meaningful once the minimum threshold is reached.
    pub fn charge_fraction(&self) -> f32 {
        let held = self.charge_timer.clamp(Self::CHARGE_MIN_TIME, Self::CHARGE_MAX_TIME);
        (held - Self::CHARGE_MIN_TIME) as f32
            / (Self::CHARGE_MAX_TIME - Self::CHARGE_MIN_TIME) as f32
    }

    /// The active melee hitbox, offset in front of the facing direction.
    /// Claw swipes are wider and cover the full body height; the dagger
    /// covers the middle half.
    pub fn melee_hitbox(&self) -> Rect {
        if self.is_werewolf {
            let x = if self.facing >= 0.0 {
                self.pos.x + self.size.x
            } else {
                self.pos.x - Self::CLAW_HITBOX_REACH
            };
            Rect::new(x, self.pos.y, Self::CLAW_HITBOX_REACH, self.size.y)
        } else {
            let x = if self.facing >= 0.0 {
                self.pos.x + self.size.x
            } else {
                self.pos.x - Self::DAGGER_HITBOX_REACH
            };
            Rect::new(
                x,
                self.pos.y + self.size.y / 4.0,
                Self::DAGGER_HITBOX_REACH,
                self.size.y / 2.0,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resources_stay_clamped() {
        let mut player = Player::spawn(Vec2::ZERO, 100.0, 80.0);

        player.take_damage(250.0);
        assert_eq!(player.health, 0.0);
        player.heal(9999.0);
        assert_eq!(player.health, 100.0);

        assert!(player.spend_mana(80.0));
        assert!(!player.spend_mana(0.1));
        assert_eq!(player.mana, 0.0);
        for _ in 0..10_000 {
            player.regen_mana();
        }
        assert_eq!(player.mana, 80.0);
    }

    #[test]
    fn charge_fraction_endpoints() {
        let mut player = Player::spawn(Vec2::ZERO, 100.0, 80.0);
        player.charge_timer = Player::CHARGE_MIN_TIME;
        assert_eq!(player.charge_fraction(), 0.0);
        player.charge_timer = Player::CHARGE_MAX_TIME;
        assert_eq!(player.charge_fraction(), 1.0);
    }

    #[test]
    fn melee_hitbox_faces_forward() {
        let mut player = Player::spawn(Vec2::new(100.0, 100.0), 100.0, 80.0);

        let right = player.melee_hitbox();
        assert_eq!(right.left(), 100.0 + Player::WIDTH);

        player.facing = -1.0;
        let left = player.melee_hitbox();
        assert_eq!(left.right(), 100.0);

        player.is_werewolf = true;
        let claw = player.melee_hitbox();
        assert_eq!(claw.size.x, Player::CLAW_HITBOX_REACH);
        assert_eq!(claw.size.y, Player::HEIGHT);
    }
}
