//! Fire-and-forget event cues.
//!
//! The simulation appends events as side effects of state transitions and
//! the presentation layer drains them once per tick, mapping them to audio
//! cues and one-shot visuals. The core never blocks on or queries the
//! consumer.

/// Which backing track a level plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicRole {
    Stage,
    Boss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jump,
    DoubleJump,
    Dash,
    DaggerAttack,
    ClawAttack,
    DaggerThrow,
    ChargeStart,
    ChargeRelease,
    ParryBlock,
    EnemyHit,
    EnemyShoot,
    EnemyDefeated,
    PlayerHurt,
    PowerUp,
    /// The delayed ally-assist strike landed.
    AssistStrike,
    GoalRevealed,
    GoalReached,
    PlayerDied,
    UpgradePurchased,
    GameOver,
    MusicChange(MusicRole),
}
