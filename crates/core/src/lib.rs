//! Veins of Silver — deterministic game-simulation core.
//!
//! This crate contains the complete fixed-timestep simulation for a
//! side-scrolling action-platformer: the player controller, enemy AI,
//! projectile and collision resolution, and the level/session state
//! machine. Rendering, audio playback and asset loading live outside; the
//! core exposes a read-only state snapshot, a HUD snapshot and a drained
//! event buffer instead.
//!
//! # Determinism rules
//!
//! 1. No wall clock — every timer is a tick counter (60 ticks/sec nominal)
//! 2. No `rand::thread_rng()` — [`SeededRandom`] lives inside the state
//! 3. `Vec` storage, ordered iteration — no hashmaps in the hot path
//! 4. One synchronous `tick` per frame; no partial-tick visibility

pub mod entities;
pub mod events;
pub mod input;
pub mod level;
pub mod physics;
pub mod progression;
pub mod random;
pub mod session;
pub mod sim;
pub mod state;

pub use events::{GameEvent, MusicRole};
pub use input::FrameInput;
pub use level::{LevelCatalog, LevelData, LevelError};
pub use physics::Rect;
pub use progression::{Progression, UpgradeLevels, UpgradeStat};
pub use random::SeededRandom;
pub use session::{GameSession, GameStatus, HudSnapshot};
pub use sim::TickOutcome;
pub use state::SessionState;
