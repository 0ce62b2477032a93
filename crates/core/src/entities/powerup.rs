//! Power-up pickups.

use serde::{Deserialize, Serialize};

use crate::physics::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Grants the werewolf transformation for a fixed duration.
    LunarFragment,
    /// Arms the delayed ally-assist strike.
    IsoldeAid,
    /// Heals a fixed amount, up to the health cap.
    HealthVial,
}

/// A pickup placed in the level. Consumed at most once, on first overlap
/// with the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub rect: Rect,
    pub kind: PowerUpKind,
}

impl PowerUp {
    /// Health restored by a vial.
    pub const VIAL_HEAL: f32 = 25.0;
}
