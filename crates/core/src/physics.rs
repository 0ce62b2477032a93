//! Physics primitives for the simulation.
//!
//! Axis-aligned rectangles with discrete per-tick integration. Velocities
//! are in pixels per tick; gravity and friction match the original tuning
//! at a nominal 60 ticks per second.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::entities::Platform;

/// Downward acceleration applied every airborne tick.
pub const GRAVITY: f32 = 0.8;

/// Horizontal velocity multiplier applied when no movement input is held.
pub const FRICTION: f32 = 0.8;

/// An entity lands only if its lower edge is within this band below a
/// platform's top edge. Keeps fast falls from snapping up through thick
/// platforms entered from the side.
pub const LANDING_BAND: f32 = 20.0;

/// Axis-aligned rectangle. The y axis points down (screen coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict-inequality overlap test: rectangles that merely touch along
    /// an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// A copy grown by `margin` on every side.
    pub fn expanded(&self, margin: f32) -> Rect {
        Rect {
            pos: self.pos - Vec2::splat(margin),
            size: self.size + Vec2::splat(2.0 * margin),
        }
    }

    /// A copy shrunk horizontally by `inset` on both sides.
    pub fn inset_x(&self, inset: f32) -> Rect {
        Rect {
            pos: Vec2::new(self.pos.x + inset, self.pos.y),
            size: Vec2::new((self.size.x - 2.0 * inset).max(0.0), self.size.y),
        }
    }
}

/// Linear interpolation.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Accumulate gravity into a vertical velocity.
#[inline]
pub fn apply_gravity(vel_y: &mut f32) {
    *vel_y += GRAVITY;
}

/// Resolve a falling body against the platform list.
///
/// Both the player and ground-bound enemies share this: the body is
/// considered landed if it is falling, horizontally overlaps a platform,
/// and its lower edge is within [`LANDING_BAND`] of the platform's top.
/// Landing snaps the body onto the surface and zeroes its vertical
/// velocity. Landing on an oscillating platform also applies that
/// platform's motion delta from this tick so the body rides along.
///
/// Returns the carried delta (zero when standing on static ground).
pub fn land_on_platforms(
    body: &mut Rect,
    vel_y: &mut f32,
    on_ground: &mut bool,
    platforms: &[Platform],
) -> Vec2 {
    *on_ground = false;
    let mut carried = Vec2::ZERO;

    for platform in platforms {
        if *vel_y >= 0.0
            && body.overlaps(&platform.rect)
            && body.bottom() < platform.rect.top() + LANDING_BAND
        {
            body.pos.y = platform.rect.top() - body.size.y;
            *vel_y = 0.0;
            *on_ground = true;
            if let Some(motion) = &platform.motion {
                body.pos += motion.last_delta;
                carried = motion.last_delta;
            }
        }
    }

    carried
}
