//! Platforms, static and oscillating.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::physics::Rect;

/// Axis an oscillating platform travels along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Oscillation state for a dynamic platform. Position along the axis
/// never leaves `[origin, origin + range]`; the direction sign flips and
/// the position clamps exactly at either bound.
#[derive(Debug, Clone)]
pub struct Motion {
    pub axis: Axis,
    pub speed: f32,
    pub range: f32,
    pub origin: f32,
    pub direction: f32,
    /// Movement applied this tick, so landed entities can ride along.
    pub last_delta: Vec2,
}

/// A platform entity. Static platforms have no motion descriptor.
#[derive(Debug, Clone)]
pub struct Platform {
    pub rect: Rect,
    pub motion: Option<Motion>,
}

impl Platform {
    pub fn fixed(rect: Rect) -> Self {
        Self { rect, motion: None }
    }

    pub fn oscillating(rect: Rect, axis: Axis, speed: f32, range: f32) -> Self {
        let origin = match axis {
            Axis::Horizontal => rect.pos.x,
            Axis::Vertical => rect.pos.y,
        };
        Self {
            rect,
            motion: Some(Motion {
                axis,
                speed,
                range,
                origin,
                direction: 1.0,
                last_delta: Vec2::ZERO,
            }),
        }
    }

    /// Advance the oscillation by one tick. No-op for static platforms.
    pub fn advance(&mut self) {
        let Some(motion) = &mut self.motion else {
            return;
        };

        let along = match motion.axis {
            Axis::Horizontal => &mut self.rect.pos.x,
            Axis::Vertical => &mut self.rect.pos.y,
        };
        let before = *along;

        let mut next = *along + motion.speed * motion.direction;
        if next > motion.origin + motion.range {
            next = motion.origin + motion.range;
            motion.direction = -1.0;
        } else if next < motion.origin {
            next = motion.origin;
            motion.direction = 1.0;
        }
        *along = next;

        motion.last_delta = match motion.axis {
            Axis::Horizontal => Vec2::new(next - before, 0.0),
            Axis::Vertical => Vec2::new(0.0, next - before),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oscillation_stays_in_bounds() {
        let mut platform =
            Platform::oscillating(Rect::new(100.0, 50.0, 80.0, 30.0), Axis::Horizontal, 3.0, 20.0);

        for _ in 0..1000 {
            platform.advance();
            let x = platform.rect.pos.x;
            assert!((100.0..=120.0).contains(&x), "x left the band: {x}");
        }
    }

    #[test]
    fn direction_flips_exactly_at_bound() {
        // Speed does not divide the range evenly; position must clamp at
        // the bound with no overshoot carried into the next tick.
        let mut platform =
            Platform::oscillating(Rect::new(0.0, 0.0, 80.0, 30.0), Axis::Vertical, 7.0, 10.0);

        platform.advance(); // 7
        assert_eq!(platform.rect.pos.y, 7.0);
        platform.advance(); // clamps at 10, flips
        assert_eq!(platform.rect.pos.y, 10.0);
        assert_eq!(platform.motion.as_ref().unwrap().direction, -1.0);
        platform.advance(); // 3
        assert_eq!(platform.rect.pos.y, 3.0);
        platform.advance(); // clamps at 0, flips back
        assert_eq!(platform.rect.pos.y, 0.0);
        assert_eq!(platform.motion.as_ref().unwrap().direction, 1.0);
    }

    #[test]
    fn static_platform_never_moves() {
        let mut platform = Platform::fixed(Rect::new(5.0, 5.0, 10.0, 10.0));
        for _ in 0..10 {
            platform.advance();
        }
        assert_eq!(platform.rect.pos, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn delta_matches_actual_movement() {
        let mut platform =
            Platform::oscillating(Rect::new(0.0, 0.0, 80.0, 30.0), Axis::Horizontal, 4.0, 6.0);

        platform.advance();
        assert_eq!(platform.motion.as_ref().unwrap().last_delta, Vec2::new(4.0, 0.0));
        platform.advance(); // clamped: only 2 remaining to the bound
        assert_eq!(platform.motion.as_ref().unwrap().last_delta, Vec2::new(2.0, 0.0));
    }
}
