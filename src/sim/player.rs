//! The player's jet

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, TAU};

use super::arena::ArenaBounds;
use crate::consts::PLAYER_SPEED;
use crate::normalize_angle;

/// The controllable agent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerAgent {
    pub coords: Vec2,
    /// Facing angle (radians, 0 = nose up). Unwrapped; only meaningful mod 2π.
    pub angle: f32,
    /// Offset applied on the latest tick
    pub input_velocity: Vec2,
}

impl PlayerAgent {
    /// Integrate one tick of joystick input.
    ///
    /// Each axis moves only if the result stays strictly inside the arena, so
    /// the jet slides along a wall instead of stopping dead.
    pub fn update(&mut self, offset: Vec2, bounds: &ArenaBounds) {
        self.input_velocity = offset;
        if offset == Vec2::ZERO {
            return;
        }

        let candidate = self.coords + offset * PLAYER_SPEED;
        if candidate.x.abs() < bounds.half_width {
            self.coords.x = candidate.x;
        }
        if candidate.y.abs() < bounds.half_height {
            self.coords.y = candidate.y;
        }

        self.turn_toward(offset);
    }

    /// Snap the nose along the shortest arc toward the stick direction
    fn turn_toward(&mut self, offset: Vec2) {
        let target = offset.y.atan2(offset.x) + FRAC_PI_2;
        let delta = normalize_angle(target - self.angle % TAU);
        self.angle += delta;
    }

    /// Whether the stick was deflected on the latest tick
    #[inline]
    pub fn is_thrusting(&self) -> bool {
        self.input_velocity.length() > 0.0
    }

    /// Put the jet back at the arena center (viewport resize)
    pub fn recenter(&mut self) {
        self.coords = Vec2::ZERO;
    }
}
