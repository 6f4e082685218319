//! Player input: the joystick collaborator and the per-tick command record

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vector::VecExt;
use crate::consts::JOYSTICK_RADIUS;

/// Anything that can report a joystick-style offset
pub trait InputSource {
    /// Current offset (magnitude <= the source's radius) and whether it is held
    fn sample(&self) -> (Vec2, bool);
}

/// Virtual drag joystick.
///
/// The drag translation is clamped to `max_radius`; releasing snaps the
/// offset back to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Joystick {
    pub max_radius: f32,
    offset: Vec2,
    active: bool,
}

impl Default for Joystick {
    fn default() -> Self {
        Self::new(JOYSTICK_RADIUS)
    }
}

impl Joystick {
    pub fn new(max_radius: f32) -> Self {
        Self {
            max_radius,
            offset: Vec2::ZERO,
            active: false,
        }
    }

    /// Drag moved: `translation` is relative to where the touch started
    pub fn drag(&mut self, translation: Vec2) {
        self.active = true;
        self.offset = translation.clamped_to(self.max_radius);
    }

    /// Touch lifted
    pub fn release(&mut self) {
        self.active = false;
        self.offset = Vec2::ZERO;
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl InputSource for Joystick {
    fn sample(&self) -> (Vec2, bool) {
        (self.offset, self.active)
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Joystick offset
    pub offset: Vec2,
    /// Whether the joystick is held
    pub active: bool,
    /// Restart after game over (tap)
    pub restart: bool,
    /// Idle/demo mode - autopilot steers
    pub idle_mode: bool,
}

impl TickInput {
    /// Build from the latest value an input source published
    pub fn from_source<S: InputSource + ?Sized>(source: &S) -> Self {
        let (offset, active) = source.sample();
        Self {
            offset,
            active,
            ..Default::default()
        }
    }

    /// Steering offset the player should follow this tick
    pub fn effective_offset(&self) -> Vec2 {
        if self.active {
            self.offset.clamped_to(JOYSTICK_RADIUS)
        } else {
            Vec2::ZERO
        }
    }
}
