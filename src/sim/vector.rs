//! Vector helpers on top of `glam::Vec2`
//!
//! glam already covers add/sub/scale/length. The game additionally needs
//! rotation by an angle, magnitude clamping and random heading jitter.

use glam::Vec2;
use rand::Rng;

/// Extra operations the simulation performs on 2D vectors
pub trait VecExt: Sized {
    /// Rotate counter-clockwise by `angle` radians
    fn rotated_by(self, angle: f32) -> Self;

    /// Scale down to `max` length if longer; otherwise unchanged
    fn clamped_to(self, max: f32) -> Self;

    /// Rotate by an angle drawn uniformly from [-max_angle, max_angle]
    fn jittered<R: Rng + ?Sized>(self, rng: &mut R, max_angle: f32) -> Self;
}

impl VecExt for Vec2 {
    #[inline]
    fn rotated_by(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    #[inline]
    fn clamped_to(self, max: f32) -> Self {
        self.clamp_length_max(max.max(0.0))
    }

    fn jittered<R: Rng + ?Sized>(self, rng: &mut R, max_angle: f32) -> Self {
        let max_angle = max_angle.abs();
        self.rotated_by(rng.random_range(-max_angle..=max_angle))
    }
}

/// Independent uniform offset in [-amplitude, amplitude] on each axis
pub fn uniform_offset<R: Rng + ?Sized>(rng: &mut R, amplitude: f32) -> Vec2 {
    let amplitude = amplitude.abs();
    Vec2::new(
        rng.random_range(-amplitude..=amplitude),
        rng.random_range(-amplitude..=amplitude),
    )
}
