//! Exhaust trail behind the jet, which doubles as the death explosion
//!
//! The buffer is a fixed ring of `TAIL_SIZE` samples. While trailing it is
//! written every `TAIL_COUNT` ticks and every sample fades a step on each
//! write cycle. Once the player is hit it switches to radiating mode and every
//! sample is rewritten each tick as a particle flying out of the impact point.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::player::PlayerAgent;
use super::state::Position;
use super::vector::{VecExt, uniform_offset};
use crate::consts::*;

/// How the buffer generates samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TrailMode {
    /// Decimated exhaust samples behind the player
    Trailing,
    /// Expanding burst around the impact point
    Radiating { origin: Vec2 },
}

/// Fixed-size ring of fading samples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailBuffer {
    samples: Vec<Position>,
    /// Slot written on the latest cycle
    index: usize,
    /// Ticks since the last write cycle
    counter: u32,
    mode: TrailMode,
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 0.0)
    }
}

impl TrailBuffer {
    /// Fully faded buffer parked at the given pose
    pub fn new(coords: Vec2, angle: f32) -> Self {
        Self {
            samples: vec![Position::faded(coords, angle); TAIL_SIZE],
            index: 0,
            counter: 0,
            mode: TrailMode::Trailing,
        }
    }

    /// Back to a fully faded trailing buffer
    pub fn reset(&mut self, coords: Vec2, angle: f32) {
        *self = Self::new(coords, angle);
    }

    pub fn samples(&self) -> &[Position] {
        &self.samples
    }

    pub fn mode(&self) -> TrailMode {
        self.mode
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Per-tick trailing update; a no-op in radiating mode
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, player: &PlayerAgent) {
        if self.mode != TrailMode::Trailing {
            return;
        }

        self.counter += 1;
        if self.counter < TAIL_COUNT {
            return;
        }
        self.counter = 0;

        let fresh = player.is_thrusting().then(|| Position {
            coords: player.coords + uniform_offset(rng, TAIL_FLUCTUATION),
            angle: player.angle,
            velocity: player.input_velocity,
            fade: 1.0,
        });
        self.cycle(fresh);
    }

    /// One write cycle: fade everything, advance the cursor, then write the
    /// new sample (if any) at the cursor
    pub fn cycle(&mut self, fresh: Option<Position>) {
        for sample in &mut self.samples {
            sample.fade_by(TAIL_FADE_SPEED);
        }
        self.index = (self.index + 1) % self.samples.len();
        if let Some(sample) = fresh {
            self.samples[self.index] = sample;
        }
    }

    /// Switch to the explosion burst centered on `origin`
    pub fn start_radiating(&mut self, origin: Vec2) {
        self.mode = TrailMode::Radiating { origin };
    }

    /// Rewrite every sample as a particle `radius` into the burst
    pub fn radiate<R: Rng + ?Sized>(&mut self, rng: &mut R, radius: f32) {
        let TrailMode::Radiating { origin } = self.mode else {
            return;
        };

        let count = self.samples.len() as f32;
        for (i, sample) in self.samples.iter_mut().enumerate() {
            let angle = i as f32 / count * TAU;
            let velocity = Vec2::new(0.0, -radius).rotated_by(angle);
            *sample = Position {
                coords: origin + uniform_offset(rng, TAIL_FLUCTUATION) + velocity * EXPLOSION_SPREAD,
                angle,
                velocity,
                fade: 1.0,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn fresh_sample() -> Position {
        Position {
            coords: Vec2::new(5.0, 5.0),
            angle: 0.0,
            velocity: Vec2::ZERO,
            fade: 1.0,
        }
    }

    #[test]
    fn test_new_buffer_is_faded() {
        let trail = TrailBuffer::new(Vec2::new(1.0, 2.0), 0.5);
        assert_eq!(trail.samples().len(), TAIL_SIZE);
        assert!(trail.samples().iter().all(|s| s.fade == 0.0));
        assert_eq!(trail.mode(), TrailMode::Trailing);
    }

    #[test]
    fn test_sample_expires_after_fade_cycles() {
        let mut trail = TrailBuffer::default();
        trail.cycle(Some(fresh_sample()));
        let slot = trail.index();
        let cycles = (1.0 / TAIL_FADE_SPEED).round() as usize;

        for _ in 0..cycles - 1 {
            trail.cycle(None);
        }
        assert!(trail.samples()[slot].fade > 0.0);

        trail.cycle(None);
        assert!(trail.samples()[slot].fade <= 0.0);
    }

    #[test]
    fn test_fade_is_independent_of_writes() {
        let mut trail = TrailBuffer::default();
        trail.cycle(Some(fresh_sample()));
        let first = trail.index();
        for _ in 0..5 {
            trail.cycle(Some(fresh_sample()));
        }
        let expected = 1.0 - 5.0 * TAIL_FADE_SPEED;
        assert!((trail.samples()[first].fade - expected).abs() < 1e-5);
    }

    #[test]
    fn test_update_is_decimated() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut trail = TrailBuffer::default();
        let player = PlayerAgent {
            coords: Vec2::new(100.0, 50.0),
            angle: 1.0,
            input_velocity: Vec2::new(40.0, 0.0),
        };

        for _ in 0..TAIL_COUNT - 1 {
            trail.update(&mut rng, &player);
        }
        assert_eq!(trail.index(), 0);

        trail.update(&mut rng, &player);
        assert_eq!(trail.index(), 1);
        let sample = trail.samples()[1];
        assert_eq!(sample.fade, 1.0);
        assert_eq!(sample.velocity, player.input_velocity);
        assert_eq!(sample.angle, 1.0);
        assert!((sample.coords - player.coords).abs().max_element() <= TAIL_FLUCTUATION + 1e-3);
    }

    #[test]
    fn test_idle_player_writes_nothing() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut trail = TrailBuffer::default();
        let player = PlayerAgent::default();
        for _ in 0..TAIL_COUNT {
            trail.update(&mut rng, &player);
        }
        assert_eq!(trail.index(), 1);
        assert!(trail.samples().iter().all(|s| s.fade == 0.0));
    }

    #[test]
    fn test_radiating_burst() {
        let mut rng = Pcg32::seed_from_u64(9);
        let origin = Vec2::new(-40.0, 25.0);
        let mut trail = TrailBuffer::default();
        trail.start_radiating(origin);
        trail.radiate(&mut rng, 10.0);

        for (i, sample) in trail.samples().iter().enumerate() {
            assert_eq!(sample.fade, 1.0);
            assert!((sample.velocity.length() - 10.0).abs() < 1e-3);
            let expected = origin + sample.velocity * EXPLOSION_SPREAD;
            assert!((sample.coords - expected).abs().max_element() <= TAIL_FLUCTUATION + 1e-3);
            assert!((sample.angle - i as f32 / TAIL_SIZE as f32 * TAU).abs() < 1e-6);
        }

        // Trailing updates are ignored while radiating
        let before = trail.samples().to_vec();
        let player = PlayerAgent {
            input_velocity: Vec2::new(1.0, 0.0),
            ..Default::default()
        };
        for _ in 0..TAIL_COUNT {
            trail.update(&mut rng, &player);
        }
        assert_eq!(trail.samples(), before.as_slice());
    }

    #[test]
    fn test_radiate_requires_radiating_mode() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut trail = TrailBuffer::default();
        trail.radiate(&mut rng, 10.0);
        assert!(trail.samples().iter().all(|s| s.fade == 0.0));
    }
}
