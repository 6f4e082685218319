//! Arena bounds and spawn placement
//!
//! The arena is a box centered on the origin. Its half extents come from the
//! last viewport size the host reported, shrunk by the object radius so that
//! agents stay fully on screen.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Legal coordinate range for every agent: |x| <= half_width, |y| <= half_height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub half_width: f32,
    pub half_height: f32,
}

impl ArenaBounds {
    pub fn new(half_width: f32, half_height: f32) -> Self {
        Self {
            half_width: half_width.max(0.0),
            half_height: half_height.max(0.0),
        }
    }

    /// Derive bounds from a viewport size (in the same units as the sim)
    pub fn from_viewport(width: f32, height: f32) -> Self {
        Self::new(width / 2.0 - OBJECT_RADIUS, height / 2.0 - OBJECT_RADIUS)
    }

    /// A zero extent on either axis means the host has not laid out yet
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.half_width > 0.0 && self.half_height > 0.0
    }

    /// The half extents as a vector (corner of the arena)
    #[inline]
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.half_width, self.half_height)
    }

    /// Explosion radius at which a dying session ends
    #[inline]
    pub fn explosion_limit(&self) -> f32 {
        self.extent().length() / 2.0
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x.abs() <= self.half_width && p.y.abs() <= self.half_height
    }

    /// Pull a point back inside the arena
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(-self.half_width, self.half_width),
            p.y.clamp(-self.half_height, self.half_height),
        )
    }

    /// Uniformly random point inside the arena
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        Vec2::new(
            rng.random_range(-self.half_width..=self.half_width),
            rng.random_range(-self.half_height..=self.half_height),
        )
    }

    /// Rejection-sample a point at least `clearance` away from `avoid`.
    ///
    /// Gives up after `MAX_SPAWN_ATTEMPTS` draws and returns the farthest
    /// candidate seen, so a tiny arena cannot hang the tick.
    pub fn spawn_point<R: Rng + ?Sized>(&self, rng: &mut R, avoid: Vec2, clearance: f32) -> Vec2 {
        let mut best = self.random_point(rng);
        let mut best_dist = best.distance(avoid);
        let mut attempts = 1;

        while best_dist < clearance && attempts < MAX_SPAWN_ATTEMPTS {
            let candidate = self.random_point(rng);
            let dist = candidate.distance(avoid);
            if dist > best_dist {
                best = candidate;
                best_dist = dist;
            }
            attempts += 1;
        }

        if best_dist < clearance {
            log::warn!(
                "Spawn clearance {:.1} unreachable in {:?}; using best distance {:.1}",
                clearance,
                self,
                best_dist
            );
        }

        best
    }
}

/// Minimum spawn distance from the player for enemies and food
#[inline]
pub fn spawn_clearance() -> f32 {
    SPAWN_CLEARANCE * OBJECT_RADIUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_from_viewport() {
        let bounds = ArenaBounds::from_viewport(800.0, 600.0);
        assert_eq!(bounds.half_width, 370.0);
        assert_eq!(bounds.half_height, 270.0);
        assert!(bounds.is_ready());
    }

    #[test]
    fn test_tiny_viewport_not_ready() {
        assert!(!ArenaBounds::default().is_ready());
        let bounds = ArenaBounds::from_viewport(40.0, 600.0);
        assert_eq!(bounds.half_width, 0.0);
        assert!(!bounds.is_ready());
    }

    #[test]
    fn test_clamp_and_contains() {
        let bounds = ArenaBounds::new(100.0, 50.0);
        let p = bounds.clamp(Vec2::new(140.0, -80.0));
        assert_eq!(p, Vec2::new(100.0, -50.0));
        assert!(bounds.contains(p));
        assert!(!bounds.contains(Vec2::new(100.5, 0.0)));
    }

    #[test]
    fn test_spawn_point_respects_clearance() {
        let mut rng = Pcg32::seed_from_u64(42);
        let bounds = ArenaBounds::new(370.0, 270.0);
        let player = Vec2::new(20.0, -10.0);
        for _ in 0..500 {
            let p = bounds.spawn_point(&mut rng, player, spawn_clearance());
            assert!(p.distance(player) >= spawn_clearance());
            assert!(bounds.contains(p));
        }
    }

    #[test]
    fn test_spawn_point_terminates_in_tiny_arena() {
        let mut rng = Pcg32::seed_from_u64(1);
        let bounds = ArenaBounds::new(5.0, 5.0);
        let p = bounds.spawn_point(&mut rng, Vec2::ZERO, spawn_clearance());
        assert!(bounds.contains(p));
        assert!(p.distance(Vec2::ZERO) < spawn_clearance());
    }
}
