//! The timed pickup
//!
//! One piece of food is on the field at a time. Eating it scores more the
//! longer it has been waiting; if nobody eats it within `FOOD_TIME_TICKS` it
//! jumps somewhere else for free. As the deadline nears it spins faster and
//! shrinks.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::arena::{ArenaBounds, spawn_clearance};
use crate::consts::*;

/// What happened to the food on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodOutcome {
    Eaten { points: u64 },
    Expired,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCycle {
    pub coords: Vec2,
    pub angle: f32,
    pub angular_speed: f32,
    pub size: f32,
    /// Tick of the latest spawn
    pub spawn_tick: u64,
    /// Set on respawn; the next update grows the food back in
    pub just_spawned: bool,
}

impl Default for FoodCycle {
    fn default() -> Self {
        Self {
            coords: Vec2::ZERO,
            angle: 0.0,
            angular_speed: FOOD_ANGLE_SPEED_DEFAULT,
            size: 0.0,
            spawn_tick: 0,
            just_spawned: false,
        }
    }
}

impl FoodCycle {
    /// Fresh food for a new session
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: &ArenaBounds, player: Vec2, now: u64) -> Self {
        Self {
            coords: bounds.spawn_point(rng, player, spawn_clearance()),
            angular_speed: FOOD_ANGLE_SPEED_DEFAULT * FOOD_START_SPIN,
            spawn_tick: now,
            just_spawned: true,
            ..Default::default()
        }
    }

    /// Ticks since the latest spawn
    #[inline]
    pub fn elapsed(&self, now: u64) -> u64 {
        now.saturating_sub(self.spawn_tick)
    }

    /// Fraction of the countdown used up
    #[inline]
    pub fn urgency(&self, now: u64) -> f32 {
        self.elapsed(now) as f32 / FOOD_TIME_TICKS as f32
    }

    /// Axis-aligned overlap test (a box, unlike the radial enemy test)
    #[inline]
    pub fn is_reached_by(&self, player: Vec2) -> bool {
        (player.x - self.coords.x).abs() < OBJECT_RADIUS
            && (player.y - self.coords.y).abs() < OBJECT_RADIUS
    }

    /// Points for eating it now: the percentage of the countdown elapsed
    #[inline]
    pub fn points(&self, now: u64) -> u64 {
        self.elapsed(now) * FOOD_MAX_POINTS / FOOD_TIME_TICKS
    }

    fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: &ArenaBounds, player: Vec2, now: u64) {
        self.coords = bounds.spawn_point(rng, player, spawn_clearance());
        self.spawn_tick = now;
        self.angular_speed *= FOOD_RESPAWN_SPIN;
        self.size = 0.0;
        self.just_spawned = true;
    }

    /// Advance one tick
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        bounds: &ArenaBounds,
        player: Vec2,
        now: u64,
    ) -> Option<FoodOutcome> {
        let mut outcome = None;

        if self.is_reached_by(player) {
            let points = self.points(now);
            self.respawn(rng, bounds, player, now);
            outcome = Some(FoodOutcome::Eaten { points });
        }

        if self.just_spawned {
            self.just_spawned = false;
            self.size = OBJECT_RADIUS;
        }

        if self.urgency(now) > FOOD_URGENCY {
            self.angular_speed *= FOOD_SPIN_GROWTH;
            self.size *= FOOD_SHRINK;
        } else if self.angular_speed > FOOD_ANGLE_SPEED_DEFAULT {
            self.angular_speed /= FOOD_SPIN_GROWTH;
        }

        if self.elapsed(now) > FOOD_TIME_TICKS {
            self.respawn(rng, bounds, player, now);
            outcome = Some(FoodOutcome::Expired);
        }

        self.angle += self.angular_speed;
        if self.angle > TAU {
            self.angle = 0.0;
        }

        outcome
    }
}
