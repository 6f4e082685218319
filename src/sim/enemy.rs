//! Roaming enemies
//!
//! Enemies drift along slowly curving paths, bounce off the arena walls and
//! end the run on contact with the player. Enemy-enemy contact is not modeled.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::arena::{ArenaBounds, spawn_clearance};
use super::vector::VecExt;
use crate::consts::*;

/// A single hostile agent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub coords: Vec2,
    pub velocity: Vec2,
}

impl Enemy {
    /// Spawn at a random heading, clear of the player
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: &ArenaBounds, player: Vec2) -> Self {
        let velocity = Vec2::new(ENEMY_SPEED, 0.0).jittered(rng, TAU);
        Self {
            coords: bounds.spawn_point(rng, player, spawn_clearance()),
            velocity,
        }
    }

    /// Move one tick, curving slightly and bouncing off the walls
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: &ArenaBounds) {
        self.coords += self.velocity;
        self.velocity = self.velocity.rotated_by(ENEMY_DRIFT);

        if self.coords.x.abs() > bounds.half_width {
            self.velocity.x = -self.velocity.x;
            if exceeds_ratio(self.velocity.x, self.velocity.y) {
                self.velocity = self.velocity.jittered(rng, ENEMY_SPEED_RND);
            }
        }
        if self.coords.y.abs() > bounds.half_height {
            self.velocity.y = -self.velocity.y;
            if exceeds_ratio(self.velocity.y, self.velocity.x) {
                self.velocity = self.velocity.jittered(rng, ENEMY_SPEED_RND);
            }
        }

        self.coords = bounds.clamp(self.coords);
    }

    /// Radial contact test against the player
    #[inline]
    pub fn touches(&self, player: Vec2) -> bool {
        self.coords.distance(player) < 2.0 * OBJECT_RADIUS
    }
}

/// |num / den| > BOUNCE_RATIO, with a zero denominator counting as below
#[inline]
fn exceeds_ratio(num: f32, den: f32) -> bool {
    den != 0.0 && (num / den).abs() > BOUNCE_RATIO
}

/// Fixed-size, ordered set of enemies for one session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyPool {
    pub enemies: Vec<Enemy>,
}

impl EnemyPool {
    /// Replace the pool with `count` fresh enemies
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        bounds: &ArenaBounds,
        player: Vec2,
        count: usize,
    ) {
        self.enemies.clear();
        self.enemies
            .extend((0..count).map(|_| Enemy::spawn(rng, bounds, player)));
    }

    /// Advance every enemy in index order.
    ///
    /// Returns the index of the first enemy that reached the player; enemies
    /// after it are not moved this tick.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        bounds: &ArenaBounds,
        player: Vec2,
    ) -> Option<usize> {
        for (index, enemy) in self.enemies.iter_mut().enumerate() {
            enemy.advance(rng, bounds);
            if enemy.touches(player) {
                return Some(index);
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Enemy> {
        self.enemies.get(index)
    }
}
