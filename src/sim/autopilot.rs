//! Idle/demo mode steering
//!
//! Heads for the food and shies away from nearby enemies. Good enough to keep
//! a headless run alive for a while; not meant to be unbeatable.

use glam::Vec2;

use super::state::GameSession;
use super::vector::VecExt;
use crate::consts::*;

/// Joystick offset the autopilot would hold this tick
pub fn steer(session: &GameSession) -> Vec2 {
    let player = session.player.coords;
    let mut desired = (session.food.coords - player).normalize_or_zero();

    for enemy in &session.enemies.enemies {
        let away = player - enemy.coords;
        let dist = away.length();
        if dist > 0.0 && dist < AUTOPILOT_AVOID_RADIUS {
            // Stronger the closer it gets; dominates the food pull up close
            let weight = (AUTOPILOT_AVOID_RADIUS - dist) / (dist - OBJECT_RADIUS).max(1.0);
            desired += away / dist * weight;
        }
    }

    // Stay off the walls where the jet gets pinned
    let margin = 2.0 * OBJECT_RADIUS;
    let extent = session.bounds.extent();
    if player.x.abs() > extent.x - margin {
        desired.x -= player.x.signum();
    }
    if player.y.abs() > extent.y - margin {
        desired.y -= player.y.signum();
    }

    (desired.normalize_or_zero() * JOYSTICK_RADIUS).clamped_to(JOYSTICK_RADIUS)
}
