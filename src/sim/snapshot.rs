//! Immutable per-tick view of a session for renderers and the HUD

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::ArenaBounds;
use super::state::{GameEvent, GamePhase, GameSession, Position};
use super::trail::TrailMode;

/// Food as drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodView {
    pub coords: Vec2,
    pub angle: f32,
    pub size: f32,
    /// Fraction of the countdown used up (0..1)
    pub urgency: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub arena: ArenaBounds,
    pub player: Position,
    /// Live enemies; the one that hit the player is left out
    pub enemies: Vec<Position>,
    pub food: FoodView,
    pub trail: Vec<Position>,
    pub trail_mode: TrailMode,
    pub explosion_radius: f32,
    pub death_coords: Option<Vec2>,
    pub events: Vec<GameEvent>,
}

impl GameSession {
    /// Build a snapshot and drain pending events into it
    pub fn snapshot(&mut self) -> SessionSnapshot {
        let events = self.take_events();

        let enemies = self
            .enemies
            .enemies
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != self.death_enemy)
            .map(|(_, e)| Position {
                coords: e.coords,
                angle: e.velocity.y.atan2(e.velocity.x),
                velocity: e.velocity,
                fade: 1.0,
            })
            .collect();

        SessionSnapshot {
            time_ticks: self.time_ticks,
            phase: self.phase,
            score: self.score,
            arena: self.bounds,
            player: Position {
                coords: self.player.coords,
                angle: self.player.angle,
                velocity: self.player.input_velocity,
                fade: if self.death_enemy.is_some() { 0.0 } else { 1.0 },
            },
            enemies,
            food: FoodView {
                coords: self.food.coords,
                angle: self.food.angle,
                size: self.food.size,
                urgency: self.food.urgency(self.time_ticks).min(1.0),
            },
            trail: self.trail.samples().to_vec(),
            trail_mode: self.trail.mode(),
            explosion_radius: self.explosion_radius,
            death_coords: self.death_enemy.map(|_| self.death_coords),
            events,
        }
    }
}
