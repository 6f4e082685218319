//! Game session state and core simulation types
//!
//! A `GameSession` owns every entity and the RNG. It is mutated only by the
//! tick pass and by the host-facing methods below (resize, restart).

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::ArenaBounds;
use super::enemy::EnemyPool;
use super::food::FoodCycle;
use super::player::PlayerAgent;
use super::trail::TrailBuffer;
use crate::consts::*;

/// Explosion radius before the dying sequence has begun
pub const EXPLOSION_NOT_STARTED: f32 = -1.0;

/// Fade values this close to zero count as fully faded
const FADE_EPSILON: f32 = 1e-4;

/// Undrained events kept before the oldest are dropped
pub const MAX_PENDING_EVENTS: usize = 256;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a usable arena before spawning
    #[default]
    Ready,
    /// Active gameplay
    Playing,
    /// Player was hit; the explosion is expanding
    Dying,
    /// Run ended, waiting for a restart tap
    GameOver,
}

/// A moving point: player, enemy, or trail/explosion sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub coords: Vec2,
    /// Facing angle (radians)
    pub angle: f32,
    pub velocity: Vec2,
    /// 1 = fresh, 0 = gone
    pub fade: f32,
}

impl Position {
    /// Fully faded sample at a pose
    pub fn faded(coords: Vec2, angle: f32) -> Self {
        Self {
            coords,
            angle,
            velocity: Vec2::ZERO,
            fade: 0.0,
        }
    }

    /// Lower the fade by `step`, bottoming out at exactly 0
    pub fn fade_by(&mut self, step: f32) {
        self.fade -= step;
        if self.fade < FADE_EPSILON {
            self.fade = 0.0;
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.fade > 0.0
    }
}

/// Something the host may want to react to (sound, HUD flash)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Enemies and food spawned, play begins
    Started,
    FoodEaten { points: u64 },
    FoodExpired,
    /// Enemy with this index reached the player
    PlayerHit { enemy: usize },
    GameOver { score: u64 },
    Restarted,
    ArenaResized,
}

/// Complete state of one play session (deterministic, serializable).
///
/// The RNG is stored with its full stream position, so a deserialized
/// session continues exactly where the saved one left off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Seed the RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    /// Simulation tick counter (advances only while the arena is usable)
    pub time_ticks: u64,
    pub bounds: ArenaBounds,
    pub player: PlayerAgent,
    pub enemies: EnemyPool,
    pub food: FoodCycle,
    pub trail: TrailBuffer,
    /// Enemy that ended the run
    pub death_enemy: Option<usize>,
    /// Where the player was hit
    pub death_coords: Vec2,
    /// Burst radius; `EXPLOSION_NOT_STARTED` outside the dying sequence
    pub explosion_radius: f32,
    /// Host-facing queue, drained by `take_events` or `snapshot` and capped at
    /// `MAX_PENDING_EVENTS`
    events: Vec<GameEvent>,
}

impl GameSession {
    /// New session waiting for an arena size
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Ready,
            score: 0,
            time_ticks: 0,
            bounds: ArenaBounds::default(),
            player: PlayerAgent::default(),
            enemies: EnemyPool::default(),
            food: FoodCycle::default(),
            trail: TrailBuffer::default(),
            death_enemy: None,
            death_coords: Vec2::ZERO,
            explosion_radius: EXPLOSION_NOT_STARTED,
            events: Vec::new(),
        }
    }

    /// The host reported a viewport size.
    ///
    /// A changed size recomputes the bounds and puts the player back at the
    /// arena center. Enemies caught outside a shrunk arena are pulled back in.
    pub fn resize(&mut self, width: f32, height: f32) {
        let bounds = ArenaBounds::from_viewport(width, height);
        if bounds == self.bounds {
            return;
        }
        log::debug!(
            "Arena resized to {}x{} (half extents {:.1}, {:.1})",
            width,
            height,
            bounds.half_width,
            bounds.half_height
        );
        self.bounds = bounds;
        self.player.recenter();
        for enemy in &mut self.enemies.enemies {
            enemy.coords = bounds.clamp(enemy.coords);
        }
        self.push_event(GameEvent::ArenaResized);
    }

    /// Spawn enemies, food and a clean trail, then start playing.
    ///
    /// Only valid from `Ready` with a usable arena; returns whether play began.
    pub fn begin(&mut self) -> bool {
        if self.phase != GamePhase::Ready || !self.bounds.is_ready() {
            return false;
        }

        let player = self.player.coords;
        self.enemies
            .spawn(&mut self.rng, &self.bounds, player, ENEMY_COUNT);
        self.food = FoodCycle::spawn(&mut self.rng, &self.bounds, player, self.time_ticks);
        self.trail.reset(player, self.player.angle);
        self.phase = GamePhase::Playing;
        self.push_event(GameEvent::Started);

        log::info!(
            "Session started: {} enemies, food at ({:.0}, {:.0})",
            self.enemies.len(),
            self.food.coords.x,
            self.food.coords.y
        );
        true
    }

    /// Enemy `index` reached the player
    pub fn enter_dying(&mut self, index: usize) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::Dying;
        self.death_enemy = Some(index);
        self.death_coords = self.player.coords;
        self.trail.start_radiating(self.death_coords);
        self.push_event(GameEvent::PlayerHit { enemy: index });
        log::info!("Player hit by enemy {} at score {}", index, self.score);
    }

    /// One tick of the dying sequence: grow the burst and rewrite the trail.
    ///
    /// The first tick only starts the burst at radius 0. Once the radius
    /// reaches half the arena diagonal the run is over.
    pub fn advance_explosion(&mut self) {
        if self.phase != GamePhase::Dying {
            return;
        }

        if self.explosion_radius < 0.0 {
            self.explosion_radius = 0.0;
        } else {
            let limit = self.bounds.explosion_limit();
            if self.explosion_radius < limit {
                self.explosion_radius += EXPLOSION_STEP;
            }
            if self.explosion_radius >= limit {
                self.phase = GamePhase::GameOver;
                self.push_event(GameEvent::GameOver { score: self.score });
                log::info!("Game over, final score {}", self.score);
            }
        }

        self.trail.radiate(&mut self.rng, self.explosion_radius);
    }

    /// Restart tap. Ignored unless the run is over.
    pub fn restart(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            return false;
        }

        self.score = 0;
        self.death_enemy = None;
        self.explosion_radius = EXPLOSION_NOT_STARTED;
        self.phase = GamePhase::Ready;
        self.push_event(GameEvent::Restarted);
        log::info!("Restarting session");

        self.begin();
        true
    }

    /// Queue an event for the host, dropping the oldest once the queue is full
    pub(crate) fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            let excess = self.events.len() + 1 - MAX_PENDING_EVENTS;
            self.events.drain(..excess);
            log::debug!("Event queue full, dropped {} oldest event(s)", excess);
        }
        self.events.push(event);
    }

    /// Events queued since the last drain
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events queued since the last drain, without draining
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }
}
