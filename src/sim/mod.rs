//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Seeded RNG only
//! - Stable iteration order (enemies by index)
//! - No rendering or platform dependencies

pub mod arena;
pub mod autopilot;
pub mod enemy;
pub mod food;
pub mod input;
pub mod player;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod trail;
pub mod vector;

pub use arena::ArenaBounds;
pub use enemy::{Enemy, EnemyPool};
pub use food::{FoodCycle, FoodOutcome};
pub use input::{InputSource, Joystick, TickInput};
pub use player::PlayerAgent;
pub use snapshot::{FoodView, SessionSnapshot};
pub use state::{
    EXPLOSION_NOT_STARTED, GameEvent, GamePhase, GameSession, MAX_PENDING_EVENTS, Position,
};
pub use tick::tick;
pub use trail::{TrailBuffer, TrailMode};
pub use vector::VecExt;
