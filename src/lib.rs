//! Jet Dodge - a tick-driven arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, enemies, food, trail, session)
//! - `clock`: Fixed-period tick driver
//! - `settings`: Host configuration

pub mod clock;
pub mod settings;
pub mod sim;

pub use clock::SimulationClock;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick period (5 ms, 200 Hz)
    pub const TICK_PERIOD: f32 = 0.005;
    /// Maximum ticks per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 16;
    /// Largest frame delta the clock will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Radius shared by the player, enemies and food
    pub const OBJECT_RADIUS: f32 = 30.0;
    /// Spawns must be at least this many object radii from the player
    pub const SPAWN_CLEARANCE: f32 = 5.0;
    /// Retry budget for spawn rejection sampling
    pub const MAX_SPAWN_ATTEMPTS: u32 = 256;

    /// Joystick radius; input offsets never exceed it
    pub const JOYSTICK_RADIUS: f32 = 100.0;
    /// Player displacement per tick per unit of offset
    pub const PLAYER_SPEED: f32 = 0.05;

    pub const ENEMY_COUNT: usize = 3;
    /// Enemy speed (units per tick)
    pub const ENEMY_SPEED: f32 = 1.5;
    /// Max heading perturbation on a wall bounce (radians)
    pub const ENEMY_SPEED_RND: f32 = 0.5;
    /// Heading drift applied every tick (radians)
    pub const ENEMY_DRIFT: f32 = 0.005;
    /// Velocity component ratio above which a bounce gets perturbed
    pub const BOUNCE_RATIO: f32 = 0.2;

    /// Food countdown: 3 s at 200 Hz
    pub const FOOD_TIME_TICKS: u64 = 600;
    /// Resting food spin (radians per tick)
    pub const FOOD_ANGLE_SPEED_DEFAULT: f32 = 0.01;
    /// Spin multiplier applied on session start
    pub const FOOD_START_SPIN: f32 = 10.0;
    /// Spin multiplier applied on respawn
    pub const FOOD_RESPAWN_SPIN: f32 = 50.0;
    /// Countdown fraction after which the food gets urgent
    pub const FOOD_URGENCY: f32 = 0.7;
    pub const FOOD_SPIN_GROWTH: f32 = 1.02;
    pub const FOOD_SHRINK: f32 = 0.999;
    /// Points for eating food the instant its countdown runs out
    pub const FOOD_MAX_POINTS: u64 = 100;

    /// Ticks between trail writes
    pub const TAIL_COUNT: u32 = 5;
    /// Number of trail samples
    pub const TAIL_SIZE: usize = 20;
    /// Fade removed from every sample per trail write cycle
    pub const TAIL_FADE_SPEED: f32 = 0.05;
    /// Positional jitter on trail and explosion samples
    pub const TAIL_FLUCTUATION: f32 = 10.0;

    /// Explosion growth per tick
    pub const EXPLOSION_STEP: f32 = 1.0;
    /// Explosion particle spread relative to the radius
    pub const EXPLOSION_SPREAD: f32 = 5.0;

    /// Enemies closer than this push the autopilot away
    pub const AUTOPILOT_AVOID_RADIUS: f32 = 6.0 * OBJECT_RADIUS;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}
