//! Ring Runner - an endless side-scrolling runner
//!
//! Core modules:
//! - `sim`: Deterministic game core (lifecycle, difficulty, scoring, entity pool)
//! - `game`: Owns the world, scheduler and leaderboard; the host-facing driver
//! - `leaderboard`: Top-10 runs persisted to key-value storage
//! - `platform`: Browser/native platform abstraction (storage, input, web bindings)
//! - `tuning`: Data-driven game balance
//! - `ui`: HUD text and button visibility

pub mod game;
pub mod leaderboard;
pub mod platform;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::Game;
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per time unit (one second)
    pub const TICKS_PER_SECOND: u64 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;

    /// World scroll velocity at the start of a run (pixels/s, leftward)
    pub const INITIAL_SPEED: i32 = -150;
    /// Points awarded per ring
    pub const RING_SCORE: u64 = 100;
    /// Every exact multiple of this score raises the difficulty
    pub const MILESTONE_SCORE: u64 = 300;
    /// Factor applied to speed and multiplier on each milestone
    pub const SPEED_GROWTH: f64 = 1.5;

    /// Spawn periods and lifetimes, in time units
    pub const OBSTACLE_SPAWN_SECS: u64 = 2;
    pub const RING_SPAWN_SECS: u64 = 3;
    pub const ENTITY_TTL_SECS: u64 = 10;
    /// Delay between pressing start and the world being built
    pub const START_COUNTDOWN_SECS: u64 = 3;

    /// Jump impulses (negative = up)
    pub const JUMP_VELOCITY: f32 = -700.0;
    pub const DOUBLE_JUMP_VELOCITY: f32 = -500.0;

    /// Horizontal position of the player sprite
    pub const PLAYER_X: f32 = 100.0;
    /// Entities appear this far past the right edge
    pub const SPAWN_OFFSET_X: f32 = 100.0;
    /// Obstacles sit this far above the bottom edge
    pub const OBSTACLE_GROUND_OFFSET: f32 = 100.0;
    /// Ring band, measured up from the bottom edge
    pub const RING_BAND_HIGH: f32 = 350.0;
    pub const RING_BAND_LOW: f32 = 150.0;
    /// Entities this far past the left edge are pruned
    pub const OFFSCREEN_MARGIN: f32 = 200.0;

    /// Background tile offset per tick
    pub const BACKGROUND_SCROLL_PER_TICK: f32 = 2.0;
}
