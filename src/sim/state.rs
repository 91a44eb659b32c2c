//! Game state and core simulation types
//!
//! A run owns exactly one [`World`]: the session counters, the entity pool,
//! the player and the run's RNG. It is built on start and replaced on restart.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::pool::EntityPool;
use crate::tuning::Tuning;

/// Entity identifier, allocated in increasing order per world
pub type EntityId = u32;

/// Current phase of the run lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first start
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Run ended, waiting for restart
    GameOver,
}

/// Score, rings and difficulty for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub score: u64,
    pub ring_count: u32,
    /// World scroll velocity (negative = leftward)
    pub speed: i32,
    /// Cumulative difficulty scalar, never decreases
    pub speed_multiplier: f64,
    pub phase: GamePhase,
}

impl GameSession {
    pub fn new(initial_speed: i32) -> Self {
        Self {
            score: 0,
            ring_count: 0,
            speed: initial_speed,
            speed_multiplier: 1.0,
            phase: GamePhase::Idle,
        }
    }
}

/// Spawned entity types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Obstacle,
    Ring,
}

/// An obstacle or ring scrolling toward the player
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnedEntity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub pos: Vec2,
    pub vel_x: f32,
    pub active: bool,
    /// Scheduler tick at which the safety-net expiry fires
    pub expires_at: u64,
}

/// The player sprite's gameplay state (position and gravity belong to the engine)
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub vel_x: f32,
    pub can_double_jump: bool,
    /// Tinted after hitting an obstacle
    pub damaged: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            vel_x: 0.0,
            can_double_jump: true,
            damaged: false,
        }
    }
}

impl Player {
    /// Resolve a jump press into a vertical impulse, if any.
    ///
    /// Grounded presses jump and re-arm the double jump; an airborne press
    /// while falling uses the double jump once.
    pub fn jump(&mut self, grounded: bool, vel_y: f32, tuning: &Tuning) -> Option<f32> {
        if grounded {
            self.can_double_jump = true;
            Some(tuning.jump_velocity)
        } else if self.can_double_jump && vel_y > 0.0 {
            self.can_double_jump = false;
            Some(tuning.double_jump_velocity)
        } else {
            None
        }
    }
}

/// Visible world size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Side effects for the host engine and UI, emitted in the order they happen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// Start accepted; the world is built after `ticks`
    CountdownStarted { ticks: u64 },
    /// A fresh world is live and running
    RunStarted,
    Spawned {
        id: EntityId,
        kind: EntityKind,
        x: f32,
        y: f32,
        vel_x: f32,
    },
    Despawned { id: EntityId, reason: DespawnReason },
    ScoreChanged { score: u64 },
    RingsChanged { rings: u32 },
    /// Difficulty rose; every live entity now moves at `speed`
    Milestone { speed: i32, speed_multiplier: f64 },
    /// Apply this vertical velocity to the player
    Jumped { vel_y: f32 },
    /// Freeze the player, tint it, pause physics, show the banner
    GameOver {
        score: u64,
        rings: u32,
        speed_multiplier: f64,
    },
    /// Leaderboard written; `rank` is 1-based when the run made the top 10
    LeaderboardSaved { rank: Option<usize> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DespawnReason {
    Collected,
    Expired,
    OffScreen,
}

/// Everything owned by one run
#[derive(Debug, Clone)]
pub struct World {
    pub session: GameSession,
    pub pool: EntityPool,
    pub player: Player,
    pub tuning: Tuning,
    pub viewport: Viewport,
    /// Background tile offset
    pub background_x: f32,
    /// Engine physics step suspended (set on game over)
    pub physics_paused: bool,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Running ticks elapsed
    pub time_ticks: u64,
}

impl World {
    pub fn new(tuning: Tuning, viewport: Viewport, seed: u64) -> Self {
        Self {
            session: GameSession::new(tuning.initial_speed),
            pool: EntityPool::new(),
            player: Player::default(),
            tuning,
            viewport,
            background_x: 0.0,
            physics_paused: false,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn is_running(&self) -> bool {
        self.session.phase == GamePhase::Running
    }
}
