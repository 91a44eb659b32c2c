//! Deterministic game core
//!
//! All gameplay decisions live here. This module must stay pure:
//! - Fixed timestep only, timers counted in ticks
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, physics or platform dependencies

pub mod difficulty;
pub mod lifecycle;
pub mod overlap;
pub mod pool;
pub mod scheduler;
pub mod scoring;
pub mod spawn;
pub mod state;
pub mod tick;

pub use difficulty::{on_milestone, scaled_speed};
pub use lifecycle::{enter_game_over, enter_running};
pub use overlap::resolve_overlap;
pub use pool::EntityPool;
pub use scheduler::{Scheduler, TickScheduler, TimerAction, TimerId};
pub use scoring::{is_milestone, on_ring_collected};
pub use spawn::spawn_entity;
pub use state::{
    DespawnReason, EntityId, EntityKind, GameEvent, GamePhase, GameSession, Player,
    SpawnedEntity, Viewport, World,
};
pub use tick::{TickInput, fire, tick};
