//! Fixed timestep simulation tick
//!
//! One step resolves the engine's overlap reports first, then runs per-frame
//! logic. Timer actions are dispatched separately through [`fire`].

use super::overlap::resolve_overlap;
use super::scheduler::{Scheduler, TimerAction};
use super::spawn::spawn_entity;
use super::state::{DespawnReason, EntityId, EntityKind, GameEvent, World};
use crate::consts::OFFSCREEN_MARGIN;

/// Engine readings and player input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Logical jump action (any mapped key held)
    pub jump: bool,
    /// Player is standing on the ground
    pub grounded: bool,
    /// Player vertical velocity (positive = falling)
    pub vel_y: f32,
    /// Entities overlapping the player this tick, from the engine's collision pass
    pub overlaps: Vec<EntityId>,
}

/// Advance the world by one fixed timestep
pub fn tick(world: &mut World, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    for &id in &input.overlaps {
        events.extend(resolve_overlap(world, id));
    }

    if !world.is_running() {
        return events;
    }

    world.time_ticks += 1;
    world.background_x += world.tuning.background_scroll_per_tick;

    if input.jump {
        if let Some(vel_y) = world.player.jump(input.grounded, input.vel_y, &world.tuning) {
            events.push(GameEvent::Jumped { vel_y });
        }
    }

    world.pool.advance(dt);
    for id in world.pool.prune_offscreen(-OFFSCREEN_MARGIN) {
        events.push(GameEvent::Despawned {
            id,
            reason: DespawnReason::OffScreen,
        });
    }

    events
}

/// Dispatch a due timer action against the world.
///
/// Spawns and expiries are no-ops unless the world is running; an expiry for
/// an entity that is already gone does nothing.
pub fn fire(world: &mut World, action: TimerAction, scheduler: &mut impl Scheduler) -> Vec<GameEvent> {
    if !world.is_running() {
        return Vec::new();
    }

    let kind = match action {
        TimerAction::SpawnObstacle => EntityKind::Obstacle,
        TimerAction::SpawnRing => EntityKind::Ring,
        TimerAction::Expire(id) => {
            if world.pool.expire(id) {
                log::trace!("Entity {} expired", id);
                return vec![GameEvent::Despawned {
                    id,
                    reason: DespawnReason::Expired,
                }];
            }
            return Vec::new();
        }
        TimerAction::BeginRun { .. } => {
            log::warn!("Start countdown fired with a world already live");
            return Vec::new();
        }
    };

    match spawn_entity(world, kind, scheduler.now()) {
        Some((id, event)) => {
            scheduler.after(world.tuning.entity_ttl_ticks, TimerAction::Expire(id));
            vec![event]
        }
        None => Vec::new(),
    }
}
