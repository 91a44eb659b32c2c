//! Routing of engine-reported player overlaps

use super::lifecycle::enter_game_over;
use super::scoring::on_ring_collected;
use super::state::{EntityId, EntityKind, GameEvent, World};

/// Resolve one player overlap reported by the engine's collision pass.
///
/// Obstacles end the run, rings are collected. Overlaps outside a running
/// world, or with entities that are already gone, are ignored.
pub fn resolve_overlap(world: &mut World, id: EntityId) -> Vec<GameEvent> {
    if !world.is_running() {
        return Vec::new();
    }

    let kind = match world.pool.get(id) {
        Some(entity) if entity.active => entity.kind,
        _ => {
            log::trace!("Overlap with stale entity {}", id);
            return Vec::new();
        }
    };

    match kind {
        EntityKind::Obstacle => enter_game_over(world),
        EntityKind::Ring => on_ring_collected(world, id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::lifecycle::enter_running;
    use crate::sim::state::{GamePhase, Viewport};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn running_world() -> World {
        let mut world = World::new(Tuning::default(), Viewport::new(1280.0, 720.0), 3);
        enter_running(&mut world);
        world
    }

    #[test]
    fn test_obstacle_ends_run() {
        let mut world = running_world();
        let id = world
            .pool
            .spawn(EntityKind::Obstacle, Vec2::new(100.0, 620.0), -150.0, 600);

        let events = resolve_overlap(&mut world, id);
        assert_eq!(world.phase(), GamePhase::GameOver);
        assert!(matches!(events[0], GameEvent::GameOver { score: 0, .. }));
    }

    #[test]
    fn test_duplicate_obstacle_overlap() {
        let mut world = running_world();
        let id = world
            .pool
            .spawn(EntityKind::Obstacle, Vec2::new(100.0, 620.0), -150.0, 600);

        assert_eq!(resolve_overlap(&mut world, id).len(), 1);
        assert!(resolve_overlap(&mut world, id).is_empty());
    }

    #[test]
    fn test_ring_collected() {
        let mut world = running_world();
        let id = world
            .pool
            .spawn(EntityKind::Ring, Vec2::new(100.0, 450.0), -150.0, 600);

        resolve_overlap(&mut world, id);
        assert_eq!(world.session.score, 100);
        assert!(world.pool.get(id).is_none());
    }

    #[test]
    fn test_no_scoring_after_game_over() {
        let mut world = running_world();
        let ring = world
            .pool
            .spawn(EntityKind::Ring, Vec2::new(100.0, 450.0), -150.0, 600);
        let obstacle = world
            .pool
            .spawn(EntityKind::Obstacle, Vec2::new(100.0, 620.0), -150.0, 600);

        resolve_overlap(&mut world, obstacle);
        assert!(resolve_overlap(&mut world, ring).is_empty());
        assert_eq!(world.session.score, 0);
    }

    #[test]
    fn test_unknown_entity() {
        let mut world = running_world();
        assert!(resolve_overlap(&mut world, 999).is_empty());
    }
}
