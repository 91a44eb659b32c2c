//! Score and ring tracking

use super::difficulty::on_milestone;
use super::state::{DespawnReason, EntityId, GameEvent, World};

/// True when `score` is an exact non-zero multiple of `milestone`.
///
/// This is an exact-multiple check, not a threshold: a score step that jumps
/// over a multiple never triggers it.
pub fn is_milestone(score: u64, milestone: u64) -> bool {
    score != 0 && score % milestone == 0
}

/// Collect a ring: consume it, bump rings and score, check for a milestone.
///
/// The ring is deactivated before anything else reads it; a repeated overlap
/// for the same ring returns no events.
pub fn on_ring_collected(world: &mut World, id: EntityId) -> Vec<GameEvent> {
    let Some(_ring) = world.pool.consume(id) else {
        log::trace!("Ring {} already consumed", id);
        return Vec::new();
    };

    let session = &mut world.session;
    session.ring_count += 1;
    session.score += world.tuning.ring_score;
    log::debug!(
        "Ring {} collected: score {}, rings {}",
        id,
        session.score,
        session.ring_count
    );

    let mut events = vec![
        GameEvent::Despawned {
            id,
            reason: DespawnReason::Collected,
        },
        GameEvent::RingsChanged {
            rings: session.ring_count,
        },
        GameEvent::ScoreChanged {
            score: session.score,
        },
    ];

    if is_milestone(session.score, world.tuning.milestone_score) {
        events.push(on_milestone(
            &mut world.session,
            &mut world.pool,
            world.tuning.speed_growth,
        ));
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{EntityKind, GamePhase, Viewport};
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    fn running_world() -> World {
        let mut world = World::new(Tuning::default(), Viewport::new(1280.0, 720.0), 7);
        world.session.phase = GamePhase::Running;
        world
    }

    fn add_ring(world: &mut World) -> EntityId {
        let speed = world.session.speed as f32;
        world
            .pool
            .spawn(EntityKind::Ring, Vec2::new(1380.0, 450.0), speed, 600)
    }

    #[test]
    fn test_is_milestone() {
        assert!(!is_milestone(0, 300));
        assert!(!is_milestone(100, 300));
        assert!(!is_milestone(200, 300));
        assert!(is_milestone(300, 300));
        assert!(!is_milestone(400, 300));
        assert!(is_milestone(600, 300));
    }

    #[test]
    fn test_milestone_only_after_third_ring() {
        let mut world = running_world();

        for expected_multiplier in [1.0, 1.0, 1.5] {
            let id = add_ring(&mut world);
            on_ring_collected(&mut world, id);
            assert_eq!(world.session.speed_multiplier, expected_multiplier);
        }
        assert_eq!(world.session.score, 300);
        assert_eq!(world.session.ring_count, 3);
        assert_eq!(world.session.speed, -225);
    }

    #[test]
    fn test_double_collect_counts_once() {
        let mut world = running_world();
        let id = add_ring(&mut world);

        let first = on_ring_collected(&mut world, id);
        let second = on_ring_collected(&mut world, id);
        assert!(!first.is_empty());
        assert!(second.is_empty());
        assert_eq!(world.session.ring_count, 1);
        assert_eq!(world.session.score, 100);
    }

    #[test]
    fn test_events_push_hud_values() {
        let mut world = running_world();
        let id = add_ring(&mut world);

        let events = on_ring_collected(&mut world, id);
        assert!(events.contains(&GameEvent::ScoreChanged { score: 100 }));
        assert!(events.contains(&GameEvent::RingsChanged { rings: 1 }));
    }

    #[test]
    fn test_milestone_rescales_pending_entities() {
        let mut world = running_world();
        let obstacle = world
            .pool
            .spawn(EntityKind::Obstacle, Vec2::new(900.0, 620.0), -150.0, 600);

        for _ in 0..3 {
            let id = add_ring(&mut world);
            on_ring_collected(&mut world, id);
        }
        assert_eq!(world.pool.get(obstacle).unwrap().vel_x, -225.0);
    }

    proptest! {
        #[test]
        fn prop_score_tracks_rings(rings in 0usize..40) {
            let mut world = running_world();
            let mut last_multiplier = world.session.speed_multiplier;
            for _ in 0..rings {
                let id = add_ring(&mut world);
                on_ring_collected(&mut world, id);
                prop_assert_eq!(world.session.score, 100 * world.session.ring_count as u64);
                prop_assert!(world.session.speed_multiplier >= last_multiplier);
                last_multiplier = world.session.speed_multiplier;
            }
            let milestones = (rings / 3) as i32;
            prop_assert!((world.session.speed_multiplier - 1.5f64.powi(milestones)).abs() < 1e-9);
        }
    }
}
