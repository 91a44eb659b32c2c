//! Obstacle and ring spawning

use glam::Vec2;
use rand::Rng;

use super::state::{EntityId, EntityKind, GameEvent, World};

/// Spawn an entity of `kind` at the right edge, moving at the current speed.
///
/// Obstacles sit on the ground line; rings get a uniform random height inside
/// the ring band. Returns `None` unless the world is running.
pub fn spawn_entity(world: &mut World, kind: EntityKind, now: u64) -> Option<(EntityId, GameEvent)> {
    if !world.is_running() {
        return None;
    }

    let tuning = &world.tuning;
    let viewport = world.viewport;
    let x = viewport.width + tuning.spawn_offset_x;
    let y = match kind {
        EntityKind::Obstacle => viewport.height - tuning.obstacle_ground_offset,
        EntityKind::Ring => {
            let top = viewport.height - tuning.ring_band_high;
            let bottom = viewport.height - tuning.ring_band_low;
            world.rng.random_range(top..=bottom)
        }
    };

    let vel_x = world.session.speed as f32;
    let expires_at = now + world.tuning.entity_ttl_ticks;
    let id = world.pool.spawn(kind, Vec2::new(x, y), vel_x, expires_at);
    log::trace!("Spawned {:?} {} at ({:.0}, {:.0})", kind, id, x, y);

    Some((
        id,
        GameEvent::Spawned {
            id,
            kind,
            x,
            y,
            vel_x,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::lifecycle::{enter_game_over, enter_running};
    use crate::sim::state::Viewport;
    use crate::tuning::Tuning;

    fn running_world(seed: u64) -> World {
        let mut world = World::new(Tuning::default(), Viewport::new(1280.0, 720.0), seed);
        enter_running(&mut world);
        world
    }

    #[test]
    fn test_obstacle_position_and_velocity() {
        let mut world = running_world(1);
        world.session.speed = -225;

        let (id, _) = spawn_entity(&mut world, EntityKind::Obstacle, 120).unwrap();
        let entity = world.pool.get(id).unwrap();
        assert_eq!(entity.pos, Vec2::new(1380.0, 620.0));
        assert_eq!(entity.vel_x, -225.0);
        assert_eq!(entity.expires_at, 120 + 600);
    }

    #[test]
    fn test_rings_stay_in_band() {
        let mut world = running_world(42);
        for tick in 0..200 {
            let (id, _) = spawn_entity(&mut world, EntityKind::Ring, tick).unwrap();
            let y = world.pool.get(id).unwrap().pos.y;
            assert!((370.0..=570.0).contains(&y), "ring y {} outside band", y);
        }
    }

    #[test]
    fn test_same_seed_same_rings() {
        let mut a = running_world(99);
        let mut b = running_world(99);
        for tick in 0..10 {
            let (_, ea) = spawn_entity(&mut a, EntityKind::Ring, tick).unwrap();
            let (_, eb) = spawn_entity(&mut b, EntityKind::Ring, tick).unwrap();
            assert_eq!(ea, eb);
        }
    }

    #[test]
    fn test_no_spawn_unless_running() {
        let mut idle = World::new(Tuning::default(), Viewport::new(1280.0, 720.0), 1);
        assert!(spawn_entity(&mut idle, EntityKind::Ring, 0).is_none());

        let mut over = running_world(1);
        enter_game_over(&mut over);
        assert!(spawn_entity(&mut over, EntityKind::Obstacle, 0).is_none());
        assert!(over.pool.is_empty());
    }
}
