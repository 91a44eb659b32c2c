//! Entity pool: the live obstacles and rings
//!
//! Entities are kept sorted by id for deterministic iteration.

use glam::Vec2;

use super::state::{EntityId, EntityKind, SpawnedEntity};

#[derive(Debug, Clone)]
pub struct EntityPool {
    entities: Vec<SpawnedEntity>,
    next_id: EntityId,
}

impl Default for EntityPool {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityPool {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            next_id: 1,
        }
    }

    /// Add an active entity and return its id
    pub fn spawn(&mut self, kind: EntityKind, pos: Vec2, vel_x: f32, expires_at: u64) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        self.entities.push(SpawnedEntity {
            id,
            kind,
            pos,
            vel_x,
            active: true,
            expires_at,
        });
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&SpawnedEntity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn is_active(&self, id: EntityId) -> bool {
        self.get(id).is_some_and(|e| e.active)
    }

    /// Deactivate and remove an entity hit by the player.
    ///
    /// Returns `None` if the entity is gone or already inactive, so a second
    /// overlap report in the same tick cannot consume it twice.
    pub fn consume(&mut self, id: EntityId) -> Option<SpawnedEntity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        if !self.entities[idx].active {
            return None;
        }
        self.entities[idx].active = false;
        Some(self.entities.remove(idx))
    }

    /// Remove an entity whose timeout fired. No-op if it was already removed.
    pub fn expire(&mut self, id: EntityId) -> bool {
        match self.entities.iter().position(|e| e.id == id && e.active) {
            Some(idx) => {
                self.entities.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Set every active entity's horizontal velocity; returns how many changed
    pub fn set_all_velocity(&mut self, vel_x: f32) -> usize {
        let mut count = 0;
        for entity in self.entities.iter_mut().filter(|e| e.active) {
            entity.vel_x = vel_x;
            count += 1;
        }
        count
    }

    /// Move entities along x by their velocity
    pub fn advance(&mut self, dt: f32) {
        for entity in self.entities.iter_mut().filter(|e| e.active) {
            entity.pos.x += entity.vel_x * dt;
        }
    }

    /// Remove entities that scrolled past `min_x`, returning their ids
    pub fn prune_offscreen(&mut self, min_x: f32) -> Vec<EntityId> {
        let mut pruned = Vec::new();
        self.entities.retain(|e| {
            if e.pos.x < min_x {
                pruned.push(e.id);
                false
            } else {
                true
            }
        });
        pruned
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpawnedEntity> {
        self.entities.iter()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
