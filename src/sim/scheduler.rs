//! Timer scheduling on the simulation clock
//!
//! Spawns, expiries and the start countdown are plain [`TimerAction`] values
//! rather than closures, so the game can dispatch them against whatever world
//! is current when they fall due.

use super::state::EntityId;

/// Handle returned when a timer is registered
pub type TimerId = u64;

/// Work to perform when a timer falls due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Start countdown finished: build the world
    BeginRun { seed: u64 },
    SpawnObstacle,
    SpawnRing,
    /// Safety-net removal of a spawned entity
    Expire(EntityId),
}

/// Periodic and delayed callbacks, measured in simulation ticks
pub trait Scheduler {
    /// Fire `action` every `interval` ticks, first after one interval
    fn repeat(&mut self, interval: u64, action: TimerAction) -> TimerId;
    /// Fire `action` once after `delay` ticks
    fn after(&mut self, delay: u64, action: TimerAction) -> TimerId;
    /// Drop every pending timer
    fn clear(&mut self);
    /// Current tick
    fn now(&self) -> u64;
    /// Advance one tick and return the actions that fell due, in order
    fn advance(&mut self) -> Vec<TimerAction>;
}

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    due: u64,
    interval: Option<u64>,
    action: TimerAction,
}

/// Deterministic scheduler driven by the fixed-step loop
#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    now: u64,
    next_id: TimerId,
    timers: Vec<Timer>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending timers
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    fn insert(&mut self, delay: u64, interval: Option<u64>, action: TimerAction) -> TimerId {
        self.next_id += 1;
        let id = self.next_id;
        self.timers.push(Timer {
            id,
            due: self.now + delay,
            interval,
            action,
        });
        id
    }
}

impl Scheduler for TickScheduler {
    fn repeat(&mut self, interval: u64, action: TimerAction) -> TimerId {
        let interval = interval.max(1);
        self.insert(interval, Some(interval), action)
    }

    fn after(&mut self, delay: u64, action: TimerAction) -> TimerId {
        self.insert(delay, None, action)
    }

    fn clear(&mut self) {
        self.timers.clear();
    }

    fn now(&self) -> u64 {
        self.now
    }

    fn advance(&mut self) -> Vec<TimerAction> {
        self.now += 1;
        let now = self.now;

        let mut due: Vec<(u64, TimerId, TimerAction)> = self
            .timers
            .iter()
            .filter(|t| t.due <= now)
            .map(|t| (t.due, t.id, t.action))
            .collect();
        due.sort_by_key(|&(at, id, _)| (at, id));

        self.timers.retain_mut(|t| {
            if t.due > now {
                return true;
            }
            match t.interval {
                Some(interval) => {
                    t.due += interval;
                    true
                }
                None => false,
            }
        });

        due.into_iter().map(|(_, _, action)| action).collect()
    }
}
