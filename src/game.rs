//! Game driver: owns the current world, the timers and the leaderboard
//!
//! The host calls [`Game::press_start`], [`Game::restart`] and, once per fixed
//! tick, [`Game::step`]. Every call returns the events the engine and HUD need
//! to apply.

use crate::consts::SIM_DT;
use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::platform::storage::KeyValueStore;
use crate::sim::{
    GameEvent, GamePhase, Scheduler, TickInput, TimerAction, Viewport, World, enter_running, fire,
    tick,
};
use crate::tuning::Tuning;

pub struct Game<S: Scheduler, K: KeyValueStore> {
    tuning: Tuning,
    viewport: Viewport,
    scheduler: S,
    store: K,
    leaderboard: Leaderboard,
    /// None until the start countdown finishes
    world: Option<World>,
    /// Start has been pressed (the button is one-shot)
    started: bool,
}

impl<S: Scheduler, K: KeyValueStore> Game<S, K> {
    pub fn new(tuning: Tuning, viewport: Viewport, scheduler: S, store: K) -> Self {
        let leaderboard = Leaderboard::load(&store);
        Self {
            tuning,
            viewport,
            scheduler,
            store,
            leaderboard,
            world: None,
            started: false,
        }
    }

    /// Idle until a world exists, then the world's phase
    pub fn phase(&self) -> GamePhase {
        self.world.as_ref().map(World::phase).unwrap_or_default()
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// New viewport size; applies to entities spawned from now on
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if let Some(world) = self.world.as_mut() {
            world.viewport = viewport;
        }
    }

    /// Handle the start button: begin the countdown to the first run.
    ///
    /// Only the first press counts.
    pub fn press_start(&mut self, seed: u64) -> Vec<GameEvent> {
        if self.started {
            log::debug!("Start ignored, already started");
            return Vec::new();
        }
        self.started = true;

        let ticks = self.tuning.start_countdown_ticks;
        self.scheduler.after(ticks, TimerAction::BeginRun { seed });
        log::info!("Start pressed, run begins in {} ticks", ticks);
        vec![GameEvent::CountdownStarted { ticks }]
    }

    /// Handle the restart button: discard the ended world and run a new one.
    ///
    /// Does nothing without a world or before the current run has ended.
    pub fn restart(&mut self, seed: u64) -> Vec<GameEvent> {
        let Some(world) = self.world.as_ref() else {
            log::warn!("Restart ignored, no world exists");
            return Vec::new();
        };
        if world.phase() != GamePhase::GameOver {
            log::debug!("Restart ignored in phase {:?}", world.phase());
            return Vec::new();
        }

        // Release the old world and its timers before building the new one
        self.scheduler.clear();
        self.world = None;
        log::info!("Restarting with seed {}", seed);
        self.begin_run(seed)
    }

    /// Run one fixed tick: frame logic first, then due timers
    pub fn step(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let mut events = match self.world.as_mut() {
            Some(world) => tick(world, input, SIM_DT),
            None => Vec::new(),
        };

        for action in self.scheduler.advance() {
            let fired = self.dispatch(action);
            events.extend(fired);
        }

        self.record_game_over(&mut events);
        events
    }

    fn dispatch(&mut self, action: TimerAction) -> Vec<GameEvent> {
        if let TimerAction::BeginRun { seed } = action {
            if self.world.is_none() {
                return self.begin_run(seed);
            }
        }

        match self.world.as_mut() {
            Some(world) => fire(world, action, &mut self.scheduler),
            None => {
                log::trace!("Timer {:?} fired with no world", action);
                Vec::new()
            }
        }
    }

    fn begin_run(&mut self, seed: u64) -> Vec<GameEvent> {
        let mut world = World::new(self.tuning.clone(), self.viewport, seed);
        let events = enter_running(&mut world);

        self.scheduler
            .repeat(self.tuning.obstacle_spawn_ticks, TimerAction::SpawnObstacle);
        self.scheduler
            .repeat(self.tuning.ring_spawn_ticks, TimerAction::SpawnRing);
        self.world = Some(world);
        events
    }

    /// Save the finished run when this step ended it
    fn record_game_over(&mut self, events: &mut Vec<GameEvent>) {
        let entry = events.iter().find_map(|event| match *event {
            GameEvent::GameOver {
                score,
                rings,
                speed_multiplier,
            } => Some(LeaderboardEntry {
                score,
                rings,
                speed_multiplier,
            }),
            _ => None,
        });
        let Some(entry) = entry else {
            return;
        };
        if entry.score == 0 {
            log::debug!("Run scored nothing, leaderboard unchanged");
            return;
        }

        match self.leaderboard.save(entry, &mut self.store) {
            Ok(rank) => events.push(GameEvent::LeaderboardSaved { rank }),
            Err(e) => log::warn!("Failed to save leaderboard: {}", e),
        }
    }
}
