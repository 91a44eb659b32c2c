//! Ring Runner entry point
//!
//! The playable build is the wasm32 library driven by a browser host engine.
//! Natively this plays a headless session with a scripted stand-in for the
//! engine's collision pass and logs the results.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use ring_runner::consts::{PLAYER_X, TICKS_PER_SECOND};
    use ring_runner::platform::storage::MemoryStore;
    use ring_runner::sim::{EntityKind, GamePhase, TickInput, TickScheduler, Viewport};
    use ring_runner::ui::{self, Hud};
    use ring_runner::{Game, Tuning};

    type HeadlessGame = Game<TickScheduler, MemoryStore>;

    /// Horizontal distance at which an entity counts as touching the player
    const HIT_RANGE: f32 = 30.0;
    const MAX_RUN_TICKS: u64 = 120 * TICKS_PER_SECOND;
    /// Rings each scripted run collects before it stops dodging
    const RUN_TARGETS: [u32; 2] = [7, 4];

    struct LogHud;

    impl Hud for LogHud {
        fn set_score_text(&mut self, text: &str) {
            log::info!("[hud] {}", text);
        }

        fn set_rings_text(&mut self, text: &str) {
            log::info!("[hud] {}", text);
        }

        fn show_game_over(&mut self, title: &str, detail: &str) {
            log::info!("[hud] {} / {}", title, detail);
        }

        fn hide_game_over(&mut self) {}

        fn set_start_visible(&mut self, visible: bool) {
            log::debug!("[hud] start button visible: {}", visible);
        }

        fn set_restart_visible(&mut self, visible: bool) {
            log::debug!("[hud] restart button visible: {}", visible);
        }
    }

    pub fn run(tuning: Tuning) {
        let mut game = Game::new(
            tuning,
            Viewport::new(1280.0, 720.0),
            TickScheduler::new(),
            MemoryStore::new(),
        );
        let mut hud = LogHud;

        let events = game.press_start(1);
        ui::apply_events(&mut hud, &events);

        for (run, target_rings) in RUN_TARGETS.into_iter().enumerate() {
            if run > 0 {
                let events = game.restart(run as u64 + 1);
                ui::apply_events(&mut hud, &events);
            }
            play(&mut game, &mut hud, target_rings);
        }

        match serde_json::to_string_pretty(game.leaderboard()) {
            Ok(json) => log::info!("Leaderboard:\n{}", json),
            Err(e) => log::error!("Failed to encode leaderboard: {}", e),
        }
    }

    fn play(game: &mut HeadlessGame, hud: &mut LogHud, target_rings: u32) {
        for _ in 0..MAX_RUN_TICKS {
            let input = autopilot(game, target_rings);
            let events = game.step(&input);
            ui::apply_events(hud, &events);
            if game.phase() == GamePhase::GameOver {
                return;
            }
        }
        log::warn!("Run did not end within {} ticks", MAX_RUN_TICKS);
    }

    /// Stand-in for the engine: every ring that reaches the player is
    /// collected, obstacles are jumped until the target is met
    fn autopilot(game: &HeadlessGame, target_rings: u32) -> TickInput {
        let Some(world) = game.world() else {
            return TickInput::default();
        };

        let mut input = TickInput {
            grounded: true,
            ..Default::default()
        };
        let touching = world
            .pool
            .iter()
            .filter(|e| (e.pos.x - PLAYER_X).abs() < HIT_RANGE);
        for entity in touching {
            match entity.kind {
                EntityKind::Ring => input.overlaps.push(entity.id),
                EntityKind::Obstacle if world.session.ring_count >= target_rings => {
                    input.overlaps.push(entity.id)
                }
                EntityKind::Obstacle => input.jump = true,
            }
        }
        input
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ring_runner::Tuning;

    env_logger::init();
    log::info!("Ring Runner (native) starting...");
    log::info!("Rendering and physics come from the browser host - build for wasm32 to play");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Tuning::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Invalid tuning in {} ({}), using defaults", path, e);
                Tuning::default()
            }),
            Err(e) => {
                log::warn!("Could not read {} ({}), using defaults", path, e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    headless::run(tuning);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::init, this is just to satisfy the compiler
}
