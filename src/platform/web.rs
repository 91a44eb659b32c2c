//! Browser bindings
//!
//! The host engine (rendering, physics, collision) owns the frame loop and
//! calls [`WebGame::step`] once per fixed tick, from page load onward so the
//! start countdown can run. The start/restart buttons and the HUD are wired
//! here; events they produce are queued and returned by the next `step`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::game::Game;
use crate::platform::input::JumpInput;
use crate::platform::storage::LocalStore;
use crate::sim::{GameEvent, TickInput, TickScheduler, Viewport};
use crate::tuning::Tuning;
use crate::ui::{self, Hud};

const START_BUTTON_ID: &str = "startGame";
const RESTART_BUTTON_ID: &str = "restartGame";
const SCORE_ID: &str = "scoreText";
const RINGS_ID: &str = "ringCountText";
const GAME_OVER_ID: &str = "gameOver";
const GAME_OVER_TITLE_ID: &str = "gameOverTitle";
const GAME_OVER_DETAIL_ID: &str = "gameOverMultiplier";

struct DomHud {
    document: Document,
}

impl DomHud {
    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_display(&self, id: &str, visible: bool) {
        let el = self
            .document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if let Some(el) = el {
            let display = if visible { "block" } else { "none" };
            let _ = el.style().set_property("display", display);
        }
    }
}

impl Hud for DomHud {
    fn set_score_text(&mut self, text: &str) {
        self.set_text(SCORE_ID, text);
    }

    fn set_rings_text(&mut self, text: &str) {
        self.set_text(RINGS_ID, text);
    }

    fn show_game_over(&mut self, title: &str, detail: &str) {
        self.set_text(GAME_OVER_TITLE_ID, title);
        self.set_text(GAME_OVER_DETAIL_ID, detail);
        self.set_display(GAME_OVER_ID, true);
    }

    fn hide_game_over(&mut self) {
        self.set_display(GAME_OVER_ID, false);
    }

    fn set_start_visible(&mut self, visible: bool) {
        self.set_display(START_BUTTON_ID, visible);
    }

    fn set_restart_visible(&mut self, visible: bool) {
        self.set_display(RESTART_BUTTON_ID, visible);
    }
}

struct Inner {
    game: Game<TickScheduler, LocalStore>,
    hud: Option<DomHud>,
    jump: JumpInput,
    /// Events not yet handed to the host engine
    pending: Vec<GameEvent>,
}

impl Inner {
    fn apply(&mut self, events: Vec<GameEvent>) {
        if let Some(hud) = self.hud.as_mut() {
            ui::apply_events(hud, &events);
        }
        self.pending.extend(events);
    }

    fn start(&mut self) {
        let events = self.game.press_start(seed());
        self.apply(events);
    }

    fn restart(&mut self) {
        let events = self.game.restart(seed());
        self.apply(events);
    }
}

fn seed() -> u64 {
    js_sys::Date::now() as u64
}

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Ring Runner starting...");
}

/// Game core handle for the host engine
#[wasm_bindgen]
pub struct WebGame {
    inner: Rc<RefCell<Inner>>,
}

#[wasm_bindgen]
impl WebGame {
    /// Build the core for a `width` x `height` world, optionally overriding
    /// balance with a tuning JSON
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, tuning_json: Option<String>) -> WebGame {
        let tuning = match tuning_json {
            Some(json) => Tuning::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Invalid tuning ({}), using defaults", e);
                Tuning::default()
            }),
            None => Tuning::default(),
        };

        let game = Game::new(
            tuning,
            Viewport::new(width, height),
            TickScheduler::new(),
            LocalStore::new(),
        );
        let hud = web_sys::window()
            .and_then(|w| w.document())
            .map(|document| DomHud { document });

        let inner = Rc::new(RefCell::new(Inner {
            game,
            hud,
            jump: JumpInput::default(),
            pending: Vec::new(),
        }));
        setup_buttons(&inner);

        WebGame { inner }
    }

    pub fn press_start(&self) {
        self.inner.borrow_mut().start();
    }

    pub fn restart(&self) {
        self.inner.borrow_mut().restart();
    }

    /// Feed a `KeyboardEvent.code`; returns true if it is a jump key
    pub fn key_event(&self, code: &str, down: bool) -> bool {
        self.inner.borrow_mut().jump.key_event(code, down)
    }

    pub fn resize(&self, width: f32, height: f32) {
        self.inner
            .borrow_mut()
            .game
            .resize(Viewport::new(width, height));
    }

    /// Run one fixed tick with the engine's readings; returns every event
    /// since the previous step as a JSON array
    pub fn step(&self, grounded: bool, vel_y: f32, overlaps: Vec<u32>) -> String {
        let mut inner = self.inner.borrow_mut();
        let input = TickInput {
            jump: inner.jump.pressed(),
            grounded,
            vel_y,
            overlaps,
        };
        let events = inner.game.step(&input);
        inner.apply(events);

        let pending = std::mem::take(&mut inner.pending);
        serde_json::to_string(&pending).unwrap_or_else(|e| {
            log::error!("Failed to encode events: {}", e);
            "[]".to_string()
        })
    }

    pub fn phase(&self) -> String {
        format!("{:?}", self.inner.borrow().game.phase())
    }

    pub fn background_offset(&self) -> f32 {
        self.inner
            .borrow()
            .game
            .world()
            .map(|w| w.background_x)
            .unwrap_or(0.0)
    }

    pub fn leaderboard_json(&self) -> String {
        serde_json::to_string(self.inner.borrow().game.leaderboard())
            .unwrap_or_else(|_| "[]".to_string())
    }
}

fn setup_buttons(inner: &Rc<RefCell<Inner>>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document - start/restart buttons not wired");
        return;
    };

    if let Some(btn) = document.get_element_by_id(START_BUTTON_ID) {
        let inner = inner.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            inner.borrow_mut().start();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    if let Some(btn) = document.get_element_by_id(RESTART_BUTTON_ID) {
        let inner = inner.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            inner.borrow_mut().restart();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
