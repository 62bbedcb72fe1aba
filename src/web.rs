//! wasm-bindgen facade for the browser shell.
//!
//! The shell owns the canvas, the DOM, and the requestAnimationFrame loop;
//! this side owns the simulation. Inputs come in through setters and action
//! calls, frames go out as JSON snapshots.

use wasm_bindgen::prelude::*;

use crate::besttimes::BestTimes;
use crate::sim::{GamePhase, GameSession, PillKind, TickInput, tick};

/// Module init: panic messages and logging into the console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Salty Crackers core loaded");
}

/// One game instance plus the held-control state the shell feeds.
#[wasm_bindgen]
pub struct SaltyCrackers {
    session: GameSession,
    input: TickInput,
}

#[wasm_bindgen]
impl SaltyCrackers {
    /// Fresh session seeded from the wall clock, with persisted best times.
    #[wasm_bindgen(constructor)]
    pub fn new() -> SaltyCrackers {
        let seed = js_sys::Date::now() as u64;
        let mut session = GameSession::new(seed);
        session.best_times = BestTimes::load(session.tuning.total_levels as usize);
        log::info!("Session created with seed {seed}");
        SaltyCrackers {
            session,
            input: TickInput::default(),
        }
    }

    /// Advance one display frame. One-shot inputs are cleared afterwards,
    /// and held controls are dropped when the shop takes over the screen.
    pub fn frame(&mut self, delta_ms: f64) {
        let was_playing = self.session.phase == GamePhase::Playing;
        tick(&mut self.session, &self.input, delta_ms);
        self.input.jump = false;
        if was_playing && self.session.phase == GamePhase::Shop {
            self.input.left = false;
            self.input.right = false;
        }
    }

    pub fn set_left(&mut self, down: bool) {
        self.input.left = down;
    }

    pub fn set_right(&mut self, down: bool) {
        self.input.right = down;
    }

    /// Queue a jump attempt for the next frame.
    pub fn press_jump(&mut self) {
        self.input.jump = true;
    }

    /// Drop all held controls (window blur, touch cancel).
    pub fn release_controls(&mut self) {
        self.input = TickInput::default();
    }

    pub fn start(&mut self) {
        self.session.start();
    }

    pub fn open_menu(&mut self) {
        self.session.open_menu();
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Buy `item` ("stamina", "speed", "nostamina"). Returns whether the
    /// purchase went through; the feedback line lands in the HUD snapshot.
    pub fn buy(&mut self, item: &str) -> bool {
        match PillKind::from_str(item) {
            Some(kind) => self.session.purchase(kind),
            None => false,
        }
    }

    /// Use a pill from the inventory.
    pub fn use_item(&mut self, item: &str) -> bool {
        match PillKind::from_str(item) {
            Some(kind) => self.session.use_pill(kind),
            None => false,
        }
    }

    /// Leave the shop for the next level (or the finish screen).
    pub fn confirm(&mut self) {
        self.session.confirm_shop();
    }

    /// HUD state as a JSON string.
    pub fn hud(&self) -> String {
        serde_json::to_string(&self.session.hud()).unwrap_or_default()
    }

    /// Drawable scene as a JSON string.
    pub fn scene(&self) -> String {
        serde_json::to_string(&self.session.scene()).unwrap_or_default()
    }
}

impl Default for SaltyCrackers {
    fn default() -> Self {
        Self::new()
    }
}
