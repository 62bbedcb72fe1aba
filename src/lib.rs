//! Salty Crackers - a cracker-collecting 2D platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, levels, progression, economy)
//! - `besttimes`: Per-level best-time persistence
//! - `tuning`: Data-driven game balance
//! - `web`: wasm-bindgen facade for the browser shell (wasm32 only)
//!
//! Rendering and DOM wiring live outside this crate; the facade hands the
//! browser shell JSON snapshots and takes inputs back.

pub mod besttimes;
pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use besttimes::{BestTimes, format_seconds};
pub use sim::{GamePhase, GameSession, PillKind, TickInput, tick};
pub use tuning::{Tuning, World};

/// Game geometry constants
pub mod consts {
    /// Player collision box
    pub const PLAYER_W: f32 = 30.0;
    pub const PLAYER_H: f32 = 64.0;

    /// Collectible box (square)
    pub const CRACKER_SIZE: f32 = 16.0;

    /// Respawn point, top-left of the player box
    pub const SPAWN_X: f32 = 90.0;
    pub const SPAWN_Y: f32 = 90.0;

    /// How far below the playfield counts as falling out
    pub const FALL_RECOVERY_MARGIN: f32 = 120.0;
}
