//! Deterministic simulation module
//!
//! All gameplay logic lives here. Given the same seed, inputs, and frame
//! deltas, a session replays identically:
//! - Seeded RNG only, and only for cosmetic bob phases
//! - A session-owned clock fed by clamped frame deltas
//! - No rendering or DOM dependencies; the only side effects are log lines
//!   and the best-time write-through on a new record

pub mod economy;
pub mod level;
pub mod physics;
pub mod rect;
pub mod state;
pub mod tick;

pub use economy::{Economy, Inventory, PillKind, ShopMessage};
pub use level::{Cracker, build_platforms, level_seed, scatter_crackers};
pub use physics::physics_step;
pub use rect::Rect;
pub use state::{
    CrackerView, GamePhase, GameSession, HudSnapshot, PillFx, Player, PlayerView, SceneSnapshot,
};
pub use tick::{TickInput, tick};
