//! Session state: the player, the run, and the snapshots handed to the
//! presentation layer.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::besttimes::{self, BestTimes};
use crate::consts::{PLAYER_H, PLAYER_W, SPAWN_X, SPAWN_Y};
use crate::tuning::{Tuning, World};

use super::economy::{Economy, Inventory, PillKind};
use super::level::{self, Cracker};
use super::rect::Rect;

/// Which screen owns the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen; the first level is already built behind it.
    Menu,
    Playing,
    /// Between-level shop overlay.
    Shop,
    /// Every level cleared; terminal.
    Finished,
}

/// The player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// -1 left, 1 right. Render-facing only.
    pub facing: f32,
    pub on_ground: bool,
    pub jumps_remaining: u32,
    pub stamina: f32,
    pub exhausted: bool,
    /// Effective steering acceleration, refreshed from growth each tick.
    pub speed: f32,
    /// Effective jump launch velocity, refreshed from growth each tick.
    pub jump_power: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(SPAWN_X, SPAWN_Y),
            vel: Vec2::ZERO,
            facing: 1.0,
            on_ground: false,
            jumps_remaining: tuning.max_jumps,
            stamina: tuning.stamina_max,
            exhausted: false,
            speed: tuning.base_speed,
            jump_power: tuning.base_jump_power,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_W, PLAYER_H)
    }

    /// Back to the spawn point with zero velocity. Stamina and the jump
    /// budget are left alone.
    pub fn respawn(&mut self) {
        self.pos = Vec2::new(SPAWN_X, SPAWN_Y);
        self.vel = Vec2::ZERO;
    }

    /// Drain or recover stamina for this tick and run the exhaustion
    /// hysteresis: exhaustion starts when the gauge empties and only clears
    /// once it refills completely.
    pub fn update_stamina(
        &mut self,
        steering: bool,
        no_drain: bool,
        dt_secs: f32,
        tuning: &Tuning,
    ) {
        if !self.exhausted && steering && !no_drain {
            self.stamina = (self.stamina - tuning.drain_rate * dt_secs).max(0.0);
        } else {
            let rate = if self.exhausted {
                tuning.exhausted_recover_rate
            } else {
                tuning.recover_rate
            };
            self.stamina = (self.stamina + rate * dt_secs).min(tuning.stamina_max);
        }
        if !self.exhausted && self.stamina <= 0.0 {
            self.exhausted = true;
        } else if self.exhausted && self.stamina >= tuning.stamina_max {
            self.exhausted = false;
        }
        if self.exhausted {
            self.vel.x = 0.0;
        }
    }

    /// Attempt a jump. Fails silently while exhausted, out of budget, or
    /// short on stamina. The second jump of an airborne sequence costs
    /// double; a no-drain boost waives the cost entirely.
    pub fn try_jump(&mut self, no_drain: bool, tuning: &Tuning) -> bool {
        if self.exhausted || self.jumps_remaining == 0 {
            return false;
        }
        if !no_drain {
            let jump_index = tuning.max_jumps - self.jumps_remaining + 1;
            let cost = if jump_index >= 2 {
                tuning.jump_cost * 2.0
            } else {
                tuning.jump_cost
            };
            if self.stamina < cost {
                return false;
            }
            self.stamina = (self.stamina - cost).max(0.0);
        }
        self.vel.y = -self.jump_power;
        self.on_ground = false;
        self.jumps_remaining -= 1;
        if !no_drain && self.stamina <= 0.0 {
            self.exhausted = true;
        }
        true
    }

    /// Recompute effective speed and jump power from growth and boosts.
    pub fn refresh_stats(&mut self, level: u32, speed_boosted: bool, tuning: &Tuning) {
        let growth = tuning.growth(level);
        self.speed = tuning.base_speed * tuning.speed_scale(growth, speed_boosted);
        self.jump_power = tuning.base_jump_power * tuning.jump_scale(growth);
    }
}

/// Marker left by a pill use so the presentation can flash it briefly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillFx {
    pub kind: PillKind,
    pub until_ms: f64,
}

/// One full game: phase machine, current level, player, and economy.
///
/// All mutation funnels through [`tick`](super::tick::tick) and the action
/// methods below; the presentation layer only ever reads [`HudSnapshot`] and
/// [`SceneSnapshot`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub seed: u64,
    pub world: World,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub level: u32,
    pub crackers_collected: u32,
    pub crackers_target: u32,
    /// Level-clear countdown; 0 means no transition pending.
    pub transition_ticks: u32,
    /// Session clock: clamped frame deltas accumulated since creation.
    pub now_ms: f64,
    /// Latched on the first Playing tick of the level.
    pub level_start_ms: Option<f64>,
    pub level_elapsed_ms: f64,
    pub best_times: BestTimes,
    pub player: Player,
    pub platforms: Vec<Rect>,
    pub crackers: Vec<Cracker>,
    pub economy: Economy,
    pub pill_fx: Option<PillFx>,
}

impl GameSession {
    /// Fresh session on the menu with level 1 already built. The seed only
    /// feeds cosmetic randomness; gameplay is identical across seeds.
    pub fn new(seed: u64) -> Self {
        Self::with_profile(seed, World::default(), Tuning::default())
    }

    pub fn with_profile(seed: u64, world: World, tuning: Tuning) -> Self {
        let mut session = Self {
            seed,
            world,
            player: Player::new(&tuning),
            best_times: BestTimes::new(tuning.total_levels as usize),
            tuning,
            phase: GamePhase::Menu,
            level: 1,
            crackers_collected: 0,
            crackers_target: 1,
            transition_ticks: 0,
            now_ms: 0.0,
            level_start_ms: None,
            level_elapsed_ms: 0.0,
            platforms: Vec::new(),
            crackers: Vec::new(),
            economy: Economy::default(),
            pill_fx: None,
        };
        session.load_level(1);
        session
    }

    /// Build `level` from scratch: fresh course and scatter, player back at
    /// spawn with a full gauge, timing cleared. Coins, inventory, boosts,
    /// and best times all survive.
    pub fn load_level(&mut self, level: u32) {
        self.level = level;
        self.platforms = level::build_platforms(&self.world);
        let needed = self.tuning.crackers_needed(level);
        self.crackers_target = needed.max(1);
        self.crackers_collected = 0;
        let mut rng = Pcg32::seed_from_u64(level::level_seed(self.seed, level));
        self.crackers = level::scatter_crackers(level, needed, &self.platforms, &mut rng);
        self.player = Player::new(&self.tuning);
        self.refresh_player_stats();
        self.transition_ticks = 0;
        self.level_start_ms = None;
        self.level_elapsed_ms = 0.0;
        self.pill_fx = None;
        log::info!(
            "Level {} loaded: {} crackers, target {}",
            level,
            self.crackers.len(),
            self.crackers_target
        );
    }

    pub fn speed_boost_active(&self) -> bool {
        self.economy.speed_boost_active(self.now_ms)
    }

    pub fn no_drain_active(&self) -> bool {
        self.economy.no_drain_active(self.now_ms)
    }

    /// Recompute the player's effective stats against the current level and
    /// boost state.
    pub fn refresh_player_stats(&mut self) {
        let boosted = self.economy.speed_boost_active(self.now_ms);
        self.player.refresh_stats(self.level, boosted, &self.tuning);
    }

    /// Menu -> Playing.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Menu {
            self.phase = GamePhase::Playing;
        }
    }

    /// Playing -> Menu. The run keeps its state; level time stops accruing.
    pub fn open_menu(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Menu;
        }
    }

    /// Edge-triggered jump attempt. Only lands while Playing.
    pub fn try_jump(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        let no_drain = self.no_drain_active();
        self.player.try_jump(no_drain, &self.tuning)
    }

    /// Swallow a pill from the inventory. Allowed on any screen until the
    /// run is finished.
    pub fn use_pill(&mut self, kind: PillKind) -> bool {
        if self.phase == GamePhase::Finished {
            return false;
        }
        if !self.economy.inventory.take(kind) {
            return false;
        }
        match kind {
            PillKind::Stamina => {
                self.player.stamina = self.tuning.stamina_max;
                self.player.exhausted = false;
            }
            PillKind::Speed => {
                self.economy.speed_boost_until_ms = self.now_ms + self.tuning.boost_duration_ms;
            }
            PillKind::NoDrain => {
                self.economy.no_drain_until_ms = self.now_ms + self.tuning.boost_duration_ms;
            }
        }
        self.pill_fx = Some(PillFx {
            kind,
            until_ms: self.now_ms + self.tuning.pill_fx_ms,
        });
        self.refresh_player_stats();
        log::info!("Used {} pill", kind.as_str());
        true
    }

    /// Buy a pill; only valid while the shop overlay is up.
    pub fn purchase(&mut self, kind: PillKind) -> bool {
        if self.phase != GamePhase::Shop {
            return false;
        }
        self.economy.try_purchase(kind, &self.tuning)
    }

    /// Pick up every uncollected cracker overlapping the player, then arm
    /// the clear countdown and record the level time once the target is met.
    pub(crate) fn collect_crackers(&mut self) {
        let player_rect = self.player.rect();
        for cracker in &mut self.crackers {
            if !cracker.collected && player_rect.overlaps(&cracker.rect) {
                cracker.collected = true;
                self.crackers_collected += 1;
                self.player.stamina = (self.player.stamina + self.tuning.pickup_stamina_bonus)
                    .min(self.tuning.stamina_max);
            }
        }
        if self.crackers_collected >= self.crackers_target && self.transition_ticks == 0 {
            self.transition_ticks = self.tuning.transition_ticks;
            if self.tuning.shop_enabled {
                self.economy.reward_pending = true;
            }
            self.record_level_time();
        }
    }

    fn record_level_time(&mut self) {
        let idx = (self.level - 1) as usize;
        let elapsed = self.level_elapsed_ms;
        if self.best_times.record(idx, elapsed) {
            self.best_times.save();
            log::info!(
                "New best for level {}: {}s",
                self.level,
                besttimes::format_seconds(elapsed)
            );
        }
    }

    /// Count a pending clear countdown down one tick; at zero, open the shop
    /// or advance straight to the next level.
    pub(crate) fn advance_transition(&mut self) {
        if self.transition_ticks == 0 {
            return;
        }
        self.transition_ticks -= 1;
        if self.transition_ticks == 0 {
            if self.tuning.shop_enabled {
                self.open_shop();
            } else {
                self.advance_level();
            }
        }
    }

    /// Open the between-level shop, crediting the pending clear reward.
    pub(crate) fn open_shop(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if self.economy.reward_pending {
            self.economy.coins += self.tuning.clear_reward_coins;
            self.economy.reward_pending = false;
        }
        self.economy.last_message = None;
        self.phase = GamePhase::Shop;
        log::info!("Shop open, {} coins", self.economy.coins);
    }

    /// Move past a cleared level, or finish the run after the last one.
    pub(crate) fn advance_level(&mut self) {
        if self.level >= self.tuning.total_levels {
            self.phase = GamePhase::Finished;
            log::info!("Run complete");
            return;
        }
        self.load_level(self.level + 1);
    }

    /// Close the shop and move on.
    pub fn confirm_shop(&mut self) {
        if self.phase != GamePhase::Shop {
            return;
        }
        self.phase = GamePhase::Playing;
        self.advance_level();
    }

    /// Restart the run from level 1. Wipes the economy and timers; best
    /// times survive.
    pub fn reset(&mut self) {
        self.economy = Economy::default();
        self.load_level(1);
        self.phase = GamePhase::Playing;
        log::info!("Session reset");
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            phase: self.phase,
            level: self.level.min(self.tuning.total_levels),
            total_levels: self.tuning.total_levels,
            crackers_collected: self.crackers_collected,
            crackers_target: self.crackers_target,
            coins: self.economy.coins,
            elapsed_ms: self.level_elapsed_ms,
            best_ms: self.best_times.get((self.level - 1) as usize),
            stamina: self.player.stamina,
            stamina_max: self.tuning.stamina_max,
            stamina_ratio: (self.player.stamina / self.tuning.stamina_max).clamp(0.0, 1.0),
            exhausted: self.player.exhausted,
            growth: self.tuning.growth(self.level),
            speed_boost_active: self.speed_boost_active(),
            no_drain_active: self.no_drain_active(),
            inventory: self.economy.inventory,
            transition_ticks: self.transition_ticks,
            completed: self.phase == GamePhase::Finished,
            shop_message: self.economy.last_message.map(|m| m.text()),
        }
    }

    pub fn scene(&self) -> SceneSnapshot {
        SceneSnapshot {
            player: PlayerView {
                rect: self.player.rect(),
                facing: self.player.facing,
                exhausted: self.player.exhausted,
                on_ground: self.player.on_ground,
            },
            platforms: self.platforms.clone(),
            crackers: self
                .crackers
                .iter()
                .map(|c| CrackerView {
                    rect: c.rect,
                    collected: c.collected,
                    bob: ((self.now_ms * 0.004) as f32 + c.bob_phase).sin() * 2.5,
                })
                .collect(),
            pill_fx: self
                .pill_fx
                .filter(|fx| self.now_ms < fx.until_ms)
                .map(|fx| fx.kind),
            transition_ticks: self.transition_ticks,
            completed: self.phase == GamePhase::Finished,
        }
    }
}

/// Read-only HUD projection, serialized for the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct HudSnapshot {
    pub phase: GamePhase,
    pub level: u32,
    pub total_levels: u32,
    pub crackers_collected: u32,
    pub crackers_target: u32,
    pub coins: u32,
    pub elapsed_ms: f64,
    pub best_ms: Option<f64>,
    pub stamina: f32,
    pub stamina_max: f32,
    pub stamina_ratio: f32,
    pub exhausted: bool,
    pub growth: f32,
    pub speed_boost_active: bool,
    pub no_drain_active: bool,
    pub inventory: Inventory,
    pub transition_ticks: u32,
    pub completed: bool,
    pub shop_message: Option<&'static str>,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct SceneSnapshot {
    pub player: PlayerView,
    pub platforms: Vec<Rect>,
    pub crackers: Vec<CrackerView>,
    /// Kind of the most recent pill use while its flash is still live.
    pub pill_fx: Option<PillKind>,
    pub transition_ticks: u32,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub rect: Rect,
    pub facing: f32,
    pub exhausted: bool,
    pub on_ground: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrackerView {
    pub rect: Rect,
    pub collected: bool,
    /// Idle-animation vertical offset, already phase-shifted.
    pub bob: f32,
}
