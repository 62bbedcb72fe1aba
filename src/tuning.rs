//! Data-driven game balance.
//!
//! Every gameplay constant lives in [`World`] or [`Tuning`] so sessions can be
//! built with alternate profiles (tests, the classic shopless build) without
//! touching simulation code.

use serde::{Deserialize, Serialize};

/// Fixed environment the simulation runs in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Downward acceleration per tick.
    pub gravity: f32,
    /// Horizontal velocity multiplier applied each tick.
    pub friction: f32,
    /// Playfield width in pixels.
    pub width: f32,
    /// Playfield height in pixels.
    pub height: f32,
}

impl Default for World {
    fn default() -> Self {
        Self {
            gravity: 0.55,
            friction: 0.82,
            width: 960.0,
            height: 540.0,
        }
    }
}

/// Gameplay balance knobs. `Default` is the shipping profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Number of levels in a run.
    pub total_levels: u32,
    /// Horizontal acceleration added per tick while steering.
    pub base_speed: f32,
    /// Upward launch velocity of an unscaled jump.
    pub base_jump_power: f32,
    /// Jump budget refilled on every landing.
    pub max_jumps: u32,
    /// Horizontal speed cap in both directions.
    pub max_run_speed: f32,
    /// Stamina gauge capacity.
    pub stamina_max: f32,
    /// Stamina lost per second while steering.
    pub drain_rate: f32,
    /// Stamina regained per second at rest.
    pub recover_rate: f32,
    /// Stamina regained per second while exhausted.
    pub exhausted_recover_rate: f32,
    /// Cost of the first jump of an airborne sequence; later jumps cost double.
    pub jump_cost: f32,
    /// Stamina granted by each collected cracker.
    pub pickup_stamina_bonus: f32,
    /// Flat part of the per-level cracker count; the level number adds the rest.
    pub cracker_base_count: u32,
    /// Level-clear countdown length in ticks.
    pub transition_ticks: u32,
    /// Whether clearing a level opens the shop.
    pub shop_enabled: bool,
    /// Coins credited when the shop opens after a clear.
    pub clear_reward_coins: u32,
    /// Stamina pill price.
    pub stamina_pill_cost: u32,
    /// Speed pill price.
    pub speed_pill_cost: u32,
    /// No-drain pill price.
    pub no_drain_pill_cost: u32,
    /// Lifetime of the timed boosts, session-clock milliseconds.
    pub boost_duration_ms: f64,
    /// Lifetime of the pill-use flash marker.
    pub pill_fx_ms: f64,
    /// Largest frame delta a single tick will integrate.
    pub max_frame_delta_ms: f64,
    /// Growth added per level past the first.
    pub growth_per_level: f32,
    /// Speed/jump scale lost per unit of growth past 1.
    pub scale_falloff: f32,
    /// Speed scale while boosted, also the unboosted curve's starting point.
    pub speed_scale_peak: f32,
    /// Floor of the unboosted speed scale.
    pub speed_scale_floor: f32,
    /// Floor of the jump scale.
    pub jump_scale_floor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            total_levels: 9,
            base_speed: 0.85,
            base_jump_power: 12.0,
            max_jumps: 2,
            max_run_speed: 7.0,
            stamina_max: 100.0,
            drain_rate: 12.0,
            recover_rate: 10.0,
            exhausted_recover_rate: 18.0,
            jump_cost: 10.0,
            pickup_stamina_bonus: 25.0,
            cracker_base_count: 3,
            transition_ticks: 60,
            shop_enabled: true,
            clear_reward_coins: 100,
            stamina_pill_cost: 50,
            speed_pill_cost: 125,
            no_drain_pill_cost: 150,
            boost_duration_ms: 5000.0,
            pill_fx_ms: 450.0,
            max_frame_delta_ms: 64.0,
            growth_per_level: 0.16,
            scale_falloff: 0.55,
            speed_scale_peak: 1.1,
            speed_scale_floor: 0.55,
            jump_scale_floor: 0.72,
        }
    }
}

impl Tuning {
    /// The earlier shopless build: longer clear countdown, levels advance
    /// directly, no economy screens.
    pub fn classic() -> Self {
        Self {
            transition_ticks: 75,
            shop_enabled: false,
            ..Self::default()
        }
    }

    /// Crackers spawned (and required) on a level.
    pub fn crackers_needed(&self, level: u32) -> u32 {
        self.cracker_base_count + level
    }

    /// Player growth factor for a level, capped at the final level.
    pub fn growth(&self, level: u32) -> f32 {
        let steps = level.min(self.total_levels).saturating_sub(1);
        1.0 + steps as f32 * self.growth_per_level
    }

    /// Horizontal speed multiplier. A bigger player runs slower unless boosted.
    pub fn speed_scale(&self, growth: f32, boosted: bool) -> f32 {
        if boosted {
            self.speed_scale_peak
        } else {
            (self.speed_scale_peak - (growth - 1.0) * self.scale_falloff).max(self.speed_scale_floor)
        }
    }

    /// Jump power multiplier. Shrinks with growth down to a floor.
    pub fn jump_scale(&self, growth: f32) -> f32 {
        (1.0 - (growth - 1.0) * self.scale_falloff).max(self.jump_scale_floor)
    }
}
