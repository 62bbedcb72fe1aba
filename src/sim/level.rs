//! Deterministic level construction.
//!
//! The platform layout is fixed relative to the world bounds and cracker
//! placement is a pure function of the level number, so every session sees the
//! same course. The seeded RNG only feeds the cosmetic bob phases.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::CRACKER_SIZE;
use crate::tuning::World;

use super::rect::Rect;

/// A collectible. `bob_phase` only drives the idle animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cracker {
    pub rect: Rect,
    pub collected: bool,
    pub bob_phase: f32,
}

/// Mix a level number into the session seed.
pub fn level_seed(seed: u64, level: u32) -> u64 {
    (level as u64).wrapping_mul(2654435761).wrapping_add(seed)
}

/// The fixed course: ground slab plus five floating ledges.
pub fn build_platforms(world: &World) -> Vec<Rect> {
    let h = world.height;
    vec![
        Rect::new(0.0, h - 52.0, world.width, 52.0),
        Rect::new(80.0, h - 150.0, 160.0, 20.0),
        Rect::new(300.0, h - 250.0, 180.0, 20.0),
        Rect::new(560.0, h - 340.0, 180.0, 20.0),
        Rect::new(770.0, h - 260.0, 130.0, 20.0),
        Rect::new(500.0, h - 105.0, 120.0, 20.0),
    ]
}

/// Scatter `count` crackers over the floating ledges, never the ground.
/// Positions come from a modular walk over the ledge list so they are stable
/// across sessions; the RNG is consumed only for bob phases.
pub fn scatter_crackers(
    level: u32,
    count: u32,
    platforms: &[Rect],
    rng: &mut Pcg32,
) -> Vec<Cracker> {
    let ledges = platforms.len() - 1;
    let mut crackers = Vec::with_capacity(count as usize);
    for i in 0..count {
        let ledge = platforms[1 + (i + level) as usize % ledges];
        let span = (ledge.w - 40.0).max(30.0) as u32;
        let x = ledge.x + 20.0 + ((i * 67 + level * 29) % span) as f32;
        let y = ledge.y - 22.0;
        crackers.push(Cracker {
            rect: Rect::new(x, y, CRACKER_SIZE, CRACKER_SIZE),
            collected: false,
            bob_phase: rng.random_range(0.0..std::f32::consts::TAU),
        });
    }
    crackers
}
