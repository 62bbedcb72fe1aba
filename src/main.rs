//! Salty Crackers entry point
//!
//! The browser build ships as a cdylib driven through `web::SaltyCrackers`;
//! this binary is a native smoke run over the same simulation.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    log::info!("Salty Crackers (native) starting...");
    println!("Salty Crackers - simulation core");
    println!("Build for wasm32 to play in the browser.");
    println!("\nRunning scripted demo...");

    demo_run();

    println!("\nRunning level clear smoke test...");
    smoke_level_clear();
}

// WASM builds are driven from JS through the `web` module, this is just to
// satisfy the compiler.
#[cfg(target_arch = "wasm32")]
fn main() {}

/// A scripted minute of play: hold right, double jump every 1.5 seconds.
#[cfg(not(target_arch = "wasm32"))]
fn demo_run() {
    use salty_crackers::sim::{GameSession, TickInput, tick};

    let mut session = GameSession::new(0xC0FFEE);
    session.start();

    let mut input = TickInput::default();
    for i in 0u32..3600 {
        input.right = true;
        input.jump = i % 90 == 0 || i % 90 == 12;
        tick(&mut session, &input, 1000.0 / 60.0);

        if i % 600 == 0 {
            let hud = session.hud();
            log::info!(
                "t={}s level={} crackers={}/{} stamina={:.0}",
                i / 60,
                hud.level,
                hud.crackers_collected,
                hud.crackers_target,
                hud.stamina
            );
        }
    }

    let hud = session.hud();
    println!(
        "Demo finished on level {} with {}/{} crackers and {:.0} stamina",
        hud.level, hud.crackers_collected, hud.crackers_target, hud.stamina
    );
}

/// Clears level 1 by warping onto each cracker, then waits out the
/// transition countdown into the shop.
#[cfg(not(target_arch = "wasm32"))]
fn smoke_level_clear() {
    use glam::Vec2;
    use salty_crackers::consts::{PLAYER_H, PLAYER_W};
    use salty_crackers::sim::{GamePhase, GameSession, TickInput, tick};

    let mut session = GameSession::new(7);
    session.start();

    for i in 0..session.crackers.len() {
        let c = session.crackers[i].rect;
        session.player.pos = Vec2::new(
            c.x + c.w / 2.0 - PLAYER_W / 2.0,
            c.y + c.h / 2.0 - PLAYER_H / 2.0,
        );
        session.player.vel = Vec2::ZERO;
        tick(&mut session, &TickInput::default(), 16.0);
    }
    assert_eq!(session.crackers_collected, session.crackers_target);

    for _ in 0..session.tuning.transition_ticks {
        tick(&mut session, &TickInput::default(), 16.0);
    }
    assert_eq!(session.phase, GamePhase::Shop);
    assert_eq!(session.economy.coins, session.tuning.clear_reward_coins);

    println!("Level clear smoke test passed!");
}
