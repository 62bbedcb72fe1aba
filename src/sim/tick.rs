//! The per-frame simulation driver.

use super::physics;
use super::state::{GamePhase, GameSession};

/// Control sample for a single tick. Held flags persist across frames;
/// `jump` is a one-shot the driver clears after the tick runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Steer left this tick.
    pub left: bool,
    /// Steer right this tick.
    pub right: bool,
    /// Edge-triggered jump attempt.
    pub jump: bool,
}

/// Advance the session by one display frame worth `delta_ms` of wall time.
///
/// The session clock always moves; everything else is phase-gated. Within a
/// Playing tick the order is fixed: stamina, steering, jump, physics,
/// pickups, transition countdown, stat refresh.
pub fn tick(session: &mut GameSession, input: &TickInput, delta_ms: f64) {
    let delta = delta_ms.clamp(0.0, session.tuning.max_frame_delta_ms);
    session.now_ms += delta;

    match session.phase {
        GamePhase::Menu | GamePhase::Finished => return,
        GamePhase::Shop => {
            // Boosts can lapse while the overlay is up.
            session.refresh_player_stats();
            return;
        }
        GamePhase::Playing => {}
    }

    if session.level_start_ms.is_none() {
        session.level_start_ms = Some(session.now_ms);
    }
    // The level timer freezes during the clear countdown; physics does not.
    if session.transition_ticks == 0 {
        session.level_elapsed_ms += delta;
    }

    let no_drain = session.no_drain_active();
    let steering = input.left || input.right;
    session
        .player
        .update_stamina(steering, no_drain, (delta / 1000.0) as f32, &session.tuning);

    if !session.player.exhausted {
        if input.left {
            session.player.vel.x -= session.player.speed;
            session.player.facing = -1.0;
        }
        if input.right {
            session.player.vel.x += session.player.speed;
            session.player.facing = 1.0;
        }
    }
    if input.jump {
        session.try_jump();
    }

    physics::physics_step(
        &mut session.player,
        &session.world,
        &session.platforms,
        &session.tuning,
    );

    session.collect_crackers();
    session.advance_transition();
    session.refresh_player_stats();
}
