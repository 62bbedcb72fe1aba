//! Per-tick integration and platform collision.

use crate::consts::{FALL_RECOVERY_MARGIN, PLAYER_H, PLAYER_W};
use crate::tuning::{Tuning, World};

use super::rect::Rect;
use super::state::Player;

/// Advance the player one tick: gravity, friction, speed and wall clamps,
/// one-sided platform landings, and the fall-out teleport. Landing refills
/// the jump budget.
pub fn physics_step(player: &mut Player, world: &World, platforms: &[Rect], tuning: &Tuning) {
    player.vel.y += world.gravity;
    player.vel.x *= world.friction;
    player.vel.x = player
        .vel
        .x
        .clamp(-tuning.max_run_speed, tuning.max_run_speed);

    player.pos.x += player.vel.x;
    if player.pos.x < 0.0 {
        player.pos.x = 0.0;
        player.vel.x = 0.0;
    }
    if player.pos.x + PLAYER_W > world.width {
        player.pos.x = world.width - PLAYER_W;
        player.vel.x = 0.0;
    }

    player.pos.y += player.vel.y;
    player.on_ground = false;

    // Landings happen only from above while falling. Each check runs against
    // the live player, so the last platform in list order that still matches
    // wins.
    for platform in platforms {
        let was_above = player.pos.y + PLAYER_H - player.vel.y <= platform.y;
        if player.rect().overlaps(platform) && player.vel.y >= 0.0 && was_above {
            player.pos.y = platform.y - PLAYER_H;
            player.vel.y = 0.0;
            player.on_ground = true;
            player.jumps_remaining = tuning.max_jumps;
        }
    }

    if player.pos.y > world.height + FALL_RECOVERY_MARGIN {
        player.respawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SPAWN_X, SPAWN_Y};
    use glam::Vec2;

    fn player_at(x: f32, y: f32, vel: Vec2) -> Player {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.pos = Vec2::new(x, y);
        player.vel = vel;
        player
    }

    #[test]
    fn test_falling_player_lands_on_platform() {
        let world = World::default();
        let tuning = Tuning::default();
        let platform = Rect::new(0.0, 100.0, 200.0, 20.0);
        let mut player = player_at(50.0, 30.0, Vec2::new(0.0, 10.0));
        player.jumps_remaining = 0;

        physics_step(&mut player, &world, &[platform], &tuning);

        assert!(player.on_ground);
        assert_eq!(player.pos.y, 100.0 - PLAYER_H);
        assert_eq!(player.vel.y, 0.0);
        assert_eq!(player.jumps_remaining, tuning.max_jumps);
    }

    #[test]
    fn test_rising_player_passes_through_platform() {
        let world = World::default();
        let tuning = Tuning::default();
        let platform = Rect::new(0.0, 100.0, 200.0, 20.0);
        // Overlapping the platform while moving up.
        let mut player = player_at(50.0, 110.0, Vec2::new(0.0, -5.0));

        physics_step(&mut player, &world, &[platform], &tuning);

        assert!(!player.on_ground);
        assert!(player.vel.y < 0.0);
    }

    #[test]
    fn test_side_overlap_does_not_land() {
        let world = World::default();
        let tuning = Tuning::default();
        let platform = Rect::new(0.0, 100.0, 200.0, 20.0);
        // Falling, but the previous bottom was already below the platform top.
        let mut player = player_at(50.0, 90.0, Vec2::new(0.0, 2.0));

        physics_step(&mut player, &world, &[platform], &tuning);

        assert!(!player.on_ground);
        assert!(player.vel.y > 0.0);
    }

    #[test]
    fn test_landed_player_stays_put() {
        let world = World::default();
        let tuning = Tuning::default();
        let platform = Rect::new(0.0, 100.0, 200.0, 20.0);
        let mut player = player_at(50.0, 30.0, Vec2::new(0.0, 10.0));
        for _ in 0..10 {
            physics_step(&mut player, &world, &[platform], &tuning);
        }
        let rest_y = player.pos.y;
        assert_eq!(rest_y, 100.0 - PLAYER_H);
        for _ in 0..100 {
            physics_step(&mut player, &world, &[platform], &tuning);
            assert_eq!(player.pos.y, rest_y);
            assert!(player.on_ground);
        }
    }

    #[test]
    fn test_wall_clamp_zeroes_velocity() {
        let world = World::default();
        let tuning = Tuning::default();
        let mut player = player_at(2.0, 200.0, Vec2::new(-10.0, 0.0));
        physics_step(&mut player, &world, &[], &tuning);
        assert_eq!(player.pos.x, 0.0);
        assert_eq!(player.vel.x, 0.0);

        let mut player = player_at(world.width - PLAYER_W - 1.0, 200.0, Vec2::new(10.0, 0.0));
        physics_step(&mut player, &world, &[], &tuning);
        assert_eq!(player.pos.x, world.width - PLAYER_W);
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn test_run_speed_clamp() {
        let world = World::default();
        let tuning = Tuning::default();
        let mut player = player_at(400.0, 200.0, Vec2::new(50.0, 0.0));
        physics_step(&mut player, &world, &[], &tuning);
        assert_eq!(player.vel.x, tuning.max_run_speed);
    }

    #[test]
    fn test_fall_out_teleports_to_spawn() {
        let world = World::default();
        let tuning = Tuning::default();
        let mut player = player_at(400.0, world.height + FALL_RECOVERY_MARGIN + 1.0, Vec2::new(3.0, 9.0));
        physics_step(&mut player, &world, &[], &tuning);
        assert_eq!(player.pos, Vec2::new(SPAWN_X, SPAWN_Y));
        assert_eq!(player.vel, Vec2::ZERO);
    }
}
