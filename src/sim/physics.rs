//! Player physics: Euler integration with constant gravity
//!
//! Runs once per tick. Horizontal motion is clamped to the play field;
//! vertical motion is unclamped and relies on platform contact to stop a
//! fall. Gravity has no terminal-velocity cap.

use super::state::Player;
use crate::consts::*;

/// Provisional result of one integration step, before collision
/// resolution commits it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integration {
    pub new_x: f32,
    pub new_y: f32,
    pub new_vy: f32,
}

pub fn integrate(player: &Player) -> Integration {
    Integration {
        new_x: (player.pos.x + player.vel.x).clamp(0.0, PLAYER_MAX_X),
        new_y: player.pos.y + player.vel.y,
        new_vy: player.vel.y + GRAVITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn player_at(x: f32, y: f32, vx: f32, vy: f32) -> Player {
        Player {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            is_jumping: false,
            facing_right: true,
        }
    }

    #[test]
    fn gravity_accumulates_each_tick() {
        let mut player = player_at(100.0, 100.0, 0.0, 0.0);
        for tick in 1..=40 {
            let step = integrate(&player);
            player.pos = Vec2::new(step.new_x, step.new_y);
            player.vel.y = step.new_vy;
            assert!((player.vel.y - GRAVITY * tick as f32).abs() < 1e-4);
        }
        assert!((player.vel.y - 32.0).abs() < 1e-4);
    }

    #[test]
    fn falling_y_increases_monotonically() {
        let mut player = player_at(100.0, 100.0, 0.0, 0.0);
        let mut last_y = player.pos.y;
        // First step has zero velocity, y holds; after that it only grows
        for _ in 0..40 {
            let step = integrate(&player);
            player.pos = Vec2::new(step.new_x, step.new_y);
            player.vel.y = step.new_vy;
            assert!(player.pos.y >= last_y);
            last_y = player.pos.y;
        }
    }

    #[test]
    fn x_clamps_at_both_edges() {
        let left = integrate(&player_at(2.0, 100.0, -MOVE_SPEED, 0.0));
        assert_eq!(left.new_x, 0.0);
        let right = integrate(&player_at(768.0, 100.0, MOVE_SPEED, 0.0));
        assert_eq!(right.new_x, PLAYER_MAX_X);
    }

    proptest! {
        #[test]
        fn x_never_leaves_play_field(
            start_x in 0.0f32..=PLAYER_MAX_X,
            vxs in proptest::collection::vec(-20.0f32..20.0, 1..200),
        ) {
            let mut player = player_at(start_x, 100.0, 0.0, 0.0);
            for vx in vxs {
                player.vel.x = vx;
                let step = integrate(&player);
                player.pos.x = step.new_x;
                prop_assert!((0.0..=PLAYER_MAX_X).contains(&player.pos.x));
            }
        }
    }
}
