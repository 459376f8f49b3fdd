//! Fixed timestep simulation tick
//!
//! One `tick()` call advances the world by one ~16 ms step: movement
//! intent, integration, collision resolution, particle aging and the
//! level/state machine, in that order. The 1 Hz countdown runs through
//! `countdown()` on its own schedule. Both are plain state transforms;
//! everything observable is returned as `GameEvent`s for the caller to
//! route to its notification and score boundaries.

use glam::Vec2;

use super::input::MoveIntent;
use super::particles;
use super::physics;
use super::scenes;
use super::state::{GameEvent, GamePhase, GameState, Outcome};
use crate::consts::*;

/// Advance the game by one simulation tick.
pub fn tick(state: &mut GameState, intent: MoveIntent) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Playing => {
            state.tick_count += 1;
            apply_intent(state, intent);
            step_player(state);
            resolve_pickups(state, &mut events);
            resolve_obstacles(state, &mut events);
            check_level_clear(state, &mut events);
            particles::advance(&mut state.particles);
        }

        GamePhase::LevelTransition => {
            state.tick_count += 1;
            // World is on hold; only the celebration particles keep moving
            particles::advance(&mut state.particles);

            state.transition_ticks = state.transition_ticks.saturating_sub(1);
            if state.transition_ticks == 0
                && let Some(next) = state.scene.next()
            {
                state.level += 1;
                scenes::load_scene(state, next);
                state.player.respawn();
                state.phase = GamePhase::Playing;
                events.push(GameEvent::SceneLoaded {
                    scene: next,
                    level: state.level,
                });
            }
        }

        GamePhase::Idle | GamePhase::Won | GamePhase::GameOver => {}
    }

    events
}

/// Advance the 1 Hz countdown by one second.
pub fn countdown(state: &mut GameState) -> Vec<GameEvent> {
    if !state.phase.is_playing() {
        return Vec::new();
    }
    state.time_left = state.time_left.saturating_sub(1);
    if state.time_left == 0 {
        state.phase = GamePhase::GameOver;
        return vec![GameEvent::Finished {
            outcome: Outcome::TimedOut,
        }];
    }
    Vec::new()
}

fn apply_intent(state: &mut GameState, intent: MoveIntent) {
    let player = &mut state.player;
    player.vel.x = intent.vx;
    if intent.vx > 0.0 {
        player.facing_right = true;
    } else if intent.vx < 0.0 {
        player.facing_right = false;
    }
    if intent.jump && !player.is_jumping {
        player.vel.y = JUMP_VELOCITY;
        player.is_jumping = true;
    }
}

/// Integrate and resolve platform contact, then commit the new position.
fn step_player(state: &mut GameState) {
    let step = physics::integrate(&state.player);
    let mut new_y = step.new_y;
    let mut new_vy = step.new_vy;

    if let Some(snap_y) =
        super::collision::platform_landing(step.new_x, step.new_y, state.player.vel.y, &state.platforms)
    {
        new_y = snap_y;
        new_vy = 0.0;
        state.player.is_jumping = false;
    }

    state.player.pos = Vec2::new(step.new_x, new_y);
    state.player.vel.y = new_vy;
}

fn resolve_pickups(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let player_box = state.player.aabb();
    for i in 0..state.collectibles.len() {
        let c = state.collectibles[i];
        if c.collected || !player_box.overlaps(&c.aabb()) {
            continue;
        }
        state.collectibles[i].collected = true;
        state.score += c.points;
        particles::spawn_burst(&mut state.particles, &mut state.rng, c.center(), c.kind);
        events.push(GameEvent::Pickup {
            kind: c.kind,
            points: c.points,
        });
    }
}

/// Hazard contact is tested every tick with no cooldown: a respawn that
/// lands inside a hazard takes damage again on the very next tick.
fn resolve_obstacles(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let player_box = state.player.aabb();
    let mut hit_any = false;
    for o in &state.obstacles {
        if !player_box.overlaps(&o.aabb()) {
            continue;
        }
        hit_any = true;
        state.lives = state.lives.saturating_sub(1);
        events.push(GameEvent::ObstacleHit {
            kind: o.kind,
            lives_left: state.lives,
        });
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            events.push(GameEvent::Finished {
                outcome: Outcome::LivesExhausted,
            });
            break;
        }
    }
    if hit_any {
        state.player.respawn();
    }
}

fn check_level_clear(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.phase.is_over() {
        return;
    }
    if !state.collectibles.iter().all(|c| c.collected) {
        return;
    }
    if state.level < MAX_LEVEL {
        events.push(GameEvent::LevelCleared { scene: state.scene });
        state.phase = GamePhase::LevelTransition;
        state.transition_ticks = LEVEL_TRANSITION_TICKS;
    } else {
        state.phase = GamePhase::Won;
        events.push(GameEvent::Finished {
            outcome: Outcome::Won,
        });
    }
}
