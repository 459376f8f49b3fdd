//! Flat-color draw-list pipeline
//!
//! Reads the game state once per frame and produces an ordered list of
//! colored rectangles plus a HUD summary. Pure function of the state;
//! presentation backends (canvas, terminal, test assertions) consume the
//! frame however they like.

pub mod sprites;

pub use sprites::{Color, SpriteDescriptor};

use crate::consts::*;
use crate::sim::GameState;

/// One filled rectangle, in play-field coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: Color,
}

/// HUD summary line
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub score: u32,
    pub lives: u8,
    pub time_left: u32,
    pub level: u8,
    pub scene: &'static str,
    /// Flavor line from the scene's NPC, if one is present
    pub npc_message: Option<String>,
    pub game_over: bool,
    pub won: bool,
}

/// One rendered frame, back-to-front
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub rects: Vec<Rect>,
    pub hud: Hud,
}

/// Build the draw list for the current state.
pub fn frame(state: &GameState) -> Frame {
    let mut rects = Vec::new();

    rects.push(Rect {
        x: 0.0,
        y: 0.0,
        w: PLAY_WIDTH,
        h: PLAY_HEIGHT,
        color: sprites::background(state.scene),
    });

    for p in &state.platforms {
        rects.push(Rect {
            x: p.x,
            y: p.y,
            w: p.w,
            h: p.h,
            color: sprites::PLATFORM_COLOR,
        });
    }

    if let Some(npc) = &state.npc {
        rects.push(Rect {
            x: npc.x,
            y: npc.y,
            w: npc.w,
            h: npc.h,
            color: sprites::NPC_COLOR,
        });
    }

    for o in &state.obstacles {
        rects.push(Rect {
            x: o.x,
            y: o.y,
            w: o.w,
            h: o.h,
            color: sprites::obstacle(o.kind).color,
        });
    }

    for c in state.collectibles.iter().filter(|c| !c.collected) {
        rects.push(Rect {
            x: c.pos.x,
            y: c.pos.y,
            w: COLLECTIBLE_SIZE,
            h: COLLECTIBLE_SIZE,
            color: sprites::collectible(c.kind).color,
        });
    }

    for p in &state.particles {
        rects.push(Rect {
            x: p.pos.x,
            y: p.pos.y,
            w: 4.0,
            h: 4.0,
            color: sprites::collectible(p.kind).color,
        });
    }

    rects.push(Rect {
        x: state.player.pos.x,
        y: state.player.pos.y,
        w: PLAYER_SIZE,
        h: PLAYER_SIZE,
        color: sprites::PLAYER_COLOR,
    });

    Frame {
        rects,
        hud: Hud {
            score: state.score,
            lives: state.lives,
            time_left: state.time_left,
            level: state.level,
            scene: state.scene.label(),
            npc_message: state.npc.as_ref().map(|n| n.message.clone()),
            game_over: state.phase.is_over(),
            won: state.won(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    #[test]
    fn frame_layers_background_first_player_last() {
        let state = GameState::new(1);
        let frame = frame(&state);
        let first = frame.rects.first().unwrap();
        assert_eq!((first.w, first.h), (PLAY_WIDTH, PLAY_HEIGHT));
        let last = frame.rects.last().unwrap();
        assert_eq!(last.color, sprites::PLAYER_COLOR);
    }

    #[test]
    fn collected_items_disappear_from_the_frame() {
        let mut state = GameState::new(2);
        let before = frame(&state).rects.len();
        state.collectibles[0].collected = true;
        let after = frame(&state).rects.len();
        assert_eq!(after, before - 1);
    }

    #[test]
    fn hud_mirrors_session_counters() {
        let mut state = GameState::new(3);
        state.score = 25;
        state.lives = 2;
        state.time_left = 90;
        state.phase = GamePhase::GameOver;
        let hud = frame(&state).hud;
        assert_eq!(hud.score, 25);
        assert_eq!(hud.lives, 2);
        assert_eq!(hud.time_left, 90);
        assert_eq!(hud.scene, "forest");
        assert!(hud.npc_message.is_some());
        assert!(hud.game_over);
        assert!(!hud.won);
    }
}
