//! Player input handling
//!
//! Key events update a persistent movement intent that the simulation
//! samples once per tick, so held-key movement is independent of host
//! key-repeat timing. One deliberate quirk is kept from the original
//! control scheme: releasing either horizontal key clears horizontal
//! intent, even if the opposite key is still held.

use serde::{Deserialize, Serialize};

use crate::consts::MOVE_SPEED;

/// Keys the game understands. Anything else maps to `Other` and is a
/// silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Space,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Horizontal {
    Left,
    Right,
}

/// What the player wants this tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveIntent {
    /// Horizontal velocity to apply (px/tick)
    pub vx: f32,
    /// One-shot jump request
    pub jump: bool,
}

/// Tracks held movement keys and pending one-shot actions between ticks
#[derive(Debug, Default)]
pub struct InputController {
    horizontal: Option<Horizontal>,
    jump_queued: bool,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.horizontal = Some(Horizontal::Left),
            Key::Right => self.horizontal = Some(Horizontal::Right),
            Key::Up | Key::Space => self.jump_queued = true,
            Key::Other => {}
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            // Either horizontal release stops movement (see module docs)
            Key::Left | Key::Right => self.horizontal = None,
            Key::Up | Key::Space | Key::Other => {}
        }
    }

    /// Sample the intent for one tick. Jump requests are consumed here;
    /// a request sampled while the player is airborne is simply dropped
    /// by the simulation.
    pub fn sample(&mut self) -> MoveIntent {
        let vx = match self.horizontal {
            Some(Horizontal::Left) => -MOVE_SPEED,
            Some(Horizontal::Right) => MOVE_SPEED,
            None => 0.0,
        };
        let jump = std::mem::take(&mut self.jump_queued);
        MoveIntent { vx, jump }
    }

    /// Drop all held intent (session start/reset)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
