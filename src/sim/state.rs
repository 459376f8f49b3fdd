//! Game state and core simulation types
//!
//! Everything a running session owns lives here. The aggregate is plain
//! data with serde derives so sessions can be snapshotted and replayed.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::scenes;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Session exists but has not been started (also the reset target)
    Idle,
    /// Active gameplay
    Playing,
    /// Short hold between clearing a level and loading the next scene
    LevelTransition,
    /// All three scenes cleared (terminal)
    Won,
    /// Lives exhausted or timer expired (terminal)
    GameOver,
}

impl GamePhase {
    /// Input and countdown are live in these phases
    pub fn is_playing(&self) -> bool {
        matches!(self, GamePhase::Playing | GamePhase::LevelTransition)
    }

    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::GameOver)
    }
}

/// One of the three fixed level layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneId {
    Forest,
    River,
    City,
}

impl SceneId {
    /// Scene progression order: forest, then river, then city
    pub fn next(&self) -> Option<SceneId> {
        match self {
            SceneId::Forest => Some(SceneId::River),
            SceneId::River => Some(SceneId::City),
            SceneId::City => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SceneId::Forest => "forest",
            SceneId::River => "river",
            SceneId::City => "city",
        }
    }
}

/// Collectible variants across the three scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    Seeds,
    Leaf,
    Tree,
    Water,
    Fish,
    Shell,
    Solar,
    Recycle,
    Star,
}

impl CollectibleKind {
    pub fn label(&self) -> &'static str {
        match self {
            CollectibleKind::Seeds => "seeds",
            CollectibleKind::Leaf => "leaf",
            CollectibleKind::Tree => "sapling",
            CollectibleKind::Water => "clean water",
            CollectibleKind::Fish => "fish",
            CollectibleKind::Shell => "river shell",
            CollectibleKind::Solar => "solar panel",
            CollectibleKind::Recycle => "recycling",
            CollectibleKind::Star => "eco star",
        }
    }
}

/// Hazard variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Trash,
    Oil,
    Smog,
}

impl ObstacleKind {
    pub fn label(&self) -> &'static str {
        match self {
            ObstacleKind::Trash => "trash pile",
            ObstacleKind::Oil => "oil slick",
            ObstacleKind::Smog => "smog cloud",
        }
    }
}

/// The player avatar (fixed 30x30 box)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub is_jumping: bool,
    pub facing_right: bool,
}

impl Player {
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            vel: Vec2::ZERO,
            is_jumping: false,
            facing_right: true,
        }
    }

    /// Snap back to the spawn point, discarding this tick's velocity
    pub fn respawn(&mut self) {
        self.pos = Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
        self.vel = Vec2::ZERO;
        self.is_jumping = false;
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, PLAYER_SIZE, PLAYER_SIZE)
    }
}

/// A static platform rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Platform {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.w, self.h)
    }
}

/// A pickup item (20x20 box, collected at most once)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    pub kind: CollectibleKind,
    pub pos: Vec2,
    pub points: u32,
    pub collected: bool,
}

impl Collectible {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, COLLECTIBLE_SIZE, COLLECTIBLE_SIZE)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(COLLECTIBLE_SIZE / 2.0)
    }
}

/// A static hazard; contact is repeatable, there is no cooldown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Obstacle {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.w, self.h)
    }
}

/// Decorative character. Rendered only; never collided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub message: String,
}

/// A short-lived pickup-burst particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks remaining; retired at <= 0
    pub life: i32,
    /// Kind of the collectible that spawned the burst (color lookup)
    pub kind: CollectibleKind,
}

/// Hard ceiling on concurrent particles; oldest are evicted first
pub const MAX_PARTICLES: usize = 512;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    LivesExhausted,
    TimedOut,
}

/// Observable things that happened during one tick
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Pickup {
        kind: CollectibleKind,
        points: u32,
    },
    ObstacleHit {
        kind: ObstacleKind,
        lives_left: u8,
    },
    LevelCleared {
        scene: SceneId,
    },
    SceneLoaded {
        scene: SceneId,
        level: u8,
    },
    Finished {
        outcome: Outcome,
    },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// RNG stream (particle velocity jitter)
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    /// Seconds remaining on the countdown
    pub time_left: u32,
    /// 1..=3
    pub level: u8,
    pub lives: u8,
    pub scene: SceneId,
    /// Simulation tick counter
    pub tick_count: u64,
    /// Ticks remaining in a level transition hold
    pub transition_ticks: u32,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub collectibles: Vec<Collectible>,
    pub obstacles: Vec<Obstacle>,
    pub npc: Option<Npc>,
    pub particles: Vec<Particle>,
}

impl GameState {
    /// Fresh idle session with the forest scene staged
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            time_left: START_TIME_SECS,
            level: 1,
            lives: START_LIVES,
            scene: SceneId::Forest,
            tick_count: 0,
            transition_ticks: 0,
            player: Player::spawn(),
            platforms: Vec::new(),
            collectibles: Vec::new(),
            obstacles: Vec::new(),
            npc: None,
            particles: Vec::new(),
        };
        scenes::load_scene(&mut state, SceneId::Forest);
        state
    }

    /// Whether every collectible of the three scenes was gathered in order
    pub fn won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    /// Seconds played so far
    pub fn elapsed_seconds(&self) -> u32 {
        START_TIME_SECS - self.time_left
    }
}
