//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (scene template order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod particles;
pub mod physics;
pub mod scenes;
pub mod state;
pub mod tick;

pub use collision::{Aabb, platform_landing};
pub use input::{InputController, Key, MoveIntent};
pub use scenes::load_scene;
pub use state::{
    Collectible, CollectibleKind, GameEvent, GamePhase, GameState, Npc, Obstacle, ObstacleKind,
    Outcome, Particle, Platform, Player, SceneId, MAX_PARTICLES,
};
pub use tick::{countdown, tick};
