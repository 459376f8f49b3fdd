//! Scene templates for the three levels
//!
//! Layouts are fixed data, kept in const tables. Loading a scene copies
//! the template into session state; collectibles get index-derived ids and
//! start uncollected, everything else is immutable for the scene's life.

use glam::Vec2;

use super::state::{
    Collectible, CollectibleKind, GameState, Npc, Obstacle, ObstacleKind, Platform, SceneId,
};

/// Platform layout shared by all scenes: one ground slab plus three
/// elevated ledges at increasing height.
pub const PLATFORM_LAYOUT: [Platform; 4] = [
    Platform { x: 0.0, y: 350.0, w: 800.0, h: 50.0 },
    Platform { x: 200.0, y: 280.0, w: 100.0, h: 20.0 },
    Platform { x: 400.0, y: 220.0, w: 100.0, h: 20.0 },
    Platform { x: 600.0, y: 160.0, w: 100.0, h: 20.0 },
];

struct SceneTemplate {
    collectibles: &'static [(CollectibleKind, f32, f32, u32)],
    obstacles: &'static [(ObstacleKind, f32, f32, f32, f32)],
    npc: (f32, f32, &'static str),
}

const FOREST: SceneTemplate = SceneTemplate {
    collectibles: &[
        (CollectibleKind::Seeds, 150.0, 280.0, 15),
        (CollectibleKind::Leaf, 430.0, 180.0, 10),
        (CollectibleKind::Tree, 630.0, 120.0, 20),
    ],
    obstacles: &[(ObstacleKind::Trash, 300.0, 320.0, 40.0, 30.0)],
    npc: (700.0, 310.0, "Plant seeds and the forest grows back!"),
};

const RIVER: SceneTemplate = SceneTemplate {
    collectibles: &[
        (CollectibleKind::Water, 150.0, 280.0, 10),
        (CollectibleKind::Fish, 430.0, 180.0, 15),
        (CollectibleKind::Shell, 630.0, 120.0, 20),
    ],
    obstacles: &[
        (ObstacleKind::Oil, 250.0, 330.0, 60.0, 20.0),
        (ObstacleKind::Trash, 500.0, 320.0, 40.0, 30.0),
    ],
    npc: (700.0, 310.0, "A clean river means healthy fish!"),
};

const CITY: SceneTemplate = SceneTemplate {
    collectibles: &[
        (CollectibleKind::Solar, 150.0, 280.0, 15),
        (CollectibleKind::Recycle, 430.0, 180.0, 10),
        (CollectibleKind::Star, 630.0, 120.0, 25),
    ],
    obstacles: &[
        (ObstacleKind::Trash, 150.0, 320.0, 40.0, 30.0),
        (ObstacleKind::Smog, 350.0, 300.0, 50.0, 50.0),
    ],
    npc: (700.0, 310.0, "Solar panels power the whole city!"),
};

fn template(id: SceneId) -> &'static SceneTemplate {
    match id {
        SceneId::Forest => &FOREST,
        SceneId::River => &RIVER,
        SceneId::City => &CITY,
    }
}

/// NPC box edge length (decorative only)
const NPC_SIZE: f32 = 40.0;

/// Replace the active scene's entities with a fresh copy of the template.
///
/// Score, lives and the countdown are untouched; those belong to the
/// session, not the scene.
pub fn load_scene(state: &mut GameState, id: SceneId) {
    let tpl = template(id);

    state.scene = id;
    state.platforms = PLATFORM_LAYOUT.to_vec();
    state.collectibles = tpl
        .collectibles
        .iter()
        .enumerate()
        .map(|(i, &(kind, x, y, points))| Collectible {
            id: i as u32,
            kind,
            pos: Vec2::new(x, y),
            points,
            collected: false,
        })
        .collect();
    state.obstacles = tpl
        .obstacles
        .iter()
        .map(|&(kind, x, y, w, h)| Obstacle { kind, x, y, w, h })
        .collect();
    let (nx, ny, message) = tpl.npc;
    state.npc = Some(Npc {
        x: nx,
        y: ny,
        w: NPC_SIZE,
        h: NPC_SIZE,
        message: message.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scene_has_three_collectibles_and_an_npc() {
        for id in [SceneId::Forest, SceneId::River, SceneId::City] {
            let mut state = GameState::new(0);
            load_scene(&mut state, id);
            assert_eq!(state.collectibles.len(), 3);
            assert!(state.npc.is_some());
            assert!(!state.obstacles.is_empty());
            assert_eq!(state.platforms.len(), 4);
        }
    }

    #[test]
    fn reload_yields_fresh_collectibles() {
        let mut state = GameState::new(0);
        for c in &mut state.collectibles {
            c.collected = true;
        }
        load_scene(&mut state, SceneId::Forest);
        assert!(state.collectibles.iter().all(|c| !c.collected));
        let ids: Vec<u32> = state.collectibles.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn platform_layout_is_shared() {
        let mut forest = GameState::new(0);
        let mut city = GameState::new(0);
        load_scene(&mut forest, SceneId::Forest);
        load_scene(&mut city, SceneId::City);
        assert_eq!(forest.platforms, city.platforms);
    }
}
