//! Sprite descriptor tables
//!
//! Entity kinds map to a flat color and a HUD glyph through these
//! tables; nothing downstream branches on strings.

use crate::sim::{CollectibleKind, ObstacleKind, SceneId};

/// RGBA, 8 bits per channel
pub type Color = [u8; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteDescriptor {
    pub color: Color,
    pub glyph: char,
}

pub const PLAYER_COLOR: Color = [46, 204, 113, 255];
pub const PLATFORM_COLOR: Color = [121, 85, 72, 255];
pub const NPC_COLOR: Color = [255, 213, 79, 255];

pub fn collectible(kind: CollectibleKind) -> SpriteDescriptor {
    match kind {
        CollectibleKind::Seeds => SpriteDescriptor { color: [141, 110, 99, 255], glyph: '🌱' },
        CollectibleKind::Leaf => SpriteDescriptor { color: [104, 159, 56, 255], glyph: '🍃' },
        CollectibleKind::Tree => SpriteDescriptor { color: [56, 142, 60, 255], glyph: '🌳' },
        CollectibleKind::Water => SpriteDescriptor { color: [79, 195, 247, 255], glyph: '💧' },
        CollectibleKind::Fish => SpriteDescriptor { color: [255, 138, 101, 255], glyph: '🐟' },
        CollectibleKind::Shell => SpriteDescriptor { color: [240, 224, 200, 255], glyph: '🐚' },
        CollectibleKind::Solar => SpriteDescriptor { color: [255, 193, 7, 255], glyph: '☀' },
        CollectibleKind::Recycle => SpriteDescriptor { color: [38, 166, 154, 255], glyph: '♻' },
        CollectibleKind::Star => SpriteDescriptor { color: [255, 235, 59, 255], glyph: '⭐' },
    }
}

pub fn obstacle(kind: ObstacleKind) -> SpriteDescriptor {
    match kind {
        ObstacleKind::Trash => SpriteDescriptor { color: [97, 97, 97, 255], glyph: '🗑' },
        ObstacleKind::Oil => SpriteDescriptor { color: [33, 33, 33, 255], glyph: '🛢' },
        ObstacleKind::Smog => SpriteDescriptor { color: [158, 158, 158, 255], glyph: '🏭' },
    }
}

/// Scene-tinted sky
pub fn background(scene: SceneId) -> Color {
    match scene {
        SceneId::Forest => [200, 230, 201, 255],
        SceneId::River => [179, 229, 252, 255],
        SceneId::City => [207, 216, 220, 255],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_are_distinct_per_kind() {
        let kinds = [
            CollectibleKind::Seeds,
            CollectibleKind::Leaf,
            CollectibleKind::Tree,
            CollectibleKind::Water,
            CollectibleKind::Fish,
            CollectibleKind::Shell,
            CollectibleKind::Solar,
            CollectibleKind::Recycle,
            CollectibleKind::Star,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in kinds.iter().skip(i + 1) {
                assert_ne!(collectible(*a).glyph, collectible(*b).glyph);
            }
        }
    }
}
