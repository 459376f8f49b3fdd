//! Axis-aligned bounding-box collision detection
//!
//! Every interaction in the game (landing, pickup, hazard contact) reduces
//! to the same rectangle overlap test. Platform landing additionally snaps
//! the player onto the platform's top surface.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Platform;
use crate::consts::*;

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Strict overlap test; shared edges do not count as contact
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Test the player's provisional position against every platform and
/// return the snapped y of the landing surface, if any.
///
/// A landing requires downward (or resting) motion and the player's
/// bottom edge inside the platform's top band. Platforms are evaluated
/// in list order and the last match wins.
pub fn platform_landing(new_x: f32, new_y: f32, vy: f32, platforms: &[Platform]) -> Option<f32> {
    if vy < 0.0 {
        return None;
    }
    let bottom = new_y + PLAYER_SIZE;
    let mut snapped = None;
    for p in platforms {
        let x_overlap = new_x + PLAYER_SIZE > p.x && new_x < p.x + p.w;
        let in_band = bottom >= p.y && bottom <= p.y + p.h + LANDING_BAND;
        if x_overlap && in_band {
            snapped = Some(p.y - PLAYER_SIZE);
        }
    }
    snapped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(x: f32, y: f32, w: f32, h: f32) -> Platform {
        Platform { x, y, w, h }
    }

    #[test]
    fn overlap_basics() {
        let a = Aabb::new(0.0, 0.0, 30.0, 30.0);
        assert!(a.overlaps(&Aabb::new(20.0, 20.0, 20.0, 20.0)));
        assert!(!a.overlaps(&Aabb::new(40.0, 0.0, 20.0, 20.0)));
        // Touching edges are not contact
        assert!(!a.overlaps(&Aabb::new(30.0, 0.0, 20.0, 20.0)));
    }

    #[test]
    fn landing_snaps_to_platform_top() {
        let platforms = [platform(0.0, 350.0, 800.0, 50.0)];
        // Bottom edge at 352, two px into the slab, falling
        let snapped = platform_landing(100.0, 322.0, 4.0, &platforms);
        assert_eq!(snapped, Some(350.0 - PLAYER_SIZE));
    }

    #[test]
    fn rising_player_passes_through() {
        let platforms = [platform(0.0, 350.0, 800.0, 50.0)];
        assert_eq!(platform_landing(100.0, 322.0, -6.0, &platforms), None);
    }

    #[test]
    fn below_the_band_is_a_miss() {
        let platforms = [platform(200.0, 280.0, 100.0, 20.0)];
        // Bottom edge at 330, band ends at 280 + 20 + 10 = 310
        assert_eq!(platform_landing(220.0, 300.0, 2.0, &platforms), None);
    }

    #[test]
    fn horizontal_miss_is_a_miss() {
        let platforms = [platform(200.0, 280.0, 100.0, 20.0)];
        // Right edge at 190, platform starts at 200
        assert_eq!(platform_landing(160.0, 252.0, 2.0, &platforms), None);
    }

    #[test]
    fn last_matching_platform_wins() {
        let platforms = [
            platform(0.0, 300.0, 800.0, 20.0),
            platform(0.0, 305.0, 800.0, 20.0),
        ];
        // Bottom edge at 305 sits in both top bands
        let snapped = platform_landing(100.0, 275.0, 1.0, &platforms);
        assert_eq!(snapped, Some(305.0 - PLAYER_SIZE));
    }

    #[test]
    fn resting_contact_keeps_snapping() {
        let platforms = [platform(0.0, 350.0, 800.0, 50.0)];
        // Already standing exactly on top with vy == 0
        let snapped = platform_landing(100.0, 320.0, 0.0, &platforms);
        assert_eq!(snapped, Some(320.0));
    }
}
