//! Game settings and preferences
//!
//! Host-side knobs; nothing here changes gameplay outcomes, only how much
//! visual garnish the session keeps around.

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Maximum live particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 64,
            QualityPreset::Medium => 256,
            QualityPreset::High => 512,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Particle effects on pickups
    pub particles: bool,
    /// Reduced motion (drops particle bursts entirely)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective particle count cap (respects toggles)
    pub fn max_particles(&self) -> usize {
        if !self.particles || self.reduced_motion {
            0
        } else {
            self.quality.max_particles()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_zero_the_particle_cap() {
        let mut settings = Settings::default();
        assert_eq!(settings.max_particles(), 256);
        settings.reduced_motion = true;
        assert_eq!(settings.max_particles(), 0);
        settings.reduced_motion = false;
        settings.particles = false;
        assert_eq!(settings.max_particles(), 0);
    }

    #[test]
    fn settings_round_trip() {
        let settings = Settings {
            quality: QualityPreset::High,
            particles: true,
            reduced_motion: true,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(settings, serde_json::from_str(&json).unwrap());
    }
}
