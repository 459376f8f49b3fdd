//! Pickup-burst particle system
//!
//! Purely visual; particles never feed back into gameplay. Spawn velocity
//! jitter draws from the session RNG so replays reproduce bursts exactly.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{CollectibleKind, Particle, MAX_PARTICLES};
use crate::consts::*;

/// Spawn one burst at a pickup location. When the pool is full the oldest
/// particles are evicted to make room.
pub fn spawn_burst(particles: &mut Vec<Particle>, rng: &mut Pcg32, center: Vec2, kind: CollectibleKind) {
    for _ in 0..PARTICLES_PER_PICKUP {
        if particles.len() >= MAX_PARTICLES {
            particles.remove(0);
        }
        let vel = Vec2::new(rng.random_range(-3.0..=3.0), rng.random_range(-8.0..=0.0));
        particles.push(Particle {
            pos: center,
            vel,
            life: PARTICLE_LIFE,
            kind,
        });
    }
}

/// Advance every particle one tick and retire the expired ones.
pub fn advance(particles: &mut Vec<Particle>) {
    for p in particles.iter_mut() {
        p.pos += p.vel;
        p.vel.y += PARTICLE_GRAVITY;
        p.life -= 1;
    }
    particles.retain(|p| p.life > 0);
}
