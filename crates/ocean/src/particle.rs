//! Particle storage for the ocean simulation.

use glam::Vec3;
use rand::Rng;

/// Initial color before the first integration pass runs.
const SPAWN_COLOR: Vec3 = Vec3::new(0.0, 0.5, 1.0);

/// Structure-of-arrays particle storage.
///
/// All four vectors always share one length. The population is fixed for
/// the lifetime of the storage; a particle-count change requires respawning
/// the whole collection.
pub struct OceanParticles {
    /// World position, container-local coordinates.
    pub positions: Vec<Vec3>,
    /// Current velocity.
    pub velocities: Vec<Vec3>,
    /// Per-particle temperament seed in [0.5, 1.5), drawn once at spawn.
    /// Modulates damping, turbulence phase, and surface-color blending so
    /// particles stay individually distinguishable without per-frame draws.
    pub seeds: Vec<f32>,
    /// Display color, rewritten every frame by the integrator.
    pub colors: Vec<Vec3>,
}

impl OceanParticles {
    /// Spawn `count` particles uniformly inside a cube of side
    /// `0.9 * box_size`, biased into the lower half vertically so the fluid
    /// starts settled rather than raining down.
    pub fn spawn<R: Rng>(count: usize, box_size: f32, rng: &mut R) -> Self {
        let spawn_size = box_size * 0.9;

        let mut positions = Vec::with_capacity(count);
        let mut velocities = Vec::with_capacity(count);
        let mut seeds = Vec::with_capacity(count);

        for _ in 0..count {
            positions.push(Vec3::new(
                (rng.gen::<f32>() - 0.5) * spawn_size,
                (rng.gen::<f32>() * 0.5 - 0.5) * spawn_size,
                (rng.gen::<f32>() - 0.5) * spawn_size,
            ));
            velocities.push(Vec3::new(
                (rng.gen::<f32>() - 0.5) * 0.1,
                (rng.gen::<f32>() - 0.5) * 0.1,
                (rng.gen::<f32>() - 0.5) * 0.1,
            ));
            seeds.push(0.5 + rng.gen::<f32>());
        }

        Self {
            positions,
            velocities,
            seeds,
            colors: vec![SPAWN_COLOR; count],
        }
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
