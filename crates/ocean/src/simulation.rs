//! Per-frame update pipeline for the holographic ocean.
//!
//! Two passes per frame: bin every particle into the density grid, then
//! integrate each particle against the grid, the tilted gravity vector, and
//! the dynamic wave surface. Single-threaded and allocation-free after
//! construction; the host calls [`OceanSimulation::update`] once per
//! rendered frame and uploads the position/color buffers.

use glam::{Vec2, Vec3};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::ConfigError;
use crate::grid::{DensityGrid, CROWDING_THRESHOLD};
use crate::params::OceanParams;
use crate::particle::OceanParticles;
use crate::surface::{dynamic_surface_height, tilted_gravity_dir};

/// Timestep cap. A stalled host catches up over several frames instead of
/// exploding the integration.
pub const MAX_DT: f32 = 0.05;

/// Exponential smoothing factor for tilt input, applied once per frame.
const TILT_SMOOTHING: f32 = 0.05;

/// Extra isotropic damping while below the surface (viscous drag).
const SUBMERGED_DRAG: f32 = 0.97;

/// Particle-fluid simulation inside a tilting cubic container.
///
/// Owns all mutable state: particle buffers, the per-frame density grid,
/// the smoothed tilt, and the RNG used for spawn and de-clumping jitter.
pub struct OceanSimulation {
    params: OceanParams,
    particles: OceanParticles,
    grid: DensityGrid,
    tilt: Vec2,
    rng: StdRng,
    /// Frames simulated since construction.
    pub frame: u64,
}

impl OceanSimulation {
    /// Create a simulation with entropy-seeded randomness.
    ///
    /// Rejects degenerate configurations; see [`OceanParams::validate`].
    pub fn new(params: OceanParams) -> Result<Self, ConfigError> {
        Self::new_with_rng(params, StdRng::from_entropy())
    }

    /// Create a simulation with an explicit RNG, for reproducible runs.
    pub fn new_with_rng(params: OceanParams, mut rng: StdRng) -> Result<Self, ConfigError> {
        params.validate()?;
        let particles = OceanParticles::spawn(params.particle_count, params.box_size, &mut rng);
        Ok(Self {
            params,
            particles,
            grid: DensityGrid::new(),
            tilt: Vec2::ZERO,
            rng,
            frame: 0,
        })
    }

    /// Replace the parameter set, effective from the next `update`.
    ///
    /// A changed `particle_count` respawns the whole population; partial
    /// resizing is not a supported transition.
    pub fn set_params(&mut self, params: OceanParams) -> Result<(), ConfigError> {
        params.validate()?;
        if params.particle_count != self.params.particle_count {
            self.particles =
                OceanParticles::spawn(params.particle_count, params.box_size, &mut self.rng);
        }
        self.params = params;
        Ok(())
    }

    /// Advance one frame.
    ///
    /// `dt` is the host frame delta (clamped to [`MAX_DT`]), `elapsed` is
    /// host wall time, and `tilt_target` is the desired container tilt
    /// (e.g. pointer position scaled by the host). Tilt is smoothed here so
    /// raw input produces inertial sloshing rather than jitter.
    pub fn update(&mut self, dt: f32, elapsed: f32, tilt_target: Vec2) {
        debug_assert!(dt.is_finite(), "invalid timestep: {}", dt);
        let dt = dt.clamp(0.0, MAX_DT);

        self.tilt += (tilt_target - self.tilt) * TILT_SMOOTHING;
        self.frame += 1;

        if self.particles.is_empty() {
            return;
        }

        let params = self.params;
        let bound = params.physics_bound();
        let gravity_dir = tilted_gravity_dir(self.tilt);
        let surface_normal = -gravity_dir;
        let gravity = gravity_dir * params.gravity;

        // Pass 1: density binning over pre-update positions.
        self.grid.bin(&self.particles.positions, params.box_size);

        // Pass 2: integration.
        let turb = params.turbulence * 0.5;
        for i in 0..self.particles.len() {
            let mut p = self.particles.positions[i];
            let mut v = self.particles.velocities[i];
            let seed = self.particles.seeds[i];

            // Gravity along the tilted down direction.
            v += gravity * dt;

            // Density repulsion: drift toward less-crowded axis neighbors.
            let (gx, gy, gz) = DensityGrid::cell_coords(p, params.box_size);
            let occupancy = self.grid.count_at(gx, gy, gz);
            if occupancy > CROWDING_THRESHOLD {
                let push = params.repulsion_strength * dt;
                if self.grid.neighbor_count(gx, gy, gz, -1, 0, 0) < occupancy {
                    v.x -= push;
                }
                if self.grid.neighbor_count(gx, gy, gz, 1, 0, 0) < occupancy {
                    v.x += push;
                }
                if self.grid.neighbor_count(gx, gy, gz, 0, -1, 0) < occupancy {
                    v.y -= push;
                }
                if self.grid.neighbor_count(gx, gy, gz, 0, 1, 0) < occupancy {
                    v.y += push;
                }
                if self.grid.neighbor_count(gx, gy, gz, 0, 0, -1) < occupancy {
                    v.z -= push;
                }
                if self.grid.neighbor_count(gx, gy, gz, 0, 0, 1) < occupancy {
                    v.z += push;
                }
                // Break ties so co-located particles separate.
                v.x += (self.rng.gen::<f32>() - 0.5) * dt * 2.0;
                v.y += (self.rng.gen::<f32>() - 0.5) * dt * 2.0;
                v.z += (self.rng.gen::<f32>() - 0.5) * dt * 2.0;
            }

            // Buoyancy against the dynamic surface, measured along the
            // tilted surface normal.
            let height = p.dot(surface_normal);
            let surface = dynamic_surface_height(p.x, p.z, elapsed, &params, seed);
            if height < surface {
                let buoyancy = (surface - height) * params.pressure * 2.0;
                v += surface_normal * buoyancy * dt;
                v *= SUBMERGED_DRAG;
            }

            // Turbulence: cross-coupled sinusoids, phase-shifted per seed.
            if turb > 0.0 {
                v.x += (p.y * 2.0 + elapsed * 1.5 + seed).sin() * 0.02 * turb * seed;
                v.y += (p.z * 2.0 + elapsed * 1.5 + seed).cos() * 0.02 * turb * seed;
                v.z += (p.x * 2.0 + elapsed * 1.5 + seed).sin() * 0.02 * turb * seed;
            }

            // Explicit Euler step.
            p += v * dt;

            // Box collision: clamp, reflect the normal component, bleed
            // tangential energy.
            let bounce = params.bounce;
            let friction = params.wall_friction;
            if p.x < -bound {
                p.x = -bound;
                v.x *= -bounce;
                v.y *= friction;
                v.z *= friction;
            } else if p.x > bound {
                p.x = bound;
                v.x *= -bounce;
                v.y *= friction;
                v.z *= friction;
            }
            if p.y < -bound {
                p.y = -bound;
                v.y *= -bounce;
                v.x *= friction;
                v.z *= friction;
            } else if p.y > bound {
                p.y = bound;
                v.y *= -bounce;
                v.x *= friction;
                v.z *= friction;
            }
            if p.z < -bound {
                p.z = -bound;
                v.z *= -bounce;
                v.x *= friction;
                v.y *= friction;
            } else if p.z > bound {
                p.z = bound;
                v.z *= -bounce;
                v.x *= friction;
                v.y *= friction;
            }

            // Per-particle damping: higher seeds keep slightly more energy.
            v *= params.damping - (1.5 - seed) * 0.005;

            // Display color: deep-to-surface ramp by height, brightened by
            // speed so fast particles read as churned-up water.
            let mut cr = (height - (surface - 8.0)) / 8.0;
            cr += (v.x.abs() + v.y.abs() + v.z.abs()) * 0.1;
            let cr = cr.clamp(0.0, 1.0);
            self.particles.colors[i] = params.color_deep.lerp(params.color_surface, cr);

            self.particles.positions[i] = p;
            self.particles.velocities[i] = v;
        }
    }

    // ========== Accessors ==========

    /// Current parameter set.
    pub fn params(&self) -> &OceanParams {
        &self.params
    }

    /// Particle positions, uploaded by the host each frame.
    pub fn positions(&self) -> &[Vec3] {
        &self.particles.positions
    }

    /// Derived particle colors, uploaded by the host each frame.
    pub fn colors(&self) -> &[Vec3] {
        &self.particles.colors
    }

    /// Particle velocities (diagnostics).
    pub fn velocities(&self) -> &[Vec3] {
        &self.particles.velocities
    }

    /// Per-particle temperament seeds (diagnostics).
    pub fn seeds(&self) -> &[f32] {
        &self.particles.seeds
    }

    /// Smoothed container tilt.
    pub fn tilt(&self) -> Vec2 {
        self.tilt
    }

    /// Number of particles.
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Mutable particle storage, for scenario setup in tests and
    /// diagnostic binaries.
    pub fn particles_mut(&mut self) -> &mut OceanParticles {
        &mut self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_params(count: usize) -> OceanParams {
        OceanParams {
            particle_count: count,
            box_size: 10.0,
            gravity: 0.0,
            damping: 1.0,
            turbulence: 0.0,
            repulsion_strength: 0.0,
            pressure: 0.0,
            wave_height: 0.0,
            ..OceanParams::default()
        }
    }

    fn seeded_sim(params: OceanParams) -> OceanSimulation {
        OceanSimulation::new_with_rng(params, StdRng::seed_from_u64(1234)).unwrap()
    }

    #[test]
    fn wall_restitution_matches_bounce() {
        let mut sim = seeded_sim(quiet_params(1));
        {
            let particles = sim.particles_mut();
            particles.positions[0] = Vec3::new(4.9, 0.0, 0.0);
            particles.velocities[0] = Vec3::new(5.0, 0.0, 0.0);
            // Seed 1.5 makes the per-particle damping factor exactly 1.
            particles.seeds[0] = 1.5;
        }

        sim.update(0.0, 0.0, Vec2::ZERO);

        let p = sim.positions()[0];
        let v = sim.velocities()[0];
        assert!((p.x - 4.8).abs() < 1e-6, "clamped to physics bound");
        assert!((v.x - (-1.0)).abs() < 1e-6, "vx = -bounce * 5 = -1");
    }

    #[test]
    fn zero_forcing_is_idempotent() {
        let mut sim = seeded_sim(quiet_params(8));
        {
            let particles = sim.particles_mut();
            // One particle per cell so repulsion jitter can never trigger,
            // and fully at rest.
            for (i, p) in particles.positions.iter_mut().enumerate() {
                *p = Vec3::new(-3.5 + i as f32, 1.0, 0.0);
            }
            for v in particles.velocities.iter_mut() {
                *v = Vec3::ZERO;
            }
        }
        let before = sim.positions().to_vec();

        for frame in 0..100 {
            sim.update(1.0 / 60.0, frame as f32 / 60.0, Vec2::ZERO);
        }

        assert_eq!(sim.positions(), &before[..]);
    }

    #[test]
    fn zero_particle_config_rejected() {
        let params = OceanParams {
            particle_count: 0,
            ..OceanParams::default()
        };
        assert!(OceanSimulation::new(params).is_err());
    }

    #[test]
    fn tilt_smoothing_is_inertial() {
        let mut sim = seeded_sim(quiet_params(1));
        let target = Vec2::new(0.6, -0.4);

        sim.update(1.0 / 60.0, 0.0, target);
        let after_one = sim.tilt();
        assert!((after_one - target * 0.05).length() < 1e-6);

        for frame in 1..400 {
            sim.update(1.0 / 60.0, frame as f32 / 60.0, target);
        }
        assert!(
            (sim.tilt() - target).length() < 1e-2,
            "tilt converges to the target"
        );
    }

    #[test]
    fn set_params_respawns_on_count_change() {
        let mut sim = seeded_sim(quiet_params(10));
        let new_params = quiet_params(25);
        sim.set_params(new_params).unwrap();
        assert_eq!(sim.particle_count(), 25);
        assert_eq!(sim.colors().len(), 25);

        // Same count: particles survive a tuning change.
        let before = sim.positions().to_vec();
        let mut tweaked = new_params;
        tweaked.gravity = 50.0;
        sim.set_params(tweaked).unwrap();
        assert_eq!(sim.positions(), &before[..]);
    }

    #[test]
    fn set_params_rejects_invalid() {
        let mut sim = seeded_sim(quiet_params(10));
        let bad = OceanParams {
            box_size: -1.0,
            ..OceanParams::default()
        };
        assert!(sim.set_params(bad).is_err());
        assert_eq!(sim.params().box_size, 10.0, "old params survive rejection");
    }

    #[test]
    fn oversized_dt_is_clamped() {
        let mut sim = seeded_sim(quiet_params(4));
        {
            let particles = sim.particles_mut();
            particles.positions[0] = Vec3::ZERO;
            particles.velocities[0] = Vec3::new(1.0, 0.0, 0.0);
            particles.seeds[0] = 1.5;
        }

        // A 2-second hitch advances at most MAX_DT worth of motion.
        sim.update(2.0, 0.0, Vec2::ZERO);
        assert!((sim.positions()[0].x - MAX_DT).abs() < 1e-6);
    }

    #[test]
    fn submerged_particles_rise() {
        let params = OceanParams {
            particle_count: 1,
            box_size: 10.0,
            gravity: 0.0,
            damping: 1.0,
            turbulence: 0.0,
            repulsion_strength: 0.0,
            wave_height: 0.0,
            fill_level: 0.0,
            pressure: 8.0,
            ..OceanParams::default()
        };
        let mut sim = seeded_sim(params);
        {
            let particles = sim.particles_mut();
            particles.positions[0] = Vec3::new(0.0, -3.0, 0.0);
            particles.velocities[0] = Vec3::ZERO;
        }

        sim.update(1.0 / 60.0, 0.0, Vec2::ZERO);
        assert!(
            sim.velocities()[0].y > 0.0,
            "buoyancy pushes a submerged particle up"
        );
    }

    #[test]
    fn colors_stay_normalized() {
        let mut sim = seeded_sim(OceanParams {
            particle_count: 200,
            ..OceanParams::default()
        });
        for frame in 0..60 {
            sim.update(1.0 / 60.0, frame as f32 / 60.0, Vec2::ZERO);
        }
        for c in sim.colors() {
            for channel in [c.x, c.y, c.z] {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }
}
