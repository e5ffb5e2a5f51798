//! Tunable parameters for the ocean simulation.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Particle blending mode for the renderer.
///
/// Carried in the parameter set so hosts can persist complete presets.
/// The physics loop never branches on it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum BlendMode {
    #[default]
    Additive,
    Normal,
}

/// Parameter set for an ocean simulation.
///
/// Fixed for the duration of one `update` call; the host may swap in a new
/// set between frames via [`OceanSimulation::set_params`]. Changing
/// `particle_count` respawns the whole particle population.
///
/// [`OceanSimulation::set_params`]: crate::OceanSimulation::set_params
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct OceanParams {
    /// Number of simulated particles.
    pub particle_count: usize,
    /// Display radius of each point sprite (render-only).
    pub particle_size: f32,
    /// Side length of the cubic container.
    pub box_size: f32,
    /// Gravity magnitude along the (tilted) down direction.
    pub gravity: f32,
    /// Per-frame velocity retention, in (0, 1].
    pub damping: f32,
    /// Wall restitution, in [0, 1].
    pub bounce: f32,
    /// Tangential velocity retention on wall contact, in [0, 1].
    pub wall_friction: f32,
    /// Amplitude of the traveling-wave surface.
    pub wave_height: f32,
    /// Temporal speed of the traveling-wave surface.
    pub wave_speed: f32,
    /// Spatial frequency of the traveling-wave surface.
    pub wave_freq: f32,
    /// Rest height of the surface (container-local coordinates).
    pub fill_level: f32,
    /// Buoyancy strength for submerged particles.
    pub pressure: f32,
    /// Magnitude of sinusoidal velocity perturbations.
    pub turbulence: f32,
    /// Velocity nudge toward less-crowded density cells.
    pub repulsion_strength: f32,
    /// Renderer blend mode (render-only).
    pub blend_mode: BlendMode,
    /// RGB of particles at or above the surface.
    pub color_surface: Vec3,
    /// RGB of particles far below the surface.
    pub color_deep: Vec3,
    /// Scene background color (render-only passthrough).
    pub background_color: Vec3,
}

impl Default for OceanParams {
    fn default() -> Self {
        Self {
            particle_count: 20_000,
            particle_size: 0.25,
            box_size: 12.0,
            gravity: 25.0,
            damping: 0.98,
            bounce: 0.2,
            wall_friction: 0.99,
            wave_height: 1.5,
            wave_speed: 1.5,
            wave_freq: 0.5,
            fill_level: -2.0,
            pressure: 8.0,
            turbulence: 1.0,
            repulsion_strength: 6.0,
            blend_mode: BlendMode::Additive,
            color_surface: Vec3::new(0.702, 1.0, 1.0),
            color_deep: Vec3::new(0.0, 0.067, 0.2),
            background_color: Vec3::new(0.004, 0.004, 0.012),
        }
    }
}

impl OceanParams {
    /// Lighter preset for embedded previews: default tuning at 8k particles.
    pub fn preview() -> Self {
        Self {
            particle_count: 8_000,
            ..Self::default()
        }
    }

    /// Check that the configuration describes usable geometry and stable
    /// coefficients. Called by the simulation constructors; rejected
    /// parameter sets never reach the physics loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }
        if !(self.box_size > 0.0 && self.box_size.is_finite()) {
            return Err(ConfigError::InvalidBoxSize(self.box_size));
        }
        if !(self.particle_size > 0.0 && self.particle_size.is_finite()) {
            return Err(ConfigError::InvalidParticleSize(self.particle_size));
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        if !(0.0..=1.0).contains(&self.bounce) {
            return Err(ConfigError::InvalidBounce(self.bounce));
        }
        if !(0.0..=1.0).contains(&self.wall_friction) {
            return Err(ConfigError::InvalidWallFriction(self.wall_friction));
        }
        Ok(())
    }

    /// Half-extent of the collision volume. Slightly inside the visual box
    /// so particles never clip the container walls.
    pub fn physics_bound(&self) -> f32 {
        self.box_size * 0.96 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        assert!(OceanParams::default().validate().is_ok());
        assert!(OceanParams::preview().validate().is_ok());
    }

    #[test]
    fn preview_reduces_population_only() {
        let preview = OceanParams::preview();
        let default = OceanParams::default();
        assert_eq!(preview.particle_count, 8_000);
        assert_eq!(preview.box_size, default.box_size);
        assert_eq!(preview.gravity, default.gravity);
    }

    #[test]
    fn rejects_zero_particles() {
        let params = OceanParams {
            particle_count: 0,
            ..OceanParams::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::NoParticles));
    }

    #[test]
    fn rejects_degenerate_box() {
        let params = OceanParams {
            box_size: 0.0,
            ..OceanParams::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::InvalidBoxSize(0.0)));

        let params = OceanParams {
            box_size: f32::NAN,
            ..OceanParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidBoxSize(_))
        ));
    }

    #[test]
    fn rejects_bad_coefficients() {
        let params = OceanParams {
            damping: 0.0,
            ..OceanParams::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::InvalidDamping(0.0)));

        let params = OceanParams {
            bounce: 1.5,
            ..OceanParams::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::InvalidBounce(1.5)));

        let params = OceanParams {
            wall_friction: -0.1,
            ..OceanParams::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConfigError::InvalidWallFriction(-0.1))
        );
    }

    #[test]
    fn physics_bound_inside_box() {
        let params = OceanParams {
            box_size: 10.0,
            ..OceanParams::default()
        };
        assert!((params.physics_bound() - 4.8).abs() < 1e-6);
    }

    #[test]
    fn params_roundtrip_json() {
        let params = OceanParams::default();
        let json = serde_json::to_string(&params).unwrap();
        let back: OceanParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back.particle_count, params.particle_count);
        assert_eq!(back.blend_mode, params.blend_mode);
        assert_eq!(back.color_surface, params.color_surface);
    }
}
