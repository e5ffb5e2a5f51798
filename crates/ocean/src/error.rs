//! Error types for simulation configuration.
//!
//! The physics loop itself never fails: grid indices clamp, degenerate
//! normals fall back to straight down, and oversized timesteps are capped.
//! The only fallible operation is accepting a parameter set.

use std::fmt;

/// Rejected simulation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// `particle_count` was zero.
    NoParticles,
    /// `box_size` was not a positive finite number.
    InvalidBoxSize(f32),
    /// `particle_size` was not a positive finite number.
    InvalidParticleSize(f32),
    /// `damping` was outside (0, 1].
    InvalidDamping(f32),
    /// `bounce` was outside [0, 1].
    InvalidBounce(f32),
    /// `wall_friction` was outside [0, 1].
    InvalidWallFriction(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoParticles => {
                write!(f, "particle_count must be at least 1")
            }
            ConfigError::InvalidBoxSize(v) => {
                write!(f, "box_size must be positive and finite, got {}", v)
            }
            ConfigError::InvalidParticleSize(v) => {
                write!(f, "particle_size must be positive and finite, got {}", v)
            }
            ConfigError::InvalidDamping(v) => {
                write!(f, "damping must be in (0, 1], got {}", v)
            }
            ConfigError::InvalidBounce(v) => {
                write!(f, "bounce must be in [0, 1], got {}", v)
            }
            ConfigError::InvalidWallFriction(v) => {
                write!(f, "wall_friction must be in [0, 1], got {}", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
