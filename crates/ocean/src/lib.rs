//! Holographic Ocean - real-time particle-fluid simulation.
//!
//! A per-frame physics integrator over tens of thousands of point-mass
//! particles inside a tilting cubic container:
//!
//! - density binning on a fixed 16x16x16 grid with pressure-style repulsion
//! - buoyancy against a deterministic traveling-wave surface
//! - turbulence, explicit Euler integration, box collision, damping
//! - a derived per-particle display color (deep-to-surface ramp)
//!
//! This crate is framework-agnostic - it handles simulation only. The host
//! render loop supplies the frame delta, elapsed time, and a 2D tilt target,
//! then uploads the position and color buffers to the GPU as a point cloud.
//!
//! # Example
//!
//! ```
//! use ocean::{OceanParams, OceanSimulation, Vec2};
//!
//! let params = OceanParams {
//!     particle_count: 500,
//!     ..OceanParams::default()
//! };
//! let mut sim = OceanSimulation::new(params).expect("valid params");
//!
//! // Host render loop: one update per displayed frame.
//! for frame in 0..60 {
//!     let elapsed = frame as f32 / 60.0;
//!     sim.update(1.0 / 60.0, elapsed, Vec2::ZERO);
//! }
//!
//! assert_eq!(sim.positions().len(), 500);
//! assert_eq!(sim.colors().len(), 500);
//! ```

pub mod error;
pub mod grid;
pub mod params;
pub mod particle;
pub mod simulation;
pub mod surface;

pub use error::ConfigError;
pub use glam::{Vec2, Vec3};
pub use grid::{DensityGrid, CROWDING_THRESHOLD, GRID_CELLS, GRID_RES, OUT_OF_RANGE_DENSITY};
pub use params::{BlendMode, OceanParams};
pub use particle::OceanParticles;
pub use simulation::{OceanSimulation, MAX_DT};
pub use surface::{dynamic_surface_height, tilted_gravity_dir};
