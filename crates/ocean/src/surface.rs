//! Dynamic wave surface and tilt helpers.
//!
//! Pure functions, recomputed per particle per frame; determinism matters
//! because the same inputs must give the same surface on every evaluation.

use glam::{EulerRot, Quat, Vec2, Vec3};

use crate::params::OceanParams;

/// Height of the traveling-wave surface at `(x, z)` and time `elapsed`.
///
/// A deterministic interference pattern: a sine along X crossed with a
/// slightly slower cosine along Z. The particle's temperament seed shifts
/// the phase so the fluid never moves in visible lockstep.
pub fn dynamic_surface_height(
    x: f32,
    z: f32,
    elapsed: f32,
    params: &OceanParams,
    seed: f32,
) -> f32 {
    let wave_y = (x * params.wave_freq + elapsed * params.wave_speed + seed * 1.5).sin()
        * (z * params.wave_freq + elapsed * params.wave_speed * 0.7).cos();
    params.fill_level + wave_y * params.wave_height
}

/// Unit gravity direction for the current container tilt.
///
/// Straight down rotated by the tilt angles, so the whole fluid sloshes as
/// the container leans. Falls back to straight down if rotation degenerates.
pub fn tilted_gravity_dir(tilt: Vec2) -> Vec3 {
    let rotation = Quat::from_euler(EulerRot::XYZ, -tilt.x, 0.0, tilt.y);
    (rotation * Vec3::NEG_Y)
        .try_normalize()
        .unwrap_or(Vec3::NEG_Y)
}
