//! Settling diagnostic: verify the fluid calms down under default tuning.
//!
//! Runs the default parameter set from rest and prints velocity statistics
//! so damping/collision regressions show up as a climbing max speed.

use glam::{Vec2, Vec3};
use ocean::{OceanParams, OceanSimulation};

fn main() {
    println!("=== SETTLE DIAGNOSTIC ===\n");

    let params = OceanParams {
        particle_count: 5_000,
        ..OceanParams::default()
    };
    let mut sim = OceanSimulation::new(params).expect("default params are valid");

    println!(
        "{} particles, box {}, gravity {}, damping {}\n",
        params.particle_count, params.box_size, params.gravity, params.damping
    );

    let dt = 1.0 / 60.0;
    for frame in 0..600u32 {
        let elapsed = frame as f32 * dt;
        sim.update(dt, elapsed, Vec2::ZERO);

        if frame % 60 == 0 {
            let avg_vel: Vec3 = sim.velocities().iter().sum::<Vec3>()
                / sim.particle_count() as f32;
            let max_speed: f32 = sim
                .velocities()
                .iter()
                .map(|v| v.length())
                .fold(0.0, f32::max);
            let mean_height: f32 = sim.positions().iter().map(|p| p.y).sum::<f32>()
                / sim.particle_count() as f32;

            println!(
                "frame {:4}: avg_vel ({:6.3}, {:6.3}, {:6.3})  max_speed {:7.3}  mean_y {:6.3}",
                frame, avg_vel.x, avg_vel.y, avg_vel.z, max_speed, mean_height
            );
        }
    }

    let final_max: f32 = sim
        .velocities()
        .iter()
        .map(|v| v.length())
        .fold(0.0, f32::max);
    println!("\nfinal max speed: {:.3}", final_max);
    if final_max > 100.0 {
        println!("WARNING: fluid did not settle, check damping/collision");
    } else {
        println!("OK: fluid settled");
    }
}
