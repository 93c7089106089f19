use anyhow::{ensure, Context, Result};
use axle_control::{
    sim::{VisualRig, WheelBank},
    Axes, Axle, VehicleControllerInit,
};
use clap::Parser;
use glam::DVec3;
use rand::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
struct Opts {
    /// JSON file with a VehicleControllerInit. Defaults are used otherwise.
    #[clap(long)]
    pub config: Option<PathBuf>,
    #[clap(long, default_value = "250")]
    pub ticks: usize,
    /// Fixed simulation rate in Hz.
    #[clap(long, default_value = "50")]
    pub rate: f64,
    #[clap(long)]
    pub seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let Opts {
        config,
        ticks,
        rate,
        seed,
    } = Opts::parse();
    ensure!(rate > 0.0, "rate must be positive");

    let init = match config {
        Some(path) => VehicleControllerInit::from_json_file(&path)
            .with_context(|| format!("load {}", path.display()))?,
        None => VehicleControllerInit::default(),
    };

    // A car with a steering front axle and a driven rear axle. Every wheel
    // carries a single visual child.
    let mut bank = WheelBank::new();
    let mut rig = VisualRig::new();
    let mut axles = vec![];
    for (z, front) in [(1.3, true), (-1.3, false)] {
        let left = bank.add_wheel(DVec3::new(-0.8, 0.3, z));
        let right = bank.add_wheel(DVec3::new(0.8, 0.3, z));
        rig.attach(left, 1);
        rig.attach(right, 1);
        axles.push(
            Axle::pair(left, right)
                .with_steering(front)
                .with_motor(!front),
        );
    }

    let mut controller = init.build(axles)?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let time_delta_sec = 1.0 / rate;
    let (mut vertical, mut horizontal) = (0.0_f64, 0.0_f64);

    for step in 0..ticks {
        // Wander the sticks around like a restless driver.
        vertical += rng.gen_range(-0.2..=0.2);
        horizontal += rng.gen_range(-0.3..=0.3);
        let axes = Axes::new(vertical, horizontal);
        vertical = axes.vertical();
        horizontal = axes.horizontal();

        let report = controller.tick(time_delta_sec, &axes, &mut bank, &mut rig);

        if step % 25 == 0 {
            println!(
                "t={:6.2}s torque={:8.2} N·m steer={:6.2}° visuals={}",
                report.elapsed_sec,
                report.command.motor_torque,
                report.command.steering_angle,
                report.visuals.synced,
            );
        }
    }

    Ok(())
}
