//! Sweeps the coupling angle and compares single-edge against diagonal
//! redundancy in both pointer bases.
//!
//! Run with `cargo run --example coupling_sweep`.

use qdarwin::circuits::{x_coupling_circuit, z_coupling_circuit};
use qdarwin::{redundancy, run_experiment, QdarwinError};

use std::f64::consts::PI;

fn main() -> Result<(), QdarwinError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("--- qdarwin Example: coupling sweep ---");
    println!("\nZ coupling at pi/4:\n{}", z_coupling_circuit(PI / 4.0));
    println!("X coupling at pi/4:\n{}", x_coupling_circuit(PI / 4.0));

    println!("{:>7} | {:>9} {:>9} | {:>9} {:>9}", "theta", "R_Z edge", "R_Z diag", "R_X edge", "R_X diag");
    let steps = 8;
    for step in 1..=steps {
        let theta = PI / 2.0 * step as f64 / steps as f64;
        let edge = run_experiment(theta, 0.0)?;
        let diagonal = run_experiment(theta, theta)?;
        log::info!("theta={:.3} done", theta);
        println!(
            "{:>7.3} | {:>9.4} {:>9.4} | {:>9.4} {:>9.4}",
            theta,
            redundancy(&edge, "Z")?,
            redundancy(&diagonal, "Z")?,
            redundancy(&edge, "X")?,
            redundancy(&diagonal, "X")?
        );
    }

    Ok(())
}
