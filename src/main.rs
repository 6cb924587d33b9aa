//! Runs the fixed H1/H2 sweep and prints the comparison tables.

use qdarwin::report::{format_h1, format_h2};
use qdarwin::{check_null_coupling, run_experiment, ExperimentConfig, QdarwinError};

fn main() -> Result<(), QdarwinError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = ExperimentConfig::default();

    // With no couplings active every MI entry must vanish
    let uncoupled = run_experiment(0.0, 0.0)?;
    let null_check = check_null_coupling(&uncoupled, config.null_tolerance);
    assert!(null_check.is_ok(), "zero-coupling self-check failed: {:?}", null_check);

    for regime in &config.h1_regimes {
        let result = run_experiment(regime.theta_z, regime.theta_x)?;
        print!("{}", format_h1(&result, &regime.label)?);
    }

    for theta in &config.h2_angles {
        let theta = *theta;
        let single_z = run_experiment(theta, 0.0)?;
        let single_x = run_experiment(0.0, theta)?;
        let diagonal = run_experiment(theta, theta)?;
        print!("{}", format_h2(&single_z, &diagonal, &format!("Z edge {:.3}", theta))?);
        print!("{}", format_h2(&single_x, &diagonal, &format!("X edge {:.3}", theta))?);
    }

    Ok(())
}
