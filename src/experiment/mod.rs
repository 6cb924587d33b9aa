// src/experiment/mod.rs

//! The experiment driver: builds the coupled state for a pair of angles, measures
//! every block in both pointer bases, and derives the H1/H2 comparison metrics.

mod config;
mod results;

pub use config::{ExperimentConfig, Regime};
pub use results::ExperimentResult;

use crate::circuits::full_state;
use crate::core::{BlockId, MiTable, Pointer, QdarwinError};
use crate::measurement::{mutual_information_table, random_block_tables, x_basis, z_basis};

/// Runs the full pipeline for one `(theta_z, theta_x)` setting.
///
/// Measures geometric and permutation-averaged tables in the Z basis (no
/// rotation) and the X basis (Hadamard on the system and each measured qubit).
pub fn run_experiment(theta_z: f64, theta_x: f64) -> Result<ExperimentResult, QdarwinError> {
    log::debug!("running experiment theta_z={:.6}, theta_x={:.6}", theta_z, theta_x);
    let state = full_state(theta_z, theta_x)?;

    let i_z = mutual_information_table(&state, z_basis)?;
    let i_x = mutual_information_table(&state, x_basis)?;
    let i_z_random = random_block_tables(&state, z_basis)?;
    let i_x_random = random_block_tables(&state, x_basis)?;
    log::debug!("I_Z geom={}, I_X geom={}", i_z, i_x);

    Ok(ExperimentResult { theta_z, theta_x, i_z, i_x, i_z_random, i_x_random })
}

/// Z pointer: block0 (Z-coupled) minus block2. X pointer: block2 (X-coupled) minus block0.
fn pointer_delta(i_z: &MiTable, i_x: &MiTable, pointer: Pointer) -> f64 {
    match pointer {
        Pointer::Z => i_z[BlockId::Block0] - i_z[BlockId::Block2],
        Pointer::X => i_x[BlockId::Block2] - i_x[BlockId::Block0],
    }
}

/// Coupled-block advantage on the geometric tables.
///
/// # Returns
/// * `Err(QdarwinError::InvalidPointer)` for any pointer other than `"Z"` or `"X"`.
pub fn delta_geometry(result: &ExperimentResult, pointer: &str) -> Result<f64, QdarwinError> {
    let pointer: Pointer = pointer.parse()?;
    Ok(pointer_delta(&result.i_z, &result.i_x, pointer))
}

/// `delta_geometry` applied to the permutation-averaged tables.
pub fn delta_random(result: &ExperimentResult, pointer: &str) -> Result<f64, QdarwinError> {
    let pointer: Pointer = pointer.parse()?;
    Ok(pointer_delta(&result.i_z_random, &result.i_x_random, pointer))
}

/// Largest block MI in the pointer's geometric table.
pub fn redundancy(result: &ExperimentResult, pointer: &str) -> Result<f64, QdarwinError> {
    let pointer: Pointer = pointer.parse()?;
    Ok(match pointer {
        Pointer::Z => result.i_z.max(),
        Pointer::X => result.i_x.max(),
    })
}

/// Single-edge redundancy minus diagonal-coupling redundancy (H2 margin).
pub fn redundancy_margin(
    single: &ExperimentResult,
    diagonal: &ExperimentResult,
    pointer: &str,
) -> Result<f64, QdarwinError> {
    Ok(redundancy(single, pointer)? - redundancy(diagonal, pointer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn table(values: [f64; 3]) -> MiTable {
        MiTable::new(values)
    }

    fn fixture() -> ExperimentResult {
        ExperimentResult {
            theta_z: 0.1,
            theta_x: 0.2,
            i_z: table([0.5, 0.1, 0.2]),
            i_x: table([0.05, 0.0, 0.3]),
            i_z_random: table([0.25, 0.25, 0.25]),
            i_x_random: table([0.1, 0.1, 0.15]),
        }
    }

    #[test]
    fn test_deltas_use_coupled_block_per_pointer() -> Result<(), QdarwinError> {
        let result = fixture();
        assert!((delta_geometry(&result, "Z")? - 0.3).abs() < 1e-15);
        assert!((delta_geometry(&result, "X")? - 0.25).abs() < 1e-15);
        assert!((delta_random(&result, "Z")? - 0.0).abs() < 1e-15);
        assert!((delta_random(&result, "X")? - 0.05).abs() < 1e-15);
        Ok(())
    }

    #[test]
    fn test_redundancy_is_table_max() -> Result<(), QdarwinError> {
        let result = fixture();
        assert_eq!(redundancy(&result, "Z")?, 0.5);
        assert_eq!(redundancy(&result, "X")?, 0.3);
        Ok(())
    }

    #[test]
    fn test_invalid_pointer_propagates() {
        let result = fixture();
        let expected = Err(QdarwinError::InvalidPointer { pointer: "Y".to_string() });
        assert_eq!(delta_geometry(&result, "Y"), expected);
        assert_eq!(delta_random(&result, "Y"), expected);
        assert_eq!(redundancy(&result, "Y"), expected);
        assert!(redundancy_margin(&result, &result, "").is_err());
    }

    #[test]
    fn test_run_experiment_records_angles() -> Result<(), QdarwinError> {
        let result = run_experiment(PI / 4.0, PI / 12.0)?;
        assert_eq!(result.theta_z, PI / 4.0);
        assert_eq!(result.theta_x, PI / 12.0);
        Ok(())
    }
}
