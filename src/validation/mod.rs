// src/validation/mod.rs

//! Sanity checks on states and experiment results.

use crate::core::constants::DEFAULT_NORM_TOLERANCE;
use crate::core::{MiTable, QdarwinError, StateVector};
use crate::experiment::ExperimentResult;

/// Checks if the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0; `None` uses `DEFAULT_NORM_TOLERANCE`.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QdarwinError::Incoherence)` if normalization fails.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<(), QdarwinError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq = state.norm_sqr();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(QdarwinError::Incoherence {
            message: format!("State vector normalization failed. Sum(|c_i|^2) = {} (Deviation > {})", norm_sq, effective_tolerance),
        })
    } else {
        Ok(())
    }
}

/// Verifies that every geometric MI value lies within `tolerance` of zero.
///
/// Meant for a run with both couplings switched off: any correlation there
/// points at a bookkeeping bug in the measurement path.
pub fn check_null_coupling(result: &ExperimentResult, tolerance: f64) -> Result<(), QdarwinError> {
    let tables: [(&str, &MiTable); 2] = [("I_Z", &result.i_z), ("I_X", &result.i_x)];
    for (name, table) in tables {
        for (block, value) in table.iter() {
            if value.abs() >= tolerance {
                return Err(QdarwinError::Incoherence {
                    message: format!("{}[{}] = {:e} for an uncoupled run (tolerance {:e})", name, block, value, tolerance),
                });
            }
        }
    }
    Ok(())
}
