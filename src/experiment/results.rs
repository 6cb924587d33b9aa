// src/experiment/results.rs
use crate::core::MiTable;

/// Outcome of one `(theta_z, theta_x)` run. Plain data; built once by
/// `run_experiment` and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperimentResult {
    pub theta_z: f64,
    pub theta_x: f64,
    /// Z-basis MI over the geometric blocks.
    pub i_z: MiTable,
    /// X-basis MI over the geometric blocks.
    pub i_x: MiTable,
    /// Z-basis MI averaged over all 720 environment orderings.
    pub i_z_random: MiTable,
    /// X-basis MI averaged over all 720 environment orderings.
    pub i_x_random: MiTable,
}
