// src/experiment/config.rs

use std::f64::consts::PI;

use crate::core::constants::NULL_COUPLING_TOLERANCE;

/// A labelled `(theta_z, theta_x)` setting for the H1 comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Regime {
    pub label: String,
    pub theta_z: f64,
    pub theta_x: f64,
}

/// The fixed parameter sweep driven by the binary.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    /// H1 regimes, printed in order.
    pub h1_regimes: Vec<Regime>,
    /// Edge angles for H2; each yields a Z-edge and an X-edge comparison.
    pub h2_angles: Vec<f64>,
    /// Bound on |MI| for the uncoupled self-check.
    pub null_tolerance: f64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            h1_regimes: vec![
                Regime { label: "Z-dominated regime".to_string(), theta_z: PI / 4.0, theta_x: PI / 12.0 },
                Regime { label: "X-dominated regime".to_string(), theta_z: PI / 12.0, theta_x: PI / 4.0 },
            ],
            h2_angles: vec![PI / 6.0, PI / 4.0],
            null_tolerance: NULL_COUPLING_TOLERANCE,
        }
    }
}
