// src/report/mod.rs

//! Text rendering of experiment results. Nothing here prints; the binary
//! writes the rendered sections to stdout.

use std::fmt;

use crate::core::MiTable;
use crate::experiment::{delta_geometry, delta_random, redundancy, redundancy_margin, ExperimentResult};
use crate::QdarwinError;

/// `{block0: 0.1410, block1: 0.0000, block2: 0.0000}`
pub fn format_table(table: &MiTable) -> String {
    table.to_string()
}

/// H1 section for one setting. The deltas are computed up front so that
/// rendering itself cannot fail on a bad pointer.
#[derive(Debug, Clone)]
pub struct H1Report {
    label: String,
    result: ExperimentResult,
    /// `(pointer, delta_geometry, delta_random)` for Z then X.
    deltas: [(&'static str, f64, f64); 2],
}

impl H1Report {
    pub fn new(result: &ExperimentResult, label: &str) -> Result<Self, QdarwinError> {
        let mut deltas = [("Z", 0.0, 0.0), ("X", 0.0, 0.0)];
        for entry in deltas.iter_mut() {
            entry.1 = delta_geometry(result, entry.0)?;
            entry.2 = delta_random(result, entry.0)?;
        }
        Ok(Self { label: label.to_string(), result: *result, deltas })
    }
}

impl fmt::Display for H1Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nH1 – {}", self.label)?;
        writeln!(f, "theta_Z={:.3}, theta_X={:.3}", self.result.theta_z, self.result.theta_x)?;
        writeln!(f, "I_Z geom: {}", self.result.i_z)?;
        writeln!(f, "I_Z rand: {}", self.result.i_z_random)?;
        writeln!(f, "I_X geom: {}", self.result.i_x)?;
        writeln!(f, "I_X rand: {}", self.result.i_x_random)?;
        for (pointer, geometry, random) in self.deltas {
            writeln!(f, "Delta_{} geom={:.4}, rand={:.4}", pointer, geometry, random)?;
        }
        Ok(())
    }
}

/// H2 section: single-edge vs. diagonal redundancy and margin, per pointer.
#[derive(Debug, Clone)]
pub struct H2Report {
    label: String,
    /// `(pointer, single, diagonal, margin)` for Z then X.
    rows: [(&'static str, f64, f64, f64); 2],
}

impl H2Report {
    pub fn new(single: &ExperimentResult, diagonal: &ExperimentResult, label: &str) -> Result<Self, QdarwinError> {
        let mut rows = [("Z", 0.0, 0.0, 0.0), ("X", 0.0, 0.0, 0.0)];
        for row in rows.iter_mut() {
            row.1 = redundancy(single, row.0)?;
            row.2 = redundancy(diagonal, row.0)?;
            row.3 = redundancy_margin(single, diagonal, row.0)?;
        }
        Ok(Self { label: label.to_string(), rows })
    }
}

impl fmt::Display for H2Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nH2 – θ={}", self.label)?;
        for (pointer, single, diagonal, margin) in self.rows {
            writeln!(f, "R_{} single={:.4}, diag={:.4}, margin={:.4}", pointer, single, diagonal, margin)?;
        }
        Ok(())
    }
}

pub fn format_h1(result: &ExperimentResult, label: &str) -> Result<String, QdarwinError> {
    Ok(H1Report::new(result, label)?.to_string())
}

pub fn format_h2(single: &ExperimentResult, diagonal: &ExperimentResult, label: &str) -> Result<String, QdarwinError> {
    Ok(H2Report::new(single, diagonal, label)?.to_string())
}
