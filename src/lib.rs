// src/lib.rs

//! `qdarwin` - redundancy experiments on a 7-qubit system/environment model
//!
//! One system qubit (qubit 0) is coupled to six environment qubits grouped in
//! three 2-qubit blocks. block0 receives a Z-type coupling, block2 an X-type
//! coupling. The crate simulates the exact state, measures classical mutual
//! information between the system and each block in both bases, and compares
//! the geometric blocks against blocks drawn from every reordering of the
//! environment.

pub mod core;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod measurement;
pub mod experiment;
pub mod report;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{BlockId, MiTable, Pointer, QdarwinError, StateVector};
pub use operations::{Gate, Operation};
pub use circuits::{Circuit, CircuitBuilder, full_state};
pub use simulation::Simulator;
pub use experiment::{
    ExperimentConfig,
    ExperimentResult,
    run_experiment,
    delta_geometry,
    delta_random,
    redundancy,
};
pub use validation::{check_normalization, check_null_coupling};

// Example: geometric vs. randomized blocks
/// ```
/// use qdarwin::{run_experiment, delta_geometry, delta_random, BlockId, QdarwinError};
/// use std::f64::consts::PI;
///
/// fn main() -> Result<(), QdarwinError> {
///     let result = run_experiment(PI / 4.0, PI / 12.0)?;
///
///     // Only block0 carries the Z coupling, so the geometric delta is large...
///     assert!(result.i_z[BlockId::Block0] > 0.1);
///     assert!(delta_geometry(&result, "Z")? > 0.1);
///     // ...while reshuffled blocks all look alike.
///     assert!(delta_random(&result, "Z")?.abs() < 1e-9);
///
///     // Unknown pointers are rejected.
///     assert!(delta_geometry(&result, "Y").is_err());
///     Ok(())
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
