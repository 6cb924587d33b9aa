// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod block;
pub mod error;
pub mod state;

// Re-export public types for convenient access via `qdarwin::core::TypeName`
pub use block::{BlockId, MiTable, Pointer};
pub use error::QdarwinError;
pub use state::StateVector;

pub mod constants;
pub use constants::{BLOCKS, ENV_QUBITS, QUBIT_COUNT, SYSTEM_QUBIT}; // Re-export
