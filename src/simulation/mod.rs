// src/simulation/mod.rs

//! Executes `qdarwin::circuits::Circuit` on dense amplitude vectors.
//! The gate routines in `engine` are pure: each call returns a new state and
//! leaves its input untouched.

mod engine;

pub use engine::{apply_controlled_gate, apply_operation, apply_single_qubit_gate};

use crate::circuits::Circuit;
use crate::core::{QdarwinError, StateVector};

/// Runs circuits over a starting state.
#[derive(Default)] // Allows Simulator::default() -> Simulator::new()
pub struct Simulator {}

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies every operation of `circuit`, in order, to a copy of `initial`.
    ///
    /// # Returns
    /// * `Ok(StateVector)` with the evolved amplitudes.
    /// * `Err(QdarwinError)` if an operation references a qubit outside the state
    ///   or is otherwise malformed.
    pub fn run(&self, circuit: &Circuit, initial: &StateVector) -> Result<StateVector, QdarwinError> {
        if let Some(max_qubit) = circuit.qubits().iter().max() {
            if *max_qubit >= initial.num_qubits() {
                return Err(QdarwinError::InvalidQubit {
                    qubit: *max_qubit,
                    message: format!("circuit needs more qubits than the {}-qubit input state", initial.num_qubits()),
                });
            }
        }

        let mut state = initial.clone();
        for op in circuit.operations() {
            log::trace!("applying {}", op);
            state = apply_operation(&state, op)?;
        }
        Ok(state)
    }
}
