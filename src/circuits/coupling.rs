// src/circuits/coupling.rs

use crate::core::constants::{RENORMALIZE_TOLERANCE, ZERO_ANGLE_TOLERANCE};
use crate::core::{BlockId, QdarwinError, StateVector, SYSTEM_QUBIT};
use crate::operations::Operation;
use crate::simulation::Simulator;

use super::{Circuit, CircuitBuilder};

/// |+> on the system qubit, |0> on all six environment qubits.
pub fn initial_state() -> StateVector {
    StateVector::plus_system()
}

/// Controlled `Ry(theta_z)` from the system qubit onto each block0 qubit.
/// The two gates act on disjoint targets with the same control, so they commute.
pub fn z_coupling_circuit(theta_z: f64) -> Circuit {
    CircuitBuilder::new()
        .add_ops(BlockId::Block0.qubits().iter().map(|q| Operation::controlled_ry(SYSTEM_QUBIT, *q, theta_z)))
        .build()
}

/// Controlled `Ry(theta_x)` onto block2, sandwiched between Hadamards on the
/// system qubit so the control acts in the X basis.
///
/// Returns an empty circuit when `theta_x` is within `ZERO_ANGLE_TOLERANCE` of zero.
pub fn x_coupling_circuit(theta_x: f64) -> Circuit {
    if theta_x.abs() <= ZERO_ANGLE_TOLERANCE {
        return Circuit::new();
    }
    CircuitBuilder::new()
        .add_op(Operation::hadamard(SYSTEM_QUBIT))
        .add_ops(BlockId::Block2.qubits().iter().map(|q| Operation::controlled_ry(SYSTEM_QUBIT, *q, theta_x)))
        .add_op(Operation::hadamard(SYSTEM_QUBIT))
        .build()
}

pub fn apply_z_coupling(state: &StateVector, theta_z: f64) -> Result<StateVector, QdarwinError> {
    Simulator::new().run(&z_coupling_circuit(theta_z), state)
}

/// No-op (returns a copy of `state`) for a vanishing `theta_x`.
pub fn apply_x_coupling(state: &StateVector, theta_x: f64) -> Result<StateVector, QdarwinError> {
    Simulator::new().run(&x_coupling_circuit(theta_x), state)
}

/// Initial state, then Z coupling, then X coupling.
///
/// The result is renormalized when its norm drifts from 1 by more than
/// `RENORMALIZE_TOLERANCE`; the gates themselves are unitary.
pub fn full_state(theta_z: f64, theta_x: f64) -> Result<StateVector, QdarwinError> {
    let state = apply_z_coupling(&initial_state(), theta_z)?;
    let state = apply_x_coupling(&state, theta_x)?;

    let norm = state.norm();
    if (norm - 1.0).abs() > RENORMALIZE_TOLERANCE {
        log::warn!("renormalizing state for theta_z={}, theta_x={}: norm={:.3e}", theta_z, theta_x, norm);
        return state.normalized();
    }
    Ok(state)
}
