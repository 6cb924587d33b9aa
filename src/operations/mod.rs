// src/operations/mod.rs

//! Gates and the operations that apply them to a state.
//!
//! A gate is a 2x2 complex matrix stored as two rows of two entries. The
//! engine accepts any unitary; the experiment itself only needs the Hadamard
//! and the real rotation `Ry(theta)`.

use num_complex::Complex;
use num_traits::{One, Zero};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// A single-qubit unitary, row-major.
pub type Gate = [[Complex<f64>; 2]; 2];

/// The identity gate.
pub fn identity() -> Gate {
    [
        [Complex::one(), Complex::zero()],
        [Complex::zero(), Complex::one()],
    ]
}

/// Hadamard: rotates between the Z and X bases. Self-inverse.
pub fn hadamard() -> Gate {
    let h = Complex::new(FRAC_1_SQRT_2, 0.0);
    [
        [h, h],
        [h, -h],
    ]
}

/// Ry(theta) = [[cos(theta/2), -sin(theta/2)], [sin(theta/2), cos(theta/2)]]
pub fn ry(theta: f64) -> Gate {
    let angle_over_2 = theta / 2.0;
    let cos_a = angle_over_2.cos();
    let sin_a = angle_over_2.sin();
    [
        [Complex::new(cos_a, 0.0), Complex::new(-sin_a, 0.0)],
        [Complex::new(sin_a, 0.0), Complex::new(cos_a, 0.0)],
    ]
}

/// Checks `U^dagger U = I` entry-wise within `tolerance`.
pub fn is_unitary(gate: &Gate, tolerance: f64) -> bool {
    for i in 0..2 {
        for j in 0..2 {
            // (U^dagger U)_{ij} = sum_k conj(U_{ki}) U_{kj}
            let entry: Complex<f64> = (0..2).map(|k| gate[k][i].conj() * gate[k][j]).sum();
            let expected = if i == j { Complex::one() } else { Complex::zero() };
            if (entry - expected).norm() > tolerance {
                return false;
            }
        }
    }
    true
}

/// A gate application scheduled inside a `Circuit`.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Apply `gate` to `target`.
    SingleQubit {
        target: usize,
        gate: Gate,
        /// Short label used when printing circuits (e.g. "H", "Ry(0.785)").
        label: String,
    },
    /// Apply `gate` to `target` on the subspace where `control` is 1.
    Controlled {
        control: usize,
        target: usize,
        gate: Gate,
        label: String,
    },
}

impl Operation {
    pub fn hadamard(target: usize) -> Self {
        Operation::SingleQubit { target, gate: hadamard(), label: "H".to_string() }
    }

    pub fn controlled_ry(control: usize, target: usize, theta: f64) -> Self {
        Operation::Controlled {
            control,
            target,
            gate: ry(theta),
            label: format!("Ry({:.3})", theta),
        }
    }

    /// Returns every qubit index the operation touches.
    pub fn involved_qubits(&self) -> Vec<usize> {
        match self {
            Operation::SingleQubit { target, .. } => vec![*target],
            Operation::Controlled { control, target, .. } => vec![*control, *target],
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::SingleQubit { target, label, .. } => write!(f, "{} q{}", label, target),
            Operation::Controlled { control, target, label, .. } => write!(f, "C-{} q{} -> q{}", label, control, target),
        }
    }
}
