// src/core/state.rs

use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

use super::constants::{QUBIT_COUNT, STATE_DIM, SYSTEM_QUBIT};
use super::error::QdarwinError;

/// Dense amplitude vector over `n` qubits.
///
/// Index `i` encodes the computational basis state where bit `q` of `i` is the
/// value of qubit `q` (qubit 0 is the least-significant bit). The experiment
/// always works with `n = 7`, but the engine accepts any power-of-two length so
/// that small states can be exercised directly in tests.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    amplitudes: Vec<Complex<f64>>,
    num_qubits: usize,
}

impl StateVector {
    /// Creates a state from raw amplitudes.
    ///
    /// # Returns
    /// * `Err(QdarwinError::InvalidOperation)` if the length is zero or not a power of two.
    pub fn from_amplitudes(amplitudes: Vec<Complex<f64>>) -> Result<Self, QdarwinError> {
        let dim = amplitudes.len();
        if dim == 0 || !dim.is_power_of_two() {
            return Err(QdarwinError::InvalidOperation {
                message: format!("Amplitude vector length {} is not a power of two", dim),
            });
        }
        let num_qubits = dim.trailing_zeros() as usize;
        Ok(Self { amplitudes, num_qubits })
    }

    /// The basis state |0...0> over `num_qubits` qubits.
    pub fn zero_state(num_qubits: usize) -> Self {
        let mut amplitudes = vec![Complex::zero(); 1 << num_qubits];
        amplitudes[0] = Complex::new(1.0, 0.0);
        Self { amplitudes, num_qubits }
    }

    /// |+> on the system qubit tensor |0>^6 on the environment:
    /// amplitudes at index 0 and `1 << SYSTEM_QUBIT` are both 1/sqrt(2).
    pub fn plus_system() -> Self {
        let mut amplitudes = vec![Complex::zero(); STATE_DIM];
        let norm = Complex::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
        amplitudes[0] = norm;
        amplitudes[1 << SYSTEM_QUBIT] = norm;
        Self { amplitudes, num_qubits: QUBIT_COUNT }
    }

    /// Provides read-only access to the amplitudes.
    pub fn vector(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Number of basis states (2^n).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Probability of basis state `index`: |a_i|^2.
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes[index].norm_sqr()
    }

    /// Sum of squared magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Euclidean norm of the amplitude vector.
    pub fn norm(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Returns a copy with every amplitude divided by the current norm.
    pub fn normalized(&self) -> Result<Self, QdarwinError> {
        let norm = self.norm();
        if norm < 1e-12 {
            return Err(QdarwinError::Incoherence {
                message: "Cannot renormalize a state with vanishing norm".to_string(),
            });
        }
        let amplitudes = self.amplitudes.iter().map(|a| *a / norm).collect();
        Ok(Self { amplitudes, num_qubits: self.num_qubits })
    }

    /// Ket label of `index`, qubit 0 rightmost.
    pub fn basis_label(&self, index: usize) -> String {
        let bits: String = (0..self.num_qubits)
            .rev()
            .map(|q| if (index >> q) & 1 == 1 { '1' } else { '0' })
            .collect();
        format!("|{}>", bits)
    }

    pub(crate) fn check_qubit(&self, qubit: usize) -> Result<(), QdarwinError> {
        if qubit >= self.num_qubits {
            return Err(QdarwinError::InvalidQubit {
                qubit,
                message: format!("state has only {} qubits", self.num_qubits),
            });
        }
        Ok(())
    }
}

impl fmt::Display for StateVector {
    /// Lists only the non-negligible amplitudes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        let mut first = true;
        for (i, c) in self.amplitudes.iter().enumerate() {
            if c.norm_sqr() < 1e-24 {
                continue;
            }
            write!(f, "{}{:.4} {}", if first { "" } else { ", " }, c, self.basis_label(i))?;
            first = false;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_amplitudes_rejects_non_power_of_two() {
        let result = StateVector::from_amplitudes(vec![Complex::zero(); 3]);
        assert!(matches!(result, Err(QdarwinError::InvalidOperation { .. })));
        let empty = StateVector::from_amplitudes(Vec::new());
        assert!(empty.is_err());
    }

    #[test]
    fn test_plus_system_layout() {
        let state = StateVector::plus_system();
        assert_eq!(state.dim(), 128);
        assert_eq!(state.num_qubits(), 7);
        assert!((state.probability(0) - 0.5).abs() < 1e-15);
        assert!((state.probability(1) - 0.5).abs() < 1e-15);
        assert!((2..128).all(|i| state.probability(i) == 0.0));
        assert!((state.norm_sqr() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_normalized_rescales_and_rejects_zero() -> Result<(), QdarwinError> {
        let state = StateVector::from_amplitudes(vec![Complex::new(3.0, 0.0), Complex::new(0.0, 4.0)])?;
        let normalized = state.normalized()?;
        assert!((normalized.norm() - 1.0).abs() < 1e-15);
        assert!((normalized.vector()[0].re - 0.6).abs() < 1e-15);
        assert!((normalized.vector()[1].im - 0.8).abs() < 1e-15);

        let zero = StateVector::from_amplitudes(vec![Complex::zero(); 2])?;
        assert!(matches!(zero.normalized(), Err(QdarwinError::Incoherence { .. })));
        Ok(())
    }

    #[test]
    fn test_basis_label_is_lsb_rightmost() {
        let state = StateVector::zero_state(3);
        assert_eq!(state.basis_label(1), "|001>");
        assert_eq!(state.basis_label(6), "|110>");
    }
}
