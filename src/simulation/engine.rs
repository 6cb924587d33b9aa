// src/simulation/engine.rs
use crate::core::{QdarwinError, StateVector};
use crate::operations::{Gate, Operation};

/// Applies a 2x2 gate to `qubit`, returning a fresh state.
///
/// Every pair of basis indices that differ only in bit `qubit` is visited exactly
/// once. Both amplitudes of a pair are read from the input before anything is
/// written to the output buffer, so there is no read-after-write aliasing.
///
/// # Arguments
/// * `state` - Input amplitudes (left untouched).
/// * `gate` - Row-major 2x2 matrix.
/// * `qubit` - Target bit position.
pub fn apply_single_qubit_gate(state: &StateVector, gate: &Gate, qubit: usize) -> Result<StateVector, QdarwinError> {
    state.check_qubit(qubit)?;

    let input = state.vector();
    let dim = state.dim();
    let k_mask = 1usize << qubit; // Mask for the target bit
    let lower_mask = k_mask - 1; // Mask for bits to the right
    let upper_mask = !lower_mask; // Bits to the left, once shifted past the target
    let mut new_vec = input.to_vec();

    for i in 0..dim / 2 {
        // Insert a 0 at position `qubit` into the (n-1)-bit counter `i`
        let i0 = ((i & upper_mask) << 1) | (i & lower_mask);
        let i1 = i0 | k_mask;

        let psi_0 = input[i0];
        let psi_1 = input[i1];

        new_vec[i0] = gate[0][0] * psi_0 + gate[0][1] * psi_1;
        new_vec[i1] = gate[1][0] * psi_0 + gate[1][1] * psi_1;
    }

    StateVector::from_amplitudes(new_vec)
}

/// Applies `gate` to `target` on the subspace where `control` is set.
/// Amplitudes with the control bit clear are copied unchanged.
pub fn apply_controlled_gate(
    state: &StateVector,
    control: usize,
    target: usize,
    gate: &Gate,
) -> Result<StateVector, QdarwinError> {
    state.check_qubit(control)?;
    state.check_qubit(target)?;
    if control == target {
        return Err(QdarwinError::InvalidOperation {
            message: "Control and target qubits cannot be the same for controlled operation".to_string(),
        });
    }

    let input = state.vector();
    let control_mask = 1usize << control;
    let target_mask = 1usize << target;
    let mut new_vec = input.to_vec();

    for index in 0..state.dim() {
        if index & control_mask == 0 || index & target_mask != 0 {
            continue;
        }
        let i0 = index;
        let i1 = index | target_mask;
        let psi_0 = input[i0];
        let psi_1 = input[i1];
        new_vec[i0] = gate[0][0] * psi_0 + gate[0][1] * psi_1;
        new_vec[i1] = gate[1][0] * psi_0 + gate[1][1] * psi_1;
    }

    StateVector::from_amplitudes(new_vec)
}

/// Dispatches a circuit operation to the matching gate routine.
pub fn apply_operation(state: &StateVector, op: &Operation) -> Result<StateVector, QdarwinError> {
    match op {
        Operation::SingleQubit { target, gate, .. } => apply_single_qubit_gate(state, gate, *target),
        Operation::Controlled { control, target, gate, .. } => apply_controlled_gate(state, *control, *target, gate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{hadamard, ry};
    use num_complex::Complex;
    use num_traits::Zero;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    const TEST_TOLERANCE: f64 = 1e-12;

    fn assert_complex_vec_approx_equal(actual: &[Complex<f64>], expected: &[Complex<f64>], context: &str) {
        assert_eq!(actual.len(), expected.len(), "Vector length mismatch - {}", context);
        for i in 0..actual.len() {
            let dist_sq = (actual[i] - expected[i]).norm_sqr();
            assert!(
                dist_sq < TEST_TOLERANCE * TEST_TOLERANCE,
                "Vector mismatch at index {} - Actual: {}, Expected: {}, Context: {}",
                i, actual[i], expected[i], context
            );
        }
    }

    #[test]
    fn test_hadamard_on_middle_qubit() -> Result<(), QdarwinError> {
        // |000> -> H on qubit 1 -> (|000> + |010>)/sqrt(2)
        let state = StateVector::zero_state(3);
        let out = apply_single_qubit_gate(&state, &hadamard(), 1)?;
        let mut expected = vec![Complex::zero(); 8];
        expected[0] = Complex::new(FRAC_1_SQRT_2, 0.0);
        expected[2] = Complex::new(FRAC_1_SQRT_2, 0.0);
        assert_complex_vec_approx_equal(out.vector(), &expected, "H on q1");
        // Input untouched
        assert_eq!(state.vector()[0], Complex::new(1.0, 0.0));
        Ok(())
    }

    #[test]
    fn test_controlled_gate_idle_when_control_clear() -> Result<(), QdarwinError> {
        let state = StateVector::zero_state(2);
        let out = apply_controlled_gate(&state, 0, 1, &ry(PI))?;
        assert_complex_vec_approx_equal(out.vector(), state.vector(), "control |0>");
        Ok(())
    }

    #[test]
    fn test_controlled_gate_acts_when_control_set() -> Result<(), QdarwinError> {
        // |01> (qubit 0 set) -> C-Ry(pi) on qubit 1 -> |11>
        let mut amps = vec![Complex::zero(); 4];
        amps[1] = Complex::new(1.0, 0.0);
        let state = StateVector::from_amplitudes(amps)?;
        let out = apply_controlled_gate(&state, 0, 1, &ry(PI))?;
        let mut expected = vec![Complex::zero(); 4];
        expected[3] = Complex::new(1.0, 0.0);
        assert_complex_vec_approx_equal(out.vector(), &expected, "control |1>");
        Ok(())
    }

    #[test]
    fn test_rejects_bad_qubits() {
        let state = StateVector::zero_state(2);
        assert!(matches!(
            apply_single_qubit_gate(&state, &hadamard(), 2),
            Err(QdarwinError::InvalidQubit { qubit: 2, .. })
        ));
        assert!(matches!(
            apply_controlled_gate(&state, 1, 1, &hadamard()),
            Err(QdarwinError::InvalidOperation { .. })
        ));
    }

    #[test]
    fn test_gates_preserve_norm() -> Result<(), QdarwinError> {
        let mut state = StateVector::plus_system();
        for q in 1..7 {
            state = apply_controlled_gate(&state, 0, q, &ry(0.3 * q as f64))?;
            state = apply_single_qubit_gate(&state, &hadamard(), q)?;
        }
        assert!((state.norm_sqr() - 1.0).abs() < 1e-12);
        Ok(())
    }
}
