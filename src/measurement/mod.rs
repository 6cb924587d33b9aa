// src/measurement/mod.rs

//! Outcome statistics and classical mutual information between the system
//! qubit and 2-qubit environment blocks.
//!
//! A measurement in a basis other than Z is realised by rotating a copy of the
//! state with local gates first (`BasisOps`) and then reading computational
//! basis probabilities.

use itertools::Itertools;
use std::collections::BTreeMap;

use crate::core::{BlockId, MiTable, Pointer, QdarwinError, StateVector, ENV_QUBITS, SYSTEM_QUBIT};
use crate::operations::{hadamard, Gate};
use crate::simulation::apply_single_qubit_gate;

/// Local basis-change gates keyed by qubit. Iteration is in ascending qubit
/// order; gates on distinct qubits commute, so the order does not affect results.
pub type BasisOps = BTreeMap<usize, Gate>;

/// Computational-basis measurement: no rotation.
pub fn z_basis(_qubits: &[usize]) -> BasisOps {
    BasisOps::new()
}

/// X-basis measurement: Hadamard on the system qubit and every measured qubit.
pub fn x_basis(qubits: &[usize]) -> BasisOps {
    let mut ops = BasisOps::new();
    ops.insert(SYSTEM_QUBIT, hadamard());
    for qubit in qubits {
        ops.insert(*qubit, hadamard());
    }
    ops
}

impl Pointer {
    /// Basis ops for measuring `qubits` (plus the system qubit) in this pointer basis.
    pub fn basis_ops(self, qubits: &[usize]) -> BasisOps {
        match self {
            Pointer::Z => z_basis(qubits),
            Pointer::X => x_basis(qubits),
        }
    }
}

/// Rotates a copy of `state` by every gate in `basis_ops`.
pub fn apply_basis_transforms(state: &StateVector, basis_ops: &BasisOps) -> Result<StateVector, QdarwinError> {
    let mut result = state.clone();
    for (qubit, gate) in basis_ops {
        result = apply_single_qubit_gate(&result, gate, *qubit)?;
    }
    Ok(result)
}

/// Joint outcome probabilities for `measured_qubits`.
///
/// Outcome bit `pos` is the value of `measured_qubits[pos]`, so the first listed
/// qubit is the least-significant bit of the outcome index.
pub fn joint_distribution(state: &StateVector, measured_qubits: &[usize]) -> Result<Vec<f64>, QdarwinError> {
    if measured_qubits.is_empty() {
        return Err(QdarwinError::InvalidOperation {
            message: "Cannot build a joint distribution over zero qubits".to_string(),
        });
    }
    for qubit in measured_qubits {
        state.check_qubit(*qubit)?;
    }

    let mut probs = vec![0.0; 1 << measured_qubits.len()];
    for (index, amp) in state.vector().iter().enumerate() {
        let prob = amp.norm_sqr();
        if prob == 0.0 {
            continue;
        }
        let outcome = measured_qubits
            .iter()
            .enumerate()
            .filter(|(_, qubit)| index & (1 << **qubit) != 0)
            .fold(0usize, |acc, (pos, _)| acc | (1 << pos));
        probs[outcome] += prob;
    }
    Ok(probs)
}

/// Mutual information (bits) between outcome bit 0 ("system") and the
/// remaining bits ("block") of a joint distribution.
///
/// Terms with non-positive joint probability or non-positive product of
/// marginals contribute zero. No clamping: rounding can leave tiny negatives.
///
/// # Returns
/// * `Err(QdarwinError::InvalidOperation)` unless `joint.len()` is even and at least 2.
pub fn mutual_information_from_distribution(joint: &[f64]) -> Result<f64, QdarwinError> {
    if joint.len() < 2 || joint.len() % 2 != 0 {
        return Err(QdarwinError::InvalidOperation {
            message: format!("Joint distribution of length {} has no system/block split", joint.len()),
        });
    }
    let block_states = joint.len() / 2;
    let mut p_s = [0.0; 2];
    let mut p_b = vec![0.0; block_states];
    for (idx, prob) in joint.iter().enumerate() {
        p_s[idx & 1] += prob;
        p_b[idx >> 1] += prob;
    }

    let mut mi = 0.0;
    for (idx, prob) in joint.iter().enumerate() {
        if *prob <= 0.0 {
            continue;
        }
        let denom = p_s[idx & 1] * p_b[idx >> 1];
        if denom <= 0.0 {
            continue;
        }
        mi += prob * (prob / denom).log2();
    }
    Ok(mi)
}

/// MI between the system qubit and `block`, measured after `basis_ops`.
pub fn block_mutual_information(
    state: &StateVector,
    block: &[usize],
    basis_ops: &BasisOps,
) -> Result<f64, QdarwinError> {
    let transformed = apply_basis_transforms(state, basis_ops)?;
    let mut measured = Vec::with_capacity(block.len() + 1);
    measured.push(SYSTEM_QUBIT);
    measured.extend_from_slice(block);
    let joint = joint_distribution(&transformed, &measured)?;
    mutual_information_from_distribution(&joint)
}

/// MI for each geometric block, with basis ops from `basis_factory(block qubits)`.
pub fn mutual_information_table<F>(state: &StateVector, basis_factory: F) -> Result<MiTable, QdarwinError>
where
    F: Fn(&[usize]) -> BasisOps,
{
    let mut table = MiTable::default();
    for block in BlockId::ALL {
        let qubits = block.qubits();
        table[block] = block_mutual_information(state, &qubits, &basis_factory(&qubits))?;
        log::trace!("{} {:?}: I={:.6e}", block, qubits, table[block]);
    }
    Ok(table)
}

/// All 720 orderings of the environment qubits, in lexicographic order.
pub fn env_permutations() -> Vec<Vec<usize>> {
    ENV_QUBITS.iter().copied().permutations(ENV_QUBITS.len()).collect()
}

/// Permutation-averaged block MI over all 720 environment orderings.
///
/// Each ordering is cut into pairs at positions (0,1), (2,3), (4,5), which
/// stand in for block0, block1, block2.
pub fn random_block_tables<F>(state: &StateVector, basis_factory: F) -> Result<MiTable, QdarwinError>
where
    F: Fn(&[usize]) -> BasisOps,
{
    random_block_tables_over(state, &env_permutations(), basis_factory)
}

/// Same as `random_block_tables`, averaging over the given orderings.
///
/// Sums are accumulated in the order of `permutations`; the result is
/// independent of that order up to floating-point rounding.
pub fn random_block_tables_over<P, F>(
    state: &StateVector,
    permutations: &[P],
    basis_factory: F,
) -> Result<MiTable, QdarwinError>
where
    P: AsRef<[usize]>,
    F: Fn(&[usize]) -> BasisOps,
{
    if permutations.is_empty() {
        return Err(QdarwinError::InvalidOperation {
            message: "Cannot average over an empty set of permutations".to_string(),
        });
    }

    let mut totals = MiTable::default();
    for perm in permutations {
        let perm = perm.as_ref();
        if perm.len() != ENV_QUBITS.len() {
            return Err(QdarwinError::InvalidOperation {
                message: format!("Ordering {:?} does not cover the {} environment qubits", perm, ENV_QUBITS.len()),
            });
        }
        for (block, qubits) in BlockId::ALL.iter().zip(perm.chunks_exact(2)) {
            totals[*block] += block_mutual_information(state, qubits, &basis_factory(qubits))?;
        }
    }

    let count = permutations.len() as f64;
    let sums: [f64; 3] = *totals.values();
    Ok(MiTable::new(sums.map(|total| total / count)))
}
