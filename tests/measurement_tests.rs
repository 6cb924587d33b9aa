// tests/measurement_tests.rs

use qdarwin::measurement::{
    block_mutual_information, env_permutations, joint_distribution, mutual_information_from_distribution,
    random_block_tables, random_block_tables_over, x_basis, z_basis,
};
use qdarwin::simulation::apply_single_qubit_gate;
use qdarwin::operations::hadamard;
use qdarwin::core::SYSTEM_QUBIT;
use qdarwin::{full_state, BlockId, Pointer, QdarwinError};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::f64::consts::PI;

const SETTINGS: [(f64, f64); 5] = [
    (0.0, 0.0),
    (PI / 4.0, 0.0),
    (PI / 4.0, PI / 12.0),
    (PI / 12.0, PI / 4.0),
    (1.1, 2.3),
];

#[test]
fn test_double_hadamard_restores_state() -> Result<(), QdarwinError> {
    for (theta_z, theta_x) in SETTINGS {
        let state = full_state(theta_z, theta_x)?;
        for qubit in 0..7 {
            let once = apply_single_qubit_gate(&state, &hadamard(), qubit)?;
            let twice = apply_single_qubit_gate(&once, &hadamard(), qubit)?;
            for (a, b) in twice.vector().iter().zip(state.vector()) {
                assert!((a - b).norm() < 1e-12, "H·H on q{} changed an amplitude", qubit);
            }
        }
    }
    Ok(())
}

#[test]
fn test_mutual_information_non_negative() -> Result<(), QdarwinError> {
    let perms = env_permutations();
    for (theta_z, theta_x) in SETTINGS {
        let state = full_state(theta_z, theta_x)?;
        for perm in perms.iter().step_by(37) {
            for pair in perm.chunks_exact(2) {
                for pointer in [Pointer::Z, Pointer::X] {
                    let mi = block_mutual_information(&state, pair, &pointer.basis_ops(pair))?;
                    assert!(mi >= -1e-9, "negative MI {} for pair {:?}", mi, pair);
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_joint_distribution_sums_to_one() -> Result<(), QdarwinError> {
    let state = full_state(PI / 4.0, PI / 12.0)?;
    for block in BlockId::ALL {
        let [a, b] = block.qubits();
        let probs = joint_distribution(&state, &[SYSTEM_QUBIT, a, b])?;
        assert_eq!(probs.len(), 8);
        assert!(probs.iter().all(|p| *p >= 0.0));
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }
    Ok(())
}

#[test]
fn test_mi_of_marginalised_system_is_zero() -> Result<(), QdarwinError> {
    // Joint over (system, block) where the block is independent of the system
    let joint = [0.125; 8];
    assert!(mutual_information_from_distribution(&joint)?.abs() < 1e-15);
    Ok(())
}

#[test]
fn test_empty_measurement_is_rejected_before_mi() {
    let result = full_state(PI / 4.0, 0.0)
        .and_then(|s| joint_distribution(&s, &[]))
        .and_then(|joint| mutual_information_from_distribution(&joint));
    assert!(matches!(result, Err(QdarwinError::InvalidOperation { .. })));
}

#[test]
fn test_random_tables_invariant_to_enumeration_order() -> Result<(), QdarwinError> {
    let state = full_state(PI / 4.0, PI / 12.0)?;
    let reference_z = random_block_tables(&state, z_basis)?;
    let reference_x = random_block_tables(&state, x_basis)?;

    let mut perms = env_permutations();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..3 {
        perms.shuffle(&mut rng);
        let shuffled_z = random_block_tables_over(&state, &perms, z_basis)?;
        let shuffled_x = random_block_tables_over(&state, &perms, x_basis)?;
        for block in BlockId::ALL {
            assert!((shuffled_z[block] - reference_z[block]).abs() < 1e-12);
            assert!((shuffled_x[block] - reference_x[block]).abs() < 1e-12);
        }
    }
    Ok(())
}

#[test]
fn test_reversed_enumeration_matches() -> Result<(), QdarwinError> {
    let state = full_state(1.1, 2.3)?;
    let mut perms = env_permutations();
    let forward = random_block_tables_over(&state, &perms, x_basis)?;
    perms.reverse();
    let backward = random_block_tables_over(&state, &perms, x_basis)?;
    for block in BlockId::ALL {
        assert!((forward[block] - backward[block]).abs() < 1e-12);
    }
    Ok(())
}
