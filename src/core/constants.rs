//! Fixed layout of the experiment and the numerical tolerances it relies on.

/// Total number of qubits: one system qubit plus six environment qubits.
pub const QUBIT_COUNT: usize = 7;

/// Dimension of the amplitude vector (2^7).
pub const STATE_DIM: usize = 1 << QUBIT_COUNT;

/// Index of the system qubit. Bit `q` of a basis index is the value of qubit `q`.
pub const SYSTEM_QUBIT: usize = 0;

/// Environment qubits, in geometric order.
pub const ENV_QUBITS: [usize; 6] = [1, 2, 3, 4, 5, 6];

/// Geometric partition of the environment into three 2-qubit blocks.
/// Order matches `BlockId::ALL`.
pub const BLOCKS: [[usize; 2]; 3] = [[1, 2], [3, 4], [5, 6]];

/// Number of orderings of `ENV_QUBITS` (6!).
pub const PERMUTATION_COUNT: usize = 720;

/// Coupling angles within this distance of zero are treated as exactly zero.
pub const ZERO_ANGLE_TOLERANCE: f64 = 1e-12;

/// `full_state` renormalizes when the norm deviates from 1 by more than this.
pub const RENORMALIZE_TOLERANCE: f64 = 1e-12;

/// Every MI value of an uncoupled run must lie within this distance of zero.
pub const NULL_COUPLING_TOLERANCE: f64 = 1e-10;

/// Default tolerance for `check_normalization` on the squared norm.
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;
