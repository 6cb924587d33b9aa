//! Error handling logic

use std::fmt;

/// Error types raised by the simulator, the measurement engine and the
/// experiment driver.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum QdarwinError {
    /// A pointer basis other than `"Z"` or `"X"` was requested.
    InvalidPointer {
        /// The rejected pointer string
        pointer: String,
    },

    /// A qubit index does not exist in the state being operated on.
    InvalidQubit {
        /// Offending qubit index
        qubit: usize,
        /// InvalidQubit failure message
        message: String,
    },

    /// An operation is inconsistent with its arguments (e.g. control == target).
    InvalidOperation {
        /// InvalidOperation failure message
        message: String,
    },

    /// The state lost normalization, or a null-coupling run produced correlations.
    Incoherence {
        /// Incoherence failure message
        message: String,
    },

    /// General error encountered during the simulation process itself.
    SimulationError {
        /// SimulationError failure message
        message: String,
    },
}

impl fmt::Display for QdarwinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QdarwinError::InvalidPointer { pointer } => write!(f, "Invalid Pointer: unknown pointer '{}' (expected \"Z\" or \"X\")", pointer),
            QdarwinError::InvalidQubit { qubit, message } => write!(f, "Invalid Qubit ({}): {}", qubit, message),
            QdarwinError::InvalidOperation { message } => write!(f, "Invalid Operation: {}", message),
            QdarwinError::Incoherence { message } => write!(f, "Incoherence Violation: {}", message),
            QdarwinError::SimulationError { message } => write!(f, "Simulation Process Error: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for QdarwinError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_pointer() {
        let err = QdarwinError::InvalidPointer { pointer: "Y".to_string() };
        assert_eq!(err.to_string(), "Invalid Pointer: unknown pointer 'Y' (expected \"Z\" or \"X\")");
    }

    #[test]
    fn test_display_invalid_qubit() {
        let err = QdarwinError::InvalidQubit { qubit: 9, message: "out of range".to_string() };
        assert_eq!(err.to_string(), "Invalid Qubit (9): out of range");
    }
}
