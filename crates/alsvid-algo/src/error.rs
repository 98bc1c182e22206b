//! Error types for algorithm circuit construction.

use thiserror::Error;

use alsvid_ir::IrError;

/// Errors from building algorithm circuits.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AlgoError {
    /// The search target string was empty.
    #[error("Target bitstring is empty")]
    EmptyTarget,

    /// The search target contained a character other than '0' or '1'.
    #[error("Invalid character '{character}' at position {position} in target, expected '0' or '1'")]
    NonBinaryTarget { character: char, position: usize },

    /// A circuit over zero qubits was requested.
    #[error("Circuit needs at least one qubit")]
    ZeroQubits,

    /// An explicit iteration count of zero was requested.
    #[error("Iteration count must be at least 1")]
    ZeroIterations,

    /// The marked-state count does not fit the search space.
    #[error("Solution count {solutions} must be between 1 and 2^{num_qubits}")]
    SolutionCountOutOfRange { solutions: usize, num_qubits: usize },

    /// Underlying circuit construction failed.
    #[error("Circuit construction failed: {0}")]
    Circuit(#[from] IrError),
}

/// Result type alias for algorithm operations.
pub type AlgoResult<T> = Result<T, AlgoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_offender() {
        let err = AlgoError::NonBinaryTarget {
            character: 'x',
            position: 2,
        };
        let message = err.to_string();
        assert!(message.contains('x'));
        assert!(message.contains('2'));
    }

    #[test]
    fn test_ir_error_conversion() {
        let ir_err = IrError::InvalidDag("broken wire".to_string());
        let err: AlgoError = ir_err.into();
        assert!(matches!(err, AlgoError::Circuit(_)));
    }
}
