//! Error types for backend operations.

use thiserror::Error;

/// Errors that can occur during backend operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HalError {
    /// The circuit requires more qubits than the backend supports.
    #[error("Circuit too large: {0}")]
    CircuitTooLarge(String),

    /// The requested shot count is not usable.
    #[error("Invalid shot count: {0}")]
    InvalidShots(String),

    /// The circuit cannot be run in the requested mode.
    #[error("Invalid circuit: {0}")]
    InvalidCircuit(String),

    /// Backend configuration was malformed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for HAL operations.
pub type HalResult<T> = Result<T, HalError>;
