//! Backend abstraction for circuit execution providers.
//!
//! # Provider Contract
//!
//! Every execution provider implements [`Backend`]. The contract is
//! deliberately small and fully synchronous: a call either completes with
//! a result or fails fast with a [`HalError`]. There is no job lifecycle,
//! no polling and no cancellation, because every supported provider runs
//! the circuit to completion before returning.
//!
//! | Method        | Purpose                                       |
//! |---------------|-----------------------------------------------|
//! | `name`        | Human-readable provider name                  |
//! | `max_qubits`  | Largest circuit the provider accepts          |
//! | `execute`     | Run a measured circuit, return shot counts    |
//! | `statevector` | Return final amplitudes without sampling      |
//!
//! # Design principles
//!
//! - **Fail fast**: invalid input is rejected before any simulation work
//!   starts, with an error naming the offending argument.
//! - **Thread-safe**: implementations are `Send + Sync` so a backend can
//!   be shared behind a reference.
//! - **Uniform results**: all providers report outcomes through
//!   [`ExecutionResult`](crate::ExecutionResult), whatever they do
//!   internally.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use alsvid_ir::Circuit;

use crate::error::HalResult;
use crate::result::ExecutionResult;

/// A provider that can execute quantum circuits.
pub trait Backend: Send + Sync {
    /// Human-readable name of this backend.
    fn name(&self) -> &str;

    /// Maximum number of qubits this backend accepts.
    fn max_qubits(&self) -> u32;

    /// Runs `circuit` for `shots` repetitions and returns the measurement
    /// histogram.
    ///
    /// # Errors
    ///
    /// - [`HalError::CircuitTooLarge`](crate::HalError::CircuitTooLarge)
    ///   if the circuit uses more than [`max_qubits`](Backend::max_qubits)
    ///   qubits.
    /// - [`HalError::InvalidShots`](crate::HalError::InvalidShots) if
    ///   `shots` is zero.
    /// - [`HalError::InvalidCircuit`](crate::HalError::InvalidCircuit) if
    ///   the circuit contains no measurement, since the histogram would
    ///   be empty by construction.
    fn execute(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult>;

    /// Returns the final statevector of `circuit` without sampling.
    ///
    /// Amplitudes are indexed by computational basis state, with qubit 0
    /// as the least significant bit: index 5 (`0b101`) is the state where
    /// qubits 0 and 2 are one and qubit 1 is zero.
    ///
    /// # Errors
    ///
    /// - [`HalError::CircuitTooLarge`](crate::HalError::CircuitTooLarge)
    ///   if the circuit uses more than [`max_qubits`](Backend::max_qubits)
    ///   qubits.
    /// - [`HalError::InvalidCircuit`](crate::HalError::InvalidCircuit) if
    ///   the circuit contains a measurement, since the pre-collapse state
    ///   is no longer defined after one.
    fn statevector(&self, circuit: &Circuit) -> HalResult<Vec<Complex64>>;
}

/// Configuration for constructing a backend.
///
/// Provider-specific settings go in the `extra` map, so one config type
/// serves every provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend name.
    pub name: String,
    /// Provider-specific options.
    #[serde(flatten, default)]
    pub extra: serde_json::Map<String, Value>,
}

impl BackendConfig {
    /// Creates a new configuration with the given backend name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Adds a provider-specific option.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Constructs a backend from a [`BackendConfig`].
pub trait BackendFactory: Backend + Sized {
    /// Builds the backend, validating any provider-specific options.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::Configuration`](crate::HalError::Configuration)
    /// if an option in `config.extra` has the wrong type or an unusable
    /// value.
    fn from_config(config: BackendConfig) -> HalResult<Self>;
}
