//! # Alsvid Algo
//!
//! Algorithm-level circuit builders on top of `alsvid-ir`.
//!
//! The crate currently implements Grover's unstructured search. Each
//! stage of the algorithm is built as a standalone [`Circuit`] value
//! (superposition, phase oracle, diffusion operator), and the complete
//! search circuit composes them by concatenation. Builders validate
//! their arguments up front and return an [`AlgoError`] naming the
//! offending argument instead of producing a silently wrong circuit.
//!
//! ## Example
//!
//! ```
//! use alsvid_algo::{grover_circuit, optimal_iterations};
//!
//! // Auto-selects optimal_iterations(3, 1) == 2 rounds
//! let circuit = grover_circuit("101", None).unwrap();
//! assert_eq!(circuit.num_qubits(), 3);
//! assert_eq!(optimal_iterations(3, 1).unwrap(), 2);
//! ```
//!
//! [`Circuit`]: alsvid_ir::Circuit

pub mod error;
pub mod grover;

pub use error::{AlgoError, AlgoResult};
pub use grover::{
    diffusion_circuit, grover_circuit, optimal_iterations, oracle_circuit, superposition_circuit,
};
