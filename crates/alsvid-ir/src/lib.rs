//! Alsvid Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing quantum
//! circuits in Alsvid. Everything downstream (the algorithm builders, the
//! simulator backend, the demos) works in terms of these types.
//!
//! # Overview
//!
//! The circuit IR uses a DAG (Directed Acyclic Graph) representation
//! internally, with one wire per qubit and classical bit. The high-level
//! [`Circuit`] API provides a convenient builder pattern for constructing
//! circuits, and [`Circuit::extend`] composes circuits by concatenation.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`] for addressing
//!   quantum and classical registers
//! - **Gates**: [`StandardGate`] for built-in gates (H, X, CX, MCX, etc.)
//!   with concrete rotation angles
//! - **Instructions**: [`Instruction`] combining gates with their operands
//! - **DAG**: [`CircuitDag`] for the internal graph representation
//! - **Circuit**: [`Circuit`] high-level builder API
//! - **QASM**: [`qasm::emit`] renders a circuit as QASM3 text
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use alsvid_ir::{Circuit, QubitId};
//!
//! // Create a new circuit with 2 qubits and 2 classical bits
//! let mut circuit = Circuit::with_size("bell_state", 2, 2);
//!
//! // Build the Bell state: |00⟩ → (|00⟩ + |11⟩)/√2
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! // Add measurement
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert!(circuit.depth() >= 2);  // H, CX, measure
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `I`, `X`, `Y`, `Z` | 1 | Identity and Pauli gates |
//! | `S`, `Sdg` | 1 | S and S-dagger gates |
//! | `T`, `Tdg` | 1 | T and T-dagger gates |
//! | `Rx`, `Ry`, `Rz`, `P` | 1 | Rotation and phase gates (bound angles) |
//! | `CX`, `CZ` | 2 | Controlled-NOT and Controlled-Z |
//! | `Swap` | 2 | SWAP gate |
//! | `MCX` | n+1 | Multi-controlled X with n controls |

pub mod circuit;
pub mod dag;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qasm;
pub mod qubit;

pub use circuit::Circuit;
pub use dag::{CircuitDag, DagEdge, DagNode, NodeIndex, WireId};
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{Clbit, ClbitId, Qubit, QubitId};
