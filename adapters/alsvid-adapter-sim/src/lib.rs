//! Alsvid Local Statevector Simulator
//!
//! This crate provides a local quantum simulator for testing, development,
//! and small-scale experiments. It uses dense statevector simulation, which
//! gives exact amplitudes but is limited to ~20-25 qubits.
//!
//! # Features
//!
//! - **Exact Simulation**: Full statevector representation, including an
//!   exact multi-controlled X for any number of controls
//! - **All Standard Gates**: Supports every gate in `alsvid-ir`
//! - **Measurement Sampling**: Probabilistic sampling with configurable shots
//! - **Statevector Access**: Inspect final amplitudes without sampling
//!
//! # Performance
//!
//! | Qubits | Memory | Simulation Speed |
//! |--------|--------|------------------|
//! | 10 | ~16 KB | Instant |
//! | 15 | ~512 KB | Fast |
//! | 20 | ~16 MB | Moderate |
//! | 25 | ~512 MB | Slow |
//! | 30+ | ~16 GB+ | Not recommended |
//!
//! # Example
//!
//! ```
//! use alsvid_adapter_sim::SimulatorBackend;
//! use alsvid_hal::Backend;
//! use alsvid_ir::Circuit;
//!
//! let backend = SimulatorBackend::new();
//!
//! // Run a Bell state, expect ~50% |00⟩ and ~50% |11⟩
//! let circuit = Circuit::bell().unwrap();
//! let result = backend.execute(&circuit, 1000).unwrap();
//! println!("Results: {:?}", result.counts);
//! ```

mod simulator;
mod statevector;

pub use simulator::SimulatorBackend;
