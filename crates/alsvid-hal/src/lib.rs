//! # Alsvid HAL
//!
//! Provider abstraction layer for executing Alsvid circuits.
//!
//! The HAL decouples circuit construction from circuit execution. Code
//! that builds circuits depends only on the [`Backend`] trait; which
//! provider actually runs them is chosen at the edge of the program.
//!
//! ## Core types
//!
//! - [`Backend`]: the synchronous execution contract
//! - [`BackendConfig`] / [`BackendFactory`]: configuration-driven construction
//! - [`Counts`]: measurement histogram keyed by bitstring
//! - [`ExecutionResult`]: counts plus shot and timing metadata
//! - [`HalError`]: what can go wrong, and which argument caused it
//!
//! ## Example
//!
//! ```
//! use alsvid_hal::{Backend, Counts, ExecutionResult, HalResult};
//! use alsvid_ir::Circuit;
//!
//! fn report(backend: &dyn Backend, circuit: &Circuit) -> HalResult<()> {
//!     let result = backend.execute(circuit, 1000)?;
//!     if let Some((bitstring, count)) = result.counts.most_frequent() {
//!         println!("{bitstring}: {count} of {} shots", result.shots);
//!     }
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod error;
pub mod result;

pub use backend::{Backend, BackendConfig, BackendFactory};
pub use error::{HalError, HalResult};
pub use result::{Counts, ExecutionResult};
