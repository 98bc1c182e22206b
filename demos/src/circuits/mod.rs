//! Quantum circuit generators for demos.

pub mod entangle;
pub mod hello;
pub mod sudoku_qaoa;

pub use entangle::{entangle_circuit, entangle_circuit_no_measure};
pub use hello::{bloch_vector, hello_circuit, hello_circuit_no_measure};
pub use sudoku_qaoa::{
    cell_pair_circuit, cell_pair_circuit_no_measure, clashing_cell_pairs, slice_values,
    sudoku_qaoa_circuit, sudoku_qaoa_circuit_no_measure,
};
