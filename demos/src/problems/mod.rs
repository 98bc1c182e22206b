//! Problem definitions for the demo algorithms.

pub mod sudoku;

pub use sudoku::{GRID_QUBITS, GRID_SIZE, QUBITS_PER_CELL, SudokuGrid, decode_value, encode_value};
