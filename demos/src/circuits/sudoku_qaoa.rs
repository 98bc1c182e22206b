//! QAOA-style circuits for the 4x4 quantum sudoku demo.
//!
//! Sudoku constraints become a cost layer that penalizes two cells of the
//! same row, column, or box holding the same value: for every clashing
//! cell pair, the matching bits are coupled with RZZ(γ) = exp(-i γ/2 Z Z),
//! decomposed as CX · RZ(γ) · CX. The mixer applies RX(2β) to the qubits
//! of every empty cell, so givens stay pinned while free cells explore the
//! value space.
//!
//! The full grid needs 32 qubits, which is more than the bundled
//! statevector simulator accepts. [`cell_pair_circuit`] carves out a
//! two-cell slice of the same construction that simulates easily and shows
//! the constraint layer doing real work.

use alsvid_ir::{Circuit, QubitId};

use crate::problems::sudoku::{
    GRID_QUBITS, GRID_SIZE, QUBITS_PER_CELL, SudokuGrid, decode_value, encode_value,
};

/// Generate a QAOA circuit for a 4x4 sudoku puzzle, measurements included.
///
/// The circuit prepares givens as fixed basis states and empty cells in
/// uniform superposition, then alternates constraint and mixer layers.
///
/// # Arguments
/// * `puzzle` - The sudoku grid, `0` for empty cells
/// * `gamma` - Constraint parameters (one per layer)
/// * `beta` - Mixer parameters (one per layer)
pub fn sudoku_qaoa_circuit(puzzle: &SudokuGrid, gamma: &[f64], beta: &[f64]) -> Circuit {
    let mut circuit = sudoku_qaoa_circuit_no_measure(puzzle, gamma, beta);
    circuit.measure_all().unwrap();
    circuit
}

/// Generate the sudoku QAOA circuit without measurements.
pub fn sudoku_qaoa_circuit_no_measure(
    puzzle: &SudokuGrid,
    gamma: &[f64],
    beta: &[f64],
) -> Circuit {
    assert_eq!(
        gamma.len(),
        beta.len(),
        "gamma and beta must have same length"
    );

    let mut circuit = Circuit::with_size("sudoku-qaoa", GRID_QUBITS as u32, 0);

    encode_cells(&mut circuit, puzzle);
    for layer in 0..gamma.len() {
        apply_constraint_unitary(&mut circuit, gamma[layer]);
        apply_mixer_unitary(&mut circuit, puzzle, beta[layer]);
    }

    circuit
}

/// Prepare the initial state: givens as basis states, empty cells in
/// uniform superposition over all four values.
fn encode_cells(circuit: &mut Circuit, puzzle: &SudokuGrid) {
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let qubit = ((row * GRID_SIZE + col) * QUBITS_PER_CELL) as u32;
            match puzzle.value(row, col) {
                0 => {
                    circuit.h(QubitId(qubit)).unwrap();
                    circuit.h(QubitId(qubit + 1)).unwrap();
                }
                value => {
                    let (low, high) = encode_value(value);
                    if low {
                        circuit.x(QubitId(qubit)).unwrap();
                    }
                    if high {
                        circuit.x(QubitId(qubit + 1)).unwrap();
                    }
                }
            }
        }
    }
}

/// Apply one constraint layer: RZZ(γ) on the matching bits of every
/// clashing cell pair, decomposed as CX · RZ(γ) · CX.
fn apply_constraint_unitary(circuit: &mut Circuit, gamma: f64) {
    for (a, b) in clashing_cell_pairs() {
        for offset in 0..QUBITS_PER_CELL {
            let control = QubitId((a * QUBITS_PER_CELL + offset) as u32);
            let target = QubitId((b * QUBITS_PER_CELL + offset) as u32);
            circuit.cx(control, target).unwrap();
            circuit.rz(gamma, target).unwrap();
            circuit.cx(control, target).unwrap();
        }
    }
}

/// Apply one mixer layer: RX(2β) on both qubits of every empty cell.
/// Givens carry no mixer, so their values stay pinned.
fn apply_mixer_unitary(circuit: &mut Circuit, puzzle: &SudokuGrid, beta: f64) {
    let angle = 2.0 * beta;
    let fixed = puzzle.fixed_cells();
    for cell in 0..GRID_SIZE * GRID_SIZE {
        if fixed.contains(&cell) {
            continue;
        }
        let qubit = (cell * QUBITS_PER_CELL) as u32;
        circuit.rx(angle, QubitId(qubit)).unwrap();
        circuit.rx(angle, QubitId(qubit + 1)).unwrap();
    }
}

/// All cell pairs (flat indices, `a < b`) that must hold distinct values:
/// same row, same column, or same 2x2 box. A 4x4 grid has 56 such pairs.
pub fn clashing_cell_pairs() -> Vec<(usize, usize)> {
    let total = GRID_SIZE * GRID_SIZE;
    let mut pairs = Vec::new();
    for a in 0..total {
        for b in (a + 1)..total {
            if cells_clash(a, b) {
                pairs.push((a, b));
            }
        }
    }
    pairs
}

fn cells_clash(a: usize, b: usize) -> bool {
    let (row_a, col_a) = (a / GRID_SIZE, a % GRID_SIZE);
    let (row_b, col_b) = (b / GRID_SIZE, b % GRID_SIZE);
    row_a == row_b
        || col_a == col_b
        || (row_a / 2 == row_b / 2 && col_a / 2 == col_b / 2)
}

/// Generate the two-cell slice of the sudoku construction: two empty cells
/// that must differ, on 4 qubits, measurements included.
///
/// For well-chosen parameters (for example γ = 1.5, β = 1.0) the four
/// equal-value outcomes are strongly suppressed below their uniform 25%.
pub fn cell_pair_circuit(gamma: f64, beta: f64) -> Circuit {
    let mut circuit = cell_pair_circuit_no_measure(gamma, beta);
    circuit.measure_all().unwrap();
    circuit
}

/// Generate the two-cell slice without measurements.
pub fn cell_pair_circuit_no_measure(gamma: f64, beta: f64) -> Circuit {
    let mut circuit = Circuit::with_size("sudoku-pair", 2 * QUBITS_PER_CELL as u32, 0);

    for q in 0..2 * QUBITS_PER_CELL as u32 {
        circuit.h(QubitId(q)).unwrap();
    }
    for offset in 0..QUBITS_PER_CELL as u32 {
        let control = QubitId(offset);
        let target = QubitId(QUBITS_PER_CELL as u32 + offset);
        circuit.cx(control, target).unwrap();
        circuit.rz(gamma, target).unwrap();
        circuit.cx(control, target).unwrap();
    }
    let angle = 2.0 * beta;
    for q in 0..2 * QUBITS_PER_CELL as u32 {
        circuit.rx(angle, QubitId(q)).unwrap();
    }

    circuit
}

/// Decode a 4-bit slice measurement into the two cell values.
///
/// Character `k` reports clbit `k`: the first two characters are the low
/// and high bit of the first cell, the last two those of the second.
pub fn slice_values(bits: &str) -> Option<(u8, u8)> {
    let bytes = bits.as_bytes();
    if bytes.len() != 2 * QUBITS_PER_CELL || !bytes.iter().all(|b| matches!(b, b'0' | b'1')) {
        return None;
    }
    let bit = |index: usize| bytes[index] == b'1';
    Some((decode_value(bit(0), bit(1)), decode_value(bit(2), bit(3))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvid_ir::StandardGate;

    fn count_gates(circuit: &Circuit, matches: impl Fn(&StandardGate) -> bool) -> usize {
        circuit
            .dag()
            .topological_ops()
            .filter(|(_, inst)| inst.as_gate().is_some_and(&matches))
            .count()
    }

    #[test]
    fn test_full_circuit_shape() {
        let puzzle = SudokuGrid::demo_puzzle();
        let circuit = sudoku_qaoa_circuit(&puzzle, &[0.5], &[0.3]);

        assert_eq!(circuit.num_qubits(), 32);
        assert_eq!(circuit.num_clbits(), 32);
        assert!(circuit.depth() > 0);
    }

    #[test]
    fn test_multi_layer_circuit() {
        let puzzle = SudokuGrid::demo_puzzle();
        let single = sudoku_qaoa_circuit(&puzzle, &[0.5], &[0.3]);
        let double = sudoku_qaoa_circuit(&puzzle, &[0.5, 0.1], &[0.3, 0.2]);

        assert!(double.dag().num_ops() > single.dag().num_ops());
    }

    #[test]
    fn test_encoding_matches_givens() {
        // The demo puzzle has 11 empty cells and givens 1, 4, 1, 4, 2,
        // which need 0 + 2 + 0 + 2 + 1 X gates.
        let puzzle = SudokuGrid::demo_puzzle();
        let circuit = sudoku_qaoa_circuit_no_measure(&puzzle, &[], &[]);

        assert_eq!(count_gates(&circuit, |g| matches!(g, StandardGate::H)), 22);
        assert_eq!(count_gates(&circuit, |g| matches!(g, StandardGate::X)), 5);
    }

    #[test]
    fn test_mixer_skips_fixed_cells() {
        let puzzle = SudokuGrid::demo_puzzle();
        let circuit = sudoku_qaoa_circuit_no_measure(&puzzle, &[0.5], &[0.3]);

        // One RX per qubit of each empty cell.
        let rx_count = count_gates(&circuit, |g| matches!(g, StandardGate::Rx(_)));
        assert_eq!(rx_count, 2 * puzzle.num_empty());
    }

    #[test]
    fn test_clashing_cell_pairs() {
        let pairs = clashing_cell_pairs();

        assert_eq!(pairs.len(), 56);
        assert!(pairs.iter().all(|(a, b)| a < b));
        // Same row, same column, same box.
        assert!(pairs.contains(&(0, 1)));
        assert!(pairs.contains(&(0, 4)));
        assert!(pairs.contains(&(0, 5)));
        // Cells (0,0) and (1,3) share nothing.
        assert!(!pairs.contains(&(0, 7)));
    }

    #[test]
    fn test_cell_pair_circuit_shape() {
        let circuit = cell_pair_circuit(1.5, 1.0);
        assert_eq!(circuit.num_qubits(), 4);
        assert_eq!(circuit.num_clbits(), 4);
        // 4 H, two RZZ decompositions, 4 RX, one measurement.
        assert_eq!(circuit.dag().num_ops(), 15);

        let bare = cell_pair_circuit_no_measure(1.5, 1.0);
        assert_eq!(bare.num_clbits(), 0);
        assert_eq!(bare.dag().num_ops(), 14);
    }

    #[test]
    fn test_slice_values() {
        assert_eq!(slice_values("0000"), Some((1, 1)));
        assert_eq!(slice_values("1000"), Some((2, 1)));
        assert_eq!(slice_values("0110"), Some((3, 2)));
        assert_eq!(slice_values("1111"), Some((4, 4)));
        assert_eq!(slice_values("010"), None);
        assert_eq!(slice_values("01x0"), None);
    }
}
