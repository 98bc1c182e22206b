//! 4x4 Sudoku problem definition for the quantum sudoku demo.
//!
//! Every row, column, and 2x2 box must contain the values 1 through 4
//! exactly once. On the quantum side each cell maps to two qubits, so a
//! full grid needs 32 qubits: cell `c` occupies qubit `2c` (low bit) and
//! qubit `2c + 1` (high bit), storing `value - 1` in binary. The same
//! convention is used when decoding measurement bitstrings.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Grid side length.
pub const GRID_SIZE: usize = 4;
/// Qubits used per cell (values 1..=4 fit in two bits).
pub const QUBITS_PER_CELL: usize = 2;
/// Qubits needed to encode a full grid.
pub const GRID_QUBITS: usize = GRID_SIZE * GRID_SIZE * QUBITS_PER_CELL;

/// A 4x4 Sudoku grid. `0` marks an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SudokuGrid {
    /// Cell values in row-major order, `0` for empty.
    pub cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl SudokuGrid {
    /// Create a grid from explicit cell values.
    pub fn new(cells: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// The puzzle used throughout the sudoku demo (5 givens, 11 empty cells).
    pub fn demo_puzzle() -> Self {
        Self::new([[1, 0, 0, 4], [0, 0, 1, 0], [4, 0, 0, 0], [0, 2, 0, 0]])
    }

    /// The unique solution of [`SudokuGrid::demo_puzzle`].
    pub fn demo_solution() -> Self {
        Self::new([[1, 3, 2, 4], [2, 4, 1, 3], [4, 1, 3, 2], [3, 2, 4, 1]])
    }

    /// Value at (`row`, `col`), `0` if the cell is empty.
    pub fn value(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Flat indices (row-major, 0..16) of the cells fixed by the puzzle.
    pub fn fixed_cells(&self) -> Vec<usize> {
        let mut fixed = Vec::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if self.cells[row][col] != 0 {
                    fixed.push(row * GRID_SIZE + col);
                }
            }
        }
        fixed
    }

    /// Number of empty cells.
    pub fn num_empty(&self) -> usize {
        GRID_SIZE * GRID_SIZE - self.fixed_cells().len()
    }

    /// Whether every cell holds a value.
    pub fn is_complete(&self) -> bool {
        self.num_empty() == 0
    }

    /// Whether the grid is a complete, conflict-free solution.
    pub fn is_valid(&self) -> bool {
        self.is_complete() && self.count_violations() == 0
    }

    /// Count duplicate values across all rows, columns, and 2x2 boxes.
    ///
    /// A value appearing `k > 1` times in one unit contributes `k - 1`
    /// violations. Empty cells never count.
    pub fn count_violations(&self) -> usize {
        let mut violations = 0;

        for row in 0..GRID_SIZE {
            let unit: Vec<u8> = (0..GRID_SIZE).map(|col| self.cells[row][col]).collect();
            violations += duplicates_in(&unit);
        }

        for col in 0..GRID_SIZE {
            let unit: Vec<u8> = (0..GRID_SIZE).map(|row| self.cells[row][col]).collect();
            violations += duplicates_in(&unit);
        }

        for box_row in 0..2 {
            for box_col in 0..2 {
                let mut unit = Vec::with_capacity(GRID_SIZE);
                for i in 0..2 {
                    for j in 0..2 {
                        unit.push(self.cells[box_row * 2 + i][box_col * 2 + j]);
                    }
                }
                violations += duplicates_in(&unit);
            }
        }

        violations
    }

    /// Fill every empty cell with a random value, preferring values not yet
    /// used in the cell's row or column.
    ///
    /// This mimics sampling a noisy quantum result: mostly sensible, but
    /// with occasional conflicts left for classical correction.
    pub fn random_fill<R: Rng>(&self, rng: &mut R) -> SudokuGrid {
        let mut grid = self.clone();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if grid.cells[row][col] != 0 {
                    continue;
                }
                let available: Vec<u8> = (1..=4)
                    .filter(|v| {
                        !grid.cells[row].contains(v)
                            && !(0..GRID_SIZE).any(|r| grid.cells[r][col] == *v)
                    })
                    .collect();
                grid.cells[row][col] = if available.is_empty() {
                    rng.gen_range(1..=4)
                } else {
                    available[rng.gen_range(0..available.len())]
                };
            }
        }
        grid
    }

    /// Greedily repair duplicate values, never touching cells that are
    /// fixed in `givens`.
    ///
    /// Each sweep rewrites at most one cell (rows first, then columns) and
    /// the repair stops after ten sweeps or when no duplicate can be fixed,
    /// so a contradictory grid cannot loop forever.
    pub fn corrected(&self, givens: &SudokuGrid) -> SudokuGrid {
        let mut grid = self.clone();
        for _ in 0..10 {
            if !grid.fix_one_row_duplicate(givens) && !grid.fix_one_column_duplicate(givens) {
                break;
            }
        }
        grid
    }

    fn fix_one_row_duplicate(&mut self, givens: &SudokuGrid) -> bool {
        for row in 0..GRID_SIZE {
            for value in 1..=4u8 {
                let count = self.cells[row].iter().filter(|&&v| v == value).count();
                if count <= 1 {
                    continue;
                }
                let Some(missing) = (1..=4u8).find(|v| !self.cells[row].contains(v)) else {
                    continue;
                };
                for col in 0..GRID_SIZE {
                    if self.cells[row][col] == value && givens.cells[row][col] == 0 {
                        self.cells[row][col] = missing;
                        return true;
                    }
                }
            }
        }
        false
    }

    fn fix_one_column_duplicate(&mut self, givens: &SudokuGrid) -> bool {
        for col in 0..GRID_SIZE {
            let column: Vec<u8> = (0..GRID_SIZE).map(|row| self.cells[row][col]).collect();
            for value in 1..=4u8 {
                let count = column.iter().filter(|&&v| v == value).count();
                if count <= 1 {
                    continue;
                }
                let Some(missing) = (1..=4u8).find(|v| !column.contains(v)) else {
                    continue;
                };
                for row in 0..GRID_SIZE {
                    if self.cells[row][col] == value && givens.cells[row][col] == 0 {
                        self.cells[row][col] = missing;
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Decode a 32-bit measurement bitstring into a grid.
    ///
    /// Character `k` of the bitstring reports clbit `k`, which mirrors
    /// qubit `k` after `measure_all`. Returns `None` if the string is not
    /// exactly 32 characters of `0`/`1`.
    pub fn from_bitstring(bits: &str) -> Option<SudokuGrid> {
        if bits.len() != GRID_QUBITS || !bits.bytes().all(|b| b == b'0' || b == b'1') {
            return None;
        }
        let bit = |index: usize| bits.as_bytes()[index] == b'1';
        let mut cells = [[0u8; GRID_SIZE]; GRID_SIZE];
        for cell in 0..GRID_SIZE * GRID_SIZE {
            let low = bit(cell * QUBITS_PER_CELL);
            let high = bit(cell * QUBITS_PER_CELL + 1);
            cells[cell / GRID_SIZE][cell % GRID_SIZE] = decode_value(low, high);
        }
        Some(SudokuGrid { cells })
    }
}

/// Split a cell value into its two qubit bits, low bit first.
pub fn encode_value(value: u8) -> (bool, bool) {
    debug_assert!((1..=4).contains(&value), "cell value out of range");
    let bits = value - 1;
    (bits & 1 != 0, bits & 2 != 0)
}

/// Rebuild a cell value from its two qubit bits.
pub fn decode_value(low: bool, high: bool) -> u8 {
    1 + u8::from(low) + 2 * u8::from(high)
}

fn duplicates_in(unit: &[u8]) -> usize {
    (1..=4u8)
        .map(|value| {
            let count = unit.iter().filter(|&&v| v == value).count();
            count.saturating_sub(1)
        })
        .sum()
}

impl std::fmt::Display for SudokuGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "+-----+-----+")?;
        for row in 0..GRID_SIZE {
            write!(f, "| ")?;
            for col in 0..GRID_SIZE {
                match self.cells[row][col] {
                    0 => write!(f, ". ")?,
                    v => write!(f, "{v} ")?,
                }
                if col == 1 {
                    write!(f, "| ")?;
                }
            }
            writeln!(f, "|")?;
            if row == 1 {
                writeln!(f, "+-----+-----+")?;
            }
        }
        write!(f, "+-----+-----+")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_demo_puzzle_shape() {
        let puzzle = SudokuGrid::demo_puzzle();
        assert_eq!(puzzle.fixed_cells(), vec![0, 3, 6, 8, 13]);
        assert_eq!(puzzle.num_empty(), 11);
        assert!(!puzzle.is_complete());
    }

    #[test]
    fn test_demo_solution_is_valid() {
        let solution = SudokuGrid::demo_solution();
        assert!(solution.is_complete());
        assert_eq!(solution.count_violations(), 0);
        assert!(solution.is_valid());
    }

    #[test]
    fn test_violation_counting() {
        let mut grid = SudokuGrid::demo_solution();
        // Duplicate 1 in row 0, column 1, and the top-left box.
        grid.cells[0][1] = 1;
        assert_eq!(grid.count_violations(), 3);
        assert!(!grid.is_valid());
    }

    #[test]
    fn test_empty_cells_never_count_as_violations() {
        assert_eq!(SudokuGrid::demo_puzzle().count_violations(), 0);
    }

    #[test]
    fn test_encode_decode_round_trip() {
        for value in 1..=4u8 {
            let (low, high) = encode_value(value);
            assert_eq!(decode_value(low, high), value);
        }
        assert_eq!(encode_value(1), (false, false));
        assert_eq!(encode_value(4), (true, true));
    }

    #[test]
    fn test_from_bitstring() {
        let solution = SudokuGrid::demo_solution();
        let mut bits = String::new();
        for cell in 0..GRID_SIZE * GRID_SIZE {
            let value = solution.cells[cell / GRID_SIZE][cell % GRID_SIZE];
            let (low, high) = encode_value(value);
            bits.push(if low { '1' } else { '0' });
            bits.push(if high { '1' } else { '0' });
        }

        assert_eq!(SudokuGrid::from_bitstring(&bits), Some(solution));
        assert_eq!(SudokuGrid::from_bitstring("01"), None);
        assert_eq!(SudokuGrid::from_bitstring(&"x".repeat(32)), None);
    }

    #[test]
    fn test_random_fill_completes_and_keeps_givens() {
        let puzzle = SudokuGrid::demo_puzzle();
        let mut rng = StdRng::seed_from_u64(7);
        let filled = puzzle.random_fill(&mut rng);

        assert!(filled.is_complete());
        for &cell in &puzzle.fixed_cells() {
            let (row, col) = (cell / GRID_SIZE, cell % GRID_SIZE);
            assert_eq!(filled.cells[row][col], puzzle.cells[row][col]);
        }
    }

    #[test]
    fn test_correction_repairs_a_broken_solution() {
        let puzzle = SudokuGrid::demo_puzzle();
        let mut broken = SudokuGrid::demo_solution();
        // Cell (0, 1) is free in the puzzle; clashing 1 breaks row, column, and box.
        broken.cells[0][1] = 1;

        let repaired = broken.corrected(&puzzle);
        assert_eq!(repaired, SudokuGrid::demo_solution());
        assert!(repaired.is_valid());
    }

    #[test]
    fn test_correction_never_touches_givens() {
        let puzzle = SudokuGrid::demo_puzzle();
        let mut rng = StdRng::seed_from_u64(42);
        let repaired = puzzle.random_fill(&mut rng).corrected(&puzzle);

        for &cell in &puzzle.fixed_cells() {
            let (row, col) = (cell / GRID_SIZE, cell % GRID_SIZE);
            assert_eq!(repaired.cells[row][col], puzzle.cells[row][col]);
        }
    }

    #[test]
    fn test_display_format() {
        let rendered = SudokuGrid::demo_puzzle().to_string();
        let expected = "\
+-----+-----+
| 1 . | . 4 |
| . . | 1 . |
+-----+-----+
| 4 . | . . |
| . 2 | . . |
+-----+-----+";
        assert_eq!(rendered, expected);
    }
}
