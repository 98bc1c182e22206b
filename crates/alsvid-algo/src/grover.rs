//! Grover's search algorithm circuit builders.
//!
//! Grover's algorithm finds a marked item in an unstructured search space
//! of N = 2^n states with O(sqrt(N)) oracle queries, compared to O(N)
//! classically. This module builds each stage as a standalone circuit
//! (superposition, oracle, diffusion) and composes them into a complete
//! search circuit by concatenation.
//!
//! All builders are pure functions: the same arguments always produce the
//! same circuit, and nothing is cached between calls.

use std::f64::consts::PI;

use alsvid_ir::{Circuit, QubitId};

use crate::error::{AlgoError, AlgoResult};

/// Prepare the uniform superposition over all 2^n basis states.
///
/// Applies H to every qubit of an all-zero register, giving every basis
/// state amplitude 1/sqrt(2^n).
///
/// # Errors
/// Returns an error if `num_qubits` is zero.
pub fn superposition_circuit(num_qubits: usize) -> AlgoResult<Circuit> {
    if num_qubits == 0 {
        return Err(AlgoError::ZeroQubits);
    }

    let mut circuit = Circuit::with_size("superposition", num_qubits as u32, 0);
    for i in 0..num_qubits {
        circuit.h(QubitId(i as u32))?;
    }
    Ok(circuit)
}

/// Build the phase oracle that marks `target`.
///
/// The oracle flips the sign of the amplitude of exactly the basis state
/// named by `target` and leaves every other amplitude unchanged. Target
/// character `i` gives the required value of qubit `i`, so `"011"` marks
/// the state with qubit 0 at |0⟩ and qubits 1 and 2 at |1⟩.
///
/// Construction: X gates map the target state onto |1...1⟩, a phase core
/// flips the sign of |1...1⟩ alone, and the same X gates restore the
/// original basis labeling. Applying the oracle twice is the identity.
///
/// # Errors
/// Returns an error if `target` is empty or contains characters other
/// than '0' and '1'.
pub fn oracle_circuit(target: &str) -> AlgoResult<Circuit> {
    let bits = parse_target(target)?;
    let num_qubits = bits.len();
    let mut circuit = Circuit::with_size("oracle", num_qubits as u32, 0);

    // Map the target state onto |1...1⟩
    for (i, &bit) in bits.iter().enumerate() {
        if !bit {
            circuit.x(QubitId(i as u32))?;
        }
    }

    apply_phase_core(&mut circuit, num_qubits)?;

    // Undo the X gates
    for (i, &bit) in bits.iter().enumerate() {
        if !bit {
            circuit.x(QubitId(i as u32))?;
        }
    }

    Ok(circuit)
}

/// Build the diffusion operator (inversion about the mean).
///
/// H on all qubits, X on all qubits, the phase core, X on all qubits,
/// H on all qubits. The realized operator is -(2|s⟩⟨s| - I) where |s⟩ is
/// the uniform superposition; the global -1 phase is unobservable, and
/// two applications compose to the identity exactly.
///
/// # Errors
/// Returns an error if `num_qubits` is zero.
pub fn diffusion_circuit(num_qubits: usize) -> AlgoResult<Circuit> {
    if num_qubits == 0 {
        return Err(AlgoError::ZeroQubits);
    }

    let mut circuit = Circuit::with_size("diffusion", num_qubits as u32, 0);

    for i in 0..num_qubits {
        circuit.h(QubitId(i as u32))?;
    }
    for i in 0..num_qubits {
        circuit.x(QubitId(i as u32))?;
    }

    apply_phase_core(&mut circuit, num_qubits)?;

    for i in 0..num_qubits {
        circuit.x(QubitId(i as u32))?;
    }
    for i in 0..num_qubits {
        circuit.h(QubitId(i as u32))?;
    }

    Ok(circuit)
}

/// Build the complete Grover search circuit for `target`.
///
/// The circuit prepares the uniform superposition, applies oracle and
/// diffusion for the requested number of rounds, and measures every
/// qubit. `None` iterations means "use [`optimal_iterations`] for a
/// single marked state"; an explicit count must be at least 1.
///
/// Measured bitstrings follow the same convention as the target string
/// (character `i` is qubit `i`), so on a successful run the plurality
/// outcome equals `target` itself.
///
/// # Errors
/// Returns an error for an empty or non-binary `target`, or for an
/// explicit iteration count of zero.
pub fn grover_circuit(target: &str, iterations: Option<usize>) -> AlgoResult<Circuit> {
    let bits = parse_target(target)?;
    let num_qubits = bits.len();

    let rounds = match iterations {
        None => optimal_iterations(num_qubits, 1)?,
        Some(0) => return Err(AlgoError::ZeroIterations),
        Some(k) => k,
    };

    // Each stage is a self-contained circuit, concatenated per round
    let oracle = oracle_circuit(target)?;
    let diffusion = diffusion_circuit(num_qubits)?;

    let mut circuit = Circuit::with_size("grover", num_qubits as u32, num_qubits as u32);
    circuit.extend(&superposition_circuit(num_qubits)?)?;
    for _ in 0..rounds {
        circuit.extend(&oracle)?;
        circuit.extend(&diffusion)?;
    }
    circuit.measure_all()?;

    Ok(circuit)
}

/// Optimal number of Grover rounds for `solutions` marked states in a
/// search space of 2^`num_qubits`.
///
/// Computed as `floor((π/4)·sqrt(N/M))`. Past this count the amplitude
/// rotation overshoots the marked subspace and the success probability
/// falls again.
///
/// # Errors
/// Returns an error if `num_qubits` is zero, or if `solutions` is zero
/// or exceeds the search space size.
pub fn optimal_iterations(num_qubits: usize, solutions: usize) -> AlgoResult<usize> {
    if num_qubits == 0 {
        return Err(AlgoError::ZeroQubits);
    }

    let search_space = (num_qubits as f64).exp2();
    if solutions == 0 || solutions as f64 > search_space {
        return Err(AlgoError::SolutionCountOutOfRange {
            solutions,
            num_qubits,
        });
    }

    let optimal = (PI / 4.0 * (search_space / solutions as f64).sqrt()).floor();
    Ok(optimal as usize)
}

/// Flip the sign of |1...1⟩ and of nothing else.
///
/// Z for one qubit, CZ for two, H·MCX·H on the last qubit otherwise.
/// MCX permutes basis states exactly, so the conjugation realizes a
/// multi-controlled Z with no decomposition error at any size.
fn apply_phase_core(circuit: &mut Circuit, num_qubits: usize) -> AlgoResult<()> {
    match num_qubits {
        1 => {
            circuit.z(QubitId(0))?;
        }
        2 => {
            circuit.cz(QubitId(0), QubitId(1))?;
        }
        _ => {
            let target = QubitId((num_qubits - 1) as u32);
            let controls: Vec<QubitId> = (0..num_qubits - 1).map(|i| QubitId(i as u32)).collect();
            circuit.h(target)?;
            circuit.mcx(&controls, target)?;
            circuit.h(target)?;
        }
    }
    Ok(())
}

fn parse_target(target: &str) -> AlgoResult<Vec<bool>> {
    if target.is_empty() {
        return Err(AlgoError::EmptyTarget);
    }
    target
        .chars()
        .enumerate()
        .map(|(position, character)| match character {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(AlgoError::NonBinaryTarget {
                character,
                position,
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvid_ir::qasm;

    #[test]
    fn test_optimal_iterations_single_solution() {
        assert_eq!(optimal_iterations(2, 1).unwrap(), 1); // π/4 * 2 ≈ 1.57 → 1
        assert_eq!(optimal_iterations(3, 1).unwrap(), 2); // π/4 * 2.83 ≈ 2.22 → 2
        assert_eq!(optimal_iterations(4, 1).unwrap(), 3); // π/4 * 4 ≈ 3.14 → 3
    }

    #[test]
    fn test_optimal_iterations_multiple_solutions() {
        assert_eq!(optimal_iterations(3, 2).unwrap(), 1); // π/4 * 2 ≈ 1.57 → 1
        // Every state marked: sampling is already a solution draw
        assert_eq!(optimal_iterations(2, 4).unwrap(), 0);
    }

    #[test]
    fn test_optimal_iterations_invalid_arguments() {
        assert!(matches!(
            optimal_iterations(0, 1),
            Err(AlgoError::ZeroQubits)
        ));
        assert!(matches!(
            optimal_iterations(3, 0),
            Err(AlgoError::SolutionCountOutOfRange { .. })
        ));
        assert!(matches!(
            optimal_iterations(3, 9),
            Err(AlgoError::SolutionCountOutOfRange { .. })
        ));
    }

    #[test]
    fn test_superposition_structure() {
        let circuit = superposition_circuit(3).unwrap();
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 0);
        assert_eq!(circuit.dag().num_ops(), 3);
        assert_eq!(circuit.depth(), 1); // all H gates in parallel
    }

    #[test]
    fn test_superposition_zero_qubits() {
        assert!(matches!(
            superposition_circuit(0),
            Err(AlgoError::ZeroQubits)
        ));
    }

    #[test]
    fn test_oracle_structure() {
        // Single qubit, target "1": plain Z
        assert_eq!(oracle_circuit("1").unwrap().dag().num_ops(), 1);
        // Target "0": X, Z, X
        assert_eq!(oracle_circuit("0").unwrap().dag().num_ops(), 3);
        // Target "10": X on qubit 1 around CZ
        assert_eq!(oracle_circuit("10").unwrap().dag().num_ops(), 3);
        // Target "101": X pair on qubit 1, H·MCX·H core
        assert_eq!(oracle_circuit("101").unwrap().dag().num_ops(), 5);
    }

    #[test]
    fn test_oracle_rejects_bad_targets() {
        assert!(matches!(oracle_circuit(""), Err(AlgoError::EmptyTarget)));
        assert!(matches!(
            oracle_circuit("10x1"),
            Err(AlgoError::NonBinaryTarget {
                character: 'x',
                position: 2,
            })
        ));
        assert!(matches!(
            oracle_circuit("2"),
            Err(AlgoError::NonBinaryTarget { position: 0, .. })
        ));
    }

    #[test]
    fn test_diffusion_structure() {
        // 2 qubits: 2 H + 2 X + CZ + 2 X + 2 H
        assert_eq!(diffusion_circuit(2).unwrap().dag().num_ops(), 9);
        // 3 qubits: 3 H + 3 X + (H, MCX, H) + 3 X + 3 H
        assert_eq!(diffusion_circuit(3).unwrap().dag().num_ops(), 15);
    }

    #[test]
    fn test_diffusion_zero_qubits() {
        assert!(matches!(diffusion_circuit(0), Err(AlgoError::ZeroQubits)));
    }

    #[test]
    fn test_grover_circuit_structure() {
        let circuit = grover_circuit("101", Some(2)).unwrap();
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 3);
        // 3 H + 2 rounds of (5-op oracle + 15-op diffusion) + measure
        assert_eq!(circuit.dag().num_ops(), 44);
    }

    #[test]
    fn test_grover_auto_iterations_match_optimal() {
        let auto = grover_circuit("101", None).unwrap();
        let explicit = grover_circuit("101", Some(2)).unwrap();
        assert_eq!(auto.dag().num_ops(), explicit.dag().num_ops());
    }

    #[test]
    fn test_grover_rejects_zero_iterations() {
        assert!(matches!(
            grover_circuit("101", Some(0)),
            Err(AlgoError::ZeroIterations)
        ));
    }

    #[test]
    fn test_grover_rejects_bad_target() {
        assert!(matches!(
            grover_circuit("", None),
            Err(AlgoError::EmptyTarget)
        ));
        assert!(matches!(
            grover_circuit("01a", None),
            Err(AlgoError::NonBinaryTarget { .. })
        ));
    }

    #[test]
    fn test_builders_are_deterministic() {
        let first = oracle_circuit("0110").unwrap();
        let second = oracle_circuit("0110").unwrap();
        assert_eq!(qasm::emit(&first), qasm::emit(&second));

        let first = grover_circuit("0110", None).unwrap();
        let second = grover_circuit("0110", None).unwrap();
        assert_eq!(qasm::emit(&first), qasm::emit(&second));
    }
}
