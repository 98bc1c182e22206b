//! Statevector-verified properties of the Grover circuit builders.
//!
//! These tests run the built circuits on the local simulator and check
//! amplitudes and measurement outcomes against the closed-form theory.

use num_complex::Complex64;

use alsvid_adapter_sim::SimulatorBackend;
use alsvid_algo::{diffusion_circuit, grover_circuit, oracle_circuit, superposition_circuit};
use alsvid_hal::{Backend, HalError};
use alsvid_ir::Circuit;

const TOLERANCE: f64 = 1e-10;

/// Statevector index of a target string: character `i` is qubit `i`,
/// and qubit `i` is bit `i` of the index.
fn target_index(target: &str) -> usize {
    target
        .chars()
        .enumerate()
        .filter(|&(_, c)| c == '1')
        .map(|(i, _)| 1 << i)
        .sum()
}

fn statevector_of(circuit: &Circuit) -> Vec<Complex64> {
    SimulatorBackend::new()
        .statevector(circuit)
        .expect("measurement-free circuit within simulator size")
}

fn approx_eq(a: Complex64, b: Complex64) -> bool {
    (a - b).norm() < TOLERANCE
}

#[test]
fn oracle_marks_exactly_the_target() {
    // Includes non-palindromic targets, where a bit-order mixup would
    // mark the wrong state
    for target in ["1", "0", "10", "011", "1010", "11010"] {
        let mut circuit = superposition_circuit(target.len()).unwrap();
        circuit.extend(&oracle_circuit(target).unwrap()).unwrap();

        let amplitudes = statevector_of(&circuit);
        let uniform = 1.0 / (amplitudes.len() as f64).sqrt();
        let marked = target_index(target);

        for (index, amp) in amplitudes.iter().enumerate() {
            let expected = if index == marked { -uniform } else { uniform };
            assert!(
                approx_eq(*amp, Complex64::new(expected, 0.0)),
                "target {target}: amplitude at index {index} was {amp}, expected {expected}"
            );
        }
    }
}

#[test]
fn oracle_twice_is_identity() {
    for target in ["110", "0101"] {
        let reference = superposition_circuit(target.len()).unwrap();

        let oracle = oracle_circuit(target).unwrap();
        let mut twice = superposition_circuit(target.len()).unwrap();
        twice.extend(&oracle).unwrap();
        twice.extend(&oracle).unwrap();

        let reference_amps = statevector_of(&reference);
        let twice_amps = statevector_of(&twice);
        for (a, b) in reference_amps.iter().zip(&twice_amps) {
            assert!(approx_eq(*a, *b), "target {target}: {a} != {b}");
        }
    }
}

#[test]
fn diffusion_twice_is_identity_on_superposition() {
    for num_qubits in [1, 2, 3, 4] {
        let reference = superposition_circuit(num_qubits).unwrap();

        let diffusion = diffusion_circuit(num_qubits).unwrap();
        let mut twice = superposition_circuit(num_qubits).unwrap();
        twice.extend(&diffusion).unwrap();
        twice.extend(&diffusion).unwrap();

        let reference_amps = statevector_of(&reference);
        let twice_amps = statevector_of(&twice);
        for (a, b) in reference_amps.iter().zip(&twice_amps) {
            assert!(approx_eq(*a, *b), "{num_qubits} qubits: {a} != {b}");
        }
    }
}

#[test]
fn grover_rounds_match_closed_form_probability() {
    // Target amplitude after k rounds is sin((2k+1)·θ) with θ = asin(1/√N)
    let target = "101";
    let theta = (1.0 / 8.0_f64.sqrt()).asin();

    let oracle = oracle_circuit(target).unwrap();
    let diffusion = diffusion_circuit(target.len()).unwrap();

    for rounds in 1..=3 {
        let mut circuit = superposition_circuit(target.len()).unwrap();
        for _ in 0..rounds {
            circuit.extend(&oracle).unwrap();
            circuit.extend(&diffusion).unwrap();
        }

        let amplitudes = statevector_of(&circuit);
        let probability = amplitudes[target_index(target)].norm_sqr();
        let expected = ((2 * rounds + 1) as f64 * theta).sin().powi(2);
        assert!(
            (probability - expected).abs() < TOLERANCE,
            "{rounds} rounds: probability {probability}, theory {expected}"
        );
    }
}

#[test]
fn end_to_end_search_finds_the_target() {
    // Success probability with auto iterations is ≈ 0.945 per shot, so
    // a strict majority over 1024 shots is a safe assertion
    let circuit = grover_circuit("101", None).unwrap();
    let result = SimulatorBackend::new().execute(&circuit, 1024).unwrap();

    let (winner, count) = result.counts.most_frequent().unwrap();
    assert_eq!(winner, "101");
    assert!(count > 512, "expected a majority for the target, got {count}/1024");
}

#[test]
fn non_palindromic_target_is_read_back_verbatim() {
    // "0110" reversed is "0110", so use targets whose reversal differs
    for target in ["110", "0010"] {
        let circuit = grover_circuit(target, None).unwrap();
        let result = SimulatorBackend::new().execute(&circuit, 1024).unwrap();

        let (winner, _) = result.counts.most_frequent().unwrap();
        assert_eq!(winner, target);
    }
}

#[test]
fn statevector_of_measured_search_circuit_is_refused() {
    let circuit = grover_circuit("11", None).unwrap();
    let result = SimulatorBackend::new().statevector(&circuit);
    assert!(matches!(result, Err(HalError::InvalidCircuit(_))));
}
