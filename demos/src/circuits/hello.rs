//! Single-qubit "hello world" circuit.
//!
//! The smallest possible quantum program: one Hadamard gate turns |0⟩ into
//! an equal superposition, and a measurement collapses it into a fair coin
//! flip.

use alsvid_ir::{Circuit, QubitId};
use num_complex::Complex64;

/// Generate the hello-world circuit: H on a single qubit, then measure.
pub fn hello_circuit() -> Circuit {
    let mut circuit = Circuit::with_size("hello", 1, 1);
    circuit.h(QubitId(0)).unwrap();
    circuit.measure_all().unwrap();
    circuit
}

/// Generate the hello-world circuit without the final measurement
/// (for statevector inspection).
pub fn hello_circuit_no_measure() -> Circuit {
    let mut circuit = Circuit::with_size("hello", 1, 0);
    circuit.h(QubitId(0)).unwrap();
    circuit
}

/// Compute the Bloch vector (⟨X⟩, ⟨Y⟩, ⟨Z⟩) of a single-qubit state.
///
/// The superposition H|0⟩ sits on the equator at (1, 0, 0), while the
/// poles (0, 0, ±1) are the computational basis states.
pub fn bloch_vector(amplitudes: &[Complex64]) -> [f64; 3] {
    assert_eq!(amplitudes.len(), 2, "expected a single-qubit statevector");
    let cross = amplitudes[0].conj() * amplitudes[1];
    [
        2.0 * cross.re,
        2.0 * cross.im,
        amplitudes[0].norm_sqr() - amplitudes[1].norm_sqr(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_hello_circuit_structure() {
        let circuit = hello_circuit();
        assert_eq!(circuit.num_qubits(), 1);
        assert_eq!(circuit.num_clbits(), 1);
        assert_eq!(circuit.dag().num_ops(), 2);
    }

    #[test]
    fn test_no_measure_variant() {
        let circuit = hello_circuit_no_measure();
        assert_eq!(circuit.num_clbits(), 0);
        assert_eq!(circuit.dag().num_ops(), 1);
    }

    #[test]
    fn test_bloch_vector_of_superposition() {
        let plus = [
            Complex64::new(FRAC_1_SQRT_2, 0.0),
            Complex64::new(FRAC_1_SQRT_2, 0.0),
        ];
        let [x, y, z] = bloch_vector(&plus);
        assert!((x - 1.0).abs() < 1e-10);
        assert!(y.abs() < 1e-10);
        assert!(z.abs() < 1e-10);
    }

    #[test]
    fn test_bloch_vector_of_basis_states() {
        let zero = [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
        assert_eq!(bloch_vector(&zero), [0.0, 0.0, 1.0]);

        let one = [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)];
        assert_eq!(bloch_vector(&one), [0.0, 0.0, -1.0]);
    }
}
