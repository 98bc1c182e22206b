//! Three-qubit entanglement showcase circuit.
//!
//! Chains Hadamard, CNOT, and the phase gates S and T so that the final
//! state carries both entanglement and relative phases. Unlike a bare Bell
//! or GHZ preparation the outcome distribution is not obvious from the gate
//! list, which makes it a good target for statevector inspection.

use alsvid_ir::{Circuit, QubitId};

/// Generate the entanglement showcase circuit with final measurements.
///
/// Gate sequence: H(0), H(1), CX(0,1), S(0), CX(1,2), T(1), H(0).
pub fn entangle_circuit() -> Circuit {
    let mut circuit = Circuit::with_size("entangle", 3, 3);
    apply_showcase_gates(&mut circuit);
    circuit.measure_all().unwrap();
    circuit
}

/// Generate the showcase circuit without measurements
/// (for statevector inspection).
pub fn entangle_circuit_no_measure() -> Circuit {
    let mut circuit = Circuit::with_size("entangle", 3, 0);
    apply_showcase_gates(&mut circuit);
    circuit
}

fn apply_showcase_gates(circuit: &mut Circuit) {
    circuit.h(QubitId(0)).unwrap();
    circuit.h(QubitId(1)).unwrap();
    circuit.cx(QubitId(0), QubitId(1)).unwrap();
    circuit.s(QubitId(0)).unwrap();
    circuit.cx(QubitId(1), QubitId(2)).unwrap();
    circuit.t(QubitId(1)).unwrap();
    circuit.h(QubitId(0)).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entangle_circuit_structure() {
        let circuit = entangle_circuit();
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 3);
        // 7 gates plus the final measurement.
        assert_eq!(circuit.dag().num_ops(), 8);
    }

    #[test]
    fn test_no_measure_variant() {
        let circuit = entangle_circuit_no_measure();
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 0);
        assert_eq!(circuit.dag().num_ops(), 7);
    }
}
