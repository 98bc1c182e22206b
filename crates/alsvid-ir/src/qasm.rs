//! QASM3 emitter for displaying circuits as text.

use crate::circuit::Circuit;
use crate::gate::StandardGate;
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{ClbitId, QubitId};

/// Emit a circuit as QASM3 source code.
pub fn emit(circuit: &Circuit) -> String {
    let mut emitter = Emitter::new();
    emitter.emit_circuit(circuit)
}

/// QASM3 emitter.
struct Emitter {
    output: String,
}

impl Emitter {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn emit_circuit(&mut self, circuit: &Circuit) -> String {
        // Version
        self.writeln("OPENQASM 3.0;");
        self.writeln("");

        // Qubit declarations
        let num_qubits = circuit.num_qubits();
        if num_qubits > 0 {
            self.writeln(&format!("qubit[{num_qubits}] q;"));
        }

        // Classical bit declarations
        let num_clbits = circuit.num_clbits();
        if num_clbits > 0 {
            self.writeln(&format!("bit[{num_clbits}] c;"));
        }

        if num_qubits > 0 || num_clbits > 0 {
            self.writeln("");
        }

        // Instructions
        for (_, instruction) in circuit.dag().topological_ops() {
            self.emit_instruction(instruction);
        }

        self.output.clone()
    }

    fn emit_instruction(&mut self, instruction: &Instruction) {
        match &instruction.kind {
            InstructionKind::Gate(gate) => {
                let name = emit_gate_name(gate);
                let params = emit_gate_params(gate);
                let qubits = emit_qubits(&instruction.qubits);

                if params.is_empty() {
                    self.writeln(&format!("{name} {qubits};"));
                } else {
                    self.writeln(&format!("{name}({params}) {qubits};"));
                }
            }

            InstructionKind::Measure => {
                if instruction.qubits.len() == 1 {
                    let qubits = emit_qubits(&instruction.qubits);
                    let clbits = emit_clbits(&instruction.clbits);
                    self.writeln(&format!("{clbits} = measure {qubits};"));
                } else {
                    // Broadcast measurement
                    for (q, c) in instruction.qubits.iter().zip(instruction.clbits.iter()) {
                        self.writeln(&format!("c[{}] = measure q[{}];", c.0, q.0));
                    }
                }
            }

            InstructionKind::Barrier => {
                let qubits = emit_qubits(&instruction.qubits);
                if qubits.is_empty() {
                    self.writeln("barrier;");
                } else {
                    self.writeln(&format!("barrier {qubits};"));
                }
            }
        }
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}

fn emit_gate_name(gate: &StandardGate) -> String {
    match gate {
        // The Toffoli gate has a standard-library name; larger controlled
        // gates use the QASM3 ctrl modifier.
        StandardGate::MCX { controls: 2 } => "ccx".into(),
        StandardGate::MCX { controls } => format!("ctrl({controls}) @ x"),
        _ => gate.name().into(),
    }
}

fn emit_gate_params(gate: &StandardGate) -> String {
    gate.parameters()
        .iter()
        .map(|p| emit_param(*p))
        .collect::<Vec<_>>()
        .join(", ")
}

fn emit_param(value: f64) -> String {
    // Check if close to common fractions of pi
    let pi = std::f64::consts::PI;
    if (value - pi).abs() < 1e-10 {
        "pi".into()
    } else if (value - pi / 2.0).abs() < 1e-10 {
        "pi/2".into()
    } else if (value - pi / 4.0).abs() < 1e-10 {
        "pi/4".into()
    } else if (value + pi / 2.0).abs() < 1e-10 {
        "-pi/2".into()
    } else if (value + pi / 4.0).abs() < 1e-10 {
        "-pi/4".into()
    } else {
        format!("{value:.6}")
    }
}

fn emit_qubits(qubits: &[QubitId]) -> String {
    qubits
        .iter()
        .map(|q| format!("q[{}]", q.0))
        .collect::<Vec<_>>()
        .join(", ")
}

fn emit_clbits(clbits: &[ClbitId]) -> String {
    clbits
        .iter()
        .map(|c| format!("c[{}]", c.0))
        .collect::<Vec<_>>()
        .join(", ")
}
