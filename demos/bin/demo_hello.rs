//! Hello Quantum Demo
//!
//! The smallest quantum program: one qubit, one Hadamard, one measurement.

use clap::Parser;

use alsvid_adapter_sim::SimulatorBackend;
use alsvid_demos::circuits::{bloch_vector, hello_circuit, hello_circuit_no_measure};
use alsvid_demos::{print_header, print_info, print_result, print_section, print_success};
use alsvid_hal::Backend;
use alsvid_ir::qasm;

#[derive(Parser, Debug)]
#[command(name = "demo-hello")]
#[command(about = "Run the single-qubit hello-world circuit")]
struct Args {
    /// Number of measurement shots
    #[arg(short, long, default_value = "1000")]
    shots: u32,

    /// Show generated QASM code
    #[arg(long)]
    show_qasm: bool,
}

fn main() {
    let args = Args::parse();

    print_header("Hello Quantum World");

    if args.shots == 0 {
        eprintln!("Error: shots must be greater than zero");
        std::process::exit(1);
    }

    let circuit = hello_circuit();

    print_section("Circuit Generation");
    print_result("Qubits", circuit.num_qubits());
    print_result("Classical bits", circuit.num_clbits());
    print_result("Depth", circuit.depth());

    if args.show_qasm {
        print_section("Generated QASM");
        println!("{}", qasm::emit(&circuit));
    }

    print_section("Execution");
    let backend = SimulatorBackend::new();
    let result = match backend.execute(&circuit, args.shots) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    print_result("Backend", backend.name());
    print_result("Shots", result.shots);
    for (bitstring, count) in result.counts.sorted() {
        print_result(
            &format!("|{bitstring}⟩"),
            format!(
                "{count} ({:.1}%)",
                result.counts.probability(bitstring) * 100.0
            ),
        );
    }

    print_section("Statevector Analysis");
    let amplitudes = backend
        .statevector(&hello_circuit_no_measure())
        .expect("single-qubit circuit always simulates");
    for (index, amplitude) in amplitudes.iter().enumerate() {
        print_result(
            &format!("amp |{index}⟩"),
            format!("{:+.4} {:+.4}i", amplitude.re, amplitude.im),
        );
    }
    let [x, y, z] = bloch_vector(&amplitudes);
    print_result("Bloch vector", format!("({x:.3}, {y:.3}, {z:.3})"));

    print_section("Demo Narrative");
    println!("  1. The qubit starts in |0⟩.");
    println!("  2. A Hadamard gate rotates it to the equator of the Bloch");
    println!("     sphere: the equal superposition (|0⟩ + |1⟩)/√2.");
    println!("  3. Measurement collapses the superposition, so each shot is");
    println!("     a fair coin flip and the counts split roughly 50/50.");

    println!();
    print_success("Hello quantum demo complete!");
    println!();
    print_info("Next step: demo-entangle chains gates across three qubits.");
}
