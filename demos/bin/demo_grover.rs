//! Grover's Search Algorithm Demo
//!
//! Builds a Grover circuit for a chosen target bitstring, runs it on the
//! statevector simulator, and compares the measured counts with theory.

use clap::Parser;
use tracing::debug;

use alsvid_adapter_sim::SimulatorBackend;
use alsvid_algo::{grover_circuit, optimal_iterations};
use alsvid_demos::{print_header, print_info, print_result, print_section, print_success};
use alsvid_hal::Backend;
use alsvid_ir::qasm;

#[derive(Parser, Debug)]
#[command(name = "demo-grover")]
#[command(about = "Demonstrate Grover's search algorithm")]
struct Args {
    /// Target bitstring to search for (character i is qubit i)
    #[arg(short, long, default_value = "101")]
    target: String,

    /// Number of Grover iterations (0 = optimal)
    #[arg(short, long, default_value = "0")]
    iterations: usize,

    /// Number of measurement shots
    #[arg(short, long, default_value = "1024")]
    shots: u32,

    /// Show generated QASM code
    #[arg(long)]
    show_qasm: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    print_header("Grover's Search Algorithm Demo");

    let iterations = (args.iterations > 0).then_some(args.iterations);
    let circuit = match grover_circuit(&args.target, iterations) {
        Ok(circuit) => circuit,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // The target parsed, so these cannot fail anymore.
    let num_qubits = args.target.len();
    let search_space = (num_qubits as f64).exp2();
    let rounds = match iterations {
        Some(k) => k,
        None => optimal_iterations(num_qubits, 1).expect("target already validated"),
    };
    debug!(
        "built Grover circuit: {} rounds, {} ops, depth {}",
        rounds,
        circuit.dag().num_ops(),
        circuit.depth()
    );

    print_section("Problem Setup");
    print_result("Target state", format!("|{}⟩", args.target));
    print_result("Qubits", num_qubits);
    print_result("Search space size", format!("{search_space:.0}"));
    print_result(
        "Grover iterations",
        if iterations.is_none() {
            format!("{rounds} (optimal)")
        } else {
            rounds.to_string()
        },
    );

    print_section("Circuit Generation");
    print_result("Circuit depth", circuit.depth());
    print_result("Operations", circuit.dag().num_ops());
    print_result("Qubits", circuit.num_qubits());
    print_result("Classical bits", circuit.num_clbits());

    if args.show_qasm {
        print_section("Generated QASM");
        println!("{}", qasm::emit(&circuit));
    }

    print_section("Demo Narrative");
    println!("  Grover's algorithm searches an unstructured space of N items");
    println!("  in O(sqrt(N)) oracle calls instead of the classical O(N).");
    println!();
    println!("  Classical complexity: O(N) = O({search_space:.0})");
    println!(
        "  Quantum complexity:   O(sqrt(N)) = O({:.1})",
        search_space.sqrt()
    );
    println!();
    println!("  After preparing a uniform superposition, each round applies:");
    println!("  - Oracle: flips the phase of the target state");
    println!("  - Diffusion: reflects every amplitude about the mean");
    println!("  More rounds is not automatically better: past the optimum the");
    println!("  success probability falls off again.");

    print_section("Execution");
    let backend = SimulatorBackend::new();
    let result = match backend.execute(&circuit, args.shots) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    debug!(
        "execution finished: {} distinct outcomes from {} shots",
        result.counts.len(),
        result.shots
    );
    print_result("Backend", backend.name());
    print_result("Shots", result.shots);
    if let Some(millis) = result.execution_time_ms {
        print_result("Execution time", format!("{millis} ms"));
    }

    println!();
    let sorted = result.counts.sorted();
    let max_count = sorted.first().map_or(1, |(_, count)| *count);
    for (bitstring, count) in sorted.iter().take(8) {
        let bar = "#".repeat((count * 32 / max_count) as usize);
        println!("  |{bitstring}⟩ {count:>6}  {bar}");
    }
    if sorted.len() > 8 {
        println!("  ... {} more outcomes", sorted.len() - 8);
    }

    print_section("Results");
    let theta = (1.0 / search_space).sqrt().asin();
    let theory = ((2 * rounds + 1) as f64 * theta).sin().powi(2);
    let measured = result.counts.probability(&args.target);
    print_result(
        "Target probability (theory)",
        format!("{:.1}%", theory * 100.0),
    );
    print_result(
        "Target frequency (measured)",
        format!("{:.1}%", measured * 100.0),
    );

    println!();
    if let Some((winner, count)) = result.counts.most_frequent() {
        if winner == args.target {
            print_success(&format!(
                "Most frequent outcome |{winner}⟩ matches the target ({count}/{} shots)",
                result.shots
            ));
        } else {
            print_info(&format!(
                "Most frequent outcome |{winner}⟩ ({count} shots) is not the target; \
                 try a different iteration count"
            ));
        }
    }

    println!();
    print_info("The oracle and diffusion stages are also available standalone:");
    println!("  - superposition_circuit, oracle_circuit, diffusion_circuit");
    println!("  - compose them with Circuit::extend to build your own variants");
}
