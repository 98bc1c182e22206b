//! Quantum Sudoku Demo
//!
//! Encodes a 4x4 sudoku as a QAOA-style constraint circuit, shows why the
//! full grid exceeds the bundled simulator, runs a two-cell slice that
//! fits, and finishes the puzzle with a quantum-inspired random fill plus
//! classical repair.

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use alsvid_adapter_sim::SimulatorBackend;
use alsvid_demos::circuits::{cell_pair_circuit, clashing_cell_pairs, slice_values,
    sudoku_qaoa_circuit};
use alsvid_demos::problems::SudokuGrid;
use alsvid_demos::{
    create_progress_bar, print_header, print_info, print_result, print_section, print_success,
};
use alsvid_hal::Backend;

/// Parameter values tried for both γ and β during the slice sweep.
const PARAMETER_GRID: [f64; 4] = [0.1, 0.5, 1.0, 1.5];

#[derive(Parser, Debug)]
#[command(name = "demo-sudoku")]
#[command(about = "Demonstrate QAOA-style constraint encoding on a 4x4 sudoku")]
struct Args {
    /// Number of measurement shots per circuit
    #[arg(short, long, default_value = "512")]
    shots: u32,

    /// Number of QAOA layers in the full-grid circuit
    #[arg(short = 'p', long, default_value = "1")]
    layers: usize,

    /// Write the final grid as JSON to this path
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    print_header("Quantum Sudoku Demo");

    let puzzle = SudokuGrid::demo_puzzle();

    print_section("Problem Setup");
    println!("{puzzle}");
    println!();
    print_result("Givens", puzzle.fixed_cells().len());
    print_result("Empty cells", puzzle.num_empty());
    print_result("Qubits needed (2 per cell)", 32);
    print_result("Clashing cell pairs", clashing_cell_pairs().len());

    print_section("Full Constraint Circuit");
    let gamma = vec![0.5; args.layers];
    let beta = vec![0.3; args.layers];
    let full_circuit = sudoku_qaoa_circuit(&puzzle, &gamma, &beta);
    print_result("Qubits", full_circuit.num_qubits());
    print_result("Operations", full_circuit.dag().num_ops());
    print_result("Depth", full_circuit.depth());

    let backend = SimulatorBackend::new();
    print_result("Simulator limit", format!("{} qubits", backend.max_qubits()));
    match backend.execute(&full_circuit, args.shots) {
        Err(e) => print_info(&format!("As expected, the backend refuses it: {e}")),
        Ok(_) => print_info("The backend unexpectedly accepted the full grid"),
    }

    print_section("Two-Cell Slice");
    println!("  Two empty cells that must differ fit in 4 qubits. Sweeping");
    println!("  (γ, β) to find parameters that suppress equal values:");
    println!();

    let pb = create_progress_bar(
        (PARAMETER_GRID.len() * PARAMETER_GRID.len()) as u64,
        "Sweeping parameters...",
    );
    let mut best = (PARAMETER_GRID[0], PARAMETER_GRID[0], 1.0_f64);
    for &gamma in &PARAMETER_GRID {
        for &beta in &PARAMETER_GRID {
            let result = backend
                .execute(&cell_pair_circuit(gamma, beta), args.shots)
                .expect("two-cell slice fits the simulator");
            let equal: u64 = result
                .counts
                .iter()
                .filter(|(bits, _)| matches!(slice_values(bits), Some((a, b)) if a == b))
                .map(|(_, count)| *count)
                .sum();
            let fraction = equal as f64 / f64::from(result.shots);
            if fraction < best.2 {
                best = (gamma, beta, fraction);
            }
            pb.inc(1);
        }
    }
    pb.finish_with_message("Sweep complete");

    let (best_gamma, best_beta, best_fraction) = best;
    println!();
    print_result("Best parameters", format!("γ = {best_gamma}, β = {best_beta}"));
    print_result(
        "Equal-value outcomes",
        format!("{:.1}% (uniform sampling would give 25.0%)", best_fraction * 100.0),
    );

    let showcase = backend
        .execute(&cell_pair_circuit(best_gamma, best_beta), args.shots)
        .expect("two-cell slice fits the simulator");
    println!();
    for (bits, count) in showcase.counts.sorted().iter().take(6) {
        if let Some((a, b)) = slice_values(bits) {
            println!("  {bits}  cells ({a}, {b})  {count:>5}");
        }
    }

    print_section("Quantum-Inspired Fill");
    println!("  The full grid stays classical: empty cells are filled randomly,");
    println!("  preferring values unused in their row and column, like sampling");
    println!("  one noisy shot of the 32-qubit circuit.");
    println!();

    let mut rng = rand::thread_rng();
    let filled = puzzle.random_fill(&mut rng);
    println!("{filled}");
    let violations = filled.count_violations();
    print_result("Constraint violations", violations);

    let solution = if violations > 0 {
        print_info("Applying classical correction...");
        let corrected = filled.corrected(&puzzle);
        println!();
        println!("{corrected}");
        print_result("Violations after correction", corrected.count_violations());
        corrected
    } else {
        filled
    };

    println!();
    if solution.is_valid() {
        print_success("The solution satisfies every row, column, and box!");
    } else {
        print_info("Some conflicts remain; another run may fare better.");
    }

    if let Some(path) = &args.out {
        let json = serde_json::to_string_pretty(&solution).expect("grid serializes");
        if let Err(e) = fs::write(path, json) {
            eprintln!("Error: failed to write {}: {e}", path.display());
            std::process::exit(1);
        }
        print_info(&format!("Final grid written to {}", path.display()));
    }

    print_section("Expected Solution");
    println!("{}", SudokuGrid::demo_solution());

    print_section("Demo Narrative");
    println!("  A full 4x4 sudoku needs 32 qubits, and 2^32 amplitudes are far");
    println!("  beyond a laptop statevector simulation. The demo therefore:");
    println!("  1. Builds the complete constraint circuit, to show the encoding.");
    println!("  2. Lets the backend refuse it, demonstrating resource limits.");
    println!("  3. Simulates a two-cell slice where RZZ coupling on matching");
    println!("     bits visibly suppresses equal values.");
    println!("  4. Finishes classically with a quantum-inspired fill and repair.");

    println!();
    print_success("Quantum sudoku demo complete!");
}
