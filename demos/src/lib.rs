// Allow dead code: demo library exposes helpers that may not all be used in every binary
#![allow(dead_code)]

//! Alsvid Demo Suite
//!
//! This crate provides demonstrations of Alsvid's circuit construction and
//! simulation capabilities, from a single qubit up to a full search workload:
//!
//! - **Hello Quantum**: One qubit, one coin flip
//! - **Entanglement**: A three-qubit circuit mixing entanglement and phase gates
//! - **Grover's Search**: Quadratic speedup for unstructured search
//! - **Quantum Sudoku**: QAOA-flavored constraint encoding with classical repair
//!
//! # Running a demo circuit
//!
//! ```
//! use alsvid_demos::circuits::hello_circuit;
//! use alsvid_hal::Backend;
//! use alsvid_adapter_sim::SimulatorBackend;
//!
//! let backend = SimulatorBackend::new();
//! let result = backend.execute(&hello_circuit(), 1000).unwrap();
//! assert_eq!(result.counts.total(), 1000);
//! ```

pub mod circuits;
pub mod problems;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for demo operations.
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap()
        .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}
