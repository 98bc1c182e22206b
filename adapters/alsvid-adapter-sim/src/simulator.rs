//! Local statevector simulator backend.

use std::time::Instant;

use num_complex::Complex64;
use tracing::{debug, instrument};

use alsvid_hal::{
    Backend, BackendConfig, BackendFactory, Counts, ExecutionResult, HalError, HalResult,
};
use alsvid_ir::Circuit;

use crate::statevector::Statevector;

/// Default qubit cap. A dense 20-qubit state is 2^20 amplitudes (16 MiB),
/// beyond that the simulation stops being interactive on a laptop.
const DEFAULT_MAX_QUBITS: u32 = 20;

/// A local statevector simulator.
///
/// Evolves the full 2^n statevector through the circuit once, then draws
/// all shots from the final distribution. This is valid because
/// measurement is terminal in the supported circuit model: no gate ever
/// follows a measurement on any qubit, so every shot samples the same
/// state.
///
/// # Example
///
/// ```
/// use alsvid_adapter_sim::SimulatorBackend;
/// use alsvid_hal::Backend;
/// use alsvid_ir::Circuit;
///
/// let backend = SimulatorBackend::new();
/// let circuit = Circuit::bell().unwrap();
/// let result = backend.execute(&circuit, 1000).unwrap();
/// assert_eq!(result.counts.total(), 1000);
/// ```
pub struct SimulatorBackend {
    config: BackendConfig,
    max_qubits: u32,
}

impl SimulatorBackend {
    /// Create a simulator with the default qubit cap.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_qubits(DEFAULT_MAX_QUBITS)
    }

    /// Create a simulator with a custom qubit cap.
    #[must_use]
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            config: BackendConfig::new("alsvid-sim"),
            max_qubits,
        }
    }

    fn check_size(&self, circuit: &Circuit) -> HalResult<()> {
        let num_qubits = circuit.num_qubits();
        if num_qubits > self.max_qubits as usize {
            return Err(HalError::CircuitTooLarge(format!(
                "{num_qubits} qubits exceeds simulator maximum of {}",
                self.max_qubits
            )));
        }
        Ok(())
    }

    /// Evolve the statevector through all gates of `circuit`.
    fn evolve(circuit: &Circuit) -> Statevector {
        let mut sv = Statevector::new(circuit.num_qubits());
        for (_, instruction) in circuit.dag().topological_ops() {
            sv.apply(instruction);
        }
        sv
    }

    #[instrument(skip(self, circuit))]
    fn run_simulation(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        let start = Instant::now();
        debug!(
            circuit = circuit.name(),
            num_qubits = circuit.num_qubits(),
            num_ops = circuit.dag().num_ops(),
            shots,
            "starting statevector simulation"
        );

        let sv = Self::evolve(circuit);

        let measured = measured_bits(circuit);
        let num_clbits = circuit.num_clbits();
        let mut counts = Counts::new();
        for _ in 0..shots {
            let outcome = sv.sample();
            counts.insert(outcome_bitstring(outcome, &measured, num_clbits), 1);
        }

        let elapsed_ms = start.elapsed().as_millis() as u64;
        debug!(
            elapsed_ms,
            distinct_outcomes = counts.len(),
            "simulation finished"
        );

        Ok(ExecutionResult::new(counts, shots).with_execution_time(elapsed_ms))
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn max_qubits(&self) -> u32 {
        self.max_qubits
    }

    fn execute(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        self.check_size(circuit)?;
        if shots == 0 {
            return Err(HalError::InvalidShots(
                "shots must be greater than zero".to_string(),
            ));
        }
        if !has_measurement(circuit) {
            return Err(HalError::InvalidCircuit(
                "circuit has no measurement, call measure_all() before executing".to_string(),
            ));
        }
        self.run_simulation(circuit, shots)
    }

    fn statevector(&self, circuit: &Circuit) -> HalResult<Vec<Complex64>> {
        self.check_size(circuit)?;
        if has_measurement(circuit) {
            return Err(HalError::InvalidCircuit(
                "circuit contains a measurement, the pre-measurement state is undefined"
                    .to_string(),
            ));
        }
        Ok(Self::evolve(circuit).into_amplitudes())
    }
}

impl BackendFactory for SimulatorBackend {
    fn from_config(config: BackendConfig) -> HalResult<Self> {
        let max_qubits = match config.extra.get("max_qubits") {
            None => DEFAULT_MAX_QUBITS,
            Some(value) => value
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .filter(|&v| v > 0)
                .ok_or_else(|| {
                    HalError::Configuration(format!(
                        "max_qubits must be a positive integer, got {value}"
                    ))
                })?,
        };
        Ok(Self { config, max_qubits })
    }
}

fn has_measurement(circuit: &Circuit) -> bool {
    circuit
        .dag()
        .topological_ops()
        .into_iter()
        .any(|(_, instruction)| instruction.is_measure())
}

/// Qubit/clbit pairs recorded by measure instructions, in circuit order.
fn measured_bits(circuit: &Circuit) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (_, instruction) in circuit.dag().topological_ops() {
        if instruction.is_measure() {
            for (qubit, clbit) in instruction.qubits.iter().zip(instruction.clbits.iter()) {
                pairs.push((qubit.0 as usize, clbit.0 as usize));
            }
        }
    }
    pairs
}

/// Render a sampled basis state as a classical bitstring.
///
/// Character `i` of the result holds classical bit `i`. Bits that no
/// measurement wrote stay '0'; a later measurement of the same bit
/// overwrites an earlier one.
fn outcome_bitstring(outcome: usize, measured: &[(usize, usize)], num_clbits: usize) -> String {
    let mut bits = vec!['0'; num_clbits];
    for &(qubit, clbit) in measured {
        bits[clbit] = if outcome & (1 << qubit) != 0 { '1' } else { '0' };
    }
    bits.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvid_ir::{ClbitId, QubitId};

    #[test]
    fn test_bell_state_counts() {
        let backend = SimulatorBackend::new();
        let circuit = Circuit::bell().unwrap();

        let result = backend.execute(&circuit, 1000).unwrap();
        assert_eq!(result.shots, 1000);
        // Only |00⟩ and |11⟩ have nonzero probability
        assert_eq!(result.counts.get("00") + result.counts.get("11"), 1000);
        assert!(result.execution_time_ms.is_some());
    }

    #[test]
    fn test_ghz_state_counts() {
        let backend = SimulatorBackend::new();
        let circuit = Circuit::ghz(3).unwrap();

        let result = backend.execute(&circuit, 500).unwrap();
        assert_eq!(result.counts.get("000") + result.counts.get("111"), 500);
    }

    #[test]
    fn test_deterministic_circuit() {
        let mut circuit = Circuit::with_size("x-only", 2, 0);
        circuit.x(QubitId(0)).unwrap();
        circuit.measure_all().unwrap();

        let backend = SimulatorBackend::new();
        let result = backend.execute(&circuit, 100).unwrap();
        assert_eq!(result.counts.get("10"), 100);
    }

    #[test]
    fn test_partial_measurement_uses_clbit_order() {
        // Only qubit 1 is measured, into the single classical bit
        let mut circuit = Circuit::with_size("partial", 2, 1);
        circuit.x(QubitId(1)).unwrap();
        circuit.measure(QubitId(1), ClbitId(0)).unwrap();

        let backend = SimulatorBackend::new();
        let result = backend.execute(&circuit, 50).unwrap();
        assert_eq!(result.counts.get("1"), 50);
    }

    #[test]
    fn test_execute_rejects_large_circuit() {
        let backend = SimulatorBackend::with_max_qubits(4);
        let mut circuit = Circuit::with_size("big", 5, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.measure_all().unwrap();

        let result = backend.execute(&circuit, 100);
        assert!(matches!(result, Err(HalError::CircuitTooLarge(_))));
    }

    #[test]
    fn test_execute_rejects_zero_shots() {
        let backend = SimulatorBackend::new();
        let circuit = Circuit::bell().unwrap();

        let result = backend.execute(&circuit, 0);
        assert!(matches!(result, Err(HalError::InvalidShots(_))));
    }

    #[test]
    fn test_execute_requires_measurement() {
        let backend = SimulatorBackend::new();
        let mut circuit = Circuit::with_size("no-measure", 2, 0);
        circuit.h(QubitId(0)).unwrap();

        let result = backend.execute(&circuit, 100);
        assert!(matches!(result, Err(HalError::InvalidCircuit(_))));
    }

    #[test]
    fn test_statevector_bell_amplitudes() {
        let backend = SimulatorBackend::new();
        let mut circuit = Circuit::with_size("bell-no-measure", 2, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.cx(QubitId(0), QubitId(1)).unwrap();

        let amplitudes = backend.statevector(&circuit).unwrap();
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert_eq!(amplitudes.len(), 4);
        assert!((amplitudes[0].re - sqrt2_inv).abs() < 1e-10);
        assert!(amplitudes[1].norm() < 1e-10);
        assert!(amplitudes[2].norm() < 1e-10);
        assert!((amplitudes[3].re - sqrt2_inv).abs() < 1e-10);
    }

    #[test]
    fn test_statevector_rejects_measured_circuit() {
        let backend = SimulatorBackend::new();
        let circuit = Circuit::bell().unwrap();

        let result = backend.statevector(&circuit);
        assert!(matches!(result, Err(HalError::InvalidCircuit(_))));
    }

    #[test]
    fn test_statevector_indexes_qubit_zero_as_lsb() {
        // X on qubit 0 of a 3-qubit register puts all weight on index 1
        let backend = SimulatorBackend::new();
        let mut circuit = Circuit::with_size("x0", 3, 0);
        circuit.x(QubitId(0)).unwrap();

        let amplitudes = backend.statevector(&circuit).unwrap();
        assert!((amplitudes[1].re - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_from_config_reads_max_qubits() {
        let config = BackendConfig::new("sim").with_extra("max_qubits", serde_json::json!(8));
        let backend = SimulatorBackend::from_config(config).unwrap();
        assert_eq!(backend.max_qubits(), 8);
        assert_eq!(backend.name(), "sim");
    }

    #[test]
    fn test_from_config_defaults_max_qubits() {
        let backend = SimulatorBackend::from_config(BackendConfig::new("sim")).unwrap();
        assert_eq!(backend.max_qubits(), 20);
    }

    #[test]
    fn test_from_config_rejects_bad_max_qubits() {
        let config = BackendConfig::new("sim").with_extra("max_qubits", serde_json::json!("lots"));
        let result = SimulatorBackend::from_config(config);
        assert!(matches!(result, Err(HalError::Configuration(_))));

        let config = BackendConfig::new("sim").with_extra("max_qubits", serde_json::json!(0));
        let result = SimulatorBackend::from_config(config);
        assert!(matches!(result, Err(HalError::Configuration(_))));
    }

    #[test]
    fn test_outcome_bitstring_mapping() {
        // Outcome 0b101 with identity map on 3 bits reads "101" in bit order
        let measured = vec![(0, 0), (1, 1), (2, 2)];
        assert_eq!(outcome_bitstring(0b101, &measured, 3), "101");

        // Crossed mapping: qubit 2 lands in bit 0
        let measured = vec![(2, 0), (0, 2)];
        assert_eq!(outcome_bitstring(0b100, &measured, 3), "100");
    }
}
