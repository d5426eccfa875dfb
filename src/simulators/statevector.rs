//! Statevector simulator
//!
//! Replays a [`Circuit`] against a freshly allocated |0...0⟩ state and turns
//! the final amplitudes into a sparse probability map or sampled counts.
//! The simulator holds only configuration, so one instance can serve many
//! circuits concurrently.
use std::collections::BTreeMap;

use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::SimulatorConfig;
use crate::error::{QuantumError, Result};
use crate::quantum::circuit::Circuit;
use crate::quantum::state::StateVector;

/// Serde adapter writing each amplitude as `{"real": .., "imag": ..}`
mod amplitude_list {
    use num_complex::Complex64;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Amplitude {
        real: f64,
        imag: f64,
    }

    pub fn serialize<S: Serializer>(amplitudes: &[Complex64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(amplitudes.iter().map(|amp| Amplitude {
            real: amp.re,
            imag: amp.im,
        }))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Complex64>, D::Error> {
        let amplitudes = Vec::<Amplitude>::deserialize(deserializer)?;
        Ok(amplitudes
            .into_iter()
            .map(|amp| Complex64::new(amp.real, amp.imag))
            .collect())
    }

    pub mod optional {
        use super::*;

        pub fn serialize<S: Serializer>(
            amplitudes: &Option<Vec<Complex64>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match amplitudes {
                Some(amplitudes) => super::serialize(amplitudes, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Vec<Complex64>>, D::Error> {
            let amplitudes = Option::<Vec<Amplitude>>::deserialize(deserializer)?;
            Ok(amplitudes.map(|list| {
                list.into_iter()
                    .map(|amp| Complex64::new(amp.real, amp.imag))
                    .collect()
            }))
        }
    }
}

/// Final state of one simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Amplitudes in basis order, length 2^n
    #[serde(with = "amplitude_list")]
    pub statevector: Vec<Complex64>,

    /// Probability per bitstring, only entries above the configured epsilon
    pub probabilities: BTreeMap<String, f64>,
}

impl SimulationResult {
    /// Probability of `bitstring`, 0 when it was filtered out or never reachable
    pub fn probability(&self, bitstring: &str) -> f64 {
        self.probabilities.get(bitstring).copied().unwrap_or(0.0)
    }

    /// Sum of squared amplitude magnitudes
    pub fn norm_sqr(&self) -> f64 {
        self.statevector.iter().map(|amp| amp.norm_sqr()).sum()
    }
}

/// Sampled counts plus the matching empirical frequencies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub counts: BTreeMap<String, usize>,

    /// `count / shots` per bitstring
    pub probabilities: BTreeMap<String, f64>,

    #[serde(
        default,
        with = "amplitude_list::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub statevector: Option<Vec<Complex64>>,
}

/// A statevector simulator for quantum circuits
#[derive(Debug, Clone, Default)]
pub struct StatevectorSimulator {
    config: SimulatorConfig,
}

impl StatevectorSimulator {
    /// Create a simulator, rejecting out-of-bounds configuration
    pub fn new(config: SimulatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(StatevectorSimulator { config })
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Replay `circuit` from |0...0⟩ and return the final state.
    ///
    /// Every operation is resolved before any amplitude is allocated, so an
    /// invalid circuit fails without doing simulation work.
    pub fn run_state(&self, circuit: &Circuit) -> Result<StateVector> {
        if circuit.num_qubits() > self.config.max_qubits {
            return Err(QuantumError::InvalidQubitCount {
                requested: circuit.num_qubits(),
                maximum: self.config.max_qubits,
            });
        }

        let gates = circuit.resolve()?;

        debug!(
            num_qubits = circuit.num_qubits(),
            operations = gates.len(),
            "simulating circuit"
        );

        let mut state = StateVector::zero_state(circuit.num_qubits());
        for (step, gate) in gates.iter().enumerate() {
            trace!(step, %gate, "applying gate");
            state.apply(gate)?;
        }

        Ok(state)
    }

    /// Simulate `circuit` and return amplitudes with the sparse probability map
    pub fn simulate(&self, circuit: &Circuit) -> Result<SimulationResult> {
        let state = self.run_state(circuit)?;
        let epsilon = self.config.probability_epsilon;

        let probabilities = state
            .probabilities()
            .into_iter()
            .enumerate()
            .filter(|&(_, p)| p > epsilon)
            .map(|(index, p)| (state.basis_label(index), p))
            .collect();

        Ok(SimulationResult {
            statevector: state.into_amplitudes(),
            probabilities,
        })
    }

    /// Simulate many independent circuits in parallel, results in input order
    pub fn simulate_batch(&self, circuits: &[Circuit]) -> Vec<Result<SimulationResult>> {
        debug!(circuits = circuits.len(), "simulating batch");
        circuits.par_iter().map(|circuit| self.simulate(circuit)).collect()
    }

    /// Simulate once and sample `shots` outcomes.
    ///
    /// Uses the configured seed when set, entropy otherwise.
    pub fn measure(&self, circuit: &Circuit, shots: usize) -> Result<BTreeMap<String, usize>> {
        let mut rng = self.rng();
        self.measure_with_rng(circuit, shots, &mut rng)
    }

    /// Simulate once and sample `shots` outcomes from `rng`
    pub fn measure_with_rng<R: Rng + ?Sized>(
        &self,
        circuit: &Circuit,
        shots: usize,
        rng: &mut R,
    ) -> Result<BTreeMap<String, usize>> {
        self.check_shots(shots)?;
        let result = self.simulate(circuit)?;
        debug!(num_qubits = circuit.num_qubits(), shots, "sampling measurements");
        Ok(sample_counts(&result.probabilities, shots, rng))
    }

    /// Sample `shots` outcomes and report counts, empirical frequencies and
    /// optionally the final amplitudes
    pub fn run(&self, circuit: &Circuit, shots: usize, include_statevector: bool) -> Result<RunReport> {
        self.check_shots(shots)?;
        let result = self.simulate(circuit)?;
        let mut rng = self.rng();
        let counts = sample_counts(&result.probabilities, shots, &mut rng);

        let probabilities = counts
            .iter()
            .map(|(bitstring, &count)| (bitstring.clone(), count as f64 / shots as f64))
            .collect();

        Ok(RunReport {
            counts,
            probabilities,
            statevector: include_statevector.then_some(result.statevector),
        })
    }

    fn check_shots(&self, shots: usize) -> Result<()> {
        if shots == 0 || shots > self.config.max_shots {
            return Err(QuantumError::InvalidShots {
                requested: shots,
                maximum: self.config.max_shots,
            });
        }
        Ok(())
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Draw `shots` samples by inverse-CDF over `probabilities` in map order.
///
/// Each draw picks the first bitstring whose cumulative probability exceeds
/// a uniform value scaled to the map's total, so entries dropped by the
/// epsilon filter cannot leave a gap at the top of the distribution.
pub fn sample_counts<R: Rng + ?Sized>(
    probabilities: &BTreeMap<String, f64>,
    shots: usize,
    rng: &mut R,
) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    if probabilities.is_empty() {
        return counts;
    }

    let mut cumulative = Vec::with_capacity(probabilities.len());
    let mut total = 0.0;
    for (bitstring, p) in probabilities {
        total += p;
        cumulative.push((bitstring, total));
    }

    let last = cumulative.len() - 1;
    for _ in 0..shots {
        let draw = rng.gen::<f64>() * total;
        let index = cumulative
            .partition_point(|&(_, cum)| cum <= draw)
            .min(last);
        *counts.entry(cumulative[index].0.clone()).or_insert(0) += 1;
    }

    counts
}
