//! Simulator configuration

use serde::{Deserialize, Serialize};

use crate::error::{QuantumError, Result};

/// Hard ceiling on register size: 2^24 amplitudes, 256 MiB of `Complex64`
/// per buffer and 512 MiB with the scratch buffer.
pub const MAX_QUBITS: usize = 24;

/// Default cutoff below which a basis state is left out of the probability map
pub const DEFAULT_PROBABILITY_EPSILON: f64 = 1e-10;

/// Default number of measurement shots
pub const DEFAULT_SHOTS: usize = 1024;

/// Default cap on measurement shots per request
pub const DEFAULT_MAX_SHOTS: usize = 10_000;

/// Configuration shared by every simulation run through a
/// [`StatevectorSimulator`](crate::simulators::StatevectorSimulator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulatorConfig {
    /// Largest register a circuit may declare
    pub max_qubits: usize,

    /// Probabilities at or below this value are omitted from the sparse map
    pub probability_epsilon: f64,

    /// Shots used when the caller does not ask for a specific number
    pub default_shots: usize,

    /// Largest shot count accepted by `measure`
    pub max_shots: usize,

    /// Fixed RNG seed for reproducible sampling; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        SimulatorConfig {
            max_qubits: MAX_QUBITS,
            probability_epsilon: DEFAULT_PROBABILITY_EPSILON,
            default_shots: DEFAULT_SHOTS,
            max_shots: DEFAULT_MAX_SHOTS,
            seed: None,
        }
    }
}

impl SimulatorConfig {
    /// Default configuration with a fixed sampling seed
    pub fn with_seed(seed: u64) -> Self {
        SimulatorConfig {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON, filling unspecified fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimulatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is within bounds
    pub fn validate(&self) -> Result<()> {
        if self.max_qubits == 0 || self.max_qubits > MAX_QUBITS {
            return Err(QuantumError::InvalidConfig(format!(
                "max_qubits must be in 1..={}, got {}",
                MAX_QUBITS, self.max_qubits
            )));
        }

        if !self.probability_epsilon.is_finite() || self.probability_epsilon < 0.0 {
            return Err(QuantumError::InvalidConfig(format!(
                "probability_epsilon must be a non-negative number, got {}",
                self.probability_epsilon
            )));
        }

        if self.max_shots == 0 {
            return Err(QuantumError::InvalidConfig("max_shots must be positive".to_string()));
        }

        if self.default_shots == 0 || self.default_shots > self.max_shots {
            return Err(QuantumError::InvalidConfig(format!(
                "default_shots must be in 1..={}, got {}",
                self.max_shots, self.default_shots
            )));
        }

        Ok(())
    }
}
