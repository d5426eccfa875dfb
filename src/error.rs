//! Error types for circuit construction, validation and simulation

use thiserror::Error;

/// Errors raised by the engine.
///
/// Every variant except [`QuantumError::InvalidConfig`] describes a bad
/// caller input (an "invalid argument"): the circuit or request is rejected
/// as a whole and no partial result is produced.
#[derive(Error, Debug)]
pub enum QuantumError {
    /// Register size is zero or above the configured ceiling
    #[error("Invalid qubit count {requested}, expected 1..={maximum}")]
    InvalidQubitCount { requested: usize, maximum: usize },

    /// Gate name not present in the registry
    #[error("Unknown gate: {0}")]
    UnknownGate(String),

    /// Qubit index past the end of the register
    #[error("Qubit index {index} out of range for {num_qubits}-qubit circuit")]
    QubitOutOfRange { index: usize, num_qubits: usize },

    /// Wrong number of qubits supplied for a gate
    #[error("Gate {gate} acts on {expected} qubits, but {actual} were specified")]
    ArityMismatch {
        gate: String,
        expected: usize,
        actual: usize,
    },

    /// A multi-qubit gate names the same qubit twice
    #[error("Gate {gate} uses qubit {index} more than once")]
    DuplicateQubit { gate: String, index: usize },

    /// Wrong number of angle parameters supplied for a gate
    #[error("Gate {gate} takes {expected} parameters, but {actual} were specified")]
    ParameterMismatch {
        gate: String,
        expected: usize,
        actual: usize,
    },

    /// NaN or infinite rotation angle
    #[error("Gate {gate} has non-finite parameter {value}")]
    NonFiniteParameter { gate: String, value: f64 },

    /// Shot count of zero or above the configured cap
    #[error("Invalid shot count {requested}, expected 1..={maximum}")]
    InvalidShots { requested: usize, maximum: usize },

    /// Simulator configuration out of bounds
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed serialized circuit
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl QuantumError {
    /// True for errors caused by a bad circuit or request.
    ///
    /// Game and server code treats these as "reject the submission" rather
    /// than as an internal failure.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, QuantumError::InvalidConfig(_))
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, QuantumError>;
