//! Quantum circuit simulators
//!
//! This module runs circuits on a dense state vector and derives
//! probabilities, sampled counts and verification scores from the result.

pub mod statevector;
pub mod verification;

pub use statevector::{
    StatevectorSimulator,
    SimulationResult,
    RunReport,
    sample_counts,
};
pub use verification::{VerificationReport, average_deviation, DEFAULT_TOLERANCE};
