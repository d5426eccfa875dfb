//! State-vector quantum circuit engine for educational mini-games
//!
//! Callers build a [`Circuit`](quantum::Circuit) by appending gate
//! operations, then ask for the simulated amplitudes and probabilities,
//! sampled measurement counts, or a score against a target distribution.
//! Qubit 0 is the most significant bit of every basis index and bitstring.

pub mod config;
pub mod error;
pub mod quantum;
pub mod simulators;

pub use config::SimulatorConfig;
pub use error::{QuantumError, Result};

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::config::SimulatorConfig;
    pub use crate::error::{QuantumError, Result};
    pub use crate::quantum::prelude::*;
    pub use crate::simulators::{SimulationResult, StatevectorSimulator, VerificationReport};
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
