// src/quantum/mod.rs
//! Circuits, gates and state vectors
//!
//! The gate registry is static metadata, gates are resolved into tagged
//! variants, and state vectors hold the amplitudes during one simulation.

pub mod registry;
pub mod gate;
pub mod state;
pub mod circuit;

pub use registry::{GateInfo, GateKind, GatePalette};
pub use gate::Gate;
pub use state::StateVector;
pub use circuit::{Circuit, GateOperation};

/// Re-export commonly used types
pub mod prelude {
    pub use super::{Circuit, GateOperation, Gate, GateKind, StateVector};
    pub use super::registry::{lookup, gates_by_arity};
}
