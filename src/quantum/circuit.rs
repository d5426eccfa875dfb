// src/quantum/circuit.rs
//! Append-only circuit builder
//!
//! A [`Circuit`] is an ordered program of [`GateOperation`]s over a fixed
//! register. It holds no amplitudes: every call to [`Circuit::simulate`]
//! replays the whole program against a fresh |0...0⟩ state, so the result is
//! a pure function of the operation list.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::MAX_QUBITS;
use crate::error::{QuantumError, Result};
use crate::quantum::gate::Gate;
use crate::simulators::{SimulationResult, StatevectorSimulator};

/// One gate application as submitted by a caller.
///
/// The gate name is free-form; it is resolved and checked against the
/// register when the circuit is simulated or validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateOperation {
    /// Gate name or alias, matched case-insensitively
    pub gate: String,

    /// Target and control indices, controls first
    pub qubits: Vec<usize>,

    /// Rotation angles in radians
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<f64>>,
}

impl GateOperation {
    pub fn new(gate: impl Into<String>, qubits: &[usize], params: Option<Vec<f64>>) -> Self {
        GateOperation {
            gate: gate.into(),
            qubits: qubits.to_vec(),
            params,
        }
    }
}

impl fmt::Display for GateOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gate.to_ascii_uppercase())?;
        if let Some(params) = &self.params {
            let params: Vec<String> = params.iter().map(|p| p.to_string()).collect();
            write!(f, "({})", params.join(", "))?;
        }
        write!(f, " {:?}", self.qubits)
    }
}

/// Serialized shape of a circuit, checked on the way in
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CircuitRepr {
    num_qubits: usize,
    operations: Vec<GateOperation>,
}

impl TryFrom<CircuitRepr> for Circuit {
    type Error = QuantumError;

    fn try_from(repr: CircuitRepr) -> Result<Self> {
        let mut circuit = Circuit::new(repr.num_qubits)?;
        circuit.operations = repr.operations;
        Ok(circuit)
    }
}

/// A quantum circuit consisting of a sequence of gate operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CircuitRepr")]
pub struct Circuit {
    num_qubits: usize,
    operations: Vec<GateOperation>,
}

impl Circuit {
    /// Create a new empty circuit over `num_qubits` qubits.
    ///
    /// Fails when `num_qubits` is 0 or above [`MAX_QUBITS`].
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(QuantumError::InvalidQubitCount {
                requested: num_qubits,
                maximum: MAX_QUBITS,
            });
        }

        Ok(Circuit {
            num_qubits,
            operations: Vec::new(),
        })
    }

    /// Build a circuit from an existing operation list
    pub fn from_operations(num_qubits: usize, operations: Vec<GateOperation>) -> Result<Self> {
        let mut circuit = Circuit::new(num_qubits)?;
        circuit.operations = operations;
        Ok(circuit)
    }

    /// Number of qubits in the register
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Operations in insertion order
    pub fn operations(&self) -> &[GateOperation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Append an operation.
    ///
    /// Nothing is checked here; a bad name or index surfaces as an error from
    /// [`Circuit::validate`] or [`Circuit::simulate`].
    pub fn add_gate(&mut self, gate: &str, qubits: &[usize], params: Option<Vec<f64>>) -> &mut Self {
        self.operations.push(GateOperation::new(gate, qubits, params));
        self
    }

    /// Append an already-built operation
    pub fn push(&mut self, operation: GateOperation) -> &mut Self {
        self.operations.push(operation);
        self
    }

    /// Drop every operation, returning to an empty program on the same register
    pub fn reset(&mut self) -> &mut Self {
        self.operations.clear();
        self
    }

    /// Resolve every operation, failing on the first invalid one
    pub fn resolve(&self) -> Result<Vec<Gate>> {
        self.operations
            .iter()
            .map(|op| Gate::from_operation(op, self.num_qubits))
            .collect()
    }

    /// Check every operation without simulating
    pub fn validate(&self) -> Result<()> {
        self.resolve().map(|_| ())
    }

    /// Run the circuit from |0...0⟩ with the default simulator configuration
    pub fn simulate(&self) -> Result<SimulationResult> {
        StatevectorSimulator::default().simulate(self)
    }

    /// Simulate once and sample `shots` outcomes with the default configuration.
    ///
    /// The default configuration caps `shots` at
    /// [`DEFAULT_MAX_SHOTS`](crate::config::DEFAULT_MAX_SHOTS); larger runs go
    /// through a [`StatevectorSimulator`] built with a higher `max_shots`.
    pub fn measure(&self, shots: usize) -> Result<BTreeMap<String, usize>> {
        StatevectorSimulator::default().measure(self, shots)
    }

    /// Serialize to the `{numQubits, operations}` JSON form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a circuit from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    // Convenience builders, one per gate

    pub fn i(&mut self, qubit: usize) -> &mut Self {
        self.add_gate("I", &[qubit], None)
    }

    pub fn x(&mut self, qubit: usize) -> &mut Self {
        self.add_gate("X", &[qubit], None)
    }

    pub fn y(&mut self, qubit: usize) -> &mut Self {
        self.add_gate("Y", &[qubit], None)
    }

    pub fn z(&mut self, qubit: usize) -> &mut Self {
        self.add_gate("Z", &[qubit], None)
    }

    pub fn h(&mut self, qubit: usize) -> &mut Self {
        self.add_gate("H", &[qubit], None)
    }

    pub fn s(&mut self, qubit: usize) -> &mut Self {
        self.add_gate("S", &[qubit], None)
    }

    pub fn t(&mut self, qubit: usize) -> &mut Self {
        self.add_gate("T", &[qubit], None)
    }

    pub fn rx(&mut self, qubit: usize, theta: f64) -> &mut Self {
        self.add_gate("RX", &[qubit], Some(vec![theta]))
    }

    pub fn ry(&mut self, qubit: usize, theta: f64) -> &mut Self {
        self.add_gate("RY", &[qubit], Some(vec![theta]))
    }

    pub fn rz(&mut self, qubit: usize, theta: f64) -> &mut Self {
        self.add_gate("RZ", &[qubit], Some(vec![theta]))
    }

    pub fn cnot(&mut self, control: usize, target: usize) -> &mut Self {
        self.add_gate("CNOT", &[control, target], None)
    }

    pub fn cx(&mut self, control: usize, target: usize) -> &mut Self {
        self.cnot(control, target)
    }

    pub fn cz(&mut self, control: usize, target: usize) -> &mut Self {
        self.add_gate("CZ", &[control, target], None)
    }

    pub fn swap(&mut self, a: usize, b: usize) -> &mut Self {
        self.add_gate("SWAP", &[a, b], None)
    }

    pub fn ccx(&mut self, control1: usize, control2: usize, target: usize) -> &mut Self {
        self.add_gate("CCX", &[control1, control2, target], None)
    }

    pub fn cswap(&mut self, control: usize, a: usize, b: usize) -> &mut Self {
        self.add_gate("CSWAP", &[control, a, b], None)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}-qubit circuit, {} operations:", self.num_qubits, self.operations.len())?;
        for (i, op) in self.operations.iter().enumerate() {
            writeln!(f, "  {}: {}", i, op)?;
        }
        Ok(())
    }
}
