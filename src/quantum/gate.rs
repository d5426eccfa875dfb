// src/quantum/gate.rs
//! Resolved gate variants
//!
//! A [`GateOperation`] names its gate with a free-form string; before
//! simulation every operation is resolved into a [`Gate`], a tagged variant
//! carrying the exact qubit payload and angle its kind needs. Resolution is
//! where the validation rules live; applying a gate only re-checks that its
//! qubits fit the register.

use std::fmt;

use num_complex::Complex64;

use crate::error::{QuantumError, Result};
use crate::quantum::circuit::GateOperation;
use crate::quantum::registry::{self, GateKind};

/// A gate bound to concrete qubits, ready to apply
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    /// Identity
    I(usize),
    /// Pauli-X (NOT)
    X(usize),
    /// Pauli-Y
    Y(usize),
    /// Pauli-Z
    Z(usize),
    /// Hadamard
    H(usize),
    /// Phase gate, diag(1, i)
    S(usize),
    /// π/8 gate, diag(1, e^(iπ/4))
    T(usize),
    /// Rotation around X-axis by `theta`
    Rx(usize, f64),
    /// Rotation around Y-axis by `theta`
    Ry(usize, f64),
    /// Rotation around Z-axis by `theta`
    Rz(usize, f64),
    /// Controlled-NOT
    Cnot { control: usize, target: usize },
    /// Controlled-Z
    Cz { control: usize, target: usize },
    /// Exchange two qubits
    Swap(usize, usize),
    /// Toffoli: flip `target` when both controls are 1
    Ccx { controls: [usize; 2], target: usize },
    /// Fredkin: swap `targets` when `control` is 1
    Cswap { control: usize, targets: [usize; 2] },
}

impl Gate {
    /// Resolve an operation against a register of `num_qubits` qubits.
    ///
    /// Fails on unknown names, wrong arity, out-of-range or repeated qubit
    /// indices, and wrong or non-finite parameters.
    pub fn from_operation(op: &GateOperation, num_qubits: usize) -> Result<Gate> {
        let info = registry::lookup(&op.gate)
            .ok_or_else(|| QuantumError::UnknownGate(op.gate.clone()))?;
        let name = info.name;

        if op.qubits.len() != info.arity {
            return Err(QuantumError::ArityMismatch {
                gate: name.to_string(),
                expected: info.arity,
                actual: op.qubits.len(),
            });
        }

        for (position, &index) in op.qubits.iter().enumerate() {
            if index >= num_qubits {
                return Err(QuantumError::QubitOutOfRange { index, num_qubits });
            }
            if op.qubits[..position].contains(&index) {
                return Err(QuantumError::DuplicateQubit {
                    gate: name.to_string(),
                    index,
                });
            }
        }

        let params = op.params.as_deref().unwrap_or(&[]);
        if params.len() != info.parameter_count() {
            return Err(QuantumError::ParameterMismatch {
                gate: name.to_string(),
                expected: info.parameter_count(),
                actual: params.len(),
            });
        }
        if let Some(&value) = params.iter().find(|p| !p.is_finite()) {
            return Err(QuantumError::NonFiniteParameter {
                gate: name.to_string(),
                value,
            });
        }

        let q = &op.qubits;
        let gate = match info.kind {
            GateKind::I => Gate::I(q[0]),
            GateKind::X => Gate::X(q[0]),
            GateKind::Y => Gate::Y(q[0]),
            GateKind::Z => Gate::Z(q[0]),
            GateKind::H => Gate::H(q[0]),
            GateKind::S => Gate::S(q[0]),
            GateKind::T => Gate::T(q[0]),
            GateKind::Rx => Gate::Rx(q[0], params[0]),
            GateKind::Ry => Gate::Ry(q[0], params[0]),
            GateKind::Rz => Gate::Rz(q[0], params[0]),
            GateKind::Cnot => Gate::Cnot { control: q[0], target: q[1] },
            GateKind::Cz => Gate::Cz { control: q[0], target: q[1] },
            GateKind::Swap => Gate::Swap(q[0], q[1]),
            GateKind::Ccx => Gate::Ccx { controls: [q[0], q[1]], target: q[2] },
            GateKind::Cswap => Gate::Cswap { control: q[0], targets: [q[1], q[2]] },
        };

        Ok(gate)
    }

    /// The registry kind of this gate
    pub fn kind(&self) -> GateKind {
        match self {
            Gate::I(_) => GateKind::I,
            Gate::X(_) => GateKind::X,
            Gate::Y(_) => GateKind::Y,
            Gate::Z(_) => GateKind::Z,
            Gate::H(_) => GateKind::H,
            Gate::S(_) => GateKind::S,
            Gate::T(_) => GateKind::T,
            Gate::Rx(..) => GateKind::Rx,
            Gate::Ry(..) => GateKind::Ry,
            Gate::Rz(..) => GateKind::Rz,
            Gate::Cnot { .. } => GateKind::Cnot,
            Gate::Cz { .. } => GateKind::Cz,
            Gate::Swap(..) => GateKind::Swap,
            Gate::Ccx { .. } => GateKind::Ccx,
            Gate::Cswap { .. } => GateKind::Cswap,
        }
    }

    /// Qubits touched by the gate, controls first
    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            Gate::I(q) | Gate::X(q) | Gate::Y(q) | Gate::Z(q) |
            Gate::H(q) | Gate::S(q) | Gate::T(q) |
            Gate::Rx(q, _) | Gate::Ry(q, _) | Gate::Rz(q, _) => vec![q],
            Gate::Cnot { control, target } | Gate::Cz { control, target } => vec![control, target],
            Gate::Swap(a, b) => vec![a, b],
            Gate::Ccx { controls, target } => vec![controls[0], controls[1], target],
            Gate::Cswap { control, targets } => vec![control, targets[0], targets[1]],
        }
    }

    /// Target qubit and row-major 2x2 unitary for single-qubit gates,
    /// `None` otherwise.
    ///
    /// Fixed gates take their exact coefficients from the registry; rotations
    /// evaluate `cos`/`sin` of the half angle.
    pub fn single_qubit_matrix(&self) -> Option<(usize, [[Complex64; 2]; 2])> {
        match *self {
            Gate::I(q) | Gate::X(q) | Gate::Y(q) | Gate::Z(q) | Gate::H(q) | Gate::S(q) | Gate::T(q) => {
                self.kind().info().matrix.map(|matrix| (q, matrix))
            }
            Gate::Rx(q, theta) => {
                let cos = Complex64::new((theta / 2.0).cos(), 0.0);
                let sin = Complex64::new(0.0, -(theta / 2.0).sin());
                Some((q, [[cos, sin], [sin, cos]]))
            }
            Gate::Ry(q, theta) => {
                let cos = Complex64::new((theta / 2.0).cos(), 0.0);
                let sin = Complex64::new((theta / 2.0).sin(), 0.0);
                Some((q, [[cos, -sin], [sin, cos]]))
            }
            Gate::Rz(q, theta) => {
                let zero = Complex64::new(0.0, 0.0);
                let phase_neg = Complex64::new(0.0, -theta / 2.0).exp();
                let phase_pos = Complex64::new(0.0, theta / 2.0).exp();
                Some((q, [[phase_neg, zero], [zero, phase_pos]]))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())?;
        match self {
            Gate::Rx(_, theta) | Gate::Ry(_, theta) | Gate::Rz(_, theta) => write!(f, "({})", theta)?,
            _ => {}
        }
        write!(f, " {:?}", self.qubits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn op(gate: &str, qubits: &[usize], params: Option<Vec<f64>>) -> GateOperation {
        GateOperation {
            gate: gate.to_string(),
            qubits: qubits.to_vec(),
            params,
        }
    }

    #[test]
    fn test_resolves_aliases_and_case() {
        assert_eq!(
            Gate::from_operation(&op("cx", &[0, 1], None), 2).unwrap(),
            Gate::Cnot { control: 0, target: 1 }
        );
        assert_eq!(
            Gate::from_operation(&op("Toffoli", &[2, 0, 1], None), 3).unwrap(),
            Gate::Ccx { controls: [2, 0], target: 1 }
        );
        assert_eq!(
            Gate::from_operation(&op("rY", &[0], Some(vec![PI])), 1).unwrap(),
            Gate::Ry(0, PI)
        );
    }

    #[test]
    fn test_rejects_bad_operations() {
        let err = Gate::from_operation(&op("M", &[0], None), 1).unwrap_err();
        assert!(matches!(err, QuantumError::UnknownGate(ref name) if name == "M"));

        let err = Gate::from_operation(&op("X", &[1], None), 1).unwrap_err();
        assert!(matches!(err, QuantumError::QubitOutOfRange { index: 1, num_qubits: 1 }));

        let err = Gate::from_operation(&op("CNOT", &[0], None), 2).unwrap_err();
        assert!(matches!(err, QuantumError::ArityMismatch { expected: 2, actual: 1, .. }));

        let err = Gate::from_operation(&op("SWAP", &[1, 1], None), 2).unwrap_err();
        assert!(matches!(err, QuantumError::DuplicateQubit { index: 1, .. }));

        let err = Gate::from_operation(&op("RX", &[0], None), 1).unwrap_err();
        assert!(matches!(err, QuantumError::ParameterMismatch { expected: 1, actual: 0, .. }));

        let err = Gate::from_operation(&op("H", &[0], Some(vec![1.0])), 1).unwrap_err();
        assert!(matches!(err, QuantumError::ParameterMismatch { expected: 0, actual: 1, .. }));

        let err = Gate::from_operation(&op("RZ", &[0], Some(vec![f64::NAN])), 1).unwrap_err();
        assert!(matches!(err, QuantumError::NonFiniteParameter { .. }));
    }

    #[test]
    fn test_single_qubit_matrices_are_unitary() {
        let gates = [
            Gate::I(0), Gate::X(0), Gate::Y(0), Gate::Z(0), Gate::H(0), Gate::S(0), Gate::T(0),
            Gate::Rx(0, 0.7), Gate::Ry(0, -1.3), Gate::Rz(0, PI / 3.0),
        ];
        for gate in gates {
            let (_, m) = gate.single_qubit_matrix().unwrap();
            for r in 0..2 {
                for c in 0..2 {
                    // (M M†)[r][c]
                    let entry = m[r][0] * m[c][0].conj() + m[r][1] * m[c][1].conj();
                    let expected = if r == c { 1.0 } else { 0.0 };
                    assert!((entry - Complex64::new(expected, 0.0)).norm() < 1e-12, "{}", gate);
                }
            }
        }

        let (_, x) = Gate::X(0).single_qubit_matrix().unwrap();
        let (zero, one) = (Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0));
        assert_eq!(x, [[zero, one], [one, zero]]);
        assert!(Gate::Cz { control: 0, target: 1 }.single_qubit_matrix().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Gate::Cnot { control: 0, target: 1 }.to_string(), "CNOT [0, 1]");
        assert_eq!(Gate::Rz(2, 0.5).to_string(), "RZ(0.5) [2]");
    }
}
