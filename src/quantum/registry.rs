// src/quantum/registry.rs
//! Static catalogue of supported gates
//!
//! The registry describes the shape of each gate (arity, parameters, display
//! metadata) for gate palettes and validation, and holds the exact matrices
//! of the fixed single-qubit gates. It is read-only data fixed at compile
//! time; rotations are built in [`crate::quantum::gate`].

use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

use num_complex::Complex64;
use serde::Serialize;

/// The closed set of gate kinds the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum GateKind {
    I,
    X,
    Y,
    Z,
    H,
    S,
    T,
    Rx,
    Ry,
    Rz,
    Cnot,
    Cz,
    Swap,
    Ccx,
    Cswap,
}

impl GateKind {
    /// Registry entry for this kind
    pub fn info(self) -> &'static GateInfo {
        // GATES is declared in GateKind order
        &GATES[self as usize]
    }

    /// Canonical upper-case name
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Number of qubits the gate acts on
    pub fn arity(self) -> usize {
        self.info().arity
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Static metadata for one gate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateInfo {
    #[serde(skip)]
    pub kind: GateKind,

    /// Canonical upper-case name, e.g. `"CNOT"`
    pub name: &'static str,

    /// Short label drawn on circuit diagrams
    pub symbol: &'static str,

    /// Human description
    pub description: &'static str,

    /// Number of qubits the gate acts on (1, 2 or 3)
    pub arity: usize,

    /// Names of the real-valued parameters, in order
    #[serde(skip_serializing_if = "no_entries")]
    pub params: &'static [&'static str],

    /// Alternative names accepted by [`lookup`]
    #[serde(skip_serializing_if = "no_entries")]
    pub aliases: &'static [&'static str],

    /// Fixed 2x2 matrix for simple single-qubit gates, row-major
    #[serde(skip)]
    pub matrix: Option<[[Complex64; 2]; 2]>,
}

impl GateInfo {
    /// Number of angles the gate expects
    pub fn parameter_count(&self) -> usize {
        self.params.len()
    }

    /// True for gates parametrized by a rotation angle
    pub fn is_parametrized(&self) -> bool {
        !self.params.is_empty()
    }

    /// Case-insensitive match against the name and aliases
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }
}

fn no_entries(list: &&'static [&'static str]) -> bool {
    list.is_empty()
}

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);
const IM: Complex64 = Complex64::new(0.0, 1.0);
const NEG_IM: Complex64 = Complex64::new(0.0, -1.0);
const H_COEFF: Complex64 = Complex64::new(FRAC_1_SQRT_2, 0.0);
const NEG_H_COEFF: Complex64 = Complex64::new(-FRAC_1_SQRT_2, 0.0);
const T_PHASE: Complex64 = Complex64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2);

const THETA: &[&str] = &["theta"];

/// Every supported gate, in [`GateKind`] order
pub static GATES: [GateInfo; 15] = [
    GateInfo {
        kind: GateKind::I,
        name: "I",
        symbol: "I",
        description: "Identity gate",
        arity: 1,
        params: &[],
        aliases: &["ID"],
        matrix: Some([[ONE, ZERO], [ZERO, ONE]]),
    },
    GateInfo {
        kind: GateKind::X,
        name: "X",
        symbol: "X",
        description: "Pauli-X (NOT) gate",
        arity: 1,
        params: &[],
        aliases: &["NOT"],
        matrix: Some([[ZERO, ONE], [ONE, ZERO]]),
    },
    GateInfo {
        kind: GateKind::Y,
        name: "Y",
        symbol: "Y",
        description: "Pauli-Y gate",
        arity: 1,
        params: &[],
        aliases: &[],
        matrix: Some([[ZERO, NEG_IM], [IM, ZERO]]),
    },
    GateInfo {
        kind: GateKind::Z,
        name: "Z",
        symbol: "Z",
        description: "Pauli-Z gate",
        arity: 1,
        params: &[],
        aliases: &[],
        matrix: Some([[ONE, ZERO], [ZERO, NEG_ONE]]),
    },
    GateInfo {
        kind: GateKind::H,
        name: "H",
        symbol: "H",
        description: "Hadamard gate",
        arity: 1,
        params: &[],
        aliases: &[],
        matrix: Some([[H_COEFF, H_COEFF], [H_COEFF, NEG_H_COEFF]]),
    },
    GateInfo {
        kind: GateKind::S,
        name: "S",
        symbol: "S",
        description: "S (phase) gate",
        arity: 1,
        params: &[],
        aliases: &[],
        matrix: Some([[ONE, ZERO], [ZERO, IM]]),
    },
    GateInfo {
        kind: GateKind::T,
        name: "T",
        symbol: "T",
        description: "T gate",
        arity: 1,
        params: &[],
        aliases: &[],
        matrix: Some([[ONE, ZERO], [ZERO, T_PHASE]]),
    },
    GateInfo {
        kind: GateKind::Rx,
        name: "RX",
        symbol: "Rx",
        description: "Rotation around X-axis",
        arity: 1,
        params: THETA,
        aliases: &[],
        matrix: None,
    },
    GateInfo {
        kind: GateKind::Ry,
        name: "RY",
        symbol: "Ry",
        description: "Rotation around Y-axis",
        arity: 1,
        params: THETA,
        aliases: &[],
        matrix: None,
    },
    GateInfo {
        kind: GateKind::Rz,
        name: "RZ",
        symbol: "Rz",
        description: "Rotation around Z-axis",
        arity: 1,
        params: THETA,
        aliases: &[],
        matrix: None,
    },
    GateInfo {
        kind: GateKind::Cnot,
        name: "CNOT",
        symbol: "⊕",
        description: "Controlled-NOT gate",
        arity: 2,
        params: &[],
        aliases: &["CX"],
        matrix: None,
    },
    GateInfo {
        kind: GateKind::Cz,
        name: "CZ",
        symbol: "CZ",
        description: "Controlled-Z gate",
        arity: 2,
        params: &[],
        aliases: &[],
        matrix: None,
    },
    GateInfo {
        kind: GateKind::Swap,
        name: "SWAP",
        symbol: "×",
        description: "SWAP gate",
        arity: 2,
        params: &[],
        aliases: &[],
        matrix: None,
    },
    GateInfo {
        kind: GateKind::Ccx,
        name: "CCX",
        symbol: "CCX",
        description: "Toffoli (CCNOT) gate",
        arity: 3,
        params: &[],
        aliases: &["TOFFOLI", "CCNOT"],
        matrix: None,
    },
    GateInfo {
        kind: GateKind::Cswap,
        name: "CSWAP",
        symbol: "CSWAP",
        description: "Fredkin (controlled-SWAP) gate",
        arity: 3,
        params: &[],
        aliases: &["FREDKIN"],
        matrix: None,
    },
];

/// Look up a gate by name or alias, ignoring case
pub fn lookup(name: &str) -> Option<&'static GateInfo> {
    let name = name.trim();
    GATES.iter().find(|info| info.matches(name))
}

/// All registered gates
pub fn all_gates() -> &'static [GateInfo] {
    &GATES
}

/// Gates acting on exactly `arity` qubits
pub fn gates_by_arity(arity: usize) -> Vec<&'static GateInfo> {
    GATES.iter().filter(|info| info.arity == arity).collect()
}

/// The starter palette shown to new players
pub fn beginner_palette() -> Vec<&'static GateInfo> {
    [GateKind::X, GateKind::H, GateKind::Cnot]
        .iter()
        .map(|kind| kind.info())
        .collect()
}

/// Gate listing grouped by arity
#[derive(Debug, Clone, Serialize)]
pub struct GatePalette {
    pub single_qubit: Vec<&'static GateInfo>,
    pub two_qubit: Vec<&'static GateInfo>,
    pub three_qubit: Vec<&'static GateInfo>,
}

/// Full gate listing grouped by arity
pub fn palette() -> GatePalette {
    GatePalette {
        single_qubit: gates_by_arity(1),
        two_qubit: gates_by_arity(2),
        three_qubit: gates_by_arity(3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_kind() {
        for (index, info) in GATES.iter().enumerate() {
            assert_eq!(info.kind as usize, index, "{} out of order", info.name);
            assert_eq!(info.kind.info().name, info.name);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("h").unwrap().kind, GateKind::H);
        assert_eq!(lookup("Cnot").unwrap().kind, GateKind::Cnot);
        assert_eq!(lookup("cx").unwrap().kind, GateKind::Cnot);
        assert_eq!(lookup("rz").unwrap().parameter_count(), 1);
        assert_eq!(lookup(" toffoli ").unwrap().kind, GateKind::Ccx);
        assert!(lookup("M").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_gates_by_arity() {
        let names = |arity| -> Vec<&str> {
            gates_by_arity(arity).iter().map(|info| info.name).collect()
        };
        assert_eq!(names(1), vec!["I", "X", "Y", "Z", "H", "S", "T", "RX", "RY", "RZ"]);
        assert_eq!(names(2), vec!["CNOT", "CZ", "SWAP"]);
        assert_eq!(names(3), vec!["CCX", "CSWAP"]);
        assert!(gates_by_arity(4).is_empty());
    }

    #[test]
    fn test_fixed_matrices_are_unitary() {
        for info in GATES.iter() {
            let Some(m) = info.matrix else { continue };
            // M M† = I
            for r in 0..2 {
                for c in 0..2 {
                    let entry = m[r][0] * m[c][0].conj() + m[r][1] * m[c][1].conj();
                    let expected = if r == c { 1.0 } else { 0.0 };
                    assert!((entry - Complex64::new(expected, 0.0)).norm() < 1e-12, "{}", info.name);
                }
            }
        }
    }

    #[test]
    fn test_palette_serializes_without_matrices() {
        let json = serde_json::to_value(beginner_palette()).unwrap();
        assert_eq!(json[0]["name"], "X");
        assert_eq!(json[2]["aliases"][0], "CX");
        assert!(json[0].get("matrix").is_none());
        assert!(json[0].get("params").is_none());
    }
}
