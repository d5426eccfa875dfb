use std::collections::BTreeMap;

use qarcade::quantum::Circuit;
use qarcade::simulators::{StatevectorSimulator, DEFAULT_TOLERANCE};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn dist(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries.iter().map(|&(k, v)| (k.to_string(), v)).collect()
}

fn bell_circuit() -> Circuit {
    let mut circuit = Circuit::new(2).unwrap();
    circuit.h(0).cnot(0, 1);
    circuit
}

#[test]
fn test_correct_solution_scores_full_marks() {
    let simulator = StatevectorSimulator::default();
    let target = dist(&[("00", 0.5), ("11", 0.5)]);

    let report = simulator.verify(&bell_circuit(), &target, DEFAULT_TOLERANCE).unwrap();
    assert!(report.matches);
    assert_eq!(report.score, 100.0);
    assert_eq!(report.target_probabilities, target);
    assert_eq!(report.actual_probabilities.len(), 2);
}

#[test]
fn test_wrong_solution_scores_partially() {
    let simulator = StatevectorSimulator::default();
    let target = dist(&[("00", 0.5), ("11", 0.5)]);

    // Only the Hadamard: {"00": 0.5, "10": 0.5}
    let mut circuit = Circuit::new(2).unwrap();
    circuit.h(0);

    let report = simulator.verify(&circuit, &target, DEFAULT_TOLERANCE).unwrap();
    // Union {00, 10, 11}: diffs 0 + 0.5 + 0.5, average 1/3
    assert!(!report.matches);
    assert_eq!(report.score, 66.67);
}

#[test]
fn test_tolerance_controls_match() {
    let simulator = StatevectorSimulator::default();
    let target = dist(&[("0", 0.6), ("1", 0.4)]);

    let mut circuit = Circuit::new(1).unwrap();
    circuit.h(0);

    assert!(simulator.verify(&circuit, &target, 0.2).unwrap().matches);
    assert!(!simulator.verify(&circuit, &target, 0.05).unwrap().matches);
}

#[test]
fn test_invalid_submission_is_rejected_not_raised() {
    init_tracing();
    let simulator = StatevectorSimulator::default();
    let target = dist(&[("1", 1.0)]);

    let mut circuit = Circuit::new(1).unwrap();
    circuit.add_gate("teleport", &[0], None);

    assert!(simulator.verify(&circuit, &target, DEFAULT_TOLERANCE).is_err());

    let report = simulator.verify_or_reject(&circuit, &target, DEFAULT_TOLERANCE);
    assert!(!report.matches);
    assert_eq!(report.score, 0.0);
    assert!(report.actual_probabilities.is_empty());
}

#[test]
fn test_submitted_json_end_to_end() {
    init_tracing();
    let submission = r#"{"numQubits": 1, "operations": [{"gate": "x", "qubits": [0]}]}"#;
    let circuit = Circuit::from_json(submission).unwrap();

    let simulator = StatevectorSimulator::default();
    let report = simulator.verify_or_reject(&circuit, &dist(&[("1", 1.0)]), DEFAULT_TOLERANCE);
    assert!(report.matches);
    assert_eq!(report.score, 100.0);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["matches"], true);
    assert_eq!(json["score"], 100.0);
}
