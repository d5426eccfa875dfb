//quantum_tests.rs

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use qarcade::prelude::*;

    fn sample_circuit() -> Circuit {
        let mut circuit = Circuit::new(3).unwrap();
        circuit
            .h(0)
            .rx(1, PI / 7.0)
            .ry(2, 0.1 + 0.2)
            .rz(0, -1.234_567_890_123_456_7)
            .cnot(0, 1)
            .cz(1, 2)
            .swap(0, 2)
            .ccx(0, 1, 2)
            .cswap(2, 0, 1)
            .s(1)
            .t(2)
            .y(0);
        circuit
    }

    #[test]
    fn test_json_round_trip_is_bit_identical() {
        let circuit = sample_circuit();
        let json = circuit.to_json().unwrap();
        let restored = Circuit::from_json(&json).unwrap();

        assert_eq!(restored, circuit);
        assert_eq!(restored.simulate().unwrap(), circuit.simulate().unwrap());
    }

    #[test]
    fn test_from_json_accepts_submitted_circuit() {
        let json = r#"{
            "numQubits": 2,
            "operations": [
                { "gate": "h", "qubits": [0] },
                { "gate": "CX", "qubits": [0, 1] },
                { "gate": "rz", "qubits": [1], "params": [3.141592653589793] }
            ]
        }"#;

        let circuit = Circuit::from_json(json).unwrap();
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.len(), 3);
        assert_eq!(circuit.operations()[2].params, Some(vec![PI]));

        let result = circuit.simulate().unwrap();
        assert!((result.probability("00") - 0.5).abs() < 1e-10);
        assert!((result.probability("11") - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_from_json_rejects_unknown_fields_and_types() {
        assert!(Circuit::from_json(r#"{"numQubits": 1, "operations": [], "extra": 1}"#).is_err());
        assert!(Circuit::from_json(r#"{"numQubits": 1, "operations": {}}"#).is_err());
        assert!(Circuit::from_json(r#"{"numQubits": 1.5, "operations": []}"#).is_err());
        assert!(Circuit::from_json("not json").is_err());
        assert!(Circuit::from_json(r#"{"numQubits": 25, "operations": []}"#).is_err());
    }

    #[test]
    fn test_deserialized_circuit_validates_at_simulate() {
        // Structurally valid JSON with a semantically invalid operation
        let json = r#"{"numQubits": 2, "operations": [{"gate": "X", "qubits": [2]}]}"#;
        let circuit = Circuit::from_json(json).unwrap();
        assert!(matches!(
            circuit.simulate(),
            Err(QuantumError::QubitOutOfRange { index: 2, num_qubits: 2 })
        ));
    }

    #[test]
    fn test_index_one_past_end_fails() {
        for num_qubits in 1..=4 {
            let mut circuit = Circuit::new(num_qubits).unwrap();
            circuit.x(num_qubits);
            assert!(circuit.simulate().is_err());

            let mut circuit = Circuit::new(num_qubits).unwrap();
            circuit.x(num_qubits - 1);
            assert!(circuit.simulate().is_ok());
        }
    }

    #[test]
    fn test_reset_returns_to_ground_state() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.x(0).x(1);
        assert_eq!(circuit.simulate().unwrap().probability("11"), 1.0);

        circuit.reset();
        let result = circuit.simulate().unwrap();
        assert_eq!(result.probability("00"), 1.0);
        assert_eq!(result.probabilities.len(), 1);
    }

    #[test]
    fn test_from_operations() {
        let operations = vec![
            GateOperation::new("X", &[0], None),
            GateOperation::new("RY", &[1], Some(vec![PI])),
        ];
        let circuit = Circuit::from_operations(2, operations.clone()).unwrap();
        assert_eq!(circuit.operations(), operations.as_slice());
        assert!((circuit.simulate().unwrap().probability("11") - 1.0).abs() < 1e-12);

        assert!(Circuit::from_operations(0, operations).is_err());
    }

    #[test]
    fn test_prelude_lookup() {
        assert_eq!(lookup("cswap").unwrap().arity, 3);
        assert_eq!(gates_by_arity(2).len(), 3);
    }
}
