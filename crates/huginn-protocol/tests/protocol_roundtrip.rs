//! End-to-end protocol tests against the local statevector simulator.

use huginn_adapter_sim::SimulatorBackend;
use huginn_protocol::{Message, ProtocolError, run};

// ============================================================================
// Noiseless roundtrips
// ============================================================================

#[tokio::test]
async fn test_all_messages_decode_to_themselves() {
    let backend = SimulatorBackend::new();

    for message in Message::ALL {
        let outcome = run(&backend, message, 1024).await.unwrap();

        assert_eq!(outcome.input, message);
        assert_eq!(outcome.decoded, message.as_str());
        assert_eq!(outcome.success_rate, 1.0);
        assert_eq!(outcome.shots, 1024);
    }
}

#[tokio::test]
async fn test_counts_concentrate_on_input() {
    let backend = SimulatorBackend::new();

    for message in Message::ALL {
        let outcome = run(&backend, message, 1024).await.unwrap();

        // Noiseless simulation: the input message is the only outcome.
        assert_eq!(outcome.counts.len(), 1);
        assert_eq!(outcome.counts.get(message.as_str()), 1024);
    }
}

#[tokio::test]
async fn test_counts_sum_to_shots() {
    let backend = SimulatorBackend::new();

    for shots in [1, 7, 1024] {
        let outcome = run(&backend, Message::B11, shots).await.unwrap();
        assert_eq!(outcome.counts.total(), u64::from(shots));
    }
}

#[tokio::test]
async fn test_single_shot_decodes() {
    let backend = SimulatorBackend::new();

    let outcome = run(&backend, Message::B01, 1).await.unwrap();
    assert_eq!(outcome.decoded, "01");
    assert_eq!(outcome.success_rate, 1.0);
}

// ============================================================================
// Idempotence
// ============================================================================

#[tokio::test]
async fn test_repeated_runs_agree() {
    let backend = SimulatorBackend::new();

    let first = run(&backend, Message::B10, 512).await.unwrap();
    let second = run(&backend, Message::B10, 512).await.unwrap();

    // The simulator is noiseless, so repeated runs agree exactly.
    assert_eq!(first.decoded, second.decoded);
    assert_eq!(first.success_rate, second.success_rate);
    assert_eq!(first.counts, second.counts);
}

// ============================================================================
// Failure paths
// ============================================================================

#[tokio::test]
async fn test_zero_shots_is_rejected() {
    let backend = SimulatorBackend::new();

    let result = run(&backend, Message::B00, 0).await;
    assert!(matches!(result, Err(ProtocolError::Backend(_))));
}

#[tokio::test]
async fn test_run_returns_executed_circuit() {
    let backend = SimulatorBackend::new();

    let outcome = run(&backend, Message::B11, 16).await.unwrap();
    assert_eq!(outcome.circuit.num_qubits(), 2);
    // h, cx, x, z, cx, h, measure, measure
    assert_eq!(outcome.circuit.num_ops(), 8);
}
