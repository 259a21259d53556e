//! Integration tests for the Huginn API.

use std::sync::Arc;

use axum_test::TestServer;
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde_json::{Value, json};

use huginn_adapter_sim::SimulatorBackend;
use huginn_api::{ApiConfig, AppState, create_router};

// ============================================================================
// Test helpers
// ============================================================================

fn test_state() -> Arc<AppState> {
    Arc::new(AppState::with_config(ApiConfig::default()))
}

async fn test_state_with_simulator() -> Arc<AppState> {
    let state = test_state();
    state.register_backend(Arc::new(SimulatorBackend::new())).await;
    state
}

fn test_server(state: Arc<AppState>) -> TestServer {
    let router = create_router(state);
    TestServer::new(router).expect("test server")
}

fn assert_is_png_base64(value: &Value) {
    let encoded = value.as_str().expect("base64 string");
    assert!(!encoded.is_empty());
    let decoded = BASE64.decode(encoded).expect("valid base64");
    assert_eq!(&decoded[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
}

// ============================================================================
// Health endpoint
// ============================================================================

#[tokio::test]
async fn test_health_returns_ok() {
    let server = test_server(test_state());
    let response = server.get("/api/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].as_str().is_some());
}

// ============================================================================
// Send endpoint — success paths
// ============================================================================

#[tokio::test]
async fn test_send_decodes_every_message() {
    let server = test_server(test_state_with_simulator().await);

    for bits in ["00", "01", "10", "11"] {
        let response = server
            .post("/api/send")
            .json(&json!({ "bits": bits, "shots": 1024 }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["ok"], true, "bits = {bits}");

        let data = &body["data"];
        assert_eq!(data["input_bits"], bits);
        assert_eq!(data["decoded_bits"], bits);
        assert_eq!(data["success_rate"], 1.0);
        assert_eq!(data["shots"], 1024);

        // Noiseless simulation: the input is the only outcome.
        let counts = data["counts"].as_object().unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[bits], 1024);
    }
}

#[tokio::test]
async fn test_send_counts_sum_to_shots() {
    let server = test_server(test_state_with_simulator().await);

    let response = server
        .post("/api/send")
        .json(&json!({ "bits": "10", "shots": 777 }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let counts = body["data"]["counts"].as_object().unwrap();
    let total: u64 = counts.values().map(|v| v.as_u64().unwrap()).sum();
    assert_eq!(total, 777);
}

#[tokio::test]
async fn test_send_returns_png_artifacts() {
    let server = test_server(test_state_with_simulator().await);

    let response = server
        .post("/api/send")
        .json(&json!({ "bits": "11", "shots": 64 }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_is_png_base64(&body["data"]["circuit_png_base64"]);
    assert_is_png_base64(&body["data"]["histogram_png_base64"]);
}

#[tokio::test]
async fn test_send_default_shots() {
    let server = test_server(test_state_with_simulator().await);

    let response = server.post("/api/send").json(&json!({ "bits": "00" })).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["ok"], true);
    assert_eq!(body["data"]["shots"], 1024);
}

#[tokio::test]
async fn test_send_is_idempotent() {
    let server = test_server(test_state_with_simulator().await);

    let mut decoded = vec![];
    for _ in 0..2 {
        let response = server
            .post("/api/send")
            .json(&json!({ "bits": "01", "shots": 512 }))
            .await;
        let body: Value = response.json();
        decoded.push((
            body["data"]["decoded_bits"].clone(),
            body["data"]["success_rate"].clone(),
        ));
    }
    assert_eq!(decoded[0], decoded[1]);
}

// ============================================================================
// Send endpoint — failure envelopes (still HTTP 200)
// ============================================================================

#[tokio::test]
async fn test_send_invalid_bits_fails_logically() {
    let server = test_server(test_state_with_simulator().await);

    let response = server
        .post("/api/send")
        .json(&json!({ "bits": "22", "shots": 1024 }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["ok"], false);
    assert!(!body["error"].as_str().unwrap().is_empty());
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_send_rejects_malformed_bits_variants() {
    let server = test_server(test_state_with_simulator().await);

    for bits in ["0", "000", "ab", "", "2"] {
        let response = server.post("/api/send").json(&json!({ "bits": bits })).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["ok"], false, "bits = {bits:?}");
        assert!(body["error"].as_str().unwrap().contains("bits must be one of"));
    }
}

#[tokio::test]
async fn test_send_zero_shots_fails_logically() {
    let server = test_server(test_state_with_simulator().await);

    let response = server
        .post("/api/send")
        .json(&json!({ "bits": "00", "shots": 0 }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["ok"], false);
    assert!(body["error"].as_str().unwrap().contains("shots"));
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_send_excessive_shots_fails_logically() {
    let server = test_server(test_state_with_simulator().await);

    let response = server
        .post("/api/send")
        .json(&json!({ "bits": "00", "shots": 1_000_000 }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["ok"], false);
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_send_without_backend_fails_logically() {
    // No backend registered at all.
    let server = test_server(test_state());

    let response = server
        .post("/api/send")
        .json(&json!({ "bits": "00", "shots": 16 }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["ok"], false);
    assert!(body["error"].as_str().unwrap().contains("backend"));
}

#[tokio::test]
async fn test_send_missing_bits_is_client_error() {
    let server = test_server(test_state_with_simulator().await);

    // Missing required field "bits" → axum deserialization rejection.
    let response = server.post("/api/send").json(&json!({})).await;
    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_send_negative_shots_is_client_error() {
    let server = test_server(test_state_with_simulator().await);

    // shots is unsigned on the wire; negatives never reach the handler.
    let response = server
        .post("/api/send")
        .json(&json!({ "bits": "00", "shots": -5 }))
        .await;
    assert!(response.status_code().is_client_error());
}
