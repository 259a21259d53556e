//! Data Transfer Objects for the API.
//!
//! These types bridge internal Huginn structures to JSON-serializable API
//! requests and responses.

use serde::{Deserialize, Serialize};

use huginn_hal::Counts;

// ============================================================================
// Send endpoint DTOs
// ============================================================================

/// Request to send a 2-bit message through the protocol.
#[derive(Debug, Deserialize)]
pub struct SendRequest {
    /// The message: one of "00", "01", "10", "11".
    pub bits: String,
    /// Number of shots.
    #[serde(default = "default_shots")]
    pub shots: u32,
}

fn default_shots() -> u32 {
    1024
}

/// Successful protocol result payload.
#[derive(Debug, Serialize)]
pub struct SendData {
    /// The message that was encoded.
    pub input_bits: String,
    /// The decoded bitstring (most frequent outcome).
    pub decoded_bits: String,
    /// Measurement counts per outcome bitstring.
    pub counts: Counts,
    /// Fraction of shots that reproduced the input exactly.
    pub success_rate: f64,
    /// Number of shots executed.
    pub shots: u32,
    /// Circuit diagram, PNG as base64.
    pub circuit_png_base64: String,
    /// Outcome histogram, PNG as base64.
    pub histogram_png_base64: String,
}

/// Response envelope for the send endpoint.
///
/// The endpoint always answers HTTP 200; `ok` carries the logical outcome,
/// and exactly one of `data`/`error` is populated.
#[derive(Debug, Serialize)]
pub struct SendResponse {
    /// Whether the protocol run succeeded.
    pub ok: bool,
    /// Result payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<SendData>,
    /// Human-readable error description, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendResponse {
    /// Build a success envelope.
    pub fn success(data: SendData) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// Build a failure envelope.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

// ============================================================================
// Health check response
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status (always "ok" if responding).
    pub status: String,
    /// Service version.
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
