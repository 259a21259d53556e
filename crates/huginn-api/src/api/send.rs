//! Superdense-coding send endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};

use huginn_protocol::Message;

use crate::dto::{SendData, SendRequest, SendResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/send - Run the superdense-coding protocol for a 2-bit message.
///
/// The request moves through two terminal states: any validation, simulation,
/// or rendering failure produces a failure envelope with no partial results;
/// otherwise the full result payload is returned. The endpoint always answers
/// HTTP 200 — `ok` carries the logical outcome.
pub async fn send(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SendRequest>,
) -> Json<SendResponse> {
    match handle(&state, &req).await {
        Ok(data) => Json(SendResponse::success(data)),
        Err(e) => {
            tracing::warn!(kind = e.kind(), bits = %req.bits, shots = req.shots, error = %e, "send request failed");
            Json(SendResponse::failure(e.to_string()))
        }
    }
}

async fn handle(state: &AppState, req: &SendRequest) -> Result<SendData, ApiError> {
    let message: Message = req.bits.parse()?;

    let backend = state
        .backend(None)
        .await
        .ok_or_else(|| ApiError::BackendUnavailable("no backend registered".into()))?;

    let run = huginn_protocol::run(backend.as_ref(), message, req.shots).await?;

    let circuit_png_base64 = huginn_render::circuit_png_base64(&run.circuit)?;
    let histogram_png_base64 = huginn_render::histogram_png_base64(&run.counts, run.shots)?;

    Ok(SendData {
        input_bits: run.input.to_string(),
        decoded_bits: run.decoded,
        counts: run.counts,
        success_rate: run.success_rate,
        shots: run.shots,
        circuit_png_base64,
        histogram_png_base64,
    })
}
