//! Error taxonomy for the API.
//!
//! The send endpoint preserves its external contract of always answering
//! HTTP 200 with an `ok` flag, so these kinds never map to status codes.
//! They exist to keep failures distinguishable in logs before being
//! flattened into the envelope's `error` string.

use huginn_hal::HalError;
use huginn_protocol::ProtocolError;
use huginn_render::RenderError;

/// API error taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// `bits` is not one of the four allowed 2-character strings.
    #[error("{0}")]
    InvalidMessage(String),

    /// The requested shot count is out of range.
    #[error("{0}")]
    InvalidShots(String),

    /// No usable backend is registered.
    #[error("Backend not available: {0}")]
    BackendUnavailable(String),

    /// Circuit construction or execution failed.
    #[error("{0}")]
    Simulation(String),

    /// Artifact rendering failed.
    #[error("{0}")]
    Render(String),
}

impl ApiError {
    /// Stable kind tag for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidMessage(_) => "invalid_message",
            ApiError::InvalidShots(_) => "invalid_shots",
            ApiError::BackendUnavailable(_) => "backend_unavailable",
            ApiError::Simulation(_) => "simulation_error",
            ApiError::Render(_) => "render_error",
        }
    }
}

impl From<ProtocolError> for ApiError {
    fn from(e: ProtocolError) -> Self {
        match &e {
            ProtocolError::InvalidMessage(_) => ApiError::InvalidMessage(e.to_string()),
            ProtocolError::Backend(HalError::InvalidShots(_)) => {
                ApiError::InvalidShots(e.to_string())
            }
            ProtocolError::Backend(HalError::BackendUnavailable(_)) => {
                ApiError::BackendUnavailable(e.to_string())
            }
            _ => ApiError::Simulation(e.to_string()),
        }
    }
}

impl From<RenderError> for ApiError {
    fn from(e: RenderError) -> Self {
        ApiError::Render(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_message_kind() {
        let e: ApiError = "22".parse::<huginn_protocol::Message>().unwrap_err().into();
        assert_eq!(e.kind(), "invalid_message");
        assert!(e.to_string().contains("bits must be one of"));
    }

    #[test]
    fn test_invalid_shots_kind() {
        let e: ApiError =
            ProtocolError::Backend(HalError::InvalidShots("shots must be positive".into())).into();
        assert_eq!(e.kind(), "invalid_shots");
    }

    #[test]
    fn test_simulation_kind() {
        let e: ApiError = ProtocolError::EmptyCounts.into();
        assert_eq!(e.kind(), "simulation_error");
    }
}
