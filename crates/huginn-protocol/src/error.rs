//! Error types for the protocol crate.

use thiserror::Error;

/// Errors that can occur while running the superdense-coding protocol.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// The message is not one of the four valid 2-bit strings.
    #[error("bits must be one of '00', '01', '10', '11' (got '{0}')")]
    InvalidMessage(String),

    /// Execution finished but produced no measurement outcomes.
    #[error("simulation produced no measurement outcomes")]
    EmptyCounts,

    /// Circuit construction failed.
    #[error(transparent)]
    Circuit(#[from] huginn_ir::IrError),

    /// Backend execution failed.
    #[error(transparent)]
    Backend(#[from] huginn_hal::HalError),
}

/// Result type for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;
