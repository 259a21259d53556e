//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while rendering artifacts.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
    /// A drawing primitive failed.
    #[error("drawing failed: {0}")]
    Draw(String),

    /// In-memory PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

impl<E: std::error::Error + Send + Sync> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for RenderError
{
    fn from(e: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        RenderError::Draw(e.to_string())
    }
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
