//! Huginn API - HTTP service for the superdense-coding protocol.
//!
//! This crate exposes the protocol over a small JSON API:
//!
//! - `POST /api/send` — encode a 2-bit message, simulate, decode, and return
//!   the counts plus rendered artifacts in an `{ok, data | error}` envelope
//! - `GET /api/health` — liveness probe
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use huginn_api::{ApiConfig, AppState, create_router};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ApiConfig::default();
//!     let state = Arc::new(AppState::with_config(config.clone()));
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(config.bind_address).await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod dto;
pub mod error;
pub mod server;
pub mod state;

pub use dto::{HealthResponse, SendData, SendRequest, SendResponse};
pub use error::ApiError;
pub use server::create_router;
pub use state::{ApiConfig, AppState};
