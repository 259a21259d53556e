//! Huginn Artifact Rendering
//!
//! Converts a circuit and its measurement counts into self-contained raster
//! artifacts for API clients: a circuit diagram and an outcome histogram,
//! each PNG-encoded in memory and returned as a base64 string ready to embed
//! in a JSON payload.
//!
//! Gate placement reuses the circuit's dependency layering
//! ([`huginn_ir::Circuit::layers`]), so the diagram columns match the
//! reported depth.

pub mod diagram;
pub mod error;
pub mod histogram;
mod png;

pub use diagram::circuit_png_base64;
pub use error::{RenderError, RenderResult};
pub use histogram::histogram_png_base64;
