//! Huginn Hardware Abstraction Layer
//!
//! This crate provides a unified interface for executing quantum circuits,
//! letting the protocol and API layers treat the simulator as a black box.
//!
//! # Overview
//!
//! The HAL abstracts away backend-specific details, providing:
//! - A common [`Backend`] trait for job submission and management
//! - [`Capabilities`] to describe backend features and constraints
//! - Unified result handling via [`ExecutionResult`] and [`Counts`]
//!
//! # Example: Running a Circuit
//!
//! ```ignore
//! use huginn_hal::Backend;
//! use huginn_adapter_sim::SimulatorBackend;
//! use huginn_ir::Circuit;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Create a Bell state circuit
//!     let circuit = Circuit::bell()?;
//!
//!     // Initialize the simulator backend
//!     let backend = SimulatorBackend::new();
//!
//!     // Submit the job and wait for results
//!     let job_id = backend.submit(&circuit, 1000).await?;
//!     let result = backend.wait(&job_id).await?;
//!
//!     // Analyze the most frequent outcome
//!     if let Some((bitstring, count)) = result.counts.most_frequent() {
//!         println!("Most frequent: {} ({} times)", bitstring, count);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod job;
pub mod result;

pub use backend::{Backend, BackendConfig};
pub use capability::Capabilities;
pub use error::{HalError, HalResult};
pub use job::{Job, JobId, JobStatus};
pub use result::{Counts, ExecutionResult};
