//! Huginn Local Statevector Simulator
//!
//! This crate provides a local quantum simulator for the Huginn service. It
//! uses statevector simulation, which provides exact results but is limited
//! to ~20-25 qubits (memory grows as 2^n).
//!
//! # Features
//!
//! - **Exact Simulation**: Full statevector representation
//! - **Measurement Sampling**: Probabilistic measurement with configurable
//!   shots, assembled through each measurement's qubit→clbit mapping
//! - **No External Dependencies**: Pure Rust implementation
//!
//! # Example
//!
//! ```ignore
//! use huginn_adapter_sim::SimulatorBackend;
//! use huginn_hal::Backend;
//! use huginn_ir::Circuit;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SimulatorBackend::new();
//!
//!     // Run a Bell state
//!     let circuit = Circuit::bell()?;
//!     let job_id = backend.submit(&circuit, 1000).await?;
//!     let result = backend.wait(&job_id).await?;
//!
//!     // Expect ~50% |00⟩ and ~50% |11⟩
//!     println!("Results: {:?}", result.counts);
//!
//!     Ok(())
//! }
//! ```

mod simulator;
mod statevector;

pub use simulator::SimulatorBackend;
