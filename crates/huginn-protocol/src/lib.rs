//! Huginn Superdense-Coding Protocol
//!
//! Superdense coding transmits two classical bits through a single qubit by
//! consuming a shared entangled pair: Alice applies at most two single-qubit
//! gates to her half of a Bell pair, sends it, and Bob's disentangling
//! measurement recovers both bits.
//!
//! This crate holds the protocol core: the 2-bit [`Message`] domain, the
//! encoder/decoder circuit construction, and result extraction from
//! measurement counts. Execution is delegated to any [`huginn_hal::Backend`].
//!
//! # Example
//!
//! ```ignore
//! use huginn_protocol::{Message, run};
//! use huginn_adapter_sim::SimulatorBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SimulatorBackend::new();
//!     let outcome = run(&backend, Message::B10, 1024).await?;
//!
//!     assert_eq!(outcome.decoded, "10");
//!     assert_eq!(outcome.success_rate, 1.0);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod message;
pub mod protocol;

pub use error::{ProtocolError, ProtocolResult};
pub use message::Message;
pub use protocol::{ProtocolRun, encode_circuit, run, success_rate};
