//! Keyed state over the sidecar runtime.
//!
//! # Data Flow
//! ```text
//! caller
//!     → repository.rs (key derivation, trace header injection)
//!     → client.rs (RequestOptions + StateClient capability)
//!     → store.rs (configured backend)
//!         → dapr.rs   (HTTP state API of the sidecar)
//!         → memory.rs (process-local map)
//! ```
//!
//! # Design Decisions
//! - Header injection happens before the request is built, never after
//! - Calls are awaited to completion; nothing is spawned
//! - Transport failures propagate unchanged; no retries at this layer
//! - "No value for key" is `Ok(None)`, distinct from any failure

pub mod client;
pub mod dapr;
pub mod error;
pub mod memory;
pub mod repository;
pub mod store;

pub use client::{RequestOptions, StateClient};
pub use dapr::DaprStateClient;
pub use error::{StateError, StateResult};
pub use memory::InMemoryStateClient;
pub use repository::{Keyed, KeyedStateRepository, TracingStateRepository};
pub use store::StateStore;
