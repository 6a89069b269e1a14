//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → trace_context.rs (request span parented on inbound traceparent)
//!     → traffic.rs (entry/exit cameras → vehicle state repository)
//!     → fines.rs (pub/sub subscription + violation delivery)
//! ```

pub mod fines;
pub mod server;
pub mod trace_context;
pub mod traffic;

pub use server::{AppState, HttpServer};
