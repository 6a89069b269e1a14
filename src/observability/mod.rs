//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events and spans (structured fields)
//!
//! logging.rs wires the consumers:
//!     → fmt layer (text or JSON on stdout)
//!     → OpenTelemetry bridge (trace ids for propagation, optional export)
//! ```
//!
//! # Design Decisions
//! - `RUST_LOG` overrides the configured level
//! - The W3C trace context + baggage propagator is installed globally so
//!   inbound requests can be parented on the caller's trace

pub mod logging;

pub use logging::{init_telemetry, TelemetryError, TelemetryGuard};
