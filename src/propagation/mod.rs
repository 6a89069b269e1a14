//! Distributed trace-context propagation.
//!
//! # Data Flow
//! ```text
//! Outbound (state store calls):
//!     Tracer (ambient span)
//!         → context.rs (TraceContext snapshot)
//!         → encoder.rs (traceparent / tracestate)
//!         → headers.rs (PropagationHeaders)
//!         → merged into state::RequestOptions before dispatch
//!
//! Inbound (HTTP requests from the sidecar):
//!     traceparent / baggage headers
//!         → otel.rs (extract_parent_context)
//!         → parent of the request span
//! ```
//!
//! # Design Decisions
//! - The tracer is an explicit dependency, never a hidden global lookup
//! - Encoding is a pure function with no failure path
//! - Header merging only touches `traceparent` and `tracestate`

pub mod context;
pub mod encoder;
pub mod headers;
pub mod otel;

pub use context::{TraceContext, Tracer};
pub use encoder::TraceContextEncoder;
pub use headers::{PropagationHeaders, TRACEPARENT, TRACESTATE};
pub use otel::{extract_parent_context, OtelTracer};
