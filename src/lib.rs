//! Traffic-control service library.
//!
//! Keyed vehicle state is kept in the sidecar's state store; every state call
//! carries W3C trace headers derived from the ambient trace context.

pub mod config;
pub mod http;
pub mod observability;
pub mod propagation;
pub mod state;
pub mod vehicle;
pub mod violation;

pub use config::AppConfig;
pub use http::HttpServer;
pub use propagation::{TraceContextEncoder, Tracer};
pub use state::{KeyedStateRepository, TracingStateRepository};
