//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, sidecar env overrides)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → passed by reference to subsystems at startup
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Sidecar-injected environment (DAPR_*) wins over the file
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    AppConfig, DaprConfig, ListenerConfig, LogFormat, ObservabilityConfig, OtelExporter,
    StateBackend, StateConfig, SubscriptionConfig,
};
pub use validation::{validate_config, ValidationError};
