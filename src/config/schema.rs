//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub listener: ListenerConfig,

    /// Sidecar connection settings.
    pub dapr: DaprConfig,

    /// State store selection.
    pub state: StateConfig,

    /// Pub/sub subscription advertised to the sidecar.
    pub subscription: SubscriptionConfig,

    /// Logging and tracing settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:6000").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:6000".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Sidecar HTTP API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DaprConfig {
    /// Base URL of the sidecar HTTP API.
    pub http_endpoint: String,

    /// API token sent as `dapr-api-token`, when the sidecar requires one.
    pub api_token: Option<String>,

    /// Client timeout for state calls in seconds.
    pub timeout_secs: u64,
}

impl Default for DaprConfig {
    fn default() -> Self {
        Self {
            http_endpoint: "http://127.0.0.1:3500".to_string(),
            api_token: None,
            timeout_secs: 10,
        }
    }
}

/// Which state client backs the repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StateBackend {
    #[default]
    Dapr,
    Memory,
}

/// State store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StateConfig {
    pub backend: StateBackend,

    /// Name of the sidecar state store component.
    pub store_name: String,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            backend: StateBackend::Dapr,
            store_name: "statestore".to_string(),
        }
    }
}

/// Programmatic pub/sub subscription.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SubscriptionConfig {
    pub pubsub_name: String,
    pub topic: String,

    /// Route the sidecar delivers events to.
    pub route: String,
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        Self {
            pubsub_name: "pubsub".to_string(),
            topic: "speedingviolations".to_string(),
            route: "/collectfine".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OtelExporter {
    /// Spans are created and propagated but not exported by this process.
    #[default]
    None,
    Stdout,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error) or a full filter directive.
    pub log_level: String,

    pub log_format: LogFormat,

    /// Bridge tracing spans to OpenTelemetry so trace ids can be propagated.
    pub otel_enabled: bool,

    pub otel_exporter: OtelExporter,

    pub service_name: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            otel_enabled: true,
            otel_exporter: OtelExporter::None,
            service_name: "traffic-control".to_string(),
        }
    }
}
