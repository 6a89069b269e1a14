//! Configuration loading from disk and the sidecar environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load, override and validate configuration.
///
/// Without a path the built-in defaults are used.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => parse_config(&fs::read_to_string(path)?)?,
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut config, |name| std::env::var(name).ok());

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Deserialize a TOML document; missing sections fall back to defaults.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Apply the variables the sidecar injects into the application process.
///
/// `DAPR_HTTP_ENDPOINT` takes precedence over `DAPR_HTTP_PORT`.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(endpoint) = lookup("DAPR_HTTP_ENDPOINT").filter(|v| !v.is_empty()) {
        config.dapr.http_endpoint = endpoint;
    } else if let Some(port) = lookup("DAPR_HTTP_PORT") {
        match port.parse::<u16>() {
            Ok(port) => config.dapr.http_endpoint = format!("http://127.0.0.1:{}", port),
            Err(_) => tracing::warn!(value = %port, "Ignoring invalid DAPR_HTTP_PORT"),
        }
    }

    if let Some(token) = lookup("DAPR_API_TOKEN").filter(|v| !v.is_empty()) {
        config.dapr.api_token = Some(token);
    }
}
