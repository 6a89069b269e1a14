//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::{AppConfig, StateBackend};

/// A single semantic configuration problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("dapr.http_endpoint '{0}' is not an http(s) URL")]
    Endpoint(String),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("subscription.route '{0}' must start with '/'")]
    Route(String),

    #[error("subscription.route '{0}' collides with a built-in route")]
    RouteConflict(String),
}

/// Routes served regardless of configuration.
const RESERVED_ROUTES: &[&str] = &["/entrycam", "/exitcam", "/dapr/subscribe"];

/// Check a deserialized configuration for semantic errors.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("listener.request_timeout_secs"));
    }

    if config.state.backend == StateBackend::Dapr {
        let endpoint_ok = Url::parse(&config.dapr.http_endpoint)
            .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
            .unwrap_or(false);
        if !endpoint_ok {
            errors.push(ValidationError::Endpoint(config.dapr.http_endpoint.clone()));
        }
        if config.dapr.timeout_secs == 0 {
            errors.push(ValidationError::ZeroTimeout("dapr.timeout_secs"));
        }
    }
    if config.state.store_name.trim().is_empty() {
        errors.push(ValidationError::Empty("state.store_name"));
    }

    if config.subscription.pubsub_name.trim().is_empty() {
        errors.push(ValidationError::Empty("subscription.pubsub_name"));
    }
    if config.subscription.topic.trim().is_empty() {
        errors.push(ValidationError::Empty("subscription.topic"));
    }
    if !config.subscription.route.starts_with('/') {
        errors.push(ValidationError::Route(config.subscription.route.clone()));
    } else if RESERVED_ROUTES.contains(&config.subscription.route.as_str()) {
        errors.push(ValidationError::RouteConflict(config.subscription.route.clone()));
    }

    if config.observability.service_name.trim().is_empty() {
        errors.push(ValidationError::Empty("observability.service_name"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
