//! Dapr sidecar state client over the HTTP state API.
//!
//! # Endpoints
//! - `POST {endpoint}/v1.0/state/{store}` with `[{"key": .., "value": ..}]`
//! - `GET  {endpoint}/v1.0/state/{store}/{key}` (`204` when absent)

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::DaprConfig;
use crate::state::client::{RequestOptions, StateClient};
use crate::state::error::{StateError, StateResult};

/// Header carrying the sidecar API token.
pub const DAPR_API_TOKEN_HEADER: &str = "dapr-api-token";

const API_VERSION: &str = "v1.0";

#[derive(Serialize)]
struct StateItem<'a> {
    key: &'a str,
    value: Value,
}

/// HTTP client for the sidecar's state building block.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct DaprStateClient {
    http: Client,
    endpoint: Url,
    api_token: Option<String>,
}

impl DaprStateClient {
    /// Create a client from sidecar configuration.
    ///
    /// The configured timeout is the only deadline applied to state calls.
    pub fn new(config: &DaprConfig) -> StateResult<Self> {
        let endpoint: Url = config.http_endpoint.parse().map_err(|e| {
            StateError::InvalidEndpoint(format!("'{}': {}", config.http_endpoint, e))
        })?;
        if endpoint.cannot_be_a_base() {
            return Err(StateError::InvalidEndpoint(config.http_endpoint.clone()));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        tracing::info!(
            endpoint = %endpoint,
            timeout_secs = config.timeout_secs,
            "Dapr state client initialized"
        );

        Ok(Self {
            http,
            endpoint,
            api_token: config.api_token.clone(),
        })
    }

    fn state_url(&self, segments: &[&str]) -> StateResult<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| StateError::InvalidEndpoint(self.endpoint.to_string()))?
            .pop_if_empty()
            .push(API_VERSION)
            .push("state")
            .extend(segments);
        Ok(url)
    }

    fn request(&self, builder: reqwest::RequestBuilder, options: &RequestOptions) -> reqwest::RequestBuilder {
        let builder = builder.headers(options.headers().clone());
        match &self.api_token {
            Some(token) => builder.header(DAPR_API_TOKEN_HEADER, token),
            None => builder,
        }
    }
}

impl StateClient for DaprStateClient {
    async fn save_state(
        &self,
        store: &str,
        key: &str,
        value: Value,
        options: &RequestOptions,
    ) -> StateResult<()> {
        let url = self.state_url(&[store])?;
        let body = [StateItem { key, value }];

        let response = self
            .request(self.http.post(url), options)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(store = %store, key = %key, status = %status, "State save rejected");
            return Err(StateError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    async fn get_state(
        &self,
        store: &str,
        key: &str,
        options: &RequestOptions,
    ) -> StateResult<Option<Value>> {
        let url = self.state_url(&[store, key])?;

        let response = self.request(self.http.get(url), options).send().await?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(store = %store, key = %key, status = %status, "State get rejected");
            return Err(StateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&bytes)?))
    }
}

impl std::fmt::Debug for DaprStateClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DaprStateClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
