//! Remote state client capability.

use std::future::Future;

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use crate::propagation::PropagationHeaders;
use crate::state::error::StateResult;

/// Per-call options passed explicitly into every client call.
///
/// Carries header overrides that the client copies onto the outbound request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: HeaderMap,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header override.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Merge trace propagation headers.
    ///
    /// Only `traceparent` / `tracestate` are written; other entries are kept.
    /// Values that are not valid header text are skipped with a warning, which
    /// leaves the outbound call untraced.
    pub fn with_propagation(mut self, propagation: &PropagationHeaders) -> Self {
        for (name, value) in propagation.iter() {
            match HeaderValue::from_str(value) {
                Ok(value) => {
                    self.headers.insert(HeaderName::from_static(name), value);
                }
                Err(e) => {
                    tracing::warn!(header = name, error = %e, "Dropping invalid trace header value");
                }
            }
        }
        self
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// Asynchronous keyed state operations against a named store.
///
/// Implementations must be safe to share across concurrent callers.
pub trait StateClient: Send + Sync {
    /// Upsert `value` under `key` in `store`.
    fn save_state(
        &self,
        store: &str,
        key: &str,
        value: Value,
        options: &RequestOptions,
    ) -> impl Future<Output = StateResult<()>> + Send;

    /// Fetch the value under `key`; `Ok(None)` when the store has none.
    fn get_state(
        &self,
        store: &str,
        key: &str,
        options: &RequestOptions,
    ) -> impl Future<Output = StateResult<Option<Value>>> + Send;
}
