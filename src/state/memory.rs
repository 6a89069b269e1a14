//! Process-local state store.

use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;

use crate::state::client::{RequestOptions, StateClient};
use crate::state::error::StateResult;

/// A thread-safe in-memory state store, keyed by `(store, key)`.
///
/// Clones share the same map. Request options are accepted and ignored.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStateClient {
    inner: Arc<DashMap<(String, String), Value>>,
}

impl InMemoryStateClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries across all stores.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Drop an entry, as a store eviction would.
    pub fn evict(&self, store: &str, key: &str) -> Option<Value> {
        self.inner
            .remove(&(store.to_string(), key.to_string()))
            .map(|(_, value)| value)
    }
}

impl StateClient for InMemoryStateClient {
    async fn save_state(
        &self,
        store: &str,
        key: &str,
        value: Value,
        _options: &RequestOptions,
    ) -> StateResult<()> {
        self.inner.insert((store.to_string(), key.to_string()), value);
        Ok(())
    }

    async fn get_state(
        &self,
        store: &str,
        key: &str,
        _options: &RequestOptions,
    ) -> StateResult<Option<Value>> {
        Ok(self
            .inner
            .get(&(store.to_string(), key.to_string()))
            .map(|r| r.value().clone()))
    }
}
