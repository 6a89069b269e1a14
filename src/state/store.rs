//! Configured state backend.

use serde_json::Value;

use crate::config::{AppConfig, StateBackend};
use crate::state::client::{RequestOptions, StateClient};
use crate::state::dapr::DaprStateClient;
use crate::state::error::StateResult;
use crate::state::memory::InMemoryStateClient;

/// State client selected by `state.backend`.
#[derive(Debug, Clone)]
pub enum StateStore {
    Dapr(DaprStateClient),
    InMemory(InMemoryStateClient),
}

impl StateStore {
    pub fn from_config(config: &AppConfig) -> StateResult<Self> {
        match config.state.backend {
            StateBackend::Dapr => Ok(StateStore::Dapr(DaprStateClient::new(&config.dapr)?)),
            StateBackend::Memory => {
                tracing::warn!("Using in-memory state store; state is lost on restart");
                Ok(StateStore::InMemory(InMemoryStateClient::new()))
            }
        }
    }
}

impl StateClient for StateStore {
    async fn save_state(
        &self,
        store: &str,
        key: &str,
        value: Value,
        options: &RequestOptions,
    ) -> StateResult<()> {
        match self {
            StateStore::Dapr(client) => client.save_state(store, key, value, options).await,
            StateStore::InMemory(client) => client.save_state(store, key, value, options).await,
        }
    }

    async fn get_state(
        &self,
        store: &str,
        key: &str,
        options: &RequestOptions,
    ) -> StateResult<Option<Value>> {
        match self {
            StateStore::Dapr(client) => client.get_state(store, key, options).await,
            StateStore::InMemory(client) => client.get_state(store, key, options).await,
        }
    }
}
