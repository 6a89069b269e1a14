//! Keyed state repository with trace-context propagation.
//!
//! Every call snapshots the ambient trace context, encodes it into W3C
//! headers and hands them to the client as explicit request options, so the
//! headers are attached before the request leaves the process.

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::propagation::{TraceContextEncoder, Tracer};
use crate::state::client::{RequestOptions, StateClient};
use crate::state::error::{StateError, StateResult};

/// A record addressed by a unique string key.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Save and load records of type `T` by key.
pub trait KeyedStateRepository<T>: Send + Sync {
    /// Store `record` under its key and hand it back once the store has it.
    fn save(&self, record: T) -> impl Future<Output = StateResult<T>> + Send;

    /// Load the record under `key`; `Ok(None)` when never saved or evicted.
    fn get(&self, key: &str) -> impl Future<Output = StateResult<Option<T>>> + Send;
}

/// Repository over a [`StateClient`] that propagates the caller's trace.
pub struct TracingStateRepository<T, C, Tr: ?Sized> {
    client: Arc<C>,
    tracer: Arc<Tr>,
    store_name: String,
    _record: PhantomData<fn() -> T>,
}

impl<T, C, Tr> TracingStateRepository<T, C, Tr>
where
    C: StateClient,
    Tr: Tracer + ?Sized,
{
    pub fn new(client: Arc<C>, tracer: Arc<Tr>, store_name: impl Into<String>) -> Self {
        Self {
            client,
            tracer,
            store_name: store_name.into(),
            _record: PhantomData,
        }
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    /// Request options carrying the current trace headers, if any.
    fn request_options(&self) -> RequestOptions {
        match self.tracer.current_trace_context() {
            Some(context) => {
                let headers = TraceContextEncoder::encode(self.tracer.as_ref(), &context);
                RequestOptions::new().with_propagation(&headers)
            }
            None => RequestOptions::new(),
        }
    }
}

impl<T, C, Tr> KeyedStateRepository<T> for TracingStateRepository<T, C, Tr>
where
    T: Keyed + Serialize + DeserializeOwned + Send,
    C: StateClient,
    Tr: Tracer + ?Sized,
{
    async fn save(&self, record: T) -> StateResult<T> {
        let key = record.key().to_owned();
        if key.is_empty() {
            return Err(StateError::EmptyKey);
        }
        let value = serde_json::to_value(&record)?;
        let options = self.request_options();

        tracing::debug!(
            store = %self.store_name,
            key = %key,
            traced = !options.headers().is_empty(),
            "Saving state"
        );

        self.client
            .save_state(&self.store_name, &key, value, &options)
            .await?;
        Ok(record)
    }

    async fn get(&self, key: &str) -> StateResult<Option<T>> {
        if key.is_empty() {
            return Err(StateError::EmptyKey);
        }
        let options = self.request_options();

        tracing::debug!(
            store = %self.store_name,
            key = %key,
            traced = !options.headers().is_empty(),
            "Loading state"
        );

        match self.client.get_state(&self.store_name, key, &options).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }
}

impl<T, C, Tr: ?Sized> Clone for TracingStateRepository<T, C, Tr> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            tracer: self.tracer.clone(),
            store_name: self.store_name.clone(),
            _record: PhantomData,
        }
    }
}

impl<T, C, Tr: ?Sized> std::fmt::Debug for TracingStateRepository<T, C, Tr> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TracingStateRepository")
            .field("store_name", &self.store_name)
            .finish()
    }
}
