//! State store error definitions.

use thiserror::Error;

/// Errors that can occur during state store operations.
#[derive(Debug, Error)]
pub enum StateError {
    /// Connection failure, timeout or protocol error from the HTTP client.
    #[error("State store transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The sidecar answered with a non-success status.
    #[error("State store returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Record could not be converted to or from JSON.
    #[error("State serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Sidecar endpoint cannot be used to build request URLs.
    #[error("Invalid state store endpoint: {0}")]
    InvalidEndpoint(String),

    /// Records must be addressed by a non-empty key.
    #[error("State key must not be empty")]
    EmptyKey,
}

impl StateError {
    /// Whether the failure happened in the transport rather than locally.
    pub fn is_transport(&self) -> bool {
        matches!(self, StateError::Transport(_) | StateError::Status { .. })
    }
}

/// Result type for state store operations.
pub type StateResult<T> = Result<T, StateError>;
