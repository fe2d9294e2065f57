//! Error Types
//!
//! Every failure the console can run into. None of them is fatal: the
//! coordinator turns each one into a notice and keeps the view usable.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Common result type for cliente operations
pub type ClienteResult<T> = Result<T, ClienteError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClienteError {
    /// Request never got an HTTP answer (network down, CORS, DNS...)
    #[error("transport error: {0}")]
    Transport(String),

    /// Server answered with a status the operation does not accept
    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    /// Body did not have the expected shape
    #[error("invalid response body: {0}")]
    Decode(String),

    /// Client-side precondition failed before any request was sent
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// Update attempted without a record selected for edit
    #[error("no cliente selected")]
    NoSelection,
}

impl From<reqwest::Error> for ClienteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClienteError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ClienteError::Status { status: status.as_u16() }
        } else {
            ClienteError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClienteError {
    fn from(err: serde_json::Error) -> Self {
        ClienteError::Decode(err.to_string())
    }
}
