//! SDK Error Types

use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK Error
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Connection error: {0}")]
    Connection(String),

    /// Head operation against an empty queue.
    #[error("The queue is empty")]
    QueueEmpty,

    /// Submission matched content that is already queued.
    #[error("{0}")]
    AlreadyPresent(String),

    /// Submission failed validation on the server.
    #[error("{0}")]
    InvalidSubmission(String),

    /// Any other non-success response.
    #[error("Service error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            SdkError::Connection(e.to_string())
        } else {
            SdkError::Transport(e.to_string())
        }
    }
}
