//! SDK Request/Response Types
//!
//! Mirrors the wire bodies of the REST API.

use serde::{Deserialize, Serialize};

/// A pattern submission: name plus base64-encoded payload.
#[derive(Debug, Clone, Serialize)]
pub struct NewPattern {
    pub name: String,
    pub pattern: String,
}

/// `(id, name)` summary returned by listings and successful submissions.
#[derive(Debug, Clone, Deserialize)]
pub struct QueuedPattern {
    pub id: String,
    pub name: String,
}

/// Full record view returned by the head routes.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailedPattern {
    pub id: String,
    pub name: String,
    pub pattern: String,
}

/// Payload-only projection.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PatternOnly {
    pub pattern: String,
}

/// Error body shape shared by every non-success response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

/// Result of a submission.
///
/// Queue-full is a soft rejection — the service understood the request
/// and declined it — so it is an outcome, not an error.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Queued(QueuedPattern),
    QueueFull,
}

impl SubmitOutcome {
    pub fn is_queued(&self) -> bool {
        matches!(self, SubmitOutcome::Queued(_))
    }
}
