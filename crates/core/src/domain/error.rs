// Domain Error Types

use thiserror::Error;

/// Expected admission/validation outcomes.
///
/// These are ordinary result values reported to the caller, never faults;
/// none of them leaves the queue mutated. The boundary layer owns the
/// mapping to wire status codes and message bodies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Submission payload failed validation: missing field, wrong type,
    /// or a pattern that is not decodable base64.
    #[error("pattern submission could not be parsed")]
    PatternNotParsable,

    /// A record with the same pattern content is already queued.
    #[error("pattern content is already present in the queue")]
    PatternAlreadyPresent,

    /// The queue already holds its configured maximum number of records.
    /// A soft rejection: the request was well-formed, capacity declined it.
    #[error("queue is at capacity")]
    QueueFull,
}

pub type Result<T> = std::result::Result<T, DomainError>;
