// Submission Validation
//
// Turns an untrusted request body into a PatternCandidate, or rejects it.
// Pure function of its input; nothing here touches the queue.

use serde::Deserialize;

use crate::domain::{DomainError, PatternCandidate, PatternData};

/// Raw submission shape as received on the wire. Unknown extra fields are
/// tolerated; missing or mistyped ones are not.
#[derive(Debug, Deserialize)]
struct RawSubmission {
    name: String,
    pattern: String,
}

/// Validate a raw submission payload.
///
/// Requires a JSON object carrying a non-empty string `name` and a
/// standard-base64 string `pattern`. Every other shape collapses into the
/// single not-parsable rejection.
pub fn validate(raw: &[u8]) -> Result<PatternCandidate, DomainError> {
    let submission: RawSubmission =
        serde_json::from_slice(raw).map_err(|_| DomainError::PatternNotParsable)?;

    if submission.name.is_empty() {
        return Err(DomainError::PatternNotParsable);
    }

    let data = PatternData::from_base64(&submission.pattern)?;

    Ok(PatternCandidate {
        name: submission.name,
        data,
    })
}
