// Pattern Domain Model

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Pattern ID (UUID v4)
pub type PatternId = String;

/// Decoded drum-pattern payload.
///
/// Constructed only by a successful base64 decode; the bytes themselves
/// are opaque to the engine. Equality is content equality, which lets the
/// type double as the duplicate-index key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternData(Vec<u8>);

impl PatternData {
    /// Decode a standard-alphabet base64 string with canonical padding.
    pub fn from_base64(encoded: &str) -> Result<Self, DomainError> {
        BASE64
            .decode(encoded)
            .map(Self)
            .map_err(|_| DomainError::PatternNotParsable)
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Re-encode for response bodies. Accepted payloads round-trip to the
    /// exact string they were submitted as.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A validated submission that has not been admitted yet.
#[derive(Debug, Clone)]
pub struct PatternCandidate {
    pub name: String,
    pub data: PatternData,
}

/// A queued drum pattern.
///
/// Created only by a successful admission, immutable afterwards, and
/// destroyed when popped from the head. There is no persistence; records
/// die with the process.
#[derive(Debug, Clone)]
pub struct PatternRecord {
    pub id: PatternId,
    pub name: String,
    pub data: PatternData,
    /// Admission timestamp in epoch ms (injected, not system time).
    /// Internal only; never serialized into a response body.
    pub submitted_at: i64,
}

impl PatternRecord {
    pub fn new(id: impl Into<PatternId>, submitted_at: i64, candidate: PatternCandidate) -> Self {
        Self {
            id: id.into(),
            name: candidate.name,
            data: candidate.data,
            submitted_at,
        }
    }
}

/// Lightweight `(id, name)` view used by queue listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub id: PatternId,
    pub name: String,
}

impl From<&PatternRecord> for QueueEntry {
    fn from(record: &PatternRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_round_trips_exactly() {
        let encoded = "fwAAAH8AAAB/AAAAfwAAAA==";
        let data = PatternData::from_base64(encoded).expect("valid base64");
        assert_eq!(data.to_base64(), encoded);
    }

    #[test]
    fn rejects_non_base64_input() {
        assert_eq!(
            PatternData::from_base64("definitely not base64!"),
            Err(DomainError::PatternNotParsable)
        );
    }

    #[test]
    fn rejects_missing_padding() {
        // "QQ" would need "QQ==" to be canonical
        assert_eq!(
            PatternData::from_base64("QQ"),
            Err(DomainError::PatternNotParsable)
        );
    }

    #[test]
    fn empty_payload_is_valid() {
        let data = PatternData::from_base64("").expect("empty base64 decodes");
        assert!(data.is_empty());
        assert_eq!(data.to_base64(), "");
    }

    #[test]
    fn content_equality_ignores_names() {
        let a = PatternData::from_base64("QUJD").expect("valid");
        let b = PatternData::from_bytes(*b"ABC");
        assert_eq!(a, b);
    }
}
