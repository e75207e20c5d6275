// Wire Types
//
// Response bodies with stable key sets. The decoded payload re-encodes
// to base64 at this edge only; the core never sees wire shapes.

use drumline_core::domain::PatternRecord;
use serde::{Deserialize, Serialize};

/// Full record view returned by the head routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedPattern {
    pub id: String,
    pub name: String,
    pub pattern: String,
}

impl From<&PatternRecord> for DetailedPattern {
    fn from(record: &PatternRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            pattern: record.data.to_base64(),
        }
    }
}

/// Payload-only projection returned by the `/pattern` routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternOnly {
    pub pattern: String,
}

impl From<&PatternRecord> for PatternOnly {
    fn from(record: &PatternRecord) -> Self {
        Self {
            pattern: record.data.to_base64(),
        }
    }
}

/// Error body: a single fixed message string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
