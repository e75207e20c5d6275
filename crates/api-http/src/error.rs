// Wire Error Mapping
//
// The boundary owns the translation from queue outcomes to status codes
// and fixed message bodies. Soft rejections (capacity) map to 202 rather
// than a client-error status: the request was understood, not applied.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use drumline_core::DomainError;

use crate::types::ErrorBody;

/// Fixed client-facing message strings.
pub mod msg {
    pub const NOT_FOUND: &str = "The resource could not be found.";
    pub const QUEUE_EMPTY: &str = "The queue is currently empty.";
    pub const QUEUE_FULL: &str =
        "The pattern could not be added to the queue, because the queue is currently full.";
    pub const PATTERN_NOT_PARSABLE: &str = "The pattern could not be correctly parsed.";
    pub const PATTERN_ALREADY_PRESENT: &str = "The pattern is already present in the queue.";
    pub const THROTTLED: &str = "Too many requests, please slow down.";
}

/// Request outcomes that terminate in a `{"message": ...}` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    NotFound,
    QueueEmpty,
    QueueFull,
    PatternAlreadyPresent,
    PatternNotParsable,
    Throttled,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound | ApiError::QueueEmpty => StatusCode::NOT_FOUND,
            ApiError::QueueFull => StatusCode::ACCEPTED,
            ApiError::PatternAlreadyPresent => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::PatternNotParsable => StatusCode::BAD_REQUEST,
            ApiError::Throttled => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::NotFound => msg::NOT_FOUND,
            ApiError::QueueEmpty => msg::QUEUE_EMPTY,
            ApiError::QueueFull => msg::QUEUE_FULL,
            ApiError::PatternAlreadyPresent => msg::PATTERN_ALREADY_PRESENT,
            ApiError::PatternNotParsable => msg::PATTERN_NOT_PARSABLE,
            ApiError::Throttled => msg::THROTTLED,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::PatternNotParsable => ApiError::PatternNotParsable,
            DomainError::PatternAlreadyPresent => ApiError::PatternAlreadyPresent,
            DomainError::QueueFull => ApiError::QueueFull,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorBody {
                message: self.message().to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_to_status_mapping() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::QueueEmpty.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::QueueFull.status(), StatusCode::ACCEPTED);
        assert_eq!(
            ApiError::PatternAlreadyPresent.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::PatternNotParsable.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Throttled.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn domain_outcomes_map_onto_wire_outcomes() {
        assert_eq!(
            ApiError::from(DomainError::PatternNotParsable),
            ApiError::PatternNotParsable
        );
        assert_eq!(
            ApiError::from(DomainError::PatternAlreadyPresent),
            ApiError::PatternAlreadyPresent
        );
        assert_eq!(ApiError::from(DomainError::QueueFull), ApiError::QueueFull);
    }

    #[test]
    fn messages_are_the_fixed_strings() {
        assert_eq!(
            ApiError::QueueFull.message(),
            "The pattern could not be added to the queue, because the queue is currently full."
        );
        assert_eq!(
            ApiError::QueueEmpty.message(),
            "The queue is currently empty."
        );
        assert_eq!(
            ApiError::NotFound.message(),
            "The resource could not be found."
        );
        assert_eq!(
            ApiError::PatternNotParsable.message(),
            "The pattern could not be correctly parsed."
        );
        assert_eq!(
            ApiError::PatternAlreadyPresent.message(),
            "The pattern is already present in the queue."
        );
    }
}
