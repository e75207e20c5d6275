// HTTP Handlers
//
// Each handler is a thin translation: extract, call the core, map the
// outcome. No queue logic lives here, and nothing here holds a lock
// across an await point.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use drumline_core::application::pattern_queue::validate;
use drumline_core::domain::QueueEntry;

use crate::error::ApiError;
use crate::server::AppState;
use crate::types::{DetailedPattern, PatternOnly};

/// GET /health - liveness only, empty body
pub(crate) async fn health() -> StatusCode {
    StatusCode::OK
}

/// GET /patterns - `(id, name)` listing in admission order
pub(crate) async fn list_patterns(State(state): State<Arc<AppState>>) -> Json<Vec<QueueEntry>> {
    Json(state.queue.list())
}

/// POST /patterns - validate, then admit
pub(crate) async fn submit_pattern(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    if !state.limiter.try_acquire() {
        return ApiError::Throttled.into_response();
    }

    let candidate = match validate(&body) {
        Ok(candidate) => candidate,
        Err(err) => return ApiError::from(err).into_response(),
    };

    match state.queue.admit(candidate) {
        Ok(record) => (StatusCode::CREATED, Json(QueueEntry::from(&record))).into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}

/// GET /patterns/head - full view of the oldest record
pub(crate) async fn peek_head(State(state): State<Arc<AppState>>) -> Response {
    match state.queue.peek_head() {
        Some(record) => Json(DetailedPattern::from(&record)).into_response(),
        None => ApiError::QueueEmpty.into_response(),
    }
}

/// DELETE /patterns/head - remove and return the oldest record
pub(crate) async fn pop_head(State(state): State<Arc<AppState>>) -> Response {
    if !state.limiter.try_acquire() {
        return ApiError::Throttled.into_response();
    }

    match state.queue.pop_head() {
        Some(record) => Json(DetailedPattern::from(&record)).into_response(),
        None => ApiError::QueueEmpty.into_response(),
    }
}

/// GET /patterns/head/pattern - payload-only projection of the head
pub(crate) async fn peek_head_payload(State(state): State<Arc<AppState>>) -> Response {
    match state.queue.peek_head() {
        Some(record) => Json(PatternOnly::from(&record)).into_response(),
        None => ApiError::QueueEmpty.into_response(),
    }
}

/// DELETE /patterns/head/pattern - pop, returning only the payload
pub(crate) async fn pop_head_payload(State(state): State<Arc<AppState>>) -> Response {
    if !state.limiter.try_acquire() {
        return ApiError::Throttled.into_response();
    }

    match state.queue.pop_head() {
        Some(record) => Json(PatternOnly::from(&record)).into_response(),
        None => ApiError::QueueEmpty.into_response(),
    }
}

/// Fallback for every unrecognized route
pub(crate) async fn not_found() -> Response {
    ApiError::NotFound.into_response()
}
