//! REST API module for HTTP endpoints
//!
//! For each of `users`, `events`, `locations` and `participants`:
//! - `GET /api/<collection>` - List records
//! - `POST /api/<collection>` - Create a record
//! - `GET /api/<collection>/:id` - Get one record
//! - `PATCH /api/<collection>/:id` - Merge-patch a record
//! - `DELETE /api/<collection>/:id` - Delete a record
//!
//! Relationship endpoints live in [`relations`], the batch executor in
//! [`batch`].

pub mod batch;
pub mod records;
pub mod relations;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::types::{EngineError, EntityKind, RecordId};

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Number of successful mutations so far, for cache invalidation
    pub sequence_id: u64,
    /// Total count (for list responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, sequence_id: u64) -> Self {
        Self {
            data,
            sequence_id,
            total: None,
        }
    }

    pub fn with_total(data: T, sequence_id: u64, total: usize) -> Self {
        Self {
            data,
            sequence_id,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

/// 404 for a record that does not exist
pub(crate) fn missing(kind: EntityKind, id: &RecordId) -> Response {
    let error = ApiError::not_found(format!("{} '{}' not found", kind, id));
    (StatusCode::NOT_FOUND, Json(error)).into_response()
}

/// Map an engine error to its HTTP response
pub(crate) fn engine_error(err: EngineError) -> Response {
    match err {
        EngineError::NotFound { kind, id } => missing(kind, &id),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::internal(other.to_string())),
        )
            .into_response(),
    }
}

/// Map a request body that failed to decode
pub(crate) fn rejected(rejection: JsonRejection) -> Response {
    debug!(status = %rejection.status(), "request body rejected: {}", rejection.body_text());
    (
        rejection.status(),
        Json(ApiError::bad_request(rejection.body_text())),
    )
        .into_response()
}
