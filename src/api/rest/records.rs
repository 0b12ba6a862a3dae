//! Collection endpoints, generic over the record type

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use super::{engine_error, missing, rejected, ApiResponse};
use crate::api::state::AppState;
use crate::store::Stored;
use crate::types::RecordId;

/// GET /api/<collection> - All records in insertion order
pub async fn list_records<T: Stored>(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let records = state.engine.list::<T>();
    let total = records.len();
    let sequence_id = state.current_sequence_id();
    Json(ApiResponse::with_total(records, sequence_id, total))
}

/// GET /api/<collection>/:id - One record
pub async fn get_record<T: Stored>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let id = RecordId::from(id);
    match state.engine.get::<T>(&id) {
        Some(record) => {
            let sequence_id = state.current_sequence_id();
            (StatusCode::OK, Json(ApiResponse::new(record, sequence_id))).into_response()
        }
        None => missing(T::KIND, &id),
    }
}

/// POST /api/<collection> - Create a record under a fresh id
pub async fn create_record<T: Stored>(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<T::Input>, JsonRejection>,
) -> Response {
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejected(rejection),
    };

    match state.engine.create::<T>(input) {
        Ok(record) => {
            let sequence_id = state.record_mutation();
            (StatusCode::CREATED, Json(ApiResponse::new(record, sequence_id))).into_response()
        }
        Err(e) => engine_error(e),
    }
}

/// PATCH /api/<collection>/:id - Apply only the supplied fields
pub async fn update_record<T: Stored>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<T::Patch>, JsonRejection>,
) -> Response {
    let Json(patch) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejected(rejection),
    };

    match state.engine.update::<T>(&RecordId::from(id), patch) {
        Ok(record) => {
            let sequence_id = state.record_mutation();
            (StatusCode::OK, Json(ApiResponse::new(record, sequence_id))).into_response()
        }
        Err(e) => engine_error(e),
    }
}

/// DELETE /api/<collection>/:id - Remove a record, returning its last value
pub async fn delete_record<T: Stored>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match state.engine.delete::<T>(&RecordId::from(id)) {
        Ok(record) => {
            let sequence_id = state.record_mutation();
            (StatusCode::OK, Json(ApiResponse::new(record, sequence_id))).into_response()
        }
        Err(e) => engine_error(e),
    }
}
