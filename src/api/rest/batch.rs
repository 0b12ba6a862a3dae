//! Batch endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::rejected;
use crate::api::state::AppState;
use crate::executor::FieldResult;

/// Body of POST /api/batch
#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    /// Raw operations; each one is parsed on its own so a malformed entry
    /// only fails its own slot
    pub operations: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub results: Vec<FieldResult>,
    pub sequence_id: u64,
}

/// POST /api/batch - Run operations in order, one result per operation
pub async fn run_batch(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejected(rejection),
    };

    debug!(operations = request.operations.len(), "batch");

    let outcome = state.executor().execute_all(request.operations);
    let sequence_id = state.record_mutations(outcome.mutations);

    Json(BatchResponse {
        results: outcome.results,
        sequence_id,
    })
    .into_response()
}
