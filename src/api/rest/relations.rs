//! Relationship endpoints
//!
//! The parent must exist (404 otherwise). A to-one relationship whose
//! target is gone answers `data: null`; a to-many answers `[]`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::{missing, ApiResponse};
use crate::api::state::AppState;
use crate::engine::Engine;
use crate::store::Stored;
use crate::types::{Event, Participant, RecordId, User};

/// Look up the parent and resolve one of its relationships
fn resolve<P, R, F>(state: &AppState, id: String, relationship: F) -> Response
where
    P: Stored,
    R: Serialize,
    F: FnOnce(&Engine, &P) -> R,
{
    let id = RecordId::from(id);
    match state.engine.get::<P>(&id) {
        Some(parent) => {
            let data = relationship(&state.engine, &parent);
            let sequence_id = state.current_sequence_id();
            (StatusCode::OK, Json(ApiResponse::new(data, sequence_id))).into_response()
        }
        None => missing(P::KIND, &id),
    }
}

/// GET /api/users/:id/events
pub async fn user_events(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    resolve(&state, id, |engine, user: &User| engine.user_events(user))
}

/// GET /api/events/:id/user
pub async fn event_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    resolve(&state, id, |engine, event: &Event| engine.event_user(event))
}

/// GET /api/events/:id/location
pub async fn event_location(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    resolve(&state, id, |engine, event: &Event| engine.event_location(event))
}

/// GET /api/events/:id/participants
pub async fn event_participants(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    resolve(&state, id, |engine, event: &Event| {
        engine.event_participants(event)
    })
}

/// GET /api/participants/:id/user
pub async fn participant_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    resolve(&state, id, |engine, p: &Participant| engine.participant_user(p))
}

/// GET /api/participants/:id/event
pub async fn participant_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    resolve(&state, id, |engine, p: &Participant| engine.participant_event(p))
}
