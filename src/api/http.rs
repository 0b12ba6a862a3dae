//! HTTP server setup with Axum

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use super::rest::{batch, records, relations};
use super::state::AppState;
use crate::store::Stored;
use crate::types::{Event, Location, Participant, User};

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new().route("/health", get(health_check));
    let router = collection_routes::<User>(router, "/api/users");
    let router = collection_routes::<Event>(router, "/api/events");
    let router = collection_routes::<Location>(router, "/api/locations");
    let router = collection_routes::<Participant>(router, "/api/participants");

    router
        // Relationship endpoints
        .route("/api/users/:id/events", get(relations::user_events))
        .route("/api/events/:id/user", get(relations::event_user))
        .route("/api/events/:id/location", get(relations::event_location))
        .route(
            "/api/events/:id/participants",
            get(relations::event_participants),
        )
        .route("/api/participants/:id/user", get(relations::participant_user))
        .route("/api/participants/:id/event", get(relations::participant_event))
        // Batch executor
        .route("/api/batch", post(batch::run_batch))
        .layer(cors)
        .with_state(state)
}

/// List/create on `base`, get/patch/delete on `base/:id`
fn collection_routes<T: Stored>(
    router: Router<Arc<AppState>>,
    base: &str,
) -> Router<Arc<AppState>> {
    router
        .route(
            base,
            get(records::list_records::<T>).post(records::create_record::<T>),
        )
        .route(
            &format!("{}/:id", base),
            get(records::get_record::<T>)
                .patch(records::update_record::<T>)
                .delete(records::delete_record::<T>),
        )
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Bind `addr` and serve until Ctrl+C
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("shutting down");
}
