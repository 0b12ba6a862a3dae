//! Event Graph Server - Binary Entry Point

use std::sync::Arc;

use event_graph::api::{self, AppState};
use event_graph::config::ServerConfig;
use event_graph::store::{EntityStore, Seed};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = ServerConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let store = match &config.seed_file {
        Some(path) => {
            info!(path = %path.display(), "loading seed data");
            EntityStore::from_seed(Seed::from_file(path)?)?
        }
        None => EntityStore::new(),
    };

    let state = Arc::new(AppState::with_store(Arc::new(store)));

    info!(version = event_graph::VERSION, "starting {}", event_graph::NAME);
    api::serve(config.listen_addr, state).await?;

    Ok(())
}
