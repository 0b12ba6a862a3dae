//! HTTP application state

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::engine::Engine;
use crate::executor::Executor;
use crate::store::EntityStore;

/// Shared state handed to every handler
pub struct AppState {
    /// The engine over the shared store
    pub engine: Engine,

    /// Counts successful mutations since startup
    pub sequence_counter: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            sequence_counter: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_store(store: Arc<EntityStore>) -> Self {
        Self::new(Engine::new(store))
    }

    /// Record one successful mutation
    pub fn record_mutation(&self) -> u64 {
        self.record_mutations(1)
    }

    /// Record `count` successful mutations at once, returning the new
    /// sequence ID
    pub fn record_mutations(&self, count: u64) -> u64 {
        self.sequence_counter.fetch_add(count, Ordering::SeqCst) + count
    }

    /// Get the current sequence ID
    pub fn current_sequence_id(&self) -> u64 {
        self.sequence_counter.load(Ordering::SeqCst)
    }

    pub fn executor(&self) -> Executor {
        Executor::new(self.engine.clone())
    }
}
