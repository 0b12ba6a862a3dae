//! Engine - query facade, mutation engine and relationship resolver
//!
//! The engine wraps a shared [`EntityStore`] and exposes every root and
//! nested operation an executor needs. Methods delegate to the submodules.

mod mutation;
mod query;
mod relations;

use std::sync::Arc;

use crate::store::{EntityStore, Stored};
use crate::types::{EngineResult, Event, Location, Participant, RecordId, User};

/// Cheaply cloneable handle to the engine over a shared store
#[derive(Clone, Default)]
pub struct Engine {
    store: Arc<EntityStore>,
}

impl Engine {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }

    /// Engine over a fresh, empty store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(EntityStore::new()))
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }
}

// Query facade (from query.rs)
impl Engine {
    pub fn list<T: Stored>(&self) -> Vec<T> {
        query::list_all(&self.store)
    }

    pub fn get<T: Stored>(&self, id: &RecordId) -> Option<T> {
        query::get_one(&self.store, id)
    }
}

// Mutation engine (from mutation.rs)
impl Engine {
    pub fn create<T: Stored>(&self, input: T::Input) -> EngineResult<T> {
        mutation::create(&self.store, input)
    }

    pub fn update<T: Stored>(&self, id: &RecordId, patch: T::Patch) -> EngineResult<T> {
        mutation::update(&self.store, id, patch)
    }

    pub fn delete<T: Stored>(&self, id: &RecordId) -> EngineResult<T> {
        mutation::delete(&self.store, id)
    }
}

// Relationship resolver (from relations.rs)
impl Engine {
    pub fn user_events(&self, user: &User) -> Vec<Event> {
        relations::user_events(&self.store, user)
    }

    pub fn event_user(&self, event: &Event) -> Option<User> {
        relations::event_user(&self.store, event)
    }

    pub fn event_location(&self, event: &Event) -> Option<Location> {
        relations::event_location(&self.store, event)
    }

    pub fn event_participants(&self, event: &Event) -> Vec<Participant> {
        relations::event_participants(&self.store, event)
    }

    pub fn participant_user(&self, participant: &Participant) -> Option<User> {
        relations::participant_user(&self.store, participant)
    }

    pub fn participant_event(&self, participant: &Participant) -> Option<Event> {
        relations::participant_event(&self.store, participant)
    }
}

pub use relations::{resolve_many, resolve_one};
