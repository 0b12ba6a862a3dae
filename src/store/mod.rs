//! Entity Store - the four in-memory collections
//!
//! The store is an explicit object built at startup (empty or from a seed)
//! and shared behind an `Arc`. Each collection carries its own lock, so
//! reads of different collections never contend and a mutation only
//! excludes access to the collection it touches. Foreign keys between
//! collections are not checked here.

mod collection;
mod seed;

pub use collection::Collection;
pub use seed::Seed;

use tracing::info;

use crate::types::{EngineResult, Event, Location, Participant, Record, RecordId, User};

/// Holds one ordered collection per entity type
#[derive(Default)]
pub struct EntityStore {
    pub(crate) users: Collection<User>,
    pub(crate) events: Collection<Event>,
    pub(crate) locations: Collection<Location>,
    pub(crate) participants: Collection<Participant>,
}

impl EntityStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated from a seed dataset
    pub fn from_seed(seed: Seed) -> EngineResult<Self> {
        let count = seed.record_count();
        let store = Self {
            users: Collection::from_records(seed.users)?,
            events: Collection::from_records(seed.events)?,
            locations: Collection::from_records(seed.locations)?,
            participants: Collection::from_records(seed.participants)?,
        };
        info!(records = count, "store seeded");
        Ok(store)
    }

    pub fn users(&self) -> &Collection<User> {
        &self.users
    }

    pub fn events(&self) -> &Collection<Event> {
        &self.events
    }

    pub fn locations(&self) -> &Collection<Location> {
        &self.locations
    }

    pub fn participants(&self) -> &Collection<Participant> {
        &self.participants
    }

    /// Collection holding records of type `T`
    pub fn collection<T: Stored>(&self) -> &Collection<T> {
        T::collection(self)
    }

    pub fn list<T: Stored>(&self) -> Vec<T> {
        self.collection::<T>().list()
    }

    pub fn get_by_id<T: Stored>(&self, id: &RecordId) -> Option<T> {
        self.collection::<T>().get(id)
    }

    pub fn insert<T: Stored>(&self, record: T) -> EngineResult<()> {
        self.collection::<T>().insert(record)
    }

    pub fn replace<T: Stored>(&self, id: &RecordId, record: T) -> Option<T> {
        self.collection::<T>().replace(id, record)
    }

    pub fn remove<T: Stored>(&self, id: &RecordId) -> Option<T> {
        self.collection::<T>().remove(id)
    }
}

/// A record type with a home collection in the store
pub trait Stored: Record {
    fn collection(store: &EntityStore) -> &Collection<Self>;
}

impl Stored for User {
    fn collection(store: &EntityStore) -> &Collection<Self> {
        &store.users
    }
}

impl Stored for Event {
    fn collection(store: &EntityStore) -> &Collection<Self> {
        &store.events
    }
}

impl Stored for Location {
    fn collection(store: &EntityStore) -> &Collection<Self> {
        &store.locations
    }
}

impl Stored for Participant {
    fn collection(store: &EntityStore) -> &Collection<Self> {
        &store.participants
    }
}
