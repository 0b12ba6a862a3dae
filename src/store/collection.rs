//! A single ordered collection of records

use parking_lot::RwLock;

use crate::types::{EngineError, EngineResult, Record, RecordId};

/// Ordered, lock-protected collection of one record type.
///
/// Records keep their insertion order. Readers share the lock; every write
/// holds it exclusively for the whole operation.
pub struct Collection<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Build a collection from existing records, rejecting duplicate ids
    pub fn from_records(records: Vec<T>) -> EngineResult<Self> {
        let collection = Self::new();
        for record in records {
            collection.insert(record)?;
        }
        Ok(collection)
    }

    /// All current records in insertion order
    pub fn list(&self) -> Vec<T> {
        self.records.read().clone()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<T> {
        self.records.read().iter().find(|r| r.id() == id).cloned()
    }

    /// Records matching `predicate`, in collection order
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records
            .read()
            .iter()
            .filter(|&r| predicate(r))
            .cloned()
            .collect()
    }

    /// Append a record. Its id must not already be present.
    pub fn insert(&self, record: T) -> EngineResult<()> {
        let mut records = self.records.write();
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(EngineError::DuplicateId {
                kind: T::KIND,
                id: record.id().clone(),
            });
        }
        records.push(record);
        Ok(())
    }

    /// Overwrite the record with `id` in place, returning the previous value
    pub fn replace(&self, id: &RecordId, record: T) -> Option<T> {
        let mut records = self.records.write();
        let slot = records.iter_mut().find(|r| r.id() == id)?;
        Some(std::mem::replace(slot, record))
    }

    /// Mutate the record with `id` in place under a single write lock,
    /// returning the modified value
    pub fn modify<F>(&self, id: &RecordId, f: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut records = self.records.write();
        let slot = records.iter_mut().find(|r| r.id() == id)?;
        f(slot);
        Some(slot.clone())
    }

    /// Remove the first record with `id`, returning it
    pub fn remove(&self, id: &RecordId) -> Option<T> {
        let mut records = self.records.write();
        let index = records.iter().position(|r| r.id() == id)?;
        Some(records.remove(index))
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}
