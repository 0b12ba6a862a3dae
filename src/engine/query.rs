//! Root-level reads

use tracing::debug;

use crate::store::{EntityStore, Stored};
use crate::types::RecordId;

/// Every record of `T`, in insertion order
pub fn list_all<T: Stored>(store: &EntityStore) -> Vec<T> {
    let records = store.list::<T>();
    debug!(kind = %T::KIND, count = records.len(), "list");
    records
}

/// The record of `T` with `id`, or `None` when there is none
pub fn get_one<T: Stored>(store: &EntityStore, id: &RecordId) -> Option<T> {
    let record = store.get_by_id::<T>(id);
    debug!(kind = %T::KIND, %id, found = record.is_some(), "get");
    record
}
