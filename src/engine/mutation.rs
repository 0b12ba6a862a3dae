//! Create, patch and delete single records

use tracing::{debug, error, info, warn};

use crate::store::{EntityStore, Stored};
use crate::types::{EngineError, EngineResult, Record, RecordId};

/// Create a record under a freshly generated id and append it
pub fn create<T: Stored>(store: &EntityStore, input: T::Input) -> EngineResult<T> {
    let record = T::from_input(RecordId::generate(), input);

    if let Err(e) = store.insert(record.clone()) {
        error!(kind = %T::KIND, id = %record.id(), error = %e, "create failed");
        return Err(e);
    }

    info!(kind = %T::KIND, id = %record.id(), "created");
    Ok(record)
}

/// Merge `patch` over the record with `id` (holds the collection write lock
/// for the whole read-merge-write)
pub fn update<T: Stored>(store: &EntityStore, id: &RecordId, patch: T::Patch) -> EngineResult<T> {
    match store.collection::<T>().modify(id, |record| record.apply(patch)) {
        Some(updated) => {
            debug!(kind = %T::KIND, %id, "updated");
            Ok(updated)
        }
        None => {
            warn!(kind = %T::KIND, %id, "update of missing record");
            Err(EngineError::not_found(T::KIND, id.clone()))
        }
    }
}

/// Remove the record with `id`, returning its last value
pub fn delete<T: Stored>(store: &EntityStore, id: &RecordId) -> EngineResult<T> {
    match store.remove::<T>(id) {
        Some(removed) => {
            info!(kind = %T::KIND, %id, "deleted");
            Ok(removed)
        }
        None => {
            warn!(kind = %T::KIND, %id, "delete of missing record");
            Err(EngineError::not_found(T::KIND, id.clone()))
        }
    }
}
