//! Data types for the Event Graph server
//!
//! This module contains the four entity records, their create inputs and
//! merge patches, the opaque identifier type and the engine error type.

mod error;
mod event;
mod id;
mod location;
mod participant;
mod record;
mod user;

pub use error::{EngineError, EngineResult};
pub use event::{Event, EventPatch, NewEvent};
pub use id::RecordId;
pub use location::{Location, LocationPatch, NewLocation};
pub use participant::{NewParticipant, Participant, ParticipantPatch};
pub use record::{EntityKind, Record};
pub use user::{NewUser, User, UserPatch};

use serde::{Deserialize, Deserializer};

/// Deserialize a patch field that was present in the input.
///
/// Paired with `#[serde(default)]`: an omitted field stays `None`, while an
/// explicit `null` is rejected because every entity field is required.
pub(crate) fn supplied<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Overwrite `slot` only when the patch supplied a value
pub(crate) fn merge<T>(slot: &mut T, patch: Option<T>) {
    if let Some(value) = patch {
        *slot = value;
    }
}
