//! Shared record behaviour for the four entity types

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::RecordId;

/// The four entity collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    #[serde(alias = "users")]
    User,
    #[serde(alias = "events")]
    Event,
    #[serde(alias = "locations")]
    Location,
    #[serde(alias = "participants")]
    Participant,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Event => "event",
            EntityKind::Location => "location",
            EntityKind::Participant => "participant",
        }
    }

    /// Kind of record reached through the relationship `field` on a record
    /// of this kind, or `None` when there is no such relationship
    pub fn relationship_target(&self, field: &str) -> Option<EntityKind> {
        match (self, field) {
            (EntityKind::User, "events") => Some(EntityKind::Event),
            (EntityKind::Event, "user") | (EntityKind::Participant, "user") => {
                Some(EntityKind::User)
            }
            (EntityKind::Event, "location") => Some(EntityKind::Location),
            (EntityKind::Event, "participants") => Some(EntityKind::Participant),
            (EntityKind::Participant, "event") => Some(EntityKind::Event),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored record with an immutable id, a create input and a merge patch
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: EntityKind;

    /// All required fields except the id
    type Input: DeserializeOwned + Send;

    /// Optional fields; only supplied ones are applied
    type Patch: DeserializeOwned + Default + Send;

    fn id(&self) -> &RecordId;

    /// Assemble a record from a freshly assigned id and the caller's input
    fn from_input(id: RecordId, input: Self::Input) -> Self;

    /// Merge the supplied patch fields over this record. Never touches the id.
    fn apply(&mut self, patch: Self::Patch);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_decodes_singular_and_plural() {
        let kind: EntityKind = serde_json::from_str("\"users\"").unwrap();
        assert_eq!(kind, EntityKind::User);
        let kind: EntityKind = serde_json::from_str("\"event\"").unwrap();
        assert_eq!(kind, EntityKind::Event);
        assert!(serde_json::from_str::<EntityKind>("\"venue\"").is_err());
    }

    #[test]
    fn test_relationship_targets() {
        assert_eq!(
            EntityKind::Event.relationship_target("participants"),
            Some(EntityKind::Participant)
        );
        assert_eq!(
            EntityKind::Participant.relationship_target("user"),
            Some(EntityKind::User)
        );
        assert_eq!(EntityKind::Location.relationship_target("events"), None);
        assert_eq!(EntityKind::User.relationship_target("user"), None);
    }
}
