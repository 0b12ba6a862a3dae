//! Participant records, joining users to events

use serde::{Deserialize, Serialize};

use super::{merge, supplied, EntityKind, Record, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: RecordId,
    pub user_id: RecordId,
    pub event_id: RecordId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewParticipant {
    pub user_id: RecordId,
    pub event_id: RecordId,
}

impl NewParticipant {
    pub fn new(user_id: RecordId, event_id: RecordId) -> Self {
        Self { user_id, event_id }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ParticipantPatch {
    #[serde(default, deserialize_with = "supplied")]
    pub user_id: Option<RecordId>,
    #[serde(default, deserialize_with = "supplied")]
    pub event_id: Option<RecordId>,
}

impl Record for Participant {
    const KIND: EntityKind = EntityKind::Participant;
    type Input = NewParticipant;
    type Patch = ParticipantPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_input(id: RecordId, input: NewParticipant) -> Self {
        Self {
            id,
            user_id: input.user_id,
            event_id: input.event_id,
        }
    }

    fn apply(&mut self, patch: ParticipantPatch) {
        merge(&mut self.user_id, patch.user_id);
        merge(&mut self.event_id, patch.event_id);
    }
}
