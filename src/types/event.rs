//! Event records

use serde::{Deserialize, Serialize};

use super::{merge, supplied, EntityKind, Record, RecordId};

/// A scheduled event, owned by a user and held at a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: RecordId,
    pub title: String,
    pub desc: String,
    pub date: String,
    pub from: String,
    pub to: String,
    /// Foreign key into the location collection
    pub location_id: RecordId,
    /// Foreign key into the user collection
    pub user_id: RecordId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub desc: String,
    pub date: String,
    pub from: String,
    pub to: String,
    pub location_id: RecordId,
    pub user_id: RecordId,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EventPatch {
    #[serde(default, deserialize_with = "supplied")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "supplied")]
    pub desc: Option<String>,
    #[serde(default, deserialize_with = "supplied")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "supplied")]
    pub from: Option<String>,
    #[serde(default, deserialize_with = "supplied")]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "supplied")]
    pub location_id: Option<RecordId>,
    #[serde(default, deserialize_with = "supplied")]
    pub user_id: Option<RecordId>,
}

impl Record for Event {
    const KIND: EntityKind = EntityKind::Event;
    type Input = NewEvent;
    type Patch = EventPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_input(id: RecordId, input: NewEvent) -> Self {
        Self {
            id,
            title: input.title,
            desc: input.desc,
            date: input.date,
            from: input.from,
            to: input.to,
            location_id: input.location_id,
            user_id: input.user_id,
        }
    }

    fn apply(&mut self, patch: EventPatch) {
        merge(&mut self.title, patch.title);
        merge(&mut self.desc, patch.desc);
        merge(&mut self.date, patch.date);
        merge(&mut self.from, patch.from);
        merge(&mut self.to, patch.to);
        merge(&mut self.location_id, patch.location_id);
        merge(&mut self.user_id, patch.user_id);
    }
}
