//! Location records

use serde::{Deserialize, Serialize};

use super::{merge, supplied, EntityKind, Record, RecordId};

/// A place where events happen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: RecordId,
    pub name: String,
    pub desc: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLocation {
    pub name: String,
    pub desc: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocationPatch {
    #[serde(default, deserialize_with = "supplied")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "supplied")]
    pub desc: Option<String>,
    #[serde(default, deserialize_with = "supplied")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "supplied")]
    pub lng: Option<f64>,
}

impl Record for Location {
    const KIND: EntityKind = EntityKind::Location;
    type Input = NewLocation;
    type Patch = LocationPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_input(id: RecordId, input: NewLocation) -> Self {
        Self {
            id,
            name: input.name,
            desc: input.desc,
            lat: input.lat,
            lng: input.lng,
        }
    }

    fn apply(&mut self, patch: LocationPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.desc, patch.desc);
        merge(&mut self.lat, patch.lat);
        merge(&mut self.lng, patch.lng);
    }
}
