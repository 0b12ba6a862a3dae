//! Seed dataset loaded into a fresh store at startup

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{EngineResult, Event, Location, Participant, User};

/// The four collections as they appear in a seed file.
///
/// Every key is optional; records carry their own ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Seed {
    /// Read a seed dataset from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn record_count(&self) -> usize {
        self.users.len() + self.events.len() + self.locations.len() + self.participants.len()
    }
}
