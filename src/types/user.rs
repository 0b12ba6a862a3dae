//! User records

use serde::{Deserialize, Serialize};

use super::{merge, supplied, EntityKind, Record, RecordId};

/// A user. Owns events through `Event::user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub email: String,
}

/// Fields required to create a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

/// Merge patch for a user
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserPatch {
    #[serde(default, deserialize_with = "supplied")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "supplied")]
    pub email: Option<String>,
}

impl Record for User {
    const KIND: EntityKind = EntityKind::User;
    type Input = NewUser;
    type Patch = UserPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_input(id: RecordId, input: NewUser) -> Self {
        Self {
            id,
            username: input.username,
            email: input.email,
        }
    }

    fn apply(&mut self, patch: UserPatch) {
        merge(&mut self.username, patch.username);
        merge(&mut self.email, patch.email);
    }
}
