//! Operation requests and per-operation results

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{EntityKind, RecordId};

/// One root field of a batch request
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    List {
        entity: EntityKind,
        #[serde(default)]
        include: Vec<String>,
    },
    Get {
        entity: EntityKind,
        id: RecordId,
        #[serde(default)]
        include: Vec<String>,
    },
    Create {
        entity: EntityKind,
        #[serde(default)]
        input: Option<Value>,
        #[serde(default)]
        include: Vec<String>,
    },
    Update {
        entity: EntityKind,
        id: RecordId,
        #[serde(default)]
        input: Option<Value>,
        #[serde(default)]
        include: Vec<String>,
    },
    Delete {
        entity: EntityKind,
        id: RecordId,
        #[serde(default)]
        include: Vec<String>,
    },
}

impl Operation {
    pub fn entity(&self) -> EntityKind {
        match self {
            Operation::List { entity, .. }
            | Operation::Get { entity, .. }
            | Operation::Create { entity, .. }
            | Operation::Update { entity, .. }
            | Operation::Delete { entity, .. } => *entity,
        }
    }

    pub fn include(&self) -> &[String] {
        match self {
            Operation::List { include, .. }
            | Operation::Get { include, .. }
            | Operation::Create { include, .. }
            | Operation::Update { include, .. }
            | Operation::Delete { include, .. } => include,
        }
    }

    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Operation::Create { .. } | Operation::Update { .. } | Operation::Delete { .. }
        )
    }
}

/// Error attached to a single operation's result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub message: String,
    pub code: String,
}

/// Outcome of one operation. `data` is `null` when the operation failed or
/// when a lookup found nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldResult {
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FieldError>,
}

impl FieldResult {
    pub fn ok(data: Value) -> Self {
        Self { data, error: None }
    }

    pub fn failed(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            data: Value::Null,
            error: Some(FieldError {
                message: message.into(),
                code: code.into(),
            }),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
