//! Engine error types

use thiserror::Error;

use super::{EntityKind, RecordId};

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors produced by the store and mutation engine.
///
/// `NotFound` is an ordinary domain outcome for update/delete on a missing
/// id; callers render it per operation and carry on.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No record with this id in the collection.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: EntityKind, id: RecordId },

    /// An insert would have produced two records with the same id.
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: EntityKind, id: RecordId },

    /// Seed file could not be read.
    #[error("failed to read seed data: {0}")]
    Io(#[from] std::io::Error),

    /// Seed file is not a valid dataset.
    #[error("failed to decode seed data: {0}")]
    Decode(#[from] serde_json::Error),
}

impl EngineError {
    pub fn not_found(kind: EntityKind, id: impl Into<RecordId>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Stable machine-readable code used by the HTTP layer
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::DuplicateId { .. } | Self::Io(_) | Self::Decode(_) => "INTERNAL_ERROR",
        }
    }
}
