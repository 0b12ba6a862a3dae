//! Batch executor
//!
//! Runs a list of root operations against the engine, one after another,
//! and reports a result per operation. Each operation may select
//! relationships to resolve on its result, to any depth. A failing operation
//! (missing id, malformed input, unknown relationship) yields an error in its
//! own slot and never prevents its siblings from resolving.

mod include;
mod operation;
mod render;

pub use include::Includes;
pub use operation::{FieldError, FieldResult, Operation};
pub use render::{render_all, render_opt, Render};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::engine::Engine;
use crate::types::{EngineError, EntityKind, Event, Location, Participant, RecordId, User};

/// Why a single operation failed
#[derive(Debug, Error)]
pub enum ExecError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("invalid {kind} input: {source}")]
    InvalidInput {
        kind: EntityKind,
        source: serde_json::Error,
    },

    #[error("{kind} has no relationship '{field}'")]
    UnknownRelationship { kind: EntityKind, field: String },

    #[error("failed to render result: {0}")]
    Render(#[from] serde_json::Error),
}

impl ExecError {
    pub fn code(&self) -> &'static str {
        match self {
            ExecError::Engine(e) => e.code(),
            ExecError::InvalidOperation(_)
            | ExecError::InvalidInput { .. }
            | ExecError::UnknownRelationship { .. } => "BAD_REQUEST",
            ExecError::Render(_) => "INTERNAL_ERROR",
        }
    }
}

enum Action {
    List,
    Get(RecordId),
    Create(Option<Value>),
    Update(RecordId, Option<Value>),
    Delete(RecordId),
}

/// Executes operations against a shared engine
#[derive(Clone)]
pub struct Executor {
    engine: Engine,
}

impl Executor {
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    /// Parse and execute one raw operation
    pub fn execute_value(&self, raw: Value) -> FieldResult {
        match parse(raw) {
            Ok(op) => self.execute(op),
            Err(e) => to_result(Err(e)),
        }
    }

    /// Execute operations in order, one result per operation
    pub fn execute_all(&self, raw: Vec<Value>) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for raw in raw {
            let result = match parse(raw) {
                Ok(op) => {
                    let mutation = op.is_mutation();
                    let result = self.execute(op);
                    if mutation && result.is_ok() {
                        outcome.mutations += 1;
                    }
                    result
                }
                Err(e) => to_result(Err(e)),
            };
            outcome.results.push(result);
        }
        outcome
    }

    pub fn execute(&self, op: Operation) -> FieldResult {
        to_result(self.run(op))
    }

    fn run(&self, op: Operation) -> Result<Value, ExecError> {
        let kind = op.entity();
        // Checked before anything runs so a bad selection never mutates
        let include = Includes::parse(kind, op.include())?;

        let action = match op {
            Operation::List { .. } => Action::List,
            Operation::Get { id, .. } => Action::Get(id),
            Operation::Create { input, .. } => Action::Create(input),
            Operation::Update { id, input, .. } => Action::Update(id, input),
            Operation::Delete { id, .. } => Action::Delete(id),
        };

        match kind {
            EntityKind::User => self.run_typed::<User>(action, &include),
            EntityKind::Event => self.run_typed::<Event>(action, &include),
            EntityKind::Location => self.run_typed::<Location>(action, &include),
            EntityKind::Participant => self.run_typed::<Participant>(action, &include),
        }
    }

    fn run_typed<T: Render>(&self, action: Action, include: &Includes) -> Result<Value, ExecError> {
        let engine = &self.engine;
        let value = match action {
            Action::List => render_all(&engine.list::<T>(), engine, include)?,
            Action::Get(id) => render_opt(engine.get::<T>(&id), engine, include)?,
            Action::Create(input) => {
                let input: T::Input = decode::<T, _>(input.unwrap_or(Value::Null))?;
                engine.create::<T>(input)?.render(engine, include)?
            }
            Action::Update(id, input) => {
                let patch: T::Patch =
                    decode::<T, _>(input.unwrap_or_else(|| Value::Object(Map::new())))?;
                engine.update::<T>(&id, patch)?.render(engine, include)?
            }
            Action::Delete(id) => engine.delete::<T>(&id)?.render(engine, include)?,
        };
        Ok(value)
    }
}

/// Results of a batch in request order, with the count of mutations that
/// succeeded
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub results: Vec<FieldResult>,
    pub mutations: u64,
}

fn parse(raw: Value) -> Result<Operation, ExecError> {
    serde_json::from_value(raw).map_err(|e| ExecError::InvalidOperation(e.to_string()))
}

fn decode<T: Render, I: DeserializeOwned>(value: Value) -> Result<I, ExecError> {
    serde_json::from_value(value).map_err(|source| ExecError::InvalidInput {
        kind: T::KIND,
        source,
    })
}

fn to_result(outcome: Result<Value, ExecError>) -> FieldResult {
    match outcome {
        Ok(data) => FieldResult::ok(data),
        Err(e) => {
            debug!(error = %e, "operation failed");
            FieldResult::failed(e.to_string(), e.code())
        }
    }
}
