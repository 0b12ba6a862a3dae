//! JSON rendering of records and their relationship fields

use serde_json::Value;

use super::Includes;
use crate::engine::Engine;
use crate::store::Stored;
use crate::types::{Event, Location, Participant, User};

/// A stored record whose relationship fields can be resolved by name
pub trait Render: Stored {
    /// Resolve the named relationship and render what it reaches with the
    /// `nested` selection. Names are checked by `Includes::parse` before
    /// this is called.
    fn relationship(&self, engine: &Engine, field: &str, nested: &Includes)
        -> serde_json::Result<Value>;

    /// Serialize the record with each included relationship added as a field
    fn render(&self, engine: &Engine, include: &Includes) -> serde_json::Result<Value> {
        let mut value = serde_json::to_value(self)?;
        if let Value::Object(map) = &mut value {
            for (field, nested) in include.fields() {
                map.insert(field.to_string(), self.relationship(engine, field, nested)?);
            }
        }
        Ok(value)
    }
}

impl Render for User {
    fn relationship(
        &self,
        engine: &Engine,
        field: &str,
        nested: &Includes,
    ) -> serde_json::Result<Value> {
        match field {
            "events" => render_all(&engine.user_events(self), engine, nested),
            _ => Ok(Value::Null),
        }
    }
}

impl Render for Event {
    fn relationship(
        &self,
        engine: &Engine,
        field: &str,
        nested: &Includes,
    ) -> serde_json::Result<Value> {
        match field {
            "user" => render_opt(engine.event_user(self), engine, nested),
            "location" => render_opt(engine.event_location(self), engine, nested),
            "participants" => render_all(&engine.event_participants(self), engine, nested),
            _ => Ok(Value::Null),
        }
    }
}

impl Render for Location {
    fn relationship(&self, _: &Engine, _: &str, _: &Includes) -> serde_json::Result<Value> {
        Ok(Value::Null)
    }
}

impl Render for Participant {
    fn relationship(
        &self,
        engine: &Engine,
        field: &str,
        nested: &Includes,
    ) -> serde_json::Result<Value> {
        match field {
            "user" => render_opt(engine.participant_user(self), engine, nested),
            "event" => render_opt(engine.participant_event(self), engine, nested),
            _ => Ok(Value::Null),
        }
    }
}

/// Render a sequence of records
pub fn render_all<T: Render>(
    records: &[T],
    engine: &Engine,
    include: &Includes,
) -> serde_json::Result<Value> {
    records
        .iter()
        .map(|r| r.render(engine, include))
        .collect::<serde_json::Result<Vec<_>>>()
        .map(Value::Array)
}

/// Render a to-one target; a missing target is `null`
pub fn render_opt<T: Render>(
    record: Option<T>,
    engine: &Engine,
    include: &Includes,
) -> serde_json::Result<Value> {
    match record {
        Some(record) => record.render(engine, include),
        None => Ok(Value::Null),
    }
}
