//! Relationship resolution over foreign keys
//!
//! Every lookup is a linear scan of the target collection with exact id
//! equality. Nothing is cached, so results always reflect the store as it
//! is at call time.

use crate::store::{Collection, EntityStore};
use crate::types::{Event, Location, Participant, Record, RecordId, User};

/// The record in `target` whose id equals `key`
pub fn resolve_one<T: Record>(target: &Collection<T>, key: &RecordId) -> Option<T> {
    target.get(key)
}

/// Records in `target` whose foreign key `field` equals `value`, in order
pub fn resolve_many<T, F>(target: &Collection<T>, field: F, value: &RecordId) -> Vec<T>
where
    T: Record,
    F: Fn(&T) -> &RecordId,
{
    target.filter(|record| field(record) == value)
}

pub fn user_events(store: &EntityStore, user: &User) -> Vec<Event> {
    resolve_many(store.events(), |e: &Event| &e.user_id, &user.id)
}

pub fn event_user(store: &EntityStore, event: &Event) -> Option<User> {
    resolve_one(store.users(), &event.user_id)
}

pub fn event_location(store: &EntityStore, event: &Event) -> Option<Location> {
    resolve_one(store.locations(), &event.location_id)
}

pub fn event_participants(store: &EntityStore, event: &Event) -> Vec<Participant> {
    resolve_many(store.participants(), |p: &Participant| &p.event_id, &event.id)
}

pub fn participant_user(store: &EntityStore, participant: &Participant) -> Option<User> {
    resolve_one(store.users(), &participant.user_id)
}

pub fn participant_event(store: &EntityStore, participant: &Participant) -> Option<Event> {
    resolve_one(store.events(), &participant.event_id)
}
