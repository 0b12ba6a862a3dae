//! Nested relationship selections
//!
//! An operation names the relationships to resolve on its result as dotted
//! paths: `"participants.user.events"` resolves an event's participants,
//! each participant's user, and each user's events. Paths sharing a prefix
//! merge into one tree.

use std::collections::BTreeMap;

use super::ExecError;
use crate::types::EntityKind;

/// Relationship fields to resolve at one level, each with its own subtree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Includes(BTreeMap<String, Includes>);

impl Includes {
    /// Build the tree for records of `kind`, checking every path segment
    /// against the kind reached at that depth
    pub fn parse(kind: EntityKind, paths: &[String]) -> Result<Self, ExecError> {
        let mut root = Includes::default();
        for path in paths {
            let mut node = &mut root;
            let mut current = kind;
            for field in path.split('.') {
                let target = current.relationship_target(field).ok_or_else(|| {
                    ExecError::UnknownRelationship {
                        kind: current,
                        field: field.to_string(),
                    }
                })?;
                node = node.0.entry(field.to_string()).or_default();
                current = target;
            }
        }
        Ok(root)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Includes)> {
        self.0.iter().map(|(field, nested)| (field.as_str(), nested))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(list: &[&str]) -> Vec<String> {
        list.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_shared_prefixes_merge() {
        let includes = Includes::parse(
            EntityKind::Event,
            &paths(&["participants.user", "participants.event", "location"]),
        )
        .unwrap();

        let top: Vec<&str> = includes.fields().map(|(f, _)| f).collect();
        assert_eq!(top, vec!["location", "participants"]);

        let (_, participants) = includes.fields().find(|(f, _)| *f == "participants").unwrap();
        let nested: Vec<&str> = participants.fields().map(|(f, _)| f).collect();
        assert_eq!(nested, vec!["event", "user"]);
    }

    #[test]
    fn test_segments_checked_against_their_level() {
        let err = Includes::parse(EntityKind::Event, &paths(&["participants.location"])).unwrap_err();
        match err {
            ExecError::UnknownRelationship { kind, field } => {
                assert_eq!(kind, EntityKind::Participant);
                assert_eq!(field, "location");
            }
            other => panic!("unexpected error: {}", other),
        }

        assert!(Includes::parse(EntityKind::User, &paths(&["events."])).is_err());
        assert!(Includes::parse(EntityKind::Location, &paths(&["events"])).is_err());
    }

    #[test]
    fn test_no_paths_selects_nothing() {
        let includes = Includes::parse(EntityKind::User, &[]).unwrap();
        assert_eq!(includes, Includes::default());
        assert_eq!(includes.fields().count(), 0);
    }
}
