//! Event Graph Server
//!
//! An in-memory relational store of users, events, locations and
//! participants, with relationship resolution over foreign keys and
//! identity-preserving create/update/delete.
//!
//! # Features
//!
//! - **Four collections**: ordered, per-collection `RwLock`
//! - **Relationships**: user events, event user/location/participants,
//!   participant user/event, resolved on every access
//! - **Merge patches**: only supplied fields change, ids never do
//! - **Local errors**: a missing id fails one operation, never its siblings
//!
//! # Modules
//!
//! - `types`: Records, inputs, patches, ids and errors
//! - `store`: The entity store and seed loading
//! - `engine`: Query facade, mutation engine, relationship resolver
//! - `executor`: Batch execution with per-operation results
//! - `api`: Axum router and REST handlers
//! - `config`: Environment configuration
//!
//! # Example
//!
//! ```
//! use event_graph::engine::Engine;
//! use event_graph::types::{NewUser, User};
//!
//! let engine = Engine::in_memory();
//! let ana: User = engine.create(NewUser::new("ana", "a@x.com")).unwrap();
//! assert!(engine.user_events(&ana).is_empty());
//! assert_eq!(engine.get::<User>(&ana.id), Some(ana));
//! ```

pub mod api;
pub mod config;
pub mod engine;
pub mod executor;
pub mod store;
pub mod types;

// Re-export commonly used items at crate root
pub use api::AppState;
pub use config::ServerConfig;
pub use engine::Engine;
pub use executor::Executor;
pub use store::{EntityStore, Seed};
pub use types::{
    EngineError, EngineResult, EntityKind, Event, Location, Participant, RecordId, User,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
