//! Core domain logic for the task board.
//! This crate is the single source of truth for board data and its
//! persistence.

pub mod config;
pub mod db;
pub mod logging;
pub mod migrate;
pub mod model;
pub mod storage;
pub mod store;

pub use config::BoardConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use migrate::{migrate_project, migrate_task, RawProject, RawTask};
pub use model::assignee::Assignee;
pub use model::id::{EntityId, Identified};
pub use model::link::{LinkItem, LinkPatch, NewLink};
pub use model::meeting::{Meeting, MeetingPatch, NewMeeting};
pub use model::project::{NewProject, Project, ProjectPatch};
pub use model::task::{NewTask, Priority, Status, Task, TaskPatch};
pub use storage::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageError, StorageResult,
};
pub use store::collection::Collection;
pub use store::load::{LoadError, Loaded};
pub use store::EntityStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
