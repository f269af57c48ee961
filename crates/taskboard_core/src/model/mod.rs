//! Board domain model for task/meeting/link/project records.
//!
//! # Responsibility
//! - Define canonical data structures used by the entity store.
//! - Own the persisted wire shape (camelCase fields, stored enum labels).
//!
//! # Invariants
//! - Every record is identified by an opaque string `EntityId`.
//! - `assigned_to` on tasks and projects is never empty.
//! - `Task::project_id` is a weak reference; nothing enforces that the
//!   referenced project exists.

pub mod assignee;
pub mod id;
pub(crate) mod lenient;
pub mod link;
pub mod meeting;
pub mod project;
pub mod task;
