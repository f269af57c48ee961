//! Task domain model.
//!
//! # Responsibility
//! - Define the task record, its priority/status labels, and the draft and
//!   patch shapes used by create/update.
//!
//! # Invariants
//! - `status` is always set; new tasks start as `Status::Pending`.
//! - `assigned_to` is never empty.
//! - `project_id` may point at a project that no longer exists.

use crate::model::assignee::{normalize_assignees, Assignee};
use crate::model::id::{new_entity_id, EntityId, Identified};
use serde::{Deserialize, Serialize};

/// Task urgency label.
///
/// Serialized with the labels stored by earlier app versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "Baja", alias = "Low")]
    Low,
    #[default]
    #[serde(rename = "Media", alias = "Medium")]
    Medium,
    #[serde(rename = "Alta", alias = "High")]
    High,
}


/// Task progress label. Any status may be set to any other status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "Pendiente", alias = "Pending")]
    Pending,
    #[serde(rename = "En Progreso", alias = "InProgress")]
    InProgress,
    #[serde(rename = "Completado", alias = "Completed")]
    Completed,
    #[serde(rename = "Cancelado", alias = "Cancelled")]
    Cancelled,
}


/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    /// Free-form date string as entered by the user (usually `YYYY-MM-DD`).
    pub due_date: String,
    pub priority: Priority,
    pub status: Status,
    pub assigned_to: Vec<Assignee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<EntityId>,
}

impl Identified for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

/// User-entered task data before an id and status are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: Priority,
    pub assigned_to: Vec<Assignee>,
    pub project_id: Option<EntityId>,
}

impl NewTask {
    /// Starts a draft with empty text fields, medium priority and the
    /// `General` assignee.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            due_date: String::new(),
            priority: Priority::Medium,
            assigned_to: vec![Assignee::General],
            project_id: None,
        }
    }

    /// Materializes the draft as a pending task with a fresh id.
    pub fn into_task(self) -> Task {
        Task {
            id: new_entity_id(),
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
            status: Status::Pending,
            assigned_to: normalize_assignees(self.assigned_to),
            project_id: self.project_id,
        }
    }
}

/// Partial task update. `None` fields are left untouched.
///
/// `project_id` is doubly optional: `Some(None)` clears the reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub assigned_to: Option<Vec<Assignee>>,
    pub project_id: Option<Option<EntityId>>,
}

impl TaskPatch {
    /// Patch that only changes the status.
    pub fn status(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Applies the provided fields onto `task`. The id is never touched.
    pub fn apply_to(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(assigned_to) = self.assigned_to {
            task.assigned_to = normalize_assignees(assigned_to);
        }
        if let Some(project_id) = self.project_id {
            task.project_id = project_id;
        }
    }
}
