//! Project domain model.
//!
//! # Invariants
//! - `assigned_to` is never empty.
//! - Projects do not own tasks; tasks point at projects by id.

use crate::model::assignee::{normalize_assignees, Assignee};
use crate::model::id::{new_entity_id, EntityId, Identified};
use serde::{Deserialize, Serialize};

/// Grouping record that tasks may reference through `Task::project_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub assigned_to: Vec<Assignee>,
}

impl Identified for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

/// User-entered project data before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub assigned_to: Vec<Assignee>,
}

impl NewProject {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            assigned_to: vec![Assignee::General],
        }
    }

    pub fn into_project(self) -> Project {
        Project {
            id: new_entity_id(),
            title: self.title,
            description: self.description,
            assigned_to: normalize_assignees(self.assigned_to),
        }
    }
}

/// Partial project update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assigned_to: Option<Vec<Assignee>>,
}

impl ProjectPatch {
    pub fn apply_to(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(assigned_to) = self.assigned_to {
            project.assigned_to = normalize_assignees(assigned_to);
        }
    }
}
