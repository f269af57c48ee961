//! Load-time normalization of persisted task and project records.
//!
//! # Responsibility
//! - Accept records written by any earlier app version.
//! - Turn them into validated `Task`/`Project` values without touching
//!   storage.
//!
//! # Invariants
//! - Any JSON object decodes into a raw record; every field is optional and
//!   kept as raw JSON, so migration itself cannot fail.
//! - Output `assigned_to` is non-empty and contains only known assignees.
//! - Output `status` is always set; the legacy `isCompleted` flag never
//!   survives migration.
//! - Blank or non-scalar values count as missing for `id` and `projectId`.
//! - Unrecognized priority/status labels count as missing.

use crate::model::assignee::{normalize_assignees, Assignee};
use crate::model::id::new_entity_id;
use crate::model::lenient::{decode_label, value_text};
use crate::model::project::Project;
use crate::model::task::{Priority, Status, Task};
use serde::Deserialize;
use serde_json::Value;

/// Task record as it may appear in storage.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTask {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub due_date: Option<Value>,
    #[serde(default)]
    pub priority: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
    /// Single name, list of names, or missing.
    #[serde(default)]
    pub assigned_to: Option<Value>,
    #[serde(default)]
    pub project_id: Option<Value>,
    /// Legacy completion flag, superseded by `status`.
    #[serde(default)]
    pub is_completed: Option<Value>,
}

/// Project record as it may appear in storage.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProject {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub assigned_to: Option<Value>,
}

/// Normalizes one persisted task record.
pub fn migrate_task(raw: RawTask) -> Task {
    let status = match raw.status.as_ref().and_then(decode_label::<Status>) {
        Some(status) => status,
        None if is_truthy(raw.is_completed.as_ref()) => Status::Completed,
        None => Status::Pending,
    };

    Task {
        id: non_blank(raw.id.as_ref()).unwrap_or_else(new_entity_id),
        title: text(raw.title.as_ref()),
        description: text(raw.description.as_ref()),
        due_date: text(raw.due_date.as_ref()),
        priority: raw
            .priority
            .as_ref()
            .and_then(decode_label::<Priority>)
            .unwrap_or(Priority::Medium),
        status,
        assigned_to: migrate_assignees(raw.assigned_to.as_ref()),
        project_id: non_blank(raw.project_id.as_ref()),
    }
}

/// Normalizes one persisted project record.
pub fn migrate_project(raw: RawProject) -> Project {
    Project {
        id: non_blank(raw.id.as_ref()).unwrap_or_else(new_entity_id),
        title: text(raw.title.as_ref()),
        description: text(raw.description.as_ref()),
        assigned_to: migrate_assignees(raw.assigned_to.as_ref()),
    }
}

/// Turns a stored `assignedTo` value into a valid assignee set.
///
/// - A single string is treated as a one-element list.
/// - Non-string list items and unknown names are dropped.
/// - Anything else (missing, null, numbers, objects) counts as empty.
/// - An empty result becomes `[General]`.
pub fn migrate_assignees(value: Option<&Value>) -> Vec<Assignee> {
    let known: Vec<Assignee> = match value {
        Some(Value::Array(items)) => items.iter().filter_map(decode_label::<Assignee>).collect(),
        Some(other) => decode_label::<Assignee>(other).into_iter().collect(),
        None => Vec::new(),
    };
    normalize_assignees(known)
}

fn text(value: Option<&Value>) -> String {
    value.and_then(value_text).unwrap_or_default()
}

fn non_blank(value: Option<&Value>) -> Option<String> {
    value
        .and_then(value_text)
        .filter(|text| !text.trim().is_empty())
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        Some(Value::Null) | None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{migrate_assignees, migrate_project, migrate_task, RawProject, RawTask};
    use crate::model::assignee::Assignee;
    use crate::model::task::{Priority, Status};
    use serde_json::json;

    fn raw_task(value: serde_json::Value) -> RawTask {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn single_assignee_becomes_list() {
        let task = migrate_task(raw_task(json!({ "id": "1", "assignedTo": "Seba" })));
        assert_eq!(task.assigned_to, vec![Assignee::Seba]);
    }

    #[test]
    fn unknown_assignees_fall_back_to_general() {
        let task = migrate_task(raw_task(json!({ "id": "1", "assignedTo": ["UnknownTag"] })));
        assert_eq!(task.assigned_to, vec![Assignee::General]);
    }

    #[test]
    fn unknown_assignees_are_dropped_next_to_known_ones() {
        let assignees = migrate_assignees(Some(&json!(["Mika", "Nobody", 7, "Luz"])));
        assert_eq!(assignees, vec![Assignee::Mika, Assignee::Luz]);
    }

    #[test]
    fn missing_or_odd_assignee_values_default_to_general() {
        assert_eq!(migrate_assignees(None), vec![Assignee::General]);
        assert_eq!(
            migrate_assignees(Some(&serde_json::Value::Null)),
            vec![Assignee::General]
        );
        assert_eq!(
            migrate_assignees(Some(&json!({ "name": "Seba" }))),
            vec![Assignee::General]
        );
    }

    #[test]
    fn legacy_completed_flag_derives_status() {
        let done = migrate_task(raw_task(json!({ "id": "1", "isCompleted": true })));
        assert_eq!(done.status, Status::Completed);

        let open = migrate_task(raw_task(json!({ "id": "2", "isCompleted": false })));
        assert_eq!(open.status, Status::Pending);

        let bare = migrate_task(raw_task(json!({ "id": "3" })));
        assert_eq!(bare.status, Status::Pending);
    }

    #[test]
    fn explicit_status_wins_over_legacy_flag() {
        let task = migrate_task(raw_task(json!({
            "id": "1",
            "status": "Cancelado",
            "isCompleted": true
        })));
        assert_eq!(task.status, Status::Cancelled);
    }

    #[test]
    fn missing_id_and_priority_are_backfilled() {
        let task = migrate_task(raw_task(json!({ "title": "old", "id": "" })));
        assert!(!task.id.is_empty());
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.title, "old");
    }

    #[test]
    fn existing_fields_are_kept() {
        let task = migrate_task(raw_task(json!({
            "id": "1700000000000",
            "title": "Write report",
            "description": "Q2",
            "dueDate": "2024-06-01",
            "priority": "Alta",
            "status": "En Progreso",
            "assignedTo": ["Mika", "Kev"],
            "projectId": "p-9"
        })));
        assert_eq!(task.id, "1700000000000");
        assert_eq!(task.description, "Q2");
        assert_eq!(task.due_date, "2024-06-01");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, Status::InProgress);
        assert_eq!(task.assigned_to, vec![Assignee::Mika, Assignee::Kev]);
        assert_eq!(task.project_id.as_deref(), Some("p-9"));
    }

    #[test]
    fn numeric_id_and_title_are_stringified() {
        let task = migrate_task(raw_task(json!({ "id": 1_700_000_000_000_i64, "title": 42 })));
        assert_eq!(task.id, "1700000000000");
        assert_eq!(task.title, "42");
        assert_eq!(task.description, "");
    }

    #[test]
    fn blank_project_reference_is_dropped() {
        let task = migrate_task(raw_task(json!({ "id": "1", "projectId": "" })));
        assert_eq!(task.project_id, None);
    }

    #[test]
    fn project_migration_normalizes_assignees_and_id() {
        let raw: RawProject = serde_json::from_value(json!({
            "title": "Launch",
            "description": "go live",
            "assignedTo": "Meli"
        }))
        .unwrap();
        let project = migrate_project(raw);
        assert!(!project.id.is_empty());
        assert_eq!(project.title, "Launch");
        assert_eq!(project.assigned_to, vec![Assignee::Meli]);
    }
}
