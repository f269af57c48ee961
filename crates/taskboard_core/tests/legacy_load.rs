use serde_json::json;
use taskboard_core::{
    Assignee, EntityStore, KeyValueStore, MemoryKeyValueStore, Priority, Status,
};

fn storage_with(key: &str, value: serde_json::Value) -> MemoryKeyValueStore {
    MemoryKeyValueStore::with_entries([(key.to_string(), value.to_string())])
}

#[test]
fn single_assignee_is_loaded_as_list() {
    let storage = storage_with(
        "tasks",
        json!([{ "id": "1", "title": "Legacy", "assignedTo": "Seba", "status": "Pendiente" }]),
    );
    let store = EntityStore::open(&storage);
    assert_eq!(store.task("1").unwrap().assigned_to, vec![Assignee::Seba]);
}

#[test]
fn unknown_assignee_is_replaced_by_general() {
    let storage = storage_with(
        "tasks",
        json!([{ "id": "1", "title": "Legacy", "assignedTo": ["UnknownTag"] }]),
    );
    let store = EntityStore::open(&storage);
    assert_eq!(store.task("1").unwrap().assigned_to, vec![Assignee::General]);
}

#[test]
fn legacy_completed_flag_becomes_status_and_is_not_written_back() {
    let storage = storage_with(
        "tasks",
        json!([{
            "id": "1",
            "title": "Old done task",
            "description": "",
            "dueDate": "2023-01-01",
            "assignedTo": "Kev",
            "isCompleted": true
        }]),
    );
    let mut store = EntityStore::open(&storage);
    let task = store.task("1").unwrap();
    assert_eq!(task.status, Status::Completed);
    assert_eq!(task.priority, Priority::Medium);

    store.update_task_status("1", Status::Completed);

    let text = storage.read("tasks").unwrap().unwrap();
    let written: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(written[0].get("isCompleted").is_none());
    assert_eq!(written[0]["status"], "Completado");
    assert_eq!(written[0]["assignedTo"], json!(["Kev"]));
}

#[test]
fn projects_are_migrated_and_meetings_links_load_as_is() {
    let storage = MemoryKeyValueStore::with_entries([
        (
            "projects",
            json!([
                { "id": "p1", "title": "Launch", "description": "", "assignedTo": ["Luru", "Ghost"] },
                { "title": "No id", "description": "" }
            ])
            .to_string(),
        ),
        (
            "meetings",
            json!([{
                "id": "m1",
                "title": "Sync",
                "agenda": "status",
                "date": "2024-06-03",
                "time": "10:00",
                "attendees": ["Ana", "Bo"]
            }])
            .to_string(),
        ),
        (
            "links",
            json!([{ "id": "l1", "title": "Docs", "url": "https://docs.rs" }]).to_string(),
        ),
    ]);

    let store = EntityStore::open(&storage);

    assert_eq!(store.project("p1").unwrap().assigned_to, vec![Assignee::Luru]);
    let backfilled = &store.projects()[1];
    assert!(!backfilled.id.is_empty());
    assert_eq!(backfilled.assigned_to, vec![Assignee::General]);

    assert_eq!(store.meeting("m1").unwrap().attendees, vec!["Ana", "Bo"]);
    assert_eq!(store.link("l1").unwrap().url, "https://docs.rs");
}

#[test]
fn malformed_collection_falls_back_without_affecting_others() {
    let storage = MemoryKeyValueStore::with_entries([
        ("tasks", "not json at all".to_string()),
        ("meetings", json!({ "unexpected": "shape" }).to_string()),
        (
            "links",
            json!([{ "id": "l1", "title": "Docs", "url": "https://docs.rs" }]).to_string(),
        ),
    ]);

    let store = EntityStore::open(&storage);

    assert!(store.tasks().is_empty());
    assert!(store.meetings().is_empty());
    assert!(store.projects().is_empty());
    assert_eq!(store.links().len(), 1);
}

#[test]
fn tasks_with_unrecognized_labels_get_defaults() {
    let storage = storage_with(
        "tasks",
        json!([{
            "id": "1",
            "title": "Odd",
            "priority": "Urgent",
            "status": "Blocked",
            "assignedTo": ["Meli"]
        }]),
    );
    let store = EntityStore::open(&storage);
    let task = store.task("1").unwrap();
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.status, Status::Pending);
    assert_eq!(task.assigned_to, vec![Assignee::Meli]);
}

#[test]
fn meeting_missing_a_field_keeps_the_whole_collection() {
    let storage = storage_with(
        "meetings",
        json!([
            {
                "id": "m1",
                "title": "Sync",
                "agenda": "status",
                "date": "2024-06-03",
                "time": "10:00",
                "attendees": ["Ana"]
            },
            { "id": "m2", "title": "No agenda", "date": "2024-06-04", "time": "09:00" }
        ]),
    );

    let mut store = EntityStore::open(&storage);
    assert_eq!(store.meetings().len(), 2);
    assert_eq!(store.meeting("m2").unwrap().agenda, "");
    assert!(store.meeting("m2").unwrap().attendees.is_empty());

    store.create_meeting(taskboard_core::NewMeeting {
        title: "New".to_string(),
        ..Default::default()
    });

    let reopened = EntityStore::open(&storage);
    assert_eq!(reopened.meetings().len(), 3);
    assert!(reopened.meeting("m1").is_some());
    assert!(reopened.meeting("m2").is_some());
}

#[test]
fn task_with_numeric_fields_loads_next_to_valid_ones() {
    let storage = storage_with(
        "tasks",
        json!([
            { "id": "1", "title": "Valid", "assignedTo": ["Mika"], "status": "Pendiente" },
            { "id": 1_700_000_000_000_i64 },
            { "id": "3", "title": 99 }
        ]),
    );

    let store = EntityStore::open(&storage);

    assert_eq!(store.tasks().len(), 3);
    assert_eq!(store.task("1").unwrap().title, "Valid");
    let numeric = store.task("1700000000000").unwrap();
    assert_eq!(numeric.status, Status::Pending);
    assert_eq!(numeric.assigned_to, vec![Assignee::General]);
    assert_eq!(store.task("3").unwrap().title, "99");
}

#[test]
fn non_record_entries_are_skipped_without_losing_neighbours() {
    let storage = storage_with(
        "links",
        json!([
            "just a string",
            { "id": "l1", "title": "Docs", "url": "https://docs.rs" },
            null
        ]),
    );

    let store = EntityStore::open(&storage);

    assert_eq!(store.links().len(), 1);
    assert_eq!(store.link("l1").unwrap().title, "Docs");
}
