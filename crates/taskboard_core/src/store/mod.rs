//! In-memory entity store with write-through persistence.
//!
//! # Responsibility
//! - Own the four board collections for the lifetime of a session.
//! - Provide create/update/delete per entity type and derived task/project
//!   lookups.
//! - Rewrite a collection in full after every mutation to it.
//!
//! # Invariants
//! - In-memory state is authoritative; a failed write is logged and the
//!   mutation is kept.
//! - Update and delete with an unknown id change nothing and write nothing.
//! - Deleting a project orphans its tasks (`project_id = None`) instead of
//!   deleting them.

pub mod collection;
pub mod load;

use crate::model::assignee::Assignee;
use crate::model::id::Identified;
use crate::model::link::{LinkItem, LinkPatch, NewLink};
use crate::model::meeting::{Meeting, MeetingPatch, NewMeeting};
use crate::model::project::{NewProject, Project, ProjectPatch};
use crate::model::task::{NewTask, Status, Task, TaskPatch};
use crate::storage::KeyValueStore;
use collection::Collection;
use load::{load_links, load_meetings, load_projects, load_tasks};
use log::{debug, error};
use serde::Serialize;

/// Single source of truth for board data.
///
/// Construct once at startup and pass by reference to consumers.
pub struct EntityStore<S: KeyValueStore> {
    storage: S,
    tasks: Vec<Task>,
    meetings: Vec<Meeting>,
    links: Vec<LinkItem>,
    projects: Vec<Project>,
}

impl<S: KeyValueStore> EntityStore<S> {
    /// Loads all four collections from `storage`.
    ///
    /// Missing or malformed collections start empty; this never fails.
    /// Collections whose records were rewritten by migration are written
    /// back right away, so backfilled ids stay stable across restarts.
    pub fn open(storage: S) -> Self {
        let tasks = load_tasks(&storage);
        let meetings = load_meetings(&storage);
        let links = load_links(&storage);
        let projects = load_projects(&storage);

        let normalized: Vec<Collection> = [
            (Collection::Tasks, tasks.normalized),
            (Collection::Meetings, meetings.normalized),
            (Collection::Links, links.normalized),
            (Collection::Projects, projects.normalized),
        ]
        .into_iter()
        .filter_map(|(collection, normalized)| normalized.then_some(collection))
        .collect();

        let store = Self {
            storage,
            tasks: tasks.items,
            meetings: meetings.items,
            links: links.items,
            projects: projects.items,
        };
        for collection in normalized {
            debug!(
                "event=store_migrate_writeback module=store status=start key={}",
                collection
            );
            store.persist(collection);
        }
        store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    pub fn links(&self) -> &[LinkItem] {
        &self.links
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        find(&self.tasks, id)
    }

    pub fn meeting(&self, id: &str) -> Option<&Meeting> {
        find(&self.meetings, id)
    }

    pub fn link(&self, id: &str) -> Option<&LinkItem> {
        find(&self.links, id)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        find(&self.projects, id)
    }

    /// Adds a new pending task and persists the task collection.
    pub fn create_task(&mut self, draft: NewTask) -> Task {
        let task = draft.into_task();
        self.tasks.push(task.clone());
        self.after_mutation(Collection::Tasks, "create");
        task
    }

    /// Applies `patch` to the task with `id`.
    ///
    /// Returns whether a task matched.
    pub fn update_task(&mut self, id: &str, patch: TaskPatch) -> bool {
        let Some(task) = find_mut(&mut self.tasks, id) else {
            return self.missed(Collection::Tasks, "update");
        };
        patch.apply_to(task);
        self.after_mutation(Collection::Tasks, "update");
        true
    }

    /// Sets the status of one task. Any status may follow any other.
    pub fn update_task_status(&mut self, id: &str, status: Status) -> bool {
        self.update_task(id, TaskPatch::status(status))
    }

    pub fn delete_task(&mut self, id: &str) -> bool {
        if !remove(&mut self.tasks, id) {
            return self.missed(Collection::Tasks, "delete");
        }
        self.after_mutation(Collection::Tasks, "delete");
        true
    }

    pub fn create_meeting(&mut self, draft: NewMeeting) -> Meeting {
        let meeting = draft.into_meeting();
        self.meetings.push(meeting.clone());
        self.after_mutation(Collection::Meetings, "create");
        meeting
    }

    pub fn update_meeting(&mut self, id: &str, patch: MeetingPatch) -> bool {
        let Some(meeting) = find_mut(&mut self.meetings, id) else {
            return self.missed(Collection::Meetings, "update");
        };
        patch.apply_to(meeting);
        self.after_mutation(Collection::Meetings, "update");
        true
    }

    pub fn delete_meeting(&mut self, id: &str) -> bool {
        if !remove(&mut self.meetings, id) {
            return self.missed(Collection::Meetings, "delete");
        }
        self.after_mutation(Collection::Meetings, "delete");
        true
    }

    pub fn create_link(&mut self, draft: NewLink) -> LinkItem {
        let link = draft.into_link();
        self.links.push(link.clone());
        self.after_mutation(Collection::Links, "create");
        link
    }

    pub fn update_link(&mut self, id: &str, patch: LinkPatch) -> bool {
        let Some(link) = find_mut(&mut self.links, id) else {
            return self.missed(Collection::Links, "update");
        };
        patch.apply_to(link);
        self.after_mutation(Collection::Links, "update");
        true
    }

    pub fn delete_link(&mut self, id: &str) -> bool {
        if !remove(&mut self.links, id) {
            return self.missed(Collection::Links, "delete");
        }
        self.after_mutation(Collection::Links, "delete");
        true
    }

    pub fn create_project(&mut self, draft: NewProject) -> Project {
        let project = draft.into_project();
        self.projects.push(project.clone());
        self.after_mutation(Collection::Projects, "create");
        project
    }

    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) -> bool {
        let Some(project) = find_mut(&mut self.projects, id) else {
            return self.missed(Collection::Projects, "update");
        };
        patch.apply_to(project);
        self.after_mutation(Collection::Projects, "update");
        true
    }

    /// Removes a project and clears the reference on every task pointing
    /// at it. The tasks themselves are kept.
    pub fn delete_project(&mut self, id: &str) -> bool {
        if !remove(&mut self.projects, id) {
            return self.missed(Collection::Projects, "delete");
        }
        self.after_mutation(Collection::Projects, "delete");

        let mut orphaned = 0usize;
        for task in self
            .tasks
            .iter_mut()
            .filter(|task| task.project_id.as_deref() == Some(id))
        {
            task.project_id = None;
            orphaned += 1;
        }
        if orphaned > 0 {
            debug!(
                "event=project_orphan_tasks module=store status=ok orphaned={}",
                orphaned
            );
            self.after_mutation(Collection::Tasks, "orphan");
        }
        true
    }

    /// Resolves a task's project reference.
    ///
    /// `None` covers both "no project" and a dangling id.
    pub fn project_for_task(&self, task: &Task) -> Option<&Project> {
        task.project_id.as_deref().and_then(|id| self.project(id))
    }

    /// Tasks whose `project_id` equals `project_id`, in collection order.
    pub fn tasks_for_project(&self, project_id: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.project_id.as_deref() == Some(project_id))
            .collect()
    }

    pub fn tasks_assigned_to(&self, assignee: Assignee) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.assigned_to.contains(&assignee))
            .collect()
    }

    /// Meetings on `date` (`YYYY-MM-DD`), earliest time first.
    pub fn meetings_on(&self, date: &str) -> Vec<&Meeting> {
        let mut meetings: Vec<&Meeting> = self
            .meetings
            .iter()
            .filter(|meeting| meeting.date == date)
            .collect();
        meetings.sort_by(|left, right| left.time.cmp(&right.time));
        meetings
    }

    /// Writes one collection in full to storage.
    ///
    /// Failures are logged and otherwise ignored; in-memory state stays as is.
    pub fn persist(&self, collection: Collection) {
        let serialized = match collection {
            Collection::Tasks => serialize(&self.tasks),
            Collection::Meetings => serialize(&self.meetings),
            Collection::Links => serialize(&self.links),
            Collection::Projects => serialize(&self.projects),
        };

        let json = match serialized {
            Ok(json) => json,
            Err(err) => {
                error!(
                    "event=store_persist module=store status=error key={} error_code=serialize_failed error={}",
                    collection, err
                );
                return;
            }
        };

        if let Err(err) = self.storage.write(collection.key(), &json) {
            error!(
                "event=store_persist module=store status=error key={} error_code=write_failed error={}",
                collection, err
            );
            return;
        }

        debug!(
            "event=store_persist module=store status=ok key={} bytes={}",
            collection,
            json.len()
        );
    }

    pub fn persist_all(&self) {
        for collection in Collection::ALL {
            self.persist(collection);
        }
    }

    fn after_mutation(&self, collection: Collection, op: &str) {
        debug!(
            "event=store_mutation module=store status=ok op={} key={}",
            op, collection
        );
        self.persist(collection);
    }

    fn missed(&self, collection: Collection, op: &str) -> bool {
        debug!(
            "event=store_mutation module=store status=skipped op={} key={} reason=not_found",
            op, collection
        );
        false
    }
}

fn serialize<T: Serialize>(items: &[T]) -> serde_json::Result<String> {
    serde_json::to_string(items)
}

fn find<'a, T: Identified>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

fn find_mut<'a, T: Identified>(items: &'a mut [T], id: &str) -> Option<&'a mut T> {
    items.iter_mut().find(|item| item.id() == id)
}

fn remove<T: Identified>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}
