//! Startup loaders for persisted collections.
//!
//! # Responsibility
//! - Read each collection's JSON blob and run load-time migration record by
//!   record.
//! - Degrade to an empty collection when the blob itself is unusable.
//!
//! # Invariants
//! - `load_*` functions never return an error and never panic.
//! - A record that cannot be decoded is skipped; its neighbours still load.
//! - `Loaded::normalized` is set when any kept record differs from its stored
//!   form, so the caller can write the migrated shape back.
//! - Fallbacks and skips are logged at `warn` with key, index and error,
//!   never with record contents.

use crate::migrate::{migrate_project, migrate_task};
use crate::model::link::LinkItem;
use crate::model::meeting::Meeting;
use crate::model::project::Project;
use crate::model::task::Task;
use crate::storage::{KeyValueStore, StorageError};
use crate::store::collection::Collection;
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type LoadResult<T> = Result<T, LoadError>;

/// Why a persisted collection could not be used.
#[derive(Debug)]
pub enum LoadError {
    Storage(StorageError),
    Malformed(serde_json::Error),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Malformed(err) => write!(f, "malformed persisted collection: {err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Malformed(err) => Some(err),
        }
    }
}

impl From<StorageError> for LoadError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}

/// Records recovered from one collection blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    /// Some kept record was rewritten by migration (backfilled id, new
    /// label, defaulted field, ...).
    pub normalized: bool,
    /// Entries that were not decodable records and were dropped.
    pub skipped: usize,
}

impl<T> Default for Loaded<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            normalized: false,
            skipped: 0,
        }
    }
}

/// Loads and migrates tasks, reporting blob-level failures to the caller.
pub fn try_load_tasks<S: KeyValueStore>(storage: &S) -> LoadResult<Loaded<Task>> {
    try_load_with(storage, Collection::Tasks, migrate_task)
}

/// Loads and migrates projects, reporting blob-level failures to the caller.
pub fn try_load_projects<S: KeyValueStore>(storage: &S) -> LoadResult<Loaded<Project>> {
    try_load_with(storage, Collection::Projects, migrate_project)
}

/// Loads meetings; only field-level defaults apply.
pub fn try_load_meetings<S: KeyValueStore>(storage: &S) -> LoadResult<Loaded<Meeting>> {
    try_load_with(storage, Collection::Meetings, |meeting: Meeting| meeting)
}

/// Loads links; only field-level defaults apply.
pub fn try_load_links<S: KeyValueStore>(storage: &S) -> LoadResult<Loaded<LinkItem>> {
    try_load_with(storage, Collection::Links, |link: LinkItem| link)
}

pub fn load_tasks<S: KeyValueStore>(storage: &S) -> Loaded<Task> {
    or_empty(Collection::Tasks, try_load_tasks(storage))
}

pub fn load_projects<S: KeyValueStore>(storage: &S) -> Loaded<Project> {
    or_empty(Collection::Projects, try_load_projects(storage))
}

pub fn load_meetings<S: KeyValueStore>(storage: &S) -> Loaded<Meeting> {
    or_empty(Collection::Meetings, try_load_meetings(storage))
}

pub fn load_links<S: KeyValueStore>(storage: &S) -> Loaded<LinkItem> {
    or_empty(Collection::Links, try_load_links(storage))
}

fn try_load_with<S, R, T, F>(
    storage: &S,
    collection: Collection,
    migrate: F,
) -> LoadResult<Loaded<T>>
where
    S: KeyValueStore,
    R: DeserializeOwned,
    T: Serialize,
    F: Fn(R) -> T,
{
    let Some(text) = storage.read(collection.key())? else {
        return Ok(Loaded::default());
    };
    let records: Vec<Value> = serde_json::from_str(&text)?;

    let mut loaded = Loaded::default();
    for (index, record) in records.iter().enumerate() {
        // Raw shapes are field-lenient, so only non-object entries fail here.
        let raw = match R::deserialize(record) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    "event=store_load_record module=store status=skipped key={} index={} error={}",
                    collection, index, err
                );
                loaded.skipped += 1;
                continue;
            }
        };
        let item = migrate(raw);
        if serde_json::to_value(&item).ok().as_ref() != Some(record) {
            loaded.normalized = true;
        }
        loaded.items.push(item);
    }
    Ok(loaded)
}

fn or_empty<T>(collection: Collection, loaded: LoadResult<Loaded<T>>) -> Loaded<T> {
    match loaded {
        Ok(loaded) => {
            info!(
                "event=store_load module=store status=ok key={} count={} skipped={} normalized={}",
                collection,
                loaded.items.len(),
                loaded.skipped,
                loaded.normalized
            );
            loaded
        }
        Err(err) => {
            warn!(
                "event=store_load module=store status=fallback key={} error={}",
                collection, err
            );
            Loaded::default()
        }
    }
}
