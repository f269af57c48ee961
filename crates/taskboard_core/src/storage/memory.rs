//! In-process key-value backend.

use super::{KeyValueStore, StorageResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// Volatile storage for tests and ephemeral boards.
///
/// Single-threaded; share it between stores by reference.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-populated with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RefCell::new(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryKeyValueStore;
    use crate::storage::KeyValueStore;

    #[test]
    fn read_missing_key_returns_none() {
        let storage = MemoryKeyValueStore::new();
        assert_eq!(storage.read("tasks").unwrap(), None);
    }

    #[test]
    fn write_replaces_previous_value() {
        let storage = MemoryKeyValueStore::with_entries([("links", "[]")]);
        storage.write("links", "[1]").unwrap();
        assert_eq!(storage.read("links").unwrap().as_deref(), Some("[1]"));
    }
}
