//! Entity identifier helpers.

use uuid::Uuid;

/// Opaque identifier shared by every board record.
///
/// Kept as a plain string because records written by older app versions
/// carry timestamp-style ids that are not UUIDs.
pub type EntityId = String;

/// Generates a fresh identifier for a newly created record.
pub fn new_entity_id() -> EntityId {
    Uuid::new_v4().to_string()
}

/// Records addressable by `EntityId`.
pub trait Identified {
    fn id(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::new_entity_id;

    #[test]
    fn generated_ids_are_distinct_and_non_empty() {
        let first = new_entity_id();
        let second = new_entity_id();
        assert!(!first.is_empty());
        assert_ne!(first, second);
    }
}
