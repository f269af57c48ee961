//! Assignee tags for tasks and projects.
//!
//! # Invariants
//! - The set of assignees is closed; unknown names never reach the model.
//! - Stored names are the variant names, verbatim and case-sensitive.
//! - An assignee set is never empty; `Assignee::General` is the fallback.

use serde::{Deserialize, Serialize};

/// One member of the fixed set of people a task or project can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Assignee {
    /// Default bucket for unassigned work.
    General,
    Seba,
    Mika,
    Fabu,
    Pablito,
    Kiki,
    Luru,
    Luz,
    Kev,
    Lu,
    Meli,
}


/// Normalizes an assignee list into the non-empty, duplicate-free form the
/// model requires.
///
/// Order of first appearance is kept. An empty input yields `[General]`.
pub fn normalize_assignees(values: impl IntoIterator<Item = Assignee>) -> Vec<Assignee> {
    let mut normalized: Vec<Assignee> = Vec::new();
    for value in values {
        if !normalized.contains(&value) {
            normalized.push(value);
        }
    }
    if normalized.is_empty() {
        normalized.push(Assignee::General);
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::{normalize_assignees, Assignee};

    #[test]
    fn decoding_rejects_unknown_and_case_variants() {
        for name in ["UnknownTag", "seba", ""] {
            assert!(serde_json::from_value::<Assignee>(name.into()).is_err(), "{name}");
        }
        assert_eq!(
            serde_json::from_value::<Assignee>("Luru".into()).unwrap(),
            Assignee::Luru
        );
    }

    #[test]
    fn normalize_defaults_empty_input_to_general() {
        assert_eq!(normalize_assignees(Vec::new()), vec![Assignee::General]);
    }

    #[test]
    fn normalize_deduplicates_keeping_first_order() {
        let normalized =
            normalize_assignees([Assignee::Mika, Assignee::Seba, Assignee::Mika]);
        assert_eq!(normalized, vec![Assignee::Mika, Assignee::Seba]);
    }

    #[test]
    fn serializes_as_plain_name() {
        let json = serde_json::to_value(Assignee::Pablito).unwrap();
        assert_eq!(json, "Pablito");
    }
}
