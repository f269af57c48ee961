//! Storage keys for the four board collections.

use std::fmt::{Display, Formatter};

/// One independently persisted board collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Tasks,
    Meetings,
    Links,
    Projects,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Self::Tasks,
        Self::Meetings,
        Self::Links,
        Self::Projects,
    ];

    /// Key under which the collection's JSON array is stored.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Meetings => "meetings",
            Self::Links => "links",
            Self::Projects => "projects",
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
