//! Shareable link model.

use crate::model::id::{new_entity_id, EntityId, Identified};
use crate::model::lenient;
use serde::{Deserialize, Serialize};

/// Bookmarked URL with a display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub url: String,
}

impl Identified for LinkItem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// User-entered link data before an id is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewLink {
    pub title: String,
    pub url: String,
}

impl NewLink {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    pub fn into_link(self) -> LinkItem {
        LinkItem {
            id: new_entity_id(),
            title: self.title,
            url: self.url,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
}

impl LinkPatch {
    pub fn apply_to(self, link: &mut LinkItem) {
        if let Some(title) = self.title {
            link.title = title;
        }
        if let Some(url) = self.url {
            link.url = url;
        }
    }
}
