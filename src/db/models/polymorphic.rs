use serde::{Deserialize, Serialize};
use std::fmt;

use crate::db::enums::EntityKind;

/// A (type tag, id) reference to a row of any table.
///
/// Journals, comments, watchers, custom values and attachments point at their
/// target this way. The database does not check that the row exists or that
/// the tag names a real table; that is left to the reader.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolymorphicRef {
    pub kind: EntityKind,
    pub id: i32,
}

impl PolymorphicRef {
    pub fn new(kind: impl Into<EntityKind>, id: i32) -> Self {
        Self {
            kind: kind.into(),
            id,
        }
    }

    pub fn issue(id: i32) -> Self {
        Self::new(EntityKind::Issue, id)
    }

    pub fn project(id: i32) -> Self {
        Self::new(EntityKind::Project, id)
    }

    pub fn news(id: i32) -> Self {
        Self::new(EntityKind::News, id)
    }

    pub fn wiki_page(id: i32) -> Self {
        Self::new(EntityKind::WikiPage, id)
    }

    pub fn message(id: i32) -> Self {
        Self::new(EntityKind::Message, id)
    }
}

impl fmt::Display for PolymorphicRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.id)
    }
}
