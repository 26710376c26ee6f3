use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::enums::EntityKind;
use crate::db::models::polymorphic::PolymorphicRef;

// Journal models: change history of a journalized record.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::journals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Journal {
    pub id: i32,
    pub journalized_id: i32,
    pub journalized_type: EntityKind,
    pub user_id: i32,
    pub notes: Option<String>,
    pub created_on: NaiveDateTime,
    pub private_notes: bool,
}

impl Journal {
    pub fn journalized(&self) -> PolymorphicRef {
        PolymorphicRef::new(self.journalized_type.clone(), self.journalized_id)
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::journals)]
pub struct NewJournal {
    pub journalized_id: i32,
    pub journalized_type: EntityKind,
    pub user_id: i32,
    pub notes: Option<String>,
    pub created_on: NaiveDateTime,
    pub private_notes: bool,
}

impl NewJournal {
    pub fn on(target: &PolymorphicRef, user_id: i32, created_on: NaiveDateTime) -> Self {
        Self {
            journalized_id: target.id,
            journalized_type: target.kind.clone(),
            user_id,
            notes: None,
            created_on,
            private_notes: false,
        }
    }
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::journal_details)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct JournalDetail {
    pub id: i32,
    pub journal_id: i32,
    pub property: String,
    pub prop_key: String,
    pub old_value: Option<String>,
    pub value: Option<String>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::journal_details)]
pub struct NewJournalDetail {
    pub journal_id: i32,
    pub property: String,
    pub prop_key: String,
    pub old_value: Option<String>,
    pub value: Option<String>,
}

// Comment models (news comments in stock Redmine)
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Comment {
    pub id: i32,
    pub commented_type: EntityKind,
    pub commented_id: i32,
    pub author_id: i32,
    pub content: Option<String>,
    pub created_on: NaiveDateTime,
    pub updated_on: NaiveDateTime,
}

impl Comment {
    pub fn commented(&self) -> PolymorphicRef {
        PolymorphicRef::new(self.commented_type.clone(), self.commented_id)
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::comments)]
pub struct NewComment {
    pub commented_type: EntityKind,
    pub commented_id: i32,
    pub author_id: i32,
    pub content: Option<String>,
    pub created_on: NaiveDateTime,
    pub updated_on: NaiveDateTime,
}

impl NewComment {
    pub fn on(
        target: &PolymorphicRef,
        author_id: i32,
        content: impl Into<String>,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            commented_type: target.kind.clone(),
            commented_id: target.id,
            author_id,
            content: Some(content.into()),
            created_on: now,
            updated_on: now,
        }
    }
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::watchers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Watcher {
    pub id: i32,
    pub watchable_type: EntityKind,
    pub watchable_id: i32,
    pub user_id: Option<i32>,
}

impl Watcher {
    pub fn watchable(&self) -> PolymorphicRef {
        PolymorphicRef::new(self.watchable_type.clone(), self.watchable_id)
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::watchers)]
pub struct NewWatcher {
    pub watchable_type: EntityKind,
    pub watchable_id: i32,
    pub user_id: Option<i32>,
}

impl NewWatcher {
    pub fn on(target: &PolymorphicRef, user_id: i32) -> Self {
        Self {
            watchable_type: target.kind.clone(),
            watchable_id: target.id,
            user_id: Some(user_id),
        }
    }
}
