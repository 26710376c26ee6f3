use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::enums::EntityKind;
use crate::db::models::polymorphic::PolymorphicRef;

// Application settings as name/value pairs.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::settings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Setting {
    pub id: i32,
    pub name: String,
    pub value: Option<String>,
    pub updated_on: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::settings)]
pub struct NewSetting {
    pub name: String,
    pub value: Option<String>,
    pub updated_on: Option<NaiveDateTime>,
}

// Attachments. The logical `filename` is what users see; the bytes live
// under `disk_directory`/`disk_filename`.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::attachments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Attachment {
    pub id: i32,
    pub container_id: Option<i32>,
    pub container_type: Option<EntityKind>,
    pub filename: String,
    pub disk_filename: String,
    pub filesize: i64,
    pub content_type: Option<String>,
    pub digest: String,
    pub downloads: i32,
    pub author_id: i32,
    pub created_on: Option<NaiveDateTime>,
    pub description: Option<String>,
    pub disk_directory: Option<String>,
}

impl Attachment {
    /// None while the upload is not yet attached to anything.
    pub fn container(&self) -> Option<PolymorphicRef> {
        match (&self.container_type, self.container_id) {
            (Some(kind), Some(id)) => Some(PolymorphicRef::new(kind.clone(), id)),
            _ => None,
        }
    }

    /// Path of the stored file relative to the attachments root.
    pub fn disk_path(&self) -> String {
        match self.disk_directory.as_deref() {
            Some(dir) if !dir.is_empty() => format!("{}/{}", dir, self.disk_filename),
            _ => self.disk_filename.clone(),
        }
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::attachments)]
pub struct NewAttachment {
    pub container_id: Option<i32>,
    pub container_type: Option<EntityKind>,
    pub filename: String,
    pub disk_filename: String,
    pub filesize: i64,
    pub content_type: Option<String>,
    pub digest: String,
    pub downloads: i32,
    pub author_id: i32,
    pub created_on: Option<NaiveDateTime>,
    pub description: Option<String>,
    pub disk_directory: Option<String>,
}

impl NewAttachment {
    pub fn attach_to(mut self, container: &PolymorphicRef) -> Self {
        self.container_type = Some(container.kind.clone());
        self.container_id = Some(container.id);
        self
    }
}

// Import jobs and their per-row outcome
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::imports)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Import {
    pub id: i32,
    pub type_: Option<String>,
    pub user_id: i32,
    pub filename: Option<String>,
    pub settings: Option<String>,
    pub total_items: Option<i32>,
    pub finished: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::imports)]
pub struct NewImport {
    pub type_: Option<String>,
    pub user_id: i32,
    pub filename: Option<String>,
    pub settings: Option<String>,
    pub total_items: Option<i32>,
    pub finished: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// `obj_id` is the id of the created record, None when the row failed and
// `message` says why.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::import_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ImportItem {
    pub id: i32,
    pub import_id: i32,
    pub position: i32,
    pub obj_id: Option<i32>,
    pub message: Option<String>,
}

impl ImportItem {
    pub fn succeeded(&self) -> bool {
        self.obj_id.is_some()
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::import_items)]
pub struct NewImportItem {
    pub import_id: i32,
    pub position: i32,
    pub obj_id: Option<i32>,
    pub message: Option<String>,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::schema_migrations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SchemaMigration {
    pub id: i32,
    pub version: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::schema_migrations)]
pub struct NewSchemaMigration {
    pub version: String,
}
