use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::enums::VersionSharing;
use crate::db::tree::NestedSetBounds;

// Project models
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub is_public: bool,
    pub parent_id: Option<i32>,
    pub created_on: Option<NaiveDateTime>,
    pub updated_on: Option<NaiveDateTime>,
    pub identifier: Option<String>,
    pub status: i32,
    pub lft: Option<i32>,
    pub rgt: Option<i32>,
    pub inherit_members: bool,
    pub default_version_id: Option<i32>,
    pub default_assigned_to_id: Option<i32>,
}

impl Project {
    pub const STATUS_ACTIVE: i32 = 1;
    pub const STATUS_CLOSED: i32 = 5;
    pub const STATUS_ARCHIVED: i32 = 9;

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Stored nested-set bounds, if the tree has been numbered. All projects
    /// share one numbering, so the root id is reported as 0.
    pub fn bounds(&self) -> Option<NestedSetBounds> {
        match (self.lft, self.rgt) {
            (Some(lft), Some(rgt)) => Some(NestedSetBounds {
                id: self.id,
                root_id: 0,
                lft,
                rgt,
            }),
            _ => None,
        }
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::projects)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub is_public: bool,
    pub parent_id: Option<i32>,
    pub created_on: Option<NaiveDateTime>,
    pub updated_on: Option<NaiveDateTime>,
    pub identifier: Option<String>,
    pub status: i32,
    pub lft: Option<i32>,
    pub rgt: Option<i32>,
    pub inherit_members: bool,
    pub default_version_id: Option<i32>,
    pub default_assigned_to_id: Option<i32>,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::projects_trackers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectTracker {
    pub id: i32,
    pub project_id: i32,
    pub tracker_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::projects_trackers)]
pub struct NewProjectTracker {
    pub project_id: i32,
    pub tracker_id: i32,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::enabled_modules)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EnabledModule {
    pub id: i32,
    pub project_id: Option<i32>,
    pub name: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::enabled_modules)]
pub struct NewEnabledModule {
    pub project_id: Option<i32>,
    pub name: String,
}

// Version models
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::versions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Version {
    pub id: i32,
    pub project_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub effective_date: Option<NaiveDate>,
    pub created_on: Option<NaiveDateTime>,
    pub updated_on: Option<NaiveDateTime>,
    pub wiki_page_title: Option<String>,
    pub status: Option<String>,
    pub sharing: VersionSharing,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::versions)]
pub struct NewVersion {
    pub project_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub effective_date: Option<NaiveDate>,
    pub created_on: Option<NaiveDateTime>,
    pub updated_on: Option<NaiveDateTime>,
    pub wiki_page_title: Option<String>,
    pub status: Option<String>,
    pub sharing: VersionSharing,
}

// Saved issue/time entry queries (table `queries`)
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::queries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SavedQuery {
    pub id: i32,
    pub project_id: Option<i32>,
    pub name: String,
    pub filters: Option<String>,
    pub user_id: i32,
    pub column_names: Option<String>,
    pub sort_criteria: Option<String>,
    pub group_by: Option<String>,
    pub type_: Option<String>,
    pub visibility: Option<i32>,
    pub options: Option<String>,
}

impl SavedQuery {
    pub const VISIBILITY_PRIVATE: i32 = 0;
    pub const VISIBILITY_ROLES: i32 = 1;
    pub const VISIBILITY_PUBLIC: i32 = 2;
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::queries)]
pub struct NewSavedQuery {
    pub project_id: Option<i32>,
    pub name: String,
    pub filters: Option<String>,
    pub user_id: i32,
    pub column_names: Option<String>,
    pub sort_criteria: Option<String>,
    pub group_by: Option<String>,
    pub type_: Option<String>,
    pub visibility: Option<i32>,
    pub options: Option<String>,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::queries_roles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct QueryRole {
    pub id: i32,
    pub query_id: i32,
    pub role_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::queries_roles)]
pub struct NewQueryRole {
    pub query_id: i32,
    pub role_id: i32,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::news)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct News {
    pub id: i32,
    pub project_id: Option<i32>,
    pub title: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub author_id: i32,
    pub created_on: Option<NaiveDateTime>,
    pub comments_count: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::news)]
pub struct NewNews {
    pub project_id: Option<i32>,
    pub title: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub author_id: i32,
    pub created_on: Option<NaiveDateTime>,
    pub comments_count: i32,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::documents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Document {
    pub id: i32,
    pub project_id: i32,
    pub category_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub created_on: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::documents)]
pub struct NewDocument {
    pub project_id: i32,
    pub category_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub created_on: Option<NaiveDateTime>,
}
