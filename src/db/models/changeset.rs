use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

// Source repositories attached to a project
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::repositories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Repository {
    pub id: i32,
    pub project_id: i32,
    pub url: String,
    pub login: Option<String>,
    pub password: Option<String>,
    pub root_url: Option<String>,
    pub type_: Option<String>,
    pub path_encoding: Option<String>,
    pub log_encoding: Option<String>,
    pub extra_info: Option<String>,
    pub identifier: Option<String>,
    pub is_default: Option<bool>,
    pub created_on: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::repositories)]
pub struct NewRepository {
    pub project_id: i32,
    pub url: String,
    pub login: Option<String>,
    pub password: Option<String>,
    pub root_url: Option<String>,
    pub type_: Option<String>,
    pub path_encoding: Option<String>,
    pub log_encoding: Option<String>,
    pub extra_info: Option<String>,
    pub identifier: Option<String>,
    pub is_default: Option<bool>,
    pub created_on: Option<NaiveDateTime>,
}

// One row per (repository, revision)
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::changesets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Changeset {
    pub id: i32,
    pub repository_id: i32,
    pub revision: String,
    pub committer: Option<String>,
    pub committed_on: NaiveDateTime,
    pub comments: Option<String>,
    pub commit_date: Option<NaiveDate>,
    pub scmid: Option<String>,
    pub user_id: Option<i32>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::changesets)]
pub struct NewChangeset {
    pub repository_id: i32,
    pub revision: String,
    pub committer: Option<String>,
    pub committed_on: NaiveDateTime,
    pub comments: Option<String>,
    pub commit_date: Option<NaiveDate>,
    pub scmid: Option<String>,
    pub user_id: Option<i32>,
}

impl NewChangeset {
    pub fn new(repository_id: i32, revision: impl Into<String>, committed_on: NaiveDateTime) -> Self {
        Self {
            repository_id,
            revision: revision.into(),
            committer: None,
            committed_on,
            comments: None,
            commit_date: Some(committed_on.date()),
            scmid: None,
            user_id: None,
        }
    }
}

// File-level entries of a changeset. `action` is one of A, M, D, R.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::changes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Change {
    pub id: i32,
    pub changeset_id: i32,
    pub action: String,
    pub path: String,
    pub from_path: Option<String>,
    pub from_revision: Option<String>,
    pub revision: Option<String>,
    pub branch: Option<String>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::changes)]
pub struct NewChange {
    pub changeset_id: i32,
    pub action: String,
    pub path: String,
    pub from_path: Option<String>,
    pub from_revision: Option<String>,
    pub revision: Option<String>,
    pub branch: Option<String>,
}

// Edge of the commit DAG. `parent_id` is a changeset id but carries no
// foreign key upstream.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::changeset_parents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ChangesetParent {
    pub id: i32,
    pub changeset_id: i32,
    pub parent_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::changeset_parents)]
pub struct NewChangesetParent {
    pub changeset_id: i32,
    pub parent_id: i32,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::changesets_issues)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ChangesetIssue {
    pub id: i32,
    pub changeset_id: i32,
    pub issue_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::changesets_issues)]
pub struct NewChangesetIssue {
    pub changeset_id: i32,
    pub issue_id: i32,
}
