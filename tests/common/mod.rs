// Shared database fixtures. Tests that need Postgres read TEST_DATABASE_URL
// and skip themselves when it is unset.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{NaiveDate, NaiveDateTime};
use diesel::connection::SimpleConnection;
use diesel::{Connection, PgConnection};

use redmine_schema::db::enums::EnumerationKind;
use redmine_schema::db::models::*;
use redmine_schema::db::repositories::*;
use redmine_schema::db::set_search_path_sql;

const FIXTURE: &str = include_str!("../fixtures/redmine_schema.sql");

static SCHEMA_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub struct TestDb {
    pub conn: PgConnection,
    pub schema: String,
}

/// Connects, opens a transaction that is never committed and loads the
/// fixture tables into a fresh schema inside it.
pub fn test_db() -> Option<TestDb> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let mut conn = PgConnection::establish(&url).expect("connect to TEST_DATABASE_URL");
    conn.begin_test_transaction()
        .expect("begin test transaction");

    let schema = format!(
        "redmine_test_{}_{}",
        std::process::id(),
        SCHEMA_COUNTER.fetch_add(1, Ordering::SeqCst)
    );
    conn.batch_execute(&format!("CREATE SCHEMA \"{}\"", schema))
        .expect("create schema");
    conn.batch_execute(&set_search_path_sql(&schema))
        .expect("set search_path");
    conn.batch_execute(FIXTURE).expect("load fixture");

    Some(TestDb { conn, schema })
}

macro_rules! test_db {
    () => {
        match crate::common::test_db() {
            Some(db) => db,
            None => {
                eprintln!("TEST_DATABASE_URL not set, skipping");
                return;
            }
        }
    };
}

pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 20)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

pub fn new_user(login: &str) -> NewUser {
    NewUser {
        login: login.to_string(),
        hashed_password: "x".repeat(40),
        firstname: "Test".to_string(),
        lastname: login.to_string(),
        admin: false,
        status: User::STATUS_ACTIVE,
        last_login_on: None,
        language: Some("en".to_string()),
        auth_source_id: None,
        created_on: Some(now()),
        updated_on: Some(now()),
        type_: Some("User".to_string()),
        identity_url: None,
        mail_notification: "only_my_events".to_string(),
        salt: None,
        must_change_passwd: false,
        passwd_changed_on: None,
    }
}

pub fn seed_user(conn: &mut PgConnection, login: &str) -> User {
    UserRepo::insert(conn, &new_user(login)).expect("insert user")
}

pub fn new_project(name: &str, parent: Option<i32>) -> NewProject {
    NewProject {
        name: name.to_string(),
        description: None,
        homepage: None,
        is_public: true,
        parent_id: parent,
        created_on: Some(now()),
        updated_on: Some(now()),
        identifier: Some(name.to_lowercase().replace(' ', "-")),
        status: Project::STATUS_ACTIVE,
        lft: None,
        rgt: None,
        inherit_members: false,
        default_version_id: None,
        default_assigned_to_id: None,
    }
}

pub fn seed_project(conn: &mut PgConnection, name: &str, parent: Option<i32>) -> Project {
    ProjectRepo::insert(conn, &new_project(name, parent)).expect("insert project")
}

pub fn new_role(name: &str, position: i32) -> NewRole {
    NewRole {
        name: name.to_string(),
        position: Some(position),
        assignable: None,
        builtin: Role::NOT_BUILTIN,
        permissions: None,
        issues_visibility: "default".to_string(),
        users_visibility: "all".to_string(),
        time_entries_visibility: "all".to_string(),
        all_roles_managed: false,
        settings: None,
    }
}

/// Rows every issue needs: a tracker, a status and a priority.
pub struct IssueCatalog {
    pub tracker: Tracker,
    pub status: IssueStatus,
    pub priority: Enumeration,
}

pub fn new_enumeration(name: &str, kind: EnumerationKind) -> NewEnumeration {
    NewEnumeration {
        name: name.to_string(),
        position: Some(1),
        is_default: false,
        type_: Some(kind),
        active: true,
        project_id: None,
        parent_id: None,
        position_name: None,
    }
}

pub fn seed_issue_catalog(conn: &mut PgConnection) -> IssueCatalog {
    let status = IssueStatusRepo::insert(
        conn,
        &NewIssueStatus {
            name: "New".to_string(),
            is_closed: false,
            position: Some(1),
            default_done_ratio: None,
        },
    )
    .expect("insert status");
    let tracker = TrackerRepo::insert(
        conn,
        &NewTracker {
            name: "Bug".to_string(),
            description: None,
            is_in_chlog: true,
            position: Some(1),
            is_in_roadmap: false,
            fields_bits: Some(0),
            default_status_id: Some(status.id),
        },
    )
    .expect("insert tracker");
    let priority = EnumerationRepo::insert(
        conn,
        &new_enumeration("Normal", EnumerationKind::IssuePriority),
    )
    .expect("insert priority");

    IssueCatalog {
        tracker,
        status,
        priority,
    }
}

pub fn new_issue(
    catalog: &IssueCatalog,
    project_id: i32,
    author_id: i32,
    subject: &str,
    parent: Option<i32>,
) -> NewIssue {
    NewIssue {
        tracker_id: catalog.tracker.id,
        project_id,
        subject: subject.to_string(),
        description: None,
        due_date: None,
        category_id: None,
        status_id: catalog.status.id,
        assigned_to_id: None,
        priority_id: catalog.priority.id,
        fixed_version_id: None,
        author_id,
        lock_version: 0,
        created_on: Some(now()),
        updated_on: Some(now()),
        start_date: None,
        done_ratio: 0,
        estimated_hours: None,
        parent_id: parent,
        root_id: None,
        lft: None,
        rgt: None,
        is_private: false,
        closed_on: None,
    }
}

pub fn seed_issue(
    conn: &mut PgConnection,
    catalog: &IssueCatalog,
    project_id: i32,
    author_id: i32,
    subject: &str,
    parent: Option<i32>,
) -> Issue {
    IssueRepo::insert(conn, &new_issue(catalog, project_id, author_id, subject, parent))
        .expect("insert issue")
}

pub fn seed_repository(conn: &mut PgConnection, project_id: i32) -> Repository {
    RepositoryRepo::insert(
        conn,
        &NewRepository {
            project_id,
            url: "https://git.example.org/core.git".to_string(),
            login: None,
            password: None,
            root_url: None,
            type_: Some("Repository::Git".to_string()),
            path_encoding: None,
            log_encoding: None,
            extra_info: None,
            identifier: Some("core".to_string()),
            is_default: Some(true),
            created_on: Some(now()),
        },
    )
    .expect("insert repository")
}
