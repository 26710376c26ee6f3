use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::enums::{EnumerationKind, RelationType};
use crate::db::tree::NestedSetBounds;

// Issue models
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::issues)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Issue {
    pub id: i32,
    pub tracker_id: i32,
    pub project_id: i32,
    pub subject: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub category_id: Option<i32>,
    pub status_id: i32,
    pub assigned_to_id: Option<i32>,
    pub priority_id: i32,
    pub fixed_version_id: Option<i32>,
    pub author_id: i32,
    pub lock_version: i32,
    pub created_on: Option<NaiveDateTime>,
    pub updated_on: Option<NaiveDateTime>,
    pub start_date: Option<NaiveDate>,
    pub done_ratio: i32,
    pub estimated_hours: Option<f64>,
    pub parent_id: Option<i32>,
    pub root_id: Option<i32>,
    pub lft: Option<i32>,
    pub rgt: Option<i32>,
    pub is_private: bool,
    pub closed_on: Option<NaiveDateTime>,
}

impl Issue {
    /// Stored nested-set bounds. Issue trees are numbered per root.
    pub fn bounds(&self) -> Option<NestedSetBounds> {
        match (self.root_id, self.lft, self.rgt) {
            (Some(root_id), Some(lft), Some(rgt)) => Some(NestedSetBounds {
                id: self.id,
                root_id,
                lft,
                rgt,
            }),
            _ => None,
        }
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::issues)]
pub struct NewIssue {
    pub tracker_id: i32,
    pub project_id: i32,
    pub subject: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub category_id: Option<i32>,
    pub status_id: i32,
    pub assigned_to_id: Option<i32>,
    pub priority_id: i32,
    pub fixed_version_id: Option<i32>,
    pub author_id: i32,
    pub lock_version: i32,
    pub created_on: Option<NaiveDateTime>,
    pub updated_on: Option<NaiveDateTime>,
    pub start_date: Option<NaiveDate>,
    pub done_ratio: i32,
    pub estimated_hours: Option<f64>,
    pub parent_id: Option<i32>,
    pub root_id: Option<i32>,
    pub lft: Option<i32>,
    pub rgt: Option<i32>,
    pub is_private: bool,
    pub closed_on: Option<NaiveDateTime>,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::issue_statuses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct IssueStatus {
    pub id: i32,
    pub name: String,
    pub is_closed: bool,
    pub position: Option<i32>,
    pub default_done_ratio: Option<i32>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::issue_statuses)]
pub struct NewIssueStatus {
    pub name: String,
    pub is_closed: bool,
    pub position: Option<i32>,
    pub default_done_ratio: Option<i32>,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::trackers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Tracker {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_in_chlog: bool,
    pub position: Option<i32>,
    pub is_in_roadmap: bool,
    pub fields_bits: Option<i32>,
    pub default_status_id: Option<i32>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::trackers)]
pub struct NewTracker {
    pub name: String,
    pub description: Option<String>,
    pub is_in_chlog: bool,
    pub position: Option<i32>,
    pub is_in_roadmap: bool,
    pub fields_bits: Option<i32>,
    pub default_status_id: Option<i32>,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::issue_categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct IssueCategory {
    pub id: i32,
    pub project_id: i32,
    pub name: String,
    pub assigned_to_id: Option<i32>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::issue_categories)]
pub struct NewIssueCategory {
    pub project_id: i32,
    pub name: String,
    pub assigned_to_id: Option<i32>,
}

// Directed: at most one relation per ordered (from, to) pair.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::issue_relations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct IssueRelation {
    pub id: i32,
    pub issue_from_id: i32,
    pub issue_to_id: i32,
    pub relation_type: RelationType,
    pub delay: Option<i32>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::issue_relations)]
pub struct NewIssueRelation {
    pub issue_from_id: i32,
    pub issue_to_id: i32,
    pub relation_type: RelationType,
    pub delay: Option<i32>,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::checklists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Checklist {
    pub id: i32,
    pub is_done: bool,
    pub subject: Option<String>,
    pub position: i32,
    pub issue_id: i32,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub is_section: bool,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::checklists)]
pub struct NewChecklist {
    pub is_done: bool,
    pub subject: Option<String>,
    pub position: i32,
    pub issue_id: i32,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub is_section: bool,
}

impl NewChecklist {
    pub fn item(issue_id: i32, subject: impl Into<String>, position: i32) -> Self {
        Self {
            is_done: false,
            subject: Some(subject.into()),
            position,
            issue_id,
            created_at: None,
            updated_at: None,
            is_section: false,
        }
    }
}

// A transition (or field permission) rule: tracker x old status x new status x role.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::workflows)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Workflow {
    pub id: i32,
    pub tracker_id: i32,
    pub old_status_id: i32,
    pub new_status_id: i32,
    pub role_id: i32,
    pub assignee: bool,
    pub author: bool,
    pub type_: Option<String>,
    pub field_name: Option<String>,
    pub rule: Option<String>,
}

impl Workflow {
    pub const TYPE_TRANSITION: &'static str = "WorkflowTransition";
    pub const TYPE_PERMISSION: &'static str = "WorkflowPermission";

    pub fn is_transition(&self) -> bool {
        self.type_.as_deref() == Some(Self::TYPE_TRANSITION)
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::workflows)]
pub struct NewWorkflow {
    pub tracker_id: i32,
    pub old_status_id: i32,
    pub new_status_id: i32,
    pub role_id: i32,
    pub assignee: bool,
    pub author: bool,
    pub type_: Option<String>,
    pub field_name: Option<String>,
    pub rule: Option<String>,
}

// Enumerations: priorities, time entry activities, document categories.
// Project-level overrides point at the system-wide row through parent_id.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::enumerations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Enumeration {
    pub id: i32,
    pub name: String,
    pub position: Option<i32>,
    pub is_default: bool,
    pub type_: Option<EnumerationKind>,
    pub active: bool,
    pub project_id: Option<i32>,
    pub parent_id: Option<i32>,
    pub position_name: Option<String>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::enumerations)]
pub struct NewEnumeration {
    pub name: String,
    pub position: Option<i32>,
    pub is_default: bool,
    pub type_: Option<EnumerationKind>,
    pub active: bool,
    pub project_id: Option<i32>,
    pub parent_id: Option<i32>,
    pub position_name: Option<String>,
}
