use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

// Role models
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::roles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Role {
    pub id: i32,
    pub name: String,
    pub position: Option<i32>,
    pub assignable: Option<bool>,
    pub builtin: i32,
    pub permissions: Option<String>,
    pub issues_visibility: String,
    pub users_visibility: String,
    pub time_entries_visibility: String,
    pub all_roles_managed: bool,
    pub settings: Option<String>,
}

impl Role {
    pub const NOT_BUILTIN: i32 = 0;
    pub const BUILTIN_NON_MEMBER: i32 = 1;
    pub const BUILTIN_ANONYMOUS: i32 = 2;

    pub fn is_builtin(&self) -> bool {
        self.builtin != Self::NOT_BUILTIN
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::roles)]
pub struct NewRole {
    pub name: String,
    pub position: Option<i32>,
    pub assignable: Option<bool>,
    pub builtin: i32,
    pub permissions: Option<String>,
    pub issues_visibility: String,
    pub users_visibility: String,
    pub time_entries_visibility: String,
    pub all_roles_managed: bool,
    pub settings: Option<String>,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::roles_managed_roles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RoleManagedRole {
    pub id: i32,
    pub role_id: i32,
    pub managed_role_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::roles_managed_roles)]
pub struct NewRoleManagedRole {
    pub role_id: i32,
    pub managed_role_id: i32,
}

// Member models: one row per user and project.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Member {
    pub id: i32,
    pub user_id: i32,
    pub project_id: i32,
    pub created_on: Option<NaiveDateTime>,
    pub mail_notification: bool,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::members)]
pub struct NewMember {
    pub user_id: i32,
    pub project_id: i32,
    pub created_on: Option<NaiveDateTime>,
    pub mail_notification: bool,
}

// `inherited_from` holds the id of the member role this one was copied from
// (group or parent project membership). It is not a foreign key.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::member_roles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MemberRole {
    pub id: i32,
    pub member_id: i32,
    pub role_id: i32,
    pub inherited_from: Option<i32>,
}

impl MemberRole {
    pub fn is_inherited(&self) -> bool {
        self.inherited_from.is_some()
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::member_roles)]
pub struct NewMemberRole {
    pub member_id: i32,
    pub role_id: i32,
    pub inherited_from: Option<i32>,
}
