use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

// User models. Groups share the users table (`type_` = "Group").
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i32,
    pub login: String,
    pub hashed_password: String,
    pub firstname: String,
    pub lastname: String,
    pub admin: bool,
    pub status: i32,
    pub last_login_on: Option<NaiveDateTime>,
    pub language: Option<String>,
    pub auth_source_id: Option<i32>,
    pub created_on: Option<NaiveDateTime>,
    pub updated_on: Option<NaiveDateTime>,
    pub type_: Option<String>,
    pub identity_url: Option<String>,
    pub mail_notification: String,
    pub salt: Option<String>,
    pub must_change_passwd: bool,
    pub passwd_changed_on: Option<NaiveDateTime>,
}

impl User {
    pub const STATUS_ANONYMOUS: i32 = 0;
    pub const STATUS_ACTIVE: i32 = 1;
    pub const STATUS_REGISTERED: i32 = 2;
    pub const STATUS_LOCKED: i32 = 3;

    pub fn is_active(&self) -> bool {
        self.status == Self::STATUS_ACTIVE
    }

    pub fn is_locked(&self) -> bool {
        self.status == Self::STATUS_LOCKED
    }

    pub fn is_group(&self) -> bool {
        self.type_.as_deref() == Some("Group")
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub login: String,
    pub hashed_password: String,
    pub firstname: String,
    pub lastname: String,
    pub admin: bool,
    pub status: i32,
    pub last_login_on: Option<NaiveDateTime>,
    pub language: Option<String>,
    pub auth_source_id: Option<i32>,
    pub created_on: Option<NaiveDateTime>,
    pub updated_on: Option<NaiveDateTime>,
    pub type_: Option<String>,
    pub identity_url: Option<String>,
    pub mail_notification: String,
    pub salt: Option<String>,
    pub must_change_passwd: bool,
    pub passwd_changed_on: Option<NaiveDateTime>,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::auth_sources)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AuthSource {
    pub id: i32,
    pub type_: String,
    pub name: String,
    pub host: Option<String>,
    pub port: Option<i32>,
    pub account: Option<String>,
    pub account_password: Option<String>,
    pub base_dn: Option<String>,
    pub attr_login: Option<String>,
    pub attr_firstname: Option<String>,
    pub attr_lastname: Option<String>,
    pub attr_mail: Option<String>,
    pub onthefly_register: bool,
    pub tls: bool,
    pub filter: Option<String>,
    pub timeout: Option<i32>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::auth_sources)]
pub struct NewAuthSource {
    pub type_: String,
    pub name: String,
    pub host: Option<String>,
    pub port: Option<i32>,
    pub account: Option<String>,
    pub account_password: Option<String>,
    pub base_dn: Option<String>,
    pub attr_login: Option<String>,
    pub attr_firstname: Option<String>,
    pub attr_lastname: Option<String>,
    pub attr_mail: Option<String>,
    pub onthefly_register: bool,
    pub tls: bool,
    pub filter: Option<String>,
    pub timeout: Option<i32>,
}

// Exactly one default address per user is up to the writer; nothing stored
// enforces it.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::email_addresses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EmailAddress {
    pub id: i32,
    pub user_id: i32,
    pub address: String,
    pub is_default: bool,
    pub notify: bool,
    pub created_on: NaiveDateTime,
    pub updated_on: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::email_addresses)]
pub struct NewEmailAddress {
    pub user_id: i32,
    pub address: String,
    pub is_default: bool,
    pub notify: bool,
    pub created_on: NaiveDateTime,
    pub updated_on: NaiveDateTime,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::tokens)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Token {
    pub id: i32,
    pub user_id: i32,
    pub action: String,
    pub value: String,
    pub created_on: NaiveDateTime,
    pub updated_on: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::tokens)]
pub struct NewToken {
    pub user_id: i32,
    pub action: String,
    pub value: String,
    pub created_on: NaiveDateTime,
    pub updated_on: Option<NaiveDateTime>,
}

// Group membership; both sides are rows of `users`.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::groups_users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GroupUser {
    pub id: i32,
    pub group_id: i32,
    pub user_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::groups_users)]
pub struct NewGroupUser {
    pub group_id: i32,
    pub user_id: i32,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::user_preferences)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserPreference {
    pub id: i32,
    pub user_id: i32,
    pub others: Option<String>,
    pub hide_mail: Option<bool>,
    pub time_zone: Option<String>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::user_preferences)]
pub struct NewUserPreference {
    pub user_id: i32,
    pub others: Option<String>,
    pub hide_mail: Option<bool>,
    pub time_zone: Option<String>,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::open_id_authentication_associations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OpenIdAuthenticationAssociation {
    pub id: i32,
    pub issued: Option<i32>,
    pub lifetime: Option<i32>,
    pub handle: Option<String>,
    pub assoc_type: Option<String>,
    pub server_url: Option<Vec<u8>>,
    pub secret: Option<Vec<u8>>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::open_id_authentication_associations)]
pub struct NewOpenIdAuthenticationAssociation {
    pub issued: Option<i32>,
    pub lifetime: Option<i32>,
    pub handle: Option<String>,
    pub assoc_type: Option<String>,
    pub server_url: Option<Vec<u8>>,
    pub secret: Option<Vec<u8>>,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::open_id_authentication_nonces)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OpenIdAuthenticationNonce {
    pub id: i32,
    pub timestamp: i32,
    pub server_url: Option<String>,
    pub salt: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::open_id_authentication_nonces)]
pub struct NewOpenIdAuthenticationNonce {
    pub timestamp: i32,
    pub server_url: Option<String>,
    pub salt: String,
}
