use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

// Forum boards. `last_message_id` is a denormalized pointer at the newest
// message and is restricted like any other reference.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::boards)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Board {
    pub id: i32,
    pub project_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub position: Option<i32>,
    pub topics_count: i32,
    pub messages_count: i32,
    pub last_message_id: Option<i32>,
    pub parent_id: Option<i32>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::boards)]
pub struct NewBoard {
    pub project_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub position: Option<i32>,
    pub topics_count: i32,
    pub messages_count: i32,
    pub last_message_id: Option<i32>,
    pub parent_id: Option<i32>,
}

// Messages: a topic has no parent, replies point at the topic.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Message {
    pub id: i32,
    pub board_id: i32,
    pub parent_id: Option<i32>,
    pub subject: String,
    pub content: Option<String>,
    pub author_id: Option<i32>,
    pub replies_count: i32,
    pub last_reply_id: Option<i32>,
    pub created_on: NaiveDateTime,
    pub updated_on: NaiveDateTime,
    pub locked: Option<bool>,
    pub sticky: Option<i32>,
}

impl Message {
    pub fn is_topic(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::messages)]
pub struct NewMessage {
    pub board_id: i32,
    pub parent_id: Option<i32>,
    pub subject: String,
    pub content: Option<String>,
    pub author_id: Option<i32>,
    pub replies_count: i32,
    pub last_reply_id: Option<i32>,
    pub created_on: NaiveDateTime,
    pub updated_on: NaiveDateTime,
    pub locked: Option<bool>,
    pub sticky: Option<i32>,
}

impl NewMessage {
    pub fn new(
        board_id: i32,
        parent_id: Option<i32>,
        subject: impl Into<String>,
        author_id: Option<i32>,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            board_id,
            parent_id,
            subject: subject.into(),
            content: None,
            author_id,
            replies_count: 0,
            last_reply_id: None,
            created_on: now,
            updated_on: now,
            locked: None,
            sticky: None,
        }
    }
}
