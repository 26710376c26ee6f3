use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

// Wiki models: one wiki per project.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::wikis)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Wiki {
    pub id: i32,
    pub project_id: i32,
    pub start_page: String,
    pub status: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::wikis)]
pub struct NewWiki {
    pub project_id: i32,
    pub start_page: String,
    pub status: i32,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::wiki_pages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WikiPage {
    pub id: i32,
    pub wiki_id: i32,
    pub title: String,
    pub created_on: NaiveDateTime,
    pub protected: bool,
    pub parent_id: Option<i32>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::wiki_pages)]
pub struct NewWikiPage {
    pub wiki_id: i32,
    pub title: String,
    pub created_on: NaiveDateTime,
    pub protected: bool,
    pub parent_id: Option<i32>,
}

// Current text of a page
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::wiki_contents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WikiContent {
    pub id: i32,
    pub page_id: i32,
    pub author_id: Option<i32>,
    pub text: Option<String>,
    pub comments: Option<String>,
    pub updated_on: NaiveDateTime,
    pub version: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::wiki_contents)]
pub struct NewWikiContent {
    pub page_id: i32,
    pub author_id: Option<i32>,
    pub text: Option<String>,
    pub comments: Option<String>,
    pub updated_on: NaiveDateTime,
    pub version: i32,
}

// Past versions. `data` holds the text, gzip-deflated when `compression`
// is "gzip".
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::wiki_content_versions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WikiContentVersion {
    pub id: i32,
    pub wiki_content_id: i32,
    pub page_id: i32,
    pub author_id: Option<i32>,
    pub data: Option<Vec<u8>>,
    pub compression: Option<String>,
    pub comments: Option<String>,
    pub updated_on: NaiveDateTime,
    pub version: i32,
}

impl WikiContentVersion {
    pub fn is_compressed(&self) -> bool {
        matches!(self.compression.as_deref(), Some(c) if !c.is_empty())
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::wiki_content_versions)]
pub struct NewWikiContentVersion {
    pub wiki_content_id: i32,
    pub page_id: i32,
    pub author_id: Option<i32>,
    pub data: Option<Vec<u8>>,
    pub compression: Option<String>,
    pub comments: Option<String>,
    pub updated_on: NaiveDateTime,
    pub version: i32,
}

impl NewWikiContentVersion {
    /// Snapshot of a content row as an uncompressed history entry.
    pub fn snapshot(content: &WikiContent) -> Self {
        Self {
            wiki_content_id: content.id,
            page_id: content.page_id,
            author_id: content.author_id,
            data: content.text.as_ref().map(|t| t.as_bytes().to_vec()),
            compression: Some(String::new()),
            comments: content.comments.clone(),
            updated_on: content.updated_on,
            version: content.version,
        }
    }
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::wiki_redirects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WikiRedirect {
    pub id: i32,
    pub wiki_id: i32,
    pub title: Option<String>,
    pub redirects_to: Option<String>,
    pub created_on: NaiveDateTime,
    pub redirects_to_wiki_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::wiki_redirects)]
pub struct NewWikiRedirect {
    pub wiki_id: i32,
    pub title: Option<String>,
    pub redirects_to: Option<String>,
    pub created_on: NaiveDateTime,
    pub redirects_to_wiki_id: i32,
}
