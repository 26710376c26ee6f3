use diesel::prelude::*;

use crate::db::models::wiki::{
    NewWiki, NewWikiContent, NewWikiContentVersion, NewWikiPage, NewWikiRedirect, Wiki,
    WikiContent, WikiContentVersion, WikiPage, WikiRedirect,
};
use crate::db::repositories::record_repo;
use crate::db::tree;
use crate::error::AppResult;

record_repo!(WikiRepo, wikis, Wiki, NewWiki);
record_repo!(WikiPageRepo, wiki_pages, WikiPage, NewWikiPage);
record_repo!(WikiContentRepo, wiki_contents, WikiContent, NewWikiContent);
record_repo!(
    WikiContentVersionRepo,
    wiki_content_versions,
    WikiContentVersion,
    NewWikiContentVersion
);
record_repo!(WikiRedirectRepo, wiki_redirects, WikiRedirect, NewWikiRedirect);

impl WikiRepo {
    pub fn find_by_project(conn: &mut PgConnection, target_project_id: i32) -> AppResult<Option<Wiki>> {
        use crate::schema::wikis::dsl::*;
        let found = wikis
            .filter(project_id.eq(target_project_id))
            .select(Wiki::as_select())
            .first(conn)
            .optional()?;
        Ok(found)
    }
}

impl WikiPageRepo {
    pub fn find_by_title(
        conn: &mut PgConnection,
        target_wiki_id: i32,
        target_title: &str,
    ) -> AppResult<Option<WikiPage>> {
        use crate::schema::wiki_pages::dsl::*;
        let found = wiki_pages
            .filter(wiki_id.eq(target_wiki_id))
            .filter(title.eq(target_title))
            .select(WikiPage::as_select())
            .first(conn)
            .optional()?;
        Ok(found)
    }

    pub fn list_by_wiki(conn: &mut PgConnection, target_wiki_id: i32) -> AppResult<Vec<WikiPage>> {
        use crate::schema::wiki_pages::dsl::*;
        let rows = wiki_pages
            .filter(wiki_id.eq(target_wiki_id))
            .order(title.asc())
            .select(WikiPage::as_select())
            .load(conn)?;
        Ok(rows)
    }

    pub fn children(conn: &mut PgConnection, target_id: i32) -> AppResult<Vec<WikiPage>> {
        use crate::schema::wiki_pages::dsl::*;
        let rows = wiki_pages
            .filter(parent_id.eq(target_id))
            .order(title.asc())
            .select(WikiPage::as_select())
            .load(conn)?;
        Ok(rows)
    }

    pub fn ancestors(conn: &mut PgConnection, target_id: i32) -> AppResult<Vec<WikiPage>> {
        let start = Self::get(conn, target_id)?;
        tree::parent_chain(&start, |pid| Self::get(conn, pid))
    }
}

impl WikiContentRepo {
    /// Current content of a page.
    pub fn for_page(conn: &mut PgConnection, target_page_id: i32) -> AppResult<Option<WikiContent>> {
        use crate::schema::wiki_contents::dsl::*;
        let found = wiki_contents
            .filter(page_id.eq(target_page_id))
            .select(WikiContent::as_select())
            .first(conn)
            .optional()?;
        Ok(found)
    }
}

impl WikiContentVersionRepo {
    /// Stored revisions of a content, oldest first.
    pub fn history(
        conn: &mut PgConnection,
        target_content_id: i32,
    ) -> AppResult<Vec<WikiContentVersion>> {
        use crate::schema::wiki_content_versions::dsl::*;
        let rows = wiki_content_versions
            .filter(wiki_content_id.eq(target_content_id))
            .order(version.asc())
            .select(WikiContentVersion::as_select())
            .load(conn)?;
        Ok(rows)
    }

    pub fn find_version(
        conn: &mut PgConnection,
        target_content_id: i32,
        target_version: i32,
    ) -> AppResult<Option<WikiContentVersion>> {
        use crate::schema::wiki_content_versions::dsl::*;
        let found = wiki_content_versions
            .filter(wiki_content_id.eq(target_content_id))
            .filter(version.eq(target_version))
            .select(WikiContentVersion::as_select())
            .first(conn)
            .optional()?;
        Ok(found)
    }
}

impl WikiRedirectRepo {
    pub fn find_by_title(
        conn: &mut PgConnection,
        target_wiki_id: i32,
        target_title: &str,
    ) -> AppResult<Option<WikiRedirect>> {
        use crate::schema::wiki_redirects::dsl::*;
        let found = wiki_redirects
            .filter(wiki_id.eq(target_wiki_id))
            .filter(title.eq(target_title))
            .select(WikiRedirect::as_select())
            .first(conn)
            .optional()?;
        Ok(found)
    }
}
