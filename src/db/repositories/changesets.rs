use diesel::prelude::*;

use crate::db::models::changeset::{
    Change, Changeset, ChangesetIssue, ChangesetParent, NewChange, NewChangeset, NewChangesetIssue,
    NewChangesetParent, NewRepository, Repository,
};
use crate::db::models::issue::Issue;
use crate::db::repositories::record_repo;
use crate::error::AppResult;

record_repo!(RepositoryRepo, repositories, Repository, NewRepository);
record_repo!(ChangesetRepo, changesets, Changeset, NewChangeset);
record_repo!(ChangeRepo, changes, Change, NewChange);
record_repo!(ChangesetParentRepo, changeset_parents, ChangesetParent, NewChangesetParent);
record_repo!(ChangesetIssueRepo, changesets_issues, ChangesetIssue, NewChangesetIssue);

impl RepositoryRepo {
    pub fn list_by_project(conn: &mut PgConnection, target_project_id: i32) -> AppResult<Vec<Repository>> {
        use crate::schema::repositories::dsl::*;
        let rows = repositories
            .filter(project_id.eq(target_project_id))
            .order(id.asc())
            .select(Repository::as_select())
            .load(conn)?;
        Ok(rows)
    }

    pub fn default_for_project(
        conn: &mut PgConnection,
        target_project_id: i32,
    ) -> AppResult<Option<Repository>> {
        use crate::schema::repositories::dsl::*;
        let found = repositories
            .filter(project_id.eq(target_project_id))
            .filter(is_default.eq(true))
            .select(Repository::as_select())
            .first(conn)
            .optional()?;
        Ok(found)
    }
}

impl ChangesetRepo {
    pub fn find_by_revision(
        conn: &mut PgConnection,
        target_repository_id: i32,
        target_revision: &str,
    ) -> AppResult<Option<Changeset>> {
        use crate::schema::changesets::dsl::*;
        let found = changesets
            .filter(repository_id.eq(target_repository_id))
            .filter(revision.eq(target_revision))
            .select(Changeset::as_select())
            .first(conn)
            .optional()?;
        Ok(found)
    }

    pub fn list_by_repository(
        conn: &mut PgConnection,
        target_repository_id: i32,
    ) -> AppResult<Vec<Changeset>> {
        use crate::schema::changesets::dsl::*;
        let rows = changesets
            .filter(repository_id.eq(target_repository_id))
            .order((committed_on.desc(), id.desc()))
            .select(Changeset::as_select())
            .load(conn)?;
        Ok(rows)
    }

    /// Direct parents in the commit graph.
    pub fn parents(conn: &mut PgConnection, target_changeset_id: i32) -> AppResult<Vec<Changeset>> {
        use crate::schema::{changeset_parents, changesets};
        let parent_ids = changeset_parents::table
            .filter(changeset_parents::changeset_id.eq(target_changeset_id))
            .select(changeset_parents::parent_id);
        let rows = changesets::table
            .filter(changesets::id.eq_any(parent_ids))
            .order(changesets::id.asc())
            .select(Changeset::as_select())
            .load(conn)?;
        Ok(rows)
    }

    /// Changesets that list this one as a parent.
    pub fn children(conn: &mut PgConnection, target_changeset_id: i32) -> AppResult<Vec<Changeset>> {
        use crate::schema::{changeset_parents, changesets};
        let child_ids = changeset_parents::table
            .filter(changeset_parents::parent_id.eq(target_changeset_id))
            .select(changeset_parents::changeset_id);
        let rows = changesets::table
            .filter(changesets::id.eq_any(child_ids))
            .order(changesets::id.asc())
            .select(Changeset::as_select())
            .load(conn)?;
        Ok(rows)
    }

    /// Issues referenced by a commit message.
    pub fn issues(conn: &mut PgConnection, target_changeset_id: i32) -> AppResult<Vec<Issue>> {
        use crate::schema::{changesets_issues, issues};
        let rows = changesets_issues::table
            .inner_join(issues::table)
            .filter(changesets_issues::changeset_id.eq(target_changeset_id))
            .order(issues::id.asc())
            .select(Issue::as_select())
            .load(conn)?;
        Ok(rows)
    }

    pub fn for_issue(conn: &mut PgConnection, target_issue_id: i32) -> AppResult<Vec<Changeset>> {
        use crate::schema::{changesets, changesets_issues};
        let rows = changesets_issues::table
            .inner_join(changesets::table)
            .filter(changesets_issues::issue_id.eq(target_issue_id))
            .order((changesets::committed_on.asc(), changesets::id.asc()))
            .select(Changeset::as_select())
            .load(conn)?;
        Ok(rows)
    }
}

impl ChangeRepo {
    pub fn list_by_changeset(conn: &mut PgConnection, target_changeset_id: i32) -> AppResult<Vec<Change>> {
        use crate::schema::changes::dsl::*;
        let rows = changes
            .filter(changeset_id.eq(target_changeset_id))
            .order(id.asc())
            .select(Change::as_select())
            .load(conn)?;
        Ok(rows)
    }
}
