use diesel::prelude::*;

use crate::db::models::journal::{
    Comment, Journal, JournalDetail, NewComment, NewJournal, NewJournalDetail, NewWatcher, Watcher,
};
use crate::db::models::polymorphic::PolymorphicRef;
use crate::db::repositories::record_repo;
use crate::error::AppResult;

record_repo!(JournalRepo, journals, Journal, NewJournal);
record_repo!(JournalDetailRepo, journal_details, JournalDetail, NewJournalDetail);
record_repo!(CommentRepo, comments, Comment, NewComment);
record_repo!(WatcherRepo, watchers, Watcher, NewWatcher);

// The (type, id) pairs below are not foreign keys: a target that no longer
// exists simply yields no rows.

impl JournalRepo {
    /// Change history of one record, oldest first.
    pub fn list_for(conn: &mut PgConnection, target: &PolymorphicRef) -> AppResult<Vec<Journal>> {
        use crate::schema::journals::dsl::*;
        let rows = journals
            .filter(journalized_type.eq(target.kind.as_str()))
            .filter(journalized_id.eq(target.id))
            .order((created_on.asc(), id.asc()))
            .select(Journal::as_select())
            .load(conn)?;
        Ok(rows)
    }
}

impl JournalDetailRepo {
    pub fn list_by_journal(
        conn: &mut PgConnection,
        target_journal_id: i32,
    ) -> AppResult<Vec<JournalDetail>> {
        use crate::schema::journal_details::dsl::*;
        let rows = journal_details
            .filter(journal_id.eq(target_journal_id))
            .order(id.asc())
            .select(JournalDetail::as_select())
            .load(conn)?;
        Ok(rows)
    }
}

impl CommentRepo {
    pub fn list_for(conn: &mut PgConnection, target: &PolymorphicRef) -> AppResult<Vec<Comment>> {
        use crate::schema::comments::dsl::*;
        let rows = comments
            .filter(commented_type.eq(target.kind.as_str()))
            .filter(commented_id.eq(target.id))
            .order((created_on.asc(), id.asc()))
            .select(Comment::as_select())
            .load(conn)?;
        Ok(rows)
    }
}

impl WatcherRepo {
    pub fn list_for(conn: &mut PgConnection, target: &PolymorphicRef) -> AppResult<Vec<Watcher>> {
        use crate::schema::watchers::dsl::*;
        let rows = watchers
            .filter(watchable_type.eq(target.kind.as_str()))
            .filter(watchable_id.eq(target.id))
            .order(id.asc())
            .select(Watcher::as_select())
            .load(conn)?;
        Ok(rows)
    }

    pub fn is_watching(
        conn: &mut PgConnection,
        target: &PolymorphicRef,
        principal_id: i32,
    ) -> AppResult<bool> {
        use crate::schema::watchers::dsl::*;
        let found = diesel::select(diesel::dsl::exists(
            watchers
                .filter(watchable_type.eq(target.kind.as_str()))
                .filter(watchable_id.eq(target.id))
                .filter(user_id.eq(principal_id)),
        ))
        .get_result(conn)?;
        Ok(found)
    }
}
