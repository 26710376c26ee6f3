use diesel::prelude::*;

use crate::db::models::board::{Board, Message, NewBoard, NewMessage};
use crate::db::repositories::record_repo;
use crate::db::tree;
use crate::error::AppResult;

record_repo!(BoardRepo, boards, Board, NewBoard);
record_repo!(MessageRepo, messages, Message, NewMessage);

impl BoardRepo {
    pub fn list_by_project(conn: &mut PgConnection, target_project_id: i32) -> AppResult<Vec<Board>> {
        use crate::schema::boards::dsl::*;
        let rows = boards
            .filter(project_id.eq(target_project_id))
            .order((position.asc(), id.asc()))
            .select(Board::as_select())
            .load(conn)?;
        Ok(rows)
    }

    pub fn children(conn: &mut PgConnection, target_id: i32) -> AppResult<Vec<Board>> {
        use crate::schema::boards::dsl::*;
        let rows = boards
            .filter(parent_id.eq(target_id))
            .order((position.asc(), id.asc()))
            .select(Board::as_select())
            .load(conn)?;
        Ok(rows)
    }

    pub fn ancestors(conn: &mut PgConnection, target_id: i32) -> AppResult<Vec<Board>> {
        let start = Self::get(conn, target_id)?;
        tree::parent_chain(&start, |pid| Self::get(conn, pid))
    }
}

impl MessageRepo {
    /// Topics of a board, sticky ones first, newest activity first.
    pub fn topics(conn: &mut PgConnection, target_board_id: i32) -> AppResult<Vec<Message>> {
        use crate::schema::messages::dsl::*;
        let rows = messages
            .filter(board_id.eq(target_board_id))
            .filter(parent_id.is_null())
            .order((sticky.desc().nulls_last(), updated_on.desc(), id.desc()))
            .select(Message::as_select())
            .load(conn)?;
        Ok(rows)
    }

    pub fn replies(conn: &mut PgConnection, topic_id: i32) -> AppResult<Vec<Message>> {
        use crate::schema::messages::dsl::*;
        let rows = messages
            .filter(parent_id.eq(topic_id))
            .order((created_on.asc(), id.asc()))
            .select(Message::as_select())
            .load(conn)?;
        Ok(rows)
    }

    pub fn ancestors(conn: &mut PgConnection, target_id: i32) -> AppResult<Vec<Message>> {
        let start = Self::get(conn, target_id)?;
        tree::parent_chain(&start, |pid| Self::get(conn, pid))
    }
}
