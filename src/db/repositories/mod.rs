//! Record access per table.
//!
//! Every repo gets the same primitive operations from `record_repo!`; the
//! domain modules add lookups keyed by the table's relationships. Writes run
//! in a nested transaction, which becomes a savepoint when the caller already
//! holds one, so a rejected write leaves the caller's transaction usable.

macro_rules! record_repo {
    ($repo:ident, $table:ident, $model:ty, $new:ty) => {
        pub struct $repo;

        impl $repo {
            pub fn find_by_id(
                conn: &mut diesel::PgConnection,
                record_id: i32,
            ) -> $crate::error::AppResult<Option<$model>> {
                use diesel::prelude::*;
                let found = $crate::schema::$table::table
                    .find(record_id)
                    .select(<$model as SelectableHelper<diesel::pg::Pg>>::as_select())
                    .first(conn)
                    .optional()?;
                Ok(found)
            }

            pub fn get(
                conn: &mut diesel::PgConnection,
                record_id: i32,
            ) -> $crate::error::AppResult<$model> {
                Self::find_by_id(conn, record_id)?.ok_or_else(|| {
                    $crate::error::AppError::not_found(format!(
                        "{} {}",
                        stringify!($table),
                        record_id
                    ))
                })
            }

            pub fn list(conn: &mut diesel::PgConnection) -> $crate::error::AppResult<Vec<$model>> {
                use diesel::prelude::*;
                let rows = $crate::schema::$table::table
                    .order($crate::schema::$table::id.asc())
                    .select(<$model as SelectableHelper<diesel::pg::Pg>>::as_select())
                    .load(conn)?;
                Ok(rows)
            }

            pub fn insert(
                conn: &mut diesel::PgConnection,
                new_record: &$new,
            ) -> $crate::error::AppResult<$model> {
                use diesel::prelude::*;
                let row = conn.transaction::<_, diesel::result::Error, _>(|conn| {
                    diesel::insert_into($crate::schema::$table::table)
                        .values(new_record)
                        .returning(<$model as SelectableHelper<diesel::pg::Pg>>::as_returning())
                        .get_result(conn)
                })?;
                tracing::debug!(table = stringify!($table), id = row.id, "inserted");
                Ok(row)
            }

            /// Deletes one row. Rejected with `AppError::ForeignKey` while
            /// other rows still reference it.
            pub fn delete_by_id(
                conn: &mut diesel::PgConnection,
                record_id: i32,
            ) -> $crate::error::AppResult<usize> {
                use diesel::prelude::*;
                let deleted = conn.transaction::<_, diesel::result::Error, _>(|conn| {
                    diesel::delete($crate::schema::$table::table.find(record_id)).execute(conn)
                })?;
                tracing::debug!(table = stringify!($table), id = record_id, deleted, "deleted");
                Ok(deleted)
            }
        }
    };
}

pub(crate) use record_repo;

pub mod boards;
pub mod changesets;
pub mod custom_fields;
pub mod issues;
pub mod journals;
pub mod members;
pub mod projects;
pub mod system;
pub mod time_entries;
pub mod users;
pub mod wiki;

pub use boards::*;
pub use changesets::*;
pub use custom_fields::*;
pub use issues::*;
pub use journals::*;
pub use members::*;
pub use projects::*;
pub use system::*;
pub use time_entries::*;
pub use users::*;
pub use wiki::*;
