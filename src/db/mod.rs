pub mod enums;
pub mod inspect;
pub mod models;
pub mod repositories;
pub mod tree;

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager as DbConnectionManager, CustomizeConnection};
use diesel::{Connection, PgConnection};

use crate::config::Config;
use crate::error::AppResult;

pub type DbPool = r2d2::Pool<DbConnectionManager<PgConnection>>;
pub type PooledConn = r2d2::PooledConnection<DbConnectionManager<PgConnection>>;

/// Points every pooled connection at the configured schema.
#[derive(Debug, Clone)]
struct SearchPath(String);

impl CustomizeConnection<PgConnection, r2d2::Error> for SearchPath {
    fn on_acquire(&self, conn: &mut PgConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&set_search_path_sql(&self.0))
            .map_err(r2d2::Error::QueryError)
    }
}

/// `SET search_path` statement for one schema, with the name quoted.
pub fn set_search_path_sql(schema: &str) -> String {
    format!("SET search_path TO \"{}\"", schema.replace('"', "\"\""))
}

pub fn create_pool(config: &Config) -> AppResult<DbPool> {
    let db = config.database();
    let manager = DbConnectionManager::<PgConnection>::new(&db.url);
    let mut builder = r2d2::Pool::builder()
        .max_size(db.max_connections)
        .min_idle(Some(db.min_connections))
        .connection_timeout(Duration::from_secs(db.connection_timeout));
    if db.schema != "public" {
        builder = builder.connection_customizer(Box::new(SearchPath(db.schema.clone())));
    }

    let pool = builder.build(manager)?;
    tracing::info!(
        url = %config.redacted_database_url(),
        max_connections = db.max_connections,
        schema = %db.schema,
        "database pool ready"
    );
    Ok(pool)
}

/// A single connection outside the pool, for one-shot tools.
pub fn establish(config: &Config) -> AppResult<PgConnection> {
    let mut conn = PgConnection::establish(&config.database_url)?;
    if config.database_schema != "public" {
        conn.batch_execute(&set_search_path_sql(&config.database_schema))?;
    }
    Ok(conn)
}
