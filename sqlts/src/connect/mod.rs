//! Driver-backed catalog connections.
//!
//! Each connection is opened for one run and released when dropped.
//! Async drivers run on a private current-thread runtime so the rest of
//! the tool stays synchronous.

mod mysql;
mod postgres;
mod sqlite;

use eyre::{Context, Result};
use sqlts_core::Dialect;
use sqlts_introspect::CatalogConnection;
use tracing::debug;

pub use mysql::MysqlConnection;
pub use postgres::PostgresConnection;
pub use sqlite::SqliteConnection;

/// Open a read-only catalog connection for `dialect`.
pub fn open(dialect: Dialect, url: &str) -> Result<Box<dyn CatalogConnection>> {
    debug!(%dialect, "connecting");
    let conn: Box<dyn CatalogConnection> = match dialect {
        Dialect::Postgres => Box::new(PostgresConnection::connect(url)?),
        Dialect::Mysql => Box::new(MysqlConnection::connect(url)?),
        Dialect::Sqlite => Box::new(SqliteConnection::open(url)?),
    };
    Ok(conn)
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to start the async runtime")
}
