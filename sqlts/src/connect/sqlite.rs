use eyre::{Context, Result};
use rusqlite::{Connection, OpenFlags, params_from_iter, types::ValueRef};
use sqlts_introspect::{CatalogConnection, CatalogRow, Error};

/// A read-only `rusqlite` connection.
pub struct SqliteConnection {
    conn: Connection,
}

impl SqliteConnection {
    pub fn open(url: &str) -> Result<Self> {
        let path = database_path(url);
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .wrap_err_with(|| format!("failed to open sqlite database '{}'", path))?;
        Ok(Self { conn })
    }

    /// Wrap an already open connection.
    #[cfg(test)]
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

impl CatalogConnection for SqliteConnection {
    fn query(&mut self, sql: &str, params: &[&str]) -> sqlts_introspect::Result<Vec<CatalogRow>> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| Error::catalog("sqlite prepare", e))?;
        let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let rows = stmt
            .query_map(params_from_iter(params.iter()), |row| {
                names
                    .iter()
                    .enumerate()
                    .map(|(i, name)| Ok((name.clone(), value_text(row.get_ref(i)?))))
                    .collect::<rusqlite::Result<CatalogRow>>()
            })
            .map_err(|e| Error::catalog("sqlite query", e))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| Error::catalog("sqlite row", e))
    }
}

/// Strip a `sqlite:` scheme. `file:` URIs are passed through to SQLite.
fn database_path(url: &str) -> &str {
    let url = url.trim();
    url.strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url)
}

fn value_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(n) => Some(n.to_string()),
        ValueRef::Real(n) => Some(n.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}
