use eyre::{Context, Result};
use mysql_async::{Conn, Params, Pool, Row, Value, prelude::Queryable};
use sqlts_introspect::{CatalogConnection, CatalogRow, Error};
use tokio::runtime::Runtime;
use tracing::debug;

/// A single `mysql_async` connection driven by a private runtime.
pub struct MysqlConnection {
    runtime: Runtime,
    pool: Pool,
    conn: Option<Conn>,
}

impl MysqlConnection {
    pub fn connect(url: &str) -> Result<Self> {
        let runtime = super::runtime()?;
        let pool = Pool::from_url(url).wrap_err("invalid mysql connection string")?;
        let conn = runtime
            .block_on(pool.get_conn())
            .wrap_err("failed to connect to mysql")?;

        Ok(Self {
            runtime,
            pool,
            conn: Some(conn),
        })
    }
}

impl CatalogConnection for MysqlConnection {
    fn query(&mut self, sql: &str, params: &[&str]) -> sqlts_introspect::Result<Vec<CatalogRow>> {
        let Some(conn) = self.conn.as_mut() else {
            return Err(Error::catalog("mysql query", std::io::Error::other("connection closed")));
        };

        let params = if params.is_empty() {
            Params::Empty
        } else {
            Params::Positional(params.iter().map(|p| Value::from(*p)).collect())
        };
        let rows: Vec<Row> = self
            .runtime
            .block_on(conn.exec(sql, params))
            .map_err(|e| Error::catalog("mysql query", e))?;

        Ok(rows.iter().map(catalog_row).collect())
    }
}

impl Drop for MysqlConnection {
    fn drop(&mut self) {
        let conn = self.conn.take();
        let pool = self.pool.clone();
        // Connections must be released inside the runtime.
        let result = self.runtime.block_on(async move {
            drop(conn);
            pool.disconnect().await
        });
        if let Err(e) = result {
            debug!(error = %e, "mysql pool did not disconnect cleanly");
        }
    }
}

fn catalog_row(row: &Row) -> CatalogRow {
    row.columns_ref()
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let value = row.as_ref(i).and_then(value_text);
            (column.name_str().into_owned(), value)
        })
        .collect()
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::NULL => None,
        Value::Bytes(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        Value::Int(n) => Some(n.to_string()),
        Value::UInt(n) => Some(n.to_string()),
        Value::Float(n) => Some(n.to_string()),
        Value::Double(n) => Some(n.to_string()),
        other => Some(other.as_sql(true).trim_matches('\'').to_string()),
    }
}
