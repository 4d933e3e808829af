use eyre::{Context, Result};
use sqlts_introspect::{CatalogConnection, CatalogRow, Error};
use tokio::runtime::Runtime;
use tokio_postgres::{Client, NoTls, types::ToSql};
use tracing::warn;

/// A `tokio-postgres` client driven by a private runtime.
pub struct PostgresConnection {
    runtime: Runtime,
    client: Client,
}

impl PostgresConnection {
    pub fn connect(url: &str) -> Result<Self> {
        let runtime = super::runtime()?;
        let (client, connection) = runtime
            .block_on(tokio_postgres::connect(url, NoTls))
            .wrap_err("failed to connect to postgres")?;

        // The connection task only makes progress while a query is blocked on.
        runtime.spawn(async move {
            if let Err(e) = connection.await {
                warn!(error = %e, "postgres connection closed with an error");
            }
        });

        Ok(Self { runtime, client })
    }
}

impl CatalogConnection for PostgresConnection {
    fn query(&mut self, sql: &str, params: &[&str]) -> sqlts_introspect::Result<Vec<CatalogRow>> {
        let params: Vec<&(dyn ToSql + Sync)> =
            params.iter().map(|p| p as &(dyn ToSql + Sync)).collect();
        let rows = self
            .runtime
            .block_on(self.client.query(sql, &params))
            .map_err(|e| Error::catalog("postgres query", e))?;

        let mut out = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut catalog_row = CatalogRow::new();
            for (i, column) in row.columns().iter().enumerate() {
                let value: Option<String> = row
                    .try_get(i)
                    .map_err(|e| Error::catalog(format!("postgres column '{}'", column.name()), e))?;
                catalog_row.insert(column.name(), value);
            }
            out.push(catalog_row);
        }
        Ok(out)
    }
}
