use miette::Diagnostic;
use sqlts_ir::{DuplicateTable, EnumConflict};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Boxed driver error carried by [`Error::Catalog`].
pub type DriverError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// A catalog query failed. Driver errors propagate as the source.
    #[error("catalog query failed: {context}")]
    #[diagnostic(code(sqlts::catalog))]
    Catalog {
        context: String,
        #[source]
        source: DriverError,
    },

    #[error("schema inconsistency: {0}")]
    #[diagnostic(code(sqlts::schema_inconsistency))]
    SchemaInconsistency(String),

    #[error("table '{}' was listed more than once", .0.table)]
    #[diagnostic(code(sqlts::duplicate_table))]
    DuplicateTable(#[from] DuplicateTable),

    #[error("invalid {kind} pattern '{pattern}'")]
    #[diagnostic(code(sqlts::invalid_pattern))]
    InvalidPattern {
        kind: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("catalog row for {query} is missing column '{column}'")]
    #[diagnostic(code(sqlts::missing_column))]
    MissingColumn {
        query: &'static str,
        column: String,
    },
}

impl Error {
    /// Wrap a driver error.
    pub fn catalog(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Error::Catalog {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

impl From<EnumConflict> for Error {
    fn from(conflict: EnumConflict) -> Self {
        Error::SchemaInconsistency(conflict.to_string())
    }
}
