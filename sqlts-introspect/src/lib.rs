//! Catalog introspection for sqlts.
//!
//! Reads catalog metadata through a [`CatalogConnection`] and builds the
//! canonical [`DatabaseMetadata`](sqlts_ir::DatabaseMetadata) model.
//!
//! # Architecture
//!
//! ```text
//! connection → DialectAdapter (facts) → Introspector
//!                                         ├─ TableMatcher (filter)
//!                                         ├─ TypeMapper (classify)
//!                                         └─ EnumCollection (register)
//!                                       → DatabaseMetadata
//! ```
//!
//! The pipeline is read-only. Driver errors surface as [`Error::Catalog`]
//! and are never retried.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod adapter;
mod connection;
mod dialects;
mod error;
mod facts;
mod introspector;
mod matcher;
mod typemap;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use adapter::{DialectAdapter, adapter_for};
pub use connection::{CatalogConnection, CatalogRow};
pub use dialects::{MysqlAdapter, PostgresAdapter, SqliteAdapter};
pub use error::{DriverError, Error, Result};
pub use facts::{ColumnFact, DomainFact, EnumFact, RawType, TableFact};
pub use introspector::{IntrospectOptions, Introspection, Introspector};
pub use matcher::TableMatcher;
pub use typemap::{TypeMapper, TypeOptions};
