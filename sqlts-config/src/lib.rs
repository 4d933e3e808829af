//! Configuration for sqlts.
//!
//! Loads `sqlts.toml`, rejects unknown keys and reports validation
//! failures as `miette` diagnostics pointing at the offending source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod validate;

pub use config::{Config, DATABASE_URL_ENV, Overrides, SingularRule, Singularize};
pub use error::{Error, Result, SourceContext};
pub use file::{ConfigFile, DEFAULT_CONFIG_FILE};
