//! Core operations.
//!
//! This module contains the business logic for sqlts commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;

pub use generate::{RunOptions, generate};
