//! Output assembly helpers.

mod imports;

pub use imports::ImportCollector;
