//! Built-in pipeline phases.
//!
//! - [`LowerPhase`] - resolves names and types into declarations
//! - [`ValidatePhase`] - lints the declarations and collects diagnostics

mod lower;
mod validate;

pub use lower::LowerPhase;
pub use validate::{
    DuplicatePropertyLint, DuplicateTypeNameLint, Lint, UnknownTypeLint, ValidatePhase,
};
