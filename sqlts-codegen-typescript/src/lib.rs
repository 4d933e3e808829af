//! TypeScript serializer for sqlts.
//!
//! Turns the declarations lowered by `sqlts-codegen` into a single
//! declaration file for the [kysely](https://kysely.dev) query builder: one
//! interface per table or view, enums and domains as named types, and a
//! `DB` interface mapping table keys to their interfaces.
//!
//! ```ignore
//! use sqlts_codegen::pipeline::Pipeline;
//! use sqlts_codegen_typescript::Generator;
//!
//! let ctx = Pipeline::new().run(metadata, options)?;
//! let code = Generator::from_context(ctx)?.serialize();
//! ```

mod code_file;
mod generator;
mod helpers;
mod naming;
mod type_mapper;

pub mod ast;

pub use code_file::CodeFile;
pub use generator::Generator;
pub use helpers::Helper;
pub use naming::{enum_member_keys, property_key, string_literal};
pub use type_mapper::TypeScriptTypeMapper;
