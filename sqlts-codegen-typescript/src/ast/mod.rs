//! TypeScript AST builders for declaration files.
//!
//! Every node implements [`Renderable`](sqlts_codegen::builder::Renderable)
//! and is emitted through a `CodeBuilder`.

mod enums;
mod imports;
mod interface;
mod types;

pub use enums::Enum;
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
pub use types::{Field, ObjectType, TypeAlias, Union};
