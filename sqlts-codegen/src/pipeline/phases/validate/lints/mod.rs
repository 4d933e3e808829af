//! Built-in lints for declaration validation.

mod duplicate_property;
mod duplicate_type_name;
mod unknown_type;

pub use duplicate_property::DuplicatePropertyLint;
pub use duplicate_type_name::DuplicateTypeNameLint;
pub use unknown_type::UnknownTypeLint;
