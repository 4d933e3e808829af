//! Name resolution for generated declarations.

mod rules;
mod singularize;
mod transformer;

pub use singularize::Singularizer;
pub use transformer::NameTransformer;
