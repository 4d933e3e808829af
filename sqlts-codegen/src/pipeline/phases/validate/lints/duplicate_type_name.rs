//! Lint for type name collisions.

use std::collections::HashMap;

use super::super::Lint;
use crate::{
    declarations::{RESERVED_TYPE_NAMES, SchemaDeclarations},
    pipeline::Diagnostic,
};

/// Lint that errors when two declarations resolve to the same type name,
/// or a declaration takes a name the serializer emits itself.
pub struct DuplicateTypeNameLint;

impl Lint for DuplicateTypeNameLint {
    fn name(&self) -> &'static str {
        "duplicate-type-name"
    }

    fn description(&self) -> &'static str {
        "Detect declarations resolving to the same type name"
    }

    fn check(&self, schema: &SchemaDeclarations, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<&str, String> = HashMap::new();

        for (type_name, identity) in schema.type_names() {
            if RESERVED_TYPE_NAMES.contains(&type_name) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!("type name '{}' is reserved for a helper type", type_name),
                    )
                    .at(identity.to_string()),
                );
                continue;
            }

            if let Some(first) = seen.get(type_name) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "duplicate type name '{}' (conflicts with '{}')",
                            type_name, first
                        ),
                    )
                    .at(identity.to_string()),
                );
            } else {
                seen.insert(type_name, identity.to_string());
            }
        }
    }
}
