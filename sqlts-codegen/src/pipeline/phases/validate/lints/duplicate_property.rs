//! Lint for property name collisions within one interface.

use std::collections::HashMap;

use super::super::Lint;
use crate::{declarations::SchemaDeclarations, pipeline::Diagnostic};

/// Lint that errors when case conversion maps two columns of one table
/// onto the same property name (`user_id` and `userId`).
pub struct DuplicatePropertyLint;

impl Lint for DuplicatePropertyLint {
    fn name(&self) -> &'static str {
        "duplicate-property"
    }

    fn description(&self) -> &'static str {
        "Detect columns resolving to the same property name"
    }

    fn check(&self, schema: &SchemaDeclarations, diagnostics: &mut Vec<Diagnostic>) {
        for table in &schema.tables {
            let mut seen: HashMap<&str, &str> = HashMap::new();
            for field in &table.fields {
                match seen.get(field.name.as_str()) {
                    Some(first) => diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!(
                                "columns '{}' and '{}' both map to property '{}'",
                                first, field.column, field.name
                            ),
                        )
                        .at(format!("{}.{}", table.identity, field.column)),
                    ),
                    None => {
                        seen.insert(&field.name, &field.column);
                    }
                }
            }
        }
    }
}
