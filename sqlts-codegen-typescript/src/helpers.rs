//! Helper type aliases emitted on demand.

use sqlts_codegen::builder::{CodeFragment, Renderable};

use crate::ast::{Field, ObjectType, TypeAlias};

/// A helper type the declarations may reference.
///
/// Variant order is output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Helper {
    Generated,
    GeneratedAlways,
    Json,
    Numeric,
    Timestamp,
}

impl Helper {
    pub fn name(&self) -> &'static str {
        match self {
            Helper::Generated => "Generated",
            Helper::GeneratedAlways => "GeneratedAlways",
            Helper::Json => "Json",
            Helper::Numeric => "Numeric",
            Helper::Timestamp => "Timestamp",
        }
    }

    /// Whether the definition is built on kysely's `ColumnType`.
    pub fn uses_column_type(&self) -> bool {
        !matches!(self, Helper::Json)
    }

    /// Declarations for this helper, one group per exported type.
    pub fn declarations(&self) -> Vec<Vec<CodeFragment>> {
        match self {
            Helper::Generated => vec![
                TypeAlias::new(
                    "Generated<T>",
                    "T extends ColumnType<infer S, infer I, infer U>\n\
                     ? ColumnType<S, I | undefined, U>\n\
                     : ColumnType<T, T | undefined, T>",
                )
                .to_fragments(),
            ],
            Helper::GeneratedAlways => {
                vec![TypeAlias::new("GeneratedAlways<T>", "ColumnType<T, never, never>").to_fragments()]
            }
            Helper::Json => vec![
                TypeAlias::new("Json", "JsonValue").to_fragments(),
                TypeAlias::new("JsonArray", "JsonValue[]").to_fragments(),
                ObjectType::new("JsonObject")
                    .field(Field::new("[x: string]", "JsonValue | undefined"))
                    .to_fragments(),
                TypeAlias::new("JsonPrimitive", "boolean | number | string | null").to_fragments(),
                TypeAlias::new("JsonValue", "JsonArray | JsonObject | JsonPrimitive")
                    .to_fragments(),
            ],
            Helper::Numeric => vec![
                TypeAlias::new(
                    "Numeric",
                    "ColumnType<string, number | string, number | string>",
                )
                .to_fragments(),
            ],
            Helper::Timestamp => vec![
                TypeAlias::new("Timestamp", "ColumnType<Date, Date | string, Date | string>")
                    .to_fragments(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use sqlts_codegen::builder::CodeBuilder;

    use super::*;

    fn render(helper: Helper) -> String {
        let mut builder = CodeBuilder::typescript();
        for fragment in CodeFragment::separated(helper.declarations()) {
            builder.apply_fragment(fragment);
        }
        builder.build()
    }

    #[test]
    fn test_generated_definition() {
        assert_eq!(
            render(Helper::Generated),
            "export type Generated<T> = T extends ColumnType<infer S, infer I, infer U>\n  \
             ? ColumnType<S, I | undefined, U>\n  \
             : ColumnType<T, T | undefined, T>;\n"
        );
    }

    #[test]
    fn test_json_family() {
        let json = render(Helper::Json);
        assert!(json.starts_with("export type Json = JsonValue;\n\n"));
        assert!(json.contains("export type JsonObject = {\n  [x: string]: JsonValue | undefined;\n};"));
        assert!(!Helper::Json.uses_column_type());
    }

    #[test]
    fn test_output_order() {
        let mut helpers = vec![Helper::Timestamp, Helper::Generated, Helper::Json];
        helpers.sort();
        let names: Vec<_> = helpers.iter().map(Helper::name).collect();
        assert_eq!(names, vec!["Generated", "Json", "Timestamp"]);
    }
}
