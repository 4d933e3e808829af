//! Lint for columns whose catalog type has no mapping.

use super::super::Lint;
use crate::{declarations::SchemaDeclarations, pipeline::Diagnostic};

/// Lint that warns for every field or domain typed as unknown.
pub struct UnknownTypeLint;

impl Lint for UnknownTypeLint {
    fn name(&self) -> &'static str {
        "unknown-type"
    }

    fn description(&self) -> &'static str {
        "Report columns whose database type could not be mapped"
    }

    fn check(&self, schema: &SchemaDeclarations, diagnostics: &mut Vec<Diagnostic>) {
        for domain in &schema.domains {
            if let Some(raw) = domain.underlying.unknown_raw() {
                diagnostics.push(
                    Diagnostic::warning("validate", format!("unknown type '{}'", raw))
                        .at(domain.identity.to_string()),
                );
            }
        }

        for (table, field) in schema.fields() {
            if let Some(raw) = field.ty.unknown_raw() {
                diagnostics.push(
                    Diagnostic::warning("validate", format!("unknown type '{}'", raw))
                        .at(format!("{}.{}", table.identity, field.column)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sqlts_ir::QualifiedName;

    use super::*;
    use crate::declarations::{DomainDecl, FieldDecl, InsertMode, TableDecl, TypeExpr};

    #[test]
    fn test_unknown_field_and_domain() {
        let schema = SchemaDeclarations {
            enums: vec![],
            domains: vec![DomainDecl {
                identity: QualifiedName::new("public", "geo"),
                type_name: "Geo".into(),
                underlying: TypeExpr::Unknown("geometry".into()),
            }],
            tables: vec![TableDecl {
                identity: QualifiedName::new("public", "documents"),
                type_name: "Document".into(),
                db_key: "documents".into(),
                is_view: false,
                fields: vec![FieldDecl {
                    column: "search".into(),
                    name: "search".into(),
                    ty: TypeExpr::Array(Box::new(TypeExpr::Unknown("tsvector".into()))),
                    nullable: true,
                    insert: InsertMode::Required,
                    comment: None,
                }],
            }],
        };

        let mut diagnostics = Vec::new();
        UnknownTypeLint.check(&schema, &mut diagnostics);

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.severity.is_warning()));
        assert_eq!(diagnostics[0].location.as_deref(), Some("public.geo"));
        assert_eq!(
            diagnostics[1].location.as_deref(),
            Some("public.documents.search")
        );
        assert_eq!(diagnostics[1].message, "unknown type 'tsvector'");
    }
}
