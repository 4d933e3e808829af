//! TypeScript spelling of resolved field types.

use std::collections::BTreeSet;

use sqlts_codegen::declarations::{FieldDecl, InsertMode, TypeExpr};

use crate::helpers::Helper;

/// Maps declaration types to TypeScript, recording which helper types the
/// output ends up referencing.
#[derive(Debug, Default)]
pub struct TypeScriptTypeMapper {
    helpers: BTreeSet<Helper>,
}

impl TypeScriptTypeMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full property type of a field, including null and insert wrappers.
    ///
    /// Overridden fields are returned verbatim.
    pub fn field_type(&mut self, field: &FieldDecl) -> String {
        if let TypeExpr::Raw(text) = &field.ty {
            return text.clone();
        }

        let mut ty = self.type_expr(&field.ty);
        if field.nullable {
            ty = format!("{} | null", ty);
        }

        match field.insert {
            InsertMode::Required => ty,
            InsertMode::Generated => self.wrap(Helper::Generated, &ty),
            InsertMode::GeneratedAlways => self.wrap(Helper::GeneratedAlways, &ty),
        }
    }

    pub fn type_expr(&mut self, ty: &TypeExpr) -> String {
        match ty {
            TypeExpr::String | TypeExpr::DateString => "string".to_string(),
            TypeExpr::Number => "number".to_string(),
            TypeExpr::NumberOrString => "number | string".to_string(),
            TypeExpr::Boolean => "boolean".to_string(),
            TypeExpr::Buffer => "Buffer".to_string(),
            TypeExpr::NumericString => self.helper(Helper::Numeric),
            TypeExpr::Timestamp => self.helper(Helper::Timestamp),
            TypeExpr::Json => self.helper(Helper::Json),
            TypeExpr::Array(element) => {
                let element = self.type_expr(element);
                if element.contains(' ') {
                    format!("({})[]", element)
                } else {
                    format!("{}[]", element)
                }
            }
            TypeExpr::Named(name) => name.clone(),
            TypeExpr::Unknown(_) => "unknown".to_string(),
            TypeExpr::Raw(text) => text.clone(),
        }
    }

    /// Helpers referenced so far, in output order.
    pub fn helpers(&self) -> impl Iterator<Item = Helper> + '_ {
        self.helpers.iter().copied()
    }

    /// Whether any referenced helper needs kysely's `ColumnType`.
    pub fn needs_column_type(&self) -> bool {
        self.helpers.iter().any(Helper::uses_column_type)
    }

    fn helper(&mut self, helper: Helper) -> String {
        self.helpers.insert(helper);
        helper.name().to_string()
    }

    fn wrap(&mut self, helper: Helper, inner: &str) -> String {
        format!("{}<{}>", self.helper(helper), inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(ty: TypeExpr, nullable: bool, insert: InsertMode) -> FieldDecl {
        FieldDecl {
            column: "c".into(),
            name: "c".into(),
            ty,
            nullable,
            insert,
            comment: None,
        }
    }

    #[test]
    fn test_scalars() {
        let mut mapper = TypeScriptTypeMapper::new();
        assert_eq!(mapper.type_expr(&TypeExpr::String), "string");
        assert_eq!(mapper.type_expr(&TypeExpr::DateString), "string");
        assert_eq!(mapper.type_expr(&TypeExpr::NumberOrString), "number | string");
        assert_eq!(mapper.type_expr(&TypeExpr::Unknown("tsvector".into())), "unknown");
        assert_eq!(mapper.helpers().count(), 0);
    }

    #[test]
    fn test_arrays() {
        let mut mapper = TypeScriptTypeMapper::new();
        let ints = TypeExpr::Array(Box::new(TypeExpr::Number));
        let mixed = TypeExpr::Array(Box::new(TypeExpr::NumberOrString));
        assert_eq!(mapper.type_expr(&ints), "number[]");
        assert_eq!(mapper.type_expr(&mixed), "(number | string)[]");
    }

    #[test]
    fn test_field_wrappers() {
        let mut mapper = TypeScriptTypeMapper::new();

        let id = field(TypeExpr::Number, false, InsertMode::Generated);
        assert_eq!(mapper.field_type(&id), "Generated<number>");

        let status = field(TypeExpr::Named("Status".into()), true, InsertMode::Required);
        assert_eq!(mapper.field_type(&status), "Status | null");

        let total = field(TypeExpr::NumericString, true, InsertMode::GeneratedAlways);
        assert_eq!(mapper.field_type(&total), "GeneratedAlways<Numeric | null>");

        let helpers: Vec<_> = mapper.helpers().collect();
        assert_eq!(
            helpers,
            vec![Helper::Generated, Helper::GeneratedAlways, Helper::Numeric]
        );
        assert!(mapper.needs_column_type());
    }

    #[test]
    fn test_override_is_verbatim() {
        let mut mapper = TypeScriptTypeMapper::new();
        let tags = field(TypeExpr::Raw("string[]".into()), true, InsertMode::Generated);

        assert_eq!(mapper.field_type(&tags), "string[]");
        assert_eq!(mapper.helpers().count(), 0);
    }

    #[test]
    fn test_json_alone_needs_no_column_type() {
        let mut mapper = TypeScriptTypeMapper::new();
        mapper.type_expr(&TypeExpr::Json);
        assert!(!mapper.needs_column_type());
    }
}
