//! Lower phase - resolves the schema model into declarations.

use eyre::Result;
use indexmap::IndexMap;
use sqlts_ir::{
    ColumnMetadata, DataType, DatabaseMetadata, QualifiedName, ScalarKind, TableMetadata,
};
use tracing::debug;

use crate::{
    declarations::{
        DomainDecl, EnumDecl, FieldDecl, InsertMode, SchemaDeclarations, TableDecl, TypeExpr,
    },
    naming::NameTransformer,
    pipeline::{CompilationContext, Phase},
};

/// Phase that resolves every declaration name and field type.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Resolve names and types into declarations"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let names = NameTransformer::new(&ctx.options)?;
        let declarations = Lowering::new(&ctx.metadata, &names).lower();

        debug!(
            enums = declarations.enums.len(),
            domains = declarations.domains.len(),
            tables = declarations.tables.len(),
            "lowered schema"
        );

        ctx.declarations = Some(declarations);
        Ok(())
    }
}

struct Lowering<'a> {
    metadata: &'a DatabaseMetadata,
    names: &'a NameTransformer,
    /// Enum type names indexed by handle.
    enum_names: Vec<String>,
    /// Domains in first-reference order.
    domains: IndexMap<QualifiedName, DomainDecl>,
}

impl<'a> Lowering<'a> {
    fn new(metadata: &'a DatabaseMetadata, names: &'a NameTransformer) -> Self {
        Self {
            metadata,
            names,
            enum_names: Vec::new(),
            domains: IndexMap::new(),
        }
    }

    fn lower(mut self) -> SchemaDeclarations {
        let metadata = self.metadata;
        let enums: Vec<EnumDecl> = metadata
            .enums()
            .iter()
            .map(|(_, identity, labels)| EnumDecl {
                identity: identity.clone(),
                type_name: self.names.type_name(identity),
                labels: labels.to_vec(),
            })
            .collect();
        self.enum_names = enums.iter().map(|e| e.type_name.clone()).collect();

        let tables = metadata
            .tables()
            .iter()
            .map(|table| self.lower_table(table))
            .collect();

        SchemaDeclarations {
            enums,
            domains: self.domains.into_values().collect(),
            tables,
        }
    }

    fn lower_table(&mut self, table: &TableMetadata) -> TableDecl {
        let identity = table.qualified_name();
        let fields = table
            .columns
            .iter()
            .map(|column| self.lower_column(&identity, column))
            .collect();

        TableDecl {
            type_name: self.names.table_type_name(&identity),
            db_key: self.names.db_key(&identity),
            is_view: table.is_view,
            fields,
            identity,
        }
    }

    fn lower_column(&mut self, table: &QualifiedName, column: &ColumnMetadata) -> FieldDecl {
        let ty = match self.names.column_type_override(table, &column.name) {
            Some(text) => TypeExpr::Raw(text.to_string()),
            None => self.lower_type(&column.data_type),
        };

        let insert = if column.is_generated {
            InsertMode::GeneratedAlways
        } else if column.is_insert_optional() {
            InsertMode::Generated
        } else {
            InsertMode::Required
        };

        FieldDecl {
            column: column.name.clone(),
            name: self.names.column_name(&column.name),
            ty,
            nullable: column.is_nullable,
            insert,
            comment: column.comment.clone(),
        }
    }

    fn lower_type(&mut self, ty: &DataType) -> TypeExpr {
        match ty {
            DataType::Scalar { kind } => match kind {
                ScalarKind::String => TypeExpr::String,
                ScalarKind::Number => TypeExpr::Number,
                ScalarKind::NumericString => TypeExpr::NumericString,
                ScalarKind::NumberOrString => TypeExpr::NumberOrString,
                ScalarKind::Boolean => TypeExpr::Boolean,
                ScalarKind::DateString => TypeExpr::DateString,
                ScalarKind::Timestamp => TypeExpr::Timestamp,
                ScalarKind::Json => TypeExpr::Json,
                ScalarKind::Buffer => TypeExpr::Buffer,
                ScalarKind::ArrayOf(element) => TypeExpr::Array(Box::new(self.lower_type(element))),
            },
            DataType::EnumRef { handle } => match self.enum_names.get(handle.index()) {
                Some(name) => TypeExpr::Named(name.clone()),
                None => TypeExpr::Unknown(format!("enum #{}", handle.index())),
            },
            DataType::Unknown { raw } => TypeExpr::Unknown(raw.clone()),
            DataType::Domain { name, underlying } => {
                if let Some(domain) = self.domains.get(name) {
                    return TypeExpr::Named(domain.type_name.clone());
                }
                let underlying = self.lower_type(underlying);
                let type_name = self.names.type_name(name);
                self.domains.insert(
                    name.clone(),
                    DomainDecl {
                        identity: name.clone(),
                        type_name: type_name.clone(),
                        underlying,
                    },
                );
                TypeExpr::Named(type_name)
            }
        }
    }
}
