//! Serialization of lowered declarations into a `.d.ts` style file.

use std::path::Path;

use eyre::{Result, eyre};
use sqlts_codegen::{
    GenerateOptions,
    builder::{CodeFragment, Renderable},
    declarations::{DomainDecl, EnumDecl, SchemaDeclarations, TableDecl},
    generation::ImportCollector,
    pipeline::CompilationContext,
    verify::{VerifyOutcome, verify},
};
use sqlts_core::{File, WriteResult};
use tracing::{debug, info};

use crate::{
    ast::{Enum, Import, Interface, InterfaceField, TypeAlias, Union},
    code_file::CodeFile,
    naming::{enum_member_keys, string_literal},
    type_mapper::TypeScriptTypeMapper,
};

const HEADER: &str = "This file was generated by sqlts.\nPlease do not edit it manually.";
const KYSELY_MODULE: &str = "kysely";

/// Renders a lowered schema as TypeScript declarations.
///
/// Output is a pure function of the declarations and options, so two runs
/// over the same catalog produce identical bytes.
#[derive(Debug)]
pub struct Generator {
    declarations: SchemaDeclarations,
    options: GenerateOptions,
}

impl Generator {
    pub fn new(declarations: SchemaDeclarations, options: GenerateOptions) -> Self {
        Self {
            declarations,
            options,
        }
    }

    /// Take the declarations produced by a pipeline run.
    pub fn from_context(ctx: CompilationContext) -> Result<Self> {
        let declarations = ctx
            .declarations
            .ok_or_else(|| eyre!("pipeline finished without declarations"))?;
        Ok(Self::new(declarations, ctx.options))
    }

    /// Render the full file.
    pub fn serialize(&self) -> String {
        let mut mapper = TypeScriptTypeMapper::new();

        let enums: Vec<_> = self
            .declarations
            .enums
            .iter()
            .map(|decl| self.enum_node(decl))
            .collect();
        let domains: Vec<_> = self
            .declarations
            .domains
            .iter()
            .map(|decl| domain_node(decl, &mut mapper))
            .collect();
        let tables: Vec<_> = self
            .declarations
            .tables
            .iter()
            .map(|decl| table_node(decl, &mut mapper).to_fragments())
            .collect();
        let db = self
            .declarations
            .tables
            .iter()
            .fold(Interface::new("DB"), |db, table| {
                db.field(&table.db_key, &table.type_name)
            });

        let helpers: Vec<_> = mapper.helpers().flat_map(|h| h.declarations()).collect();
        let mut collector = ImportCollector::new();
        if mapper.needs_column_type() {
            collector.add(KYSELY_MODULE, "ColumnType");
        }
        let imports = collector.iter().map(|(module, symbols)| {
            symbols
                .iter()
                .fold(Import::new(module), |import, symbol| import.named(symbol))
                .type_only(self.options.type_only_imports)
        });

        debug!(
            enums = enums.len(),
            domains = domains.len(),
            tables = tables.len(),
            helpers = helpers.len(),
            "serializing declarations"
        );

        CodeFile::new()
            .header(HEADER)
            .imports(imports)
            .sections(enums)
            .sections(helpers)
            .sections(domains)
            .sections(tables)
            .add(db)
            .render()
    }

    /// Write the rendered file, leaving it untouched when already current.
    pub fn write(&self, path: &Path) -> Result<WriteResult> {
        let result = File::new(path, self.serialize()).write()?;
        info!(path = %path.display(), ?result, "wrote declarations");
        Ok(result)
    }

    /// Compare the rendered file against existing content.
    pub fn verify(&self, existing: &str) -> VerifyOutcome {
        verify(&self.serialize(), existing)
    }

    fn enum_node(&self, decl: &EnumDecl) -> Vec<CodeFragment> {
        let style = self.options.runtime_enums;
        if !style.is_enabled() {
            return Union::new(&decl.type_name)
                .variants(decl.labels.iter().map(|label| string_literal(label)))
                .to_fragments();
        }

        enum_member_keys(&decl.labels, style)
            .into_iter()
            .zip(&decl.labels)
            .fold(Enum::new(&decl.type_name), |node, (key, label)| {
                node.member(key, label)
            })
            .to_fragments()
    }
}

fn domain_node(decl: &DomainDecl, mapper: &mut TypeScriptTypeMapper) -> Vec<CodeFragment> {
    TypeAlias::new(&decl.type_name, mapper.type_expr(&decl.underlying)).to_fragments()
}

fn table_node(decl: &TableDecl, mapper: &mut TypeScriptTypeMapper) -> Interface {
    decl.fields.iter().fold(Interface::new(&decl.type_name), |node, field| {
        node.field_with(
            InterfaceField::new(&field.name, mapper.field_type(field)).doc(field.comment.clone()),
        )
    })
}
