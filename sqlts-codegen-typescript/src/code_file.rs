//! Structured layout of a generated declaration file.

use sqlts_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::Import;

/// A TypeScript file assembled from a header comment, imports and body
/// sections.
///
/// Sections render in that order, separated by single blank lines. Empty
/// sections are skipped.
///
/// ```ignore
/// let code = CodeFile::new()
///     .header("This file was generated by sqlts.")
///     .import(Import::new("kysely").named("ColumnType"))
///     .add(Interface::new("DB"))
///     .render();
/// ```
#[derive(Debug, Default)]
pub struct CodeFile {
    header: Option<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the leading JSDoc comment.
    pub fn header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(text.into());
        self
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element as its own section.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add pre-rendered sections.
    pub fn sections(mut self, groups: impl IntoIterator<Item = Vec<CodeFragment>>) -> Self {
        self.body.extend(groups);
        self
    }

    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let header = self
            .header
            .iter()
            .map(|text| CodeFragment::jsdoc(text.clone()))
            .collect();
        let imports = self.imports.iter().flat_map(|i| i.to_fragments()).collect();

        let groups = [header, imports]
            .into_iter()
            .chain(self.body.iter().cloned());

        let mut builder = CodeBuilder::new(indent);
        for fragment in CodeFragment::separated(groups) {
            builder.apply_fragment(fragment);
        }
        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.imports.is_empty() && self.body.iter().all(Vec::is_empty)
    }
}
