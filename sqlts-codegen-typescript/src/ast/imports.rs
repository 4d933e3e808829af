//! TypeScript import builder.

use sqlts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self, enabled: bool) -> Self {
        self.type_only = enabled;
        self
    }

    fn statement(&self) -> String {
        if self.named.is_empty() {
            return format!("import \"{}\";", self.from);
        }
        let type_kw = if self.type_only { "type " } else { "" };
        format!(
            "import {}{{ {} }} from \"{}\";",
            type_kw,
            self.named.join(", "),
            self.from
        )
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}
