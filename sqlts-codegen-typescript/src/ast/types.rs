//! TypeScript type alias, union and object type builders.

use sqlts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

fn build(node: &impl Renderable) -> String {
    let mut builder = CodeBuilder::typescript();
    builder.emit(node);
    builder.build()
}

/// A field in a TypeScript object type.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for exported object types (`type Foo = { ... };`).
#[derive(Debug, Clone)]
pub struct ObjectType {
    name: String,
    fields: Vec<Field>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn build(&self) -> String {
        build(self)
    }
}

impl Renderable for ObjectType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::line(format!(
                "export type {} = {{}};",
                self.name
            ))];
        }

        let body = self
            .fields
            .iter()
            .map(|f| CodeFragment::line(format!("{}: {};", f.name, f.ty)))
            .collect();
        vec![CodeFragment::block(
            format!("export type {} = {{", self.name),
            body,
            Some("};".to_string()),
        )]
    }
}

/// Builder for exported type aliases.
///
/// A multi-line type renders its continuation lines one level deeper.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    doc: Option<String>,
    ty: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            ty: ty.into(),
        }
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    pub fn build(&self) -> String {
        build(self)
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.clone()));
        }

        let mut lines = self.ty.lines();
        let first = lines.next().unwrap_or("never");
        let rest: Vec<&str> = lines.collect();

        if rest.is_empty() {
            fragments.push(CodeFragment::line(format!(
                "export type {} = {};",
                self.name, first
            )));
            return fragments;
        }

        fragments.push(CodeFragment::line(format!(
            "export type {} = {}",
            self.name, first
        )));
        let last = rest.len() - 1;
        let continuation = rest
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if i == last {
                    CodeFragment::line(format!("{};", line))
                } else {
                    CodeFragment::line(*line)
                }
            })
            .collect();
        fragments.push(CodeFragment::indent(continuation));
        fragments
    }
}

/// Builder for exported unions of literal or named types.
#[derive(Debug, Clone)]
pub struct Union {
    name: String,
    variants: Vec<String>,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
        }
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variants.push(variant.into());
        self
    }

    pub fn variants(mut self, variants: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.variants.extend(variants.into_iter().map(Into::into));
        self
    }

    pub fn build(&self) -> String {
        build(self)
    }
}

impl Renderable for Union {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let variants = if self.variants.is_empty() {
            "never".to_string()
        } else {
            self.variants.join(" | ")
        };
        vec![CodeFragment::line(format!(
            "export type {} = {};",
            self.name, variants
        ))]
    }
}
