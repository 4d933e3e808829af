//! TypeScript interface builder.

use sqlts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::naming::property_key;

/// A field in a TypeScript interface.
#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.clone()));
        }
        fragments.push(CodeFragment::line(format!(
            "{}: {};",
            property_key(&self.name),
            self.ty
        )));
        fragments
    }
}

/// Builder for exported TypeScript interfaces.
///
/// Field names that are not plain identifiers are quoted.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty));
        self
    }

    pub fn field_with(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::line(format!(
                "export interface {} {{}}",
                self.name
            ))];
        }

        vec![CodeFragment::block(
            format!("export interface {} {{", self.name),
            self.fields.iter().flat_map(|f| f.to_fragments()).collect(),
            Some("}".to_string()),
        )]
    }
}
