//! TypeScript runtime enum builder.

use sqlts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::naming::string_literal;

/// An exported string-valued `enum`.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    members: Vec<(String, String)>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add a member. `key` must already be a valid member name.
    pub fn member(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.members.push((key.into(), value.into()));
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.members.is_empty() {
            return vec![CodeFragment::line(format!("export enum {} {{}}", self.name))];
        }

        let body = self
            .members
            .iter()
            .map(|(key, value)| CodeFragment::line(format!("{} = {},", key, string_literal(value))))
            .collect();
        vec![CodeFragment::block(
            format!("export enum {} {{", self.name),
            body,
            Some("}".to_string()),
        )]
    }
}
