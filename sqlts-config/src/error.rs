use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::validate::find_key_span;

/// Result type for sqlts-config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, labelling `needle` if it occurs in the source.
    pub fn validation_error(&self, message: impl Into<String>, needle: &str) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: find_key_span(&self.src, needle),
            message: message.into(),
        })
    }

    /// Create an invalid override key error.
    pub fn override_key_error(&self, key: &str, kind: &str, expected: &str) -> Box<Error> {
        Box::new(Error::InvalidOverrideKey {
            src: self.named_source(),
            span: find_key_span(&self.src, key),
            key: key.to_string(),
            kind: kind.to_string(),
            expected: expected.to_string(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a sqlts.toml or pass options on the command line"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration")]
    #[diagnostic(code(sqlts::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(sqlts::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {kind} override key '{key}'")]
    #[diagnostic(
        code(sqlts::invalid_override),
        help("{kind} overrides are keyed by '{expected}'")
    )]
    InvalidOverrideKey {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected '{expected}'")]
        span: Option<SourceSpan>,
        key: String,
        kind: String,
        expected: String,
    },
}
