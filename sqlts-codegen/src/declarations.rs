//! Resolved declarations ready for rendering.
//!
//! The lower phase turns [`DatabaseMetadata`](sqlts_ir::DatabaseMetadata)
//! into these types: every name is final, every enum and domain reference
//! is already resolved to the type name it renders as. Serializers only
//! decide how to spell them.

use serde::Serialize;
use sqlts_ir::QualifiedName;

/// Type names the serializer emits on its own and declarations may not take.
pub const RESERVED_TYPE_NAMES: &[&str] = &[
    "DB",
    "ColumnType",
    "Generated",
    "GeneratedAlways",
    "Timestamp",
    "Numeric",
    "Json",
    "JsonArray",
    "JsonObject",
    "JsonPrimitive",
    "JsonValue",
];

/// A field type after name resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "kebab-case")]
pub enum TypeExpr {
    String,
    Number,
    NumericString,
    NumberOrString,
    Boolean,
    DateString,
    Timestamp,
    Json,
    Buffer,
    Array(Box<TypeExpr>),
    /// A generated enum or domain type.
    Named(String),
    /// An unmapped catalog type, keeping its raw name.
    Unknown(String),
    /// Override text emitted verbatim.
    Raw(String),
}

impl TypeExpr {
    /// The raw name of the first unmapped type, looking through arrays.
    pub fn unknown_raw(&self) -> Option<&str> {
        match self {
            TypeExpr::Unknown(raw) => Some(raw),
            TypeExpr::Array(element) => element.unknown_raw(),
            _ => None,
        }
    }
}

/// How a column behaves on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsertMode {
    Required,
    /// Has a default or is auto-incrementing; optional on insert.
    Generated,
    /// Always computed by the database; never insertable.
    GeneratedAlways,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDecl {
    pub identity: QualifiedName,
    pub type_name: String,
    /// Labels in catalog declaration order.
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainDecl {
    pub identity: QualifiedName,
    pub type_name: String,
    pub underlying: TypeExpr,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDecl {
    /// Column name as found in the catalog.
    pub column: String,
    /// Property name in the generated interface.
    pub name: String,
    pub ty: TypeExpr,
    pub nullable: bool,
    pub insert: InsertMode,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDecl {
    pub identity: QualifiedName,
    pub type_name: String,
    /// Key in the `DB` interface.
    pub db_key: String,
    pub is_view: bool,
    pub fields: Vec<FieldDecl>,
}

/// Everything a serializer renders, in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaDeclarations {
    pub enums: Vec<EnumDecl>,
    pub domains: Vec<DomainDecl>,
    pub tables: Vec<TableDecl>,
}

impl SchemaDeclarations {
    /// Every declared type name with the identity it came from.
    pub fn type_names(&self) -> impl Iterator<Item = (&str, &QualifiedName)> {
        let enums = self
            .enums
            .iter()
            .map(|e| (e.type_name.as_str(), &e.identity));
        let domains = self
            .domains
            .iter()
            .map(|d| (d.type_name.as_str(), &d.identity));
        let tables = self
            .tables
            .iter()
            .map(|t| (t.type_name.as_str(), &t.identity));
        enums.chain(domains).chain(tables)
    }

    /// Iterate over every field with its table.
    pub fn fields(&self) -> impl Iterator<Item = (&TableDecl, &FieldDecl)> {
        self.tables
            .iter()
            .flat_map(|t| t.fields.iter().map(move |f| (t, f)))
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty() && self.domains.is_empty() && self.tables.is_empty()
    }
}
