//! Table and column metadata.

use serde::Serialize;

use crate::{DataType, QualifiedName};

/// A column as declared in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnMetadata {
    pub name: String,
    pub data_type: DataType,
    pub is_nullable: bool,
    pub is_auto_incrementing: bool,
    /// Always computed by the database; never insertable.
    pub is_generated: bool,
    /// The catalog declares a default value.
    pub has_default: bool,
    pub comment: Option<String>,
}

impl ColumnMetadata {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            is_nullable: false,
            is_auto_incrementing: false,
            is_generated: false,
            has_default: false,
            comment: None,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    pub fn auto_incrementing(mut self) -> Self {
        self.is_auto_incrementing = true;
        self
    }

    pub fn generated(mut self) -> Self {
        self.is_generated = true;
        self
    }

    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Whether the column may be omitted on insert.
    pub fn is_insert_optional(&self) -> bool {
        self.has_default || self.is_auto_incrementing
    }
}

/// A table or view with its columns in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableMetadata {
    pub schema: String,
    pub name: String,
    pub is_view: bool,
    pub is_partition: bool,
    /// Root of the partition tree this table belongs to, if any.
    pub partition_root: Option<QualifiedName>,
    pub columns: Vec<ColumnMetadata>,
}

impl TableMetadata {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
            is_view: false,
            is_partition: false,
            partition_root: None,
            columns: Vec::new(),
        }
    }

    pub fn view(mut self) -> Self {
        self.is_view = true;
        self
    }

    pub fn column(mut self, column: ColumnMetadata) -> Self {
        self.columns.push(column);
        self
    }

    pub fn qualified_name(&self) -> QualifiedName {
        QualifiedName::new(&self.schema, &self.name)
    }
}
