//! Raw catalog facts produced by dialect adapters.

use sqlts_ir::QualifiedName;

/// A table, view or partition as listed by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFact {
    pub schema: String,
    pub name: String,
    pub is_view: bool,
    pub is_partition: bool,
    /// Top-most partitioned ancestor of a partition.
    pub partition_root: Option<QualifiedName>,
}

impl TableFact {
    pub fn table(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
            is_view: false,
            is_partition: false,
            partition_root: None,
        }
    }

    pub fn view(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            is_view: true,
            ..Self::table(schema, name)
        }
    }

    pub fn partition_of(mut self, root: QualifiedName) -> Self {
        self.is_partition = true;
        self.partition_root = Some(root);
        self
    }

    pub fn qualified_name(&self) -> QualifiedName {
        QualifiedName::new(&self.schema, &self.name)
    }
}

/// A column's catalog type before mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawType {
    /// Type name as the catalog spells it, the element type for arrays.
    pub name: String,
    /// Schema the type is declared in, for user-defined types.
    pub schema: Option<String>,
    pub is_array: bool,
    /// Labels of an enum declared inline on the column.
    pub inline_enum: Option<EnumFact>,
}

impl RawType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
            is_array: false,
            inline_enum: None,
        }
    }

    pub fn in_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    pub fn inline_enum(mut self, fact: EnumFact) -> Self {
        self.inline_enum = Some(fact);
        self
    }

    /// The type name qualified by its schema, if it has one.
    pub fn qualified_name(&self) -> Option<QualifiedName> {
        self.schema
            .as_ref()
            .map(|schema| QualifiedName::new(schema, &self.name))
    }
}

/// A column as listed by the catalog, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFact {
    pub name: String,
    pub raw_type: RawType,
    pub is_nullable: bool,
    pub has_default: bool,
    pub is_auto_incrementing: bool,
    /// Computed by the database and never insertable.
    pub is_generated: bool,
    pub comment: Option<String>,
}

impl ColumnFact {
    pub fn new(name: impl Into<String>, raw_type: RawType) -> Self {
        Self {
            name: name.into(),
            raw_type,
            is_nullable: false,
            has_default: false,
            is_auto_incrementing: false,
            is_generated: false,
            comment: None,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    pub fn with_default(mut self) -> Self {
        self.has_default = true;
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

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// An enum type and its labels in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumFact {
    pub schema: String,
    pub name: String,
    pub labels: Vec<String>,
}

impl EnumFact {
    pub fn new<L: Into<String>>(
        schema: impl Into<String>,
        name: impl Into<String>,
        labels: impl IntoIterator<Item = L>,
    ) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn qualified_name(&self) -> QualifiedName {
        QualifiedName::new(&self.schema, &self.name)
    }
}

/// A domain and the type it constrains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainFact {
    pub schema: String,
    pub name: String,
    pub base: RawType,
}

impl DomainFact {
    pub fn new(schema: impl Into<String>, name: impl Into<String>, base: RawType) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
            base,
        }
    }

    pub fn qualified_name(&self) -> QualifiedName {
        QualifiedName::new(&self.schema, &self.name)
    }
}
