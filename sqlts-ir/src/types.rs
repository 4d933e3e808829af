//! Canonical column types.

use serde::Serialize;

use crate::{EnumHandle, QualifiedName};

/// Scalar kinds every dialect's raw types are classified into.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "kebab-case")]
pub enum ScalarKind {
    String,
    Number,
    /// Arbitrary-precision number read back as a string.
    NumericString,
    /// Arbitrary-precision number admitting both representations.
    NumberOrString,
    Boolean,
    /// Date kept in its textual form.
    DateString,
    /// Date or time deserialized into a timestamp value.
    Timestamp,
    Json,
    Buffer,
    ArrayOf(Box<DataType>),
}

/// The canonical type of a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DataType {
    Scalar { kind: ScalarKind },
    /// A reference into the run's [`EnumCollection`](crate::EnumCollection).
    EnumRef { handle: EnumHandle },
    /// A raw catalog type no mapping exists for.
    Unknown { raw: String },
    /// A named domain preserved as its own nominal type.
    Domain {
        name: QualifiedName,
        underlying: Box<DataType>,
    },
}

impl DataType {
    pub fn scalar(kind: ScalarKind) -> Self {
        DataType::Scalar { kind }
    }

    pub fn array_of(element: DataType) -> Self {
        DataType::Scalar {
            kind: ScalarKind::ArrayOf(Box::new(element)),
        }
    }

    pub fn enum_ref(handle: EnumHandle) -> Self {
        DataType::EnumRef { handle }
    }

    pub fn unknown(raw: impl Into<String>) -> Self {
        DataType::Unknown { raw: raw.into() }
    }

    pub fn domain(name: QualifiedName, underlying: DataType) -> Self {
        DataType::Domain {
            name,
            underlying: Box::new(underlying),
        }
    }

    /// The raw type name of the first unmapped type, looking through
    /// arrays and domains.
    pub fn unknown_raw(&self) -> Option<&str> {
        match self {
            DataType::Unknown { raw } => Some(raw),
            DataType::Scalar {
                kind: ScalarKind::ArrayOf(element),
            } => element.unknown_raw(),
            DataType::Domain { underlying, .. } => underlying.unknown_raw(),
            _ => None,
        }
    }
}

impl From<ScalarKind> for DataType {
    fn from(kind: ScalarKind) -> Self {
        DataType::Scalar { kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_raw_looks_through_arrays() {
        let ty = DataType::array_of(DataType::unknown("tsvector"));
        assert_eq!(ty.unknown_raw(), Some("tsvector"));
        assert_eq!(DataType::scalar(ScalarKind::String).unknown_raw(), None);
    }

    #[test]
    fn test_unknown_raw_looks_through_domains() {
        let ty = DataType::domain(
            QualifiedName::new("public", "geo"),
            DataType::unknown("geometry"),
        );
        assert_eq!(ty.unknown_raw(), Some("geometry"));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&DataType::scalar(ScalarKind::Number)).unwrap();
        assert!(json.contains(r#""type":"scalar""#));
        assert!(json.contains(r#""number""#));
    }
}
