//! Raw catalog type to canonical [`DataType`] mapping.

mod mysql;
mod postgres;
mod sqlite;

use indexmap::IndexMap;
use sqlts_config::Config;
use sqlts_core::{DateParser, Dialect, NumericParser};
use sqlts_ir::{DataType, EnumCollection, EnumConflict, QualifiedName, ScalarKind};
use tracing::warn;

use crate::{DomainFact, EnumFact, RawType};

/// Domains over domains deeper than this resolve to their raw name.
const MAX_DOMAIN_DEPTH: usize = 8;

/// Options shaping the mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeOptions {
    pub numeric_parser: NumericParser,
    pub date_parser: DateParser,
    /// Keep domains as named types.
    pub domains: bool,
}

impl From<&Config> for TypeOptions {
    fn from(config: &Config) -> Self {
        Self {
            numeric_parser: config.numeric_parser,
            date_parser: config.date_parser,
            domains: config.domains,
        }
    }
}

/// Classification of a built-in type before options apply.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Builtin {
    Kind(ScalarKind),
    /// Arbitrary precision or 64-bit integer.
    Numeric,
    /// Calendar date without time.
    Date,
}

/// Maps raw column types for one dialect.
///
/// Enum and domain definitions are loaded up front. Enums are registered
/// in the run's [`EnumCollection`] the first time a column references them.
#[derive(Debug, Clone)]
pub struct TypeMapper {
    dialect: Dialect,
    options: TypeOptions,
    enums: IndexMap<QualifiedName, Vec<String>>,
    domains: IndexMap<QualifiedName, RawType>,
}

impl TypeMapper {
    pub fn new(dialect: Dialect, options: TypeOptions) -> Self {
        Self {
            dialect,
            options,
            enums: IndexMap::new(),
            domains: IndexMap::new(),
        }
    }

    pub fn with_enums(mut self, facts: impl IntoIterator<Item = EnumFact>) -> Self {
        for fact in facts {
            self.enums.insert(fact.qualified_name(), fact.labels);
        }
        self
    }

    pub fn with_domains(mut self, facts: impl IntoIterator<Item = DomainFact>) -> Self {
        for fact in facts {
            self.domains.insert(fact.qualified_name(), fact.base);
        }
        self
    }

    /// Map a raw type.
    ///
    /// Never fails on unmapped types, which degrade to [`DataType::Unknown`].
    /// Only an enum whose labels disagree with an earlier registration
    /// is an error.
    pub fn map(
        &self,
        raw: &RawType,
        enums: &mut EnumCollection,
    ) -> Result<DataType, EnumConflict> {
        self.map_at_depth(raw, enums, 0)
    }

    fn map_at_depth(
        &self,
        raw: &RawType,
        enums: &mut EnumCollection,
        depth: usize,
    ) -> Result<DataType, EnumConflict> {
        let element = self.map_element(raw, enums, depth)?;
        Ok(if raw.is_array {
            DataType::array_of(element)
        } else {
            element
        })
    }

    fn map_element(
        &self,
        raw: &RawType,
        enums: &mut EnumCollection,
        depth: usize,
    ) -> Result<DataType, EnumConflict> {
        if let Some(inline) = &raw.inline_enum {
            let handle = enums.register(inline.qualified_name(), inline.labels.clone())?;
            return Ok(DataType::enum_ref(handle));
        }

        if let Some(name) = raw.qualified_name() {
            if let Some(labels) = self.enums.get(&name) {
                let handle = enums.register(name, labels.clone())?;
                return Ok(DataType::enum_ref(handle));
            }

            if let Some(base) = self.domains.get(&name)
                && depth < MAX_DOMAIN_DEPTH
            {
                let underlying = self.map_at_depth(base, enums, depth + 1)?;
                return Ok(if self.options.domains {
                    DataType::domain(name, underlying)
                } else {
                    underlying
                });
            }
        }

        let builtin = match self.dialect {
            Dialect::Postgres => postgres::builtin(&raw.name),
            Dialect::Mysql => mysql::builtin(&raw.name),
            Dialect::Sqlite => sqlite::builtin(&raw.name),
        };

        Ok(match builtin {
            Some(Builtin::Kind(kind)) => DataType::scalar(kind),
            Some(Builtin::Numeric) => DataType::scalar(self.numeric_kind()),
            Some(Builtin::Date) => DataType::scalar(self.date_kind()),
            None => {
                warn!(dialect = %self.dialect, raw_type = %raw.name, "no mapping for column type");
                DataType::unknown(&raw.name)
            }
        })
    }

    fn numeric_kind(&self) -> ScalarKind {
        match self.options.numeric_parser {
            NumericParser::Number => ScalarKind::Number,
            NumericParser::String => ScalarKind::NumericString,
            NumericParser::NumberOrString => ScalarKind::NumberOrString,
        }
    }

    fn date_kind(&self) -> ScalarKind {
        match self.options.date_parser {
            DateParser::String => ScalarKind::DateString,
            DateParser::Timestamp => ScalarKind::Timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use sqlts_ir::EnumHandle;

    use super::*;

    fn mapper(dialect: Dialect) -> TypeMapper {
        TypeMapper::new(dialect, TypeOptions::default())
    }

    fn map(mapper: &TypeMapper, raw: RawType) -> DataType {
        mapper.map(&raw, &mut EnumCollection::new()).unwrap()
    }

    #[test]
    fn test_numeric_modes() {
        let raw = RawType::new("numeric").in_schema("pg_catalog");

        let number = TypeMapper::new(
            Dialect::Postgres,
            TypeOptions {
                numeric_parser: NumericParser::Number,
                ..TypeOptions::default()
            },
        );
        assert_eq!(map(&number, raw.clone()), ScalarKind::Number.into());

        let either = TypeMapper::new(
            Dialect::Postgres,
            TypeOptions {
                numeric_parser: NumericParser::NumberOrString,
                ..TypeOptions::default()
            },
        );
        assert_eq!(map(&either, raw.clone()), ScalarKind::NumberOrString.into());

        assert_eq!(
            map(&mapper(Dialect::Postgres), raw),
            ScalarKind::NumericString.into()
        );
    }

    #[test]
    fn test_date_modes() {
        let raw = RawType::new("date");
        assert_eq!(
            map(&mapper(Dialect::Postgres), raw.clone()),
            ScalarKind::Timestamp.into()
        );

        let strings = TypeMapper::new(
            Dialect::Postgres,
            TypeOptions {
                date_parser: DateParser::String,
                ..TypeOptions::default()
            },
        );
        assert_eq!(map(&strings, raw), ScalarKind::DateString.into());
        assert_eq!(
            map(&strings, RawType::new("timestamptz")),
            ScalarKind::Timestamp.into()
        );
    }

    #[test]
    fn test_arrays_recurse() {
        let ty = map(&mapper(Dialect::Postgres), RawType::new("int4").array());
        assert_eq!(ty, DataType::array_of(ScalarKind::Number.into()));
    }

    #[test]
    fn test_unknown_degrades() {
        let ty = map(&mapper(Dialect::Postgres), RawType::new("geometry"));
        assert_eq!(ty, DataType::unknown("geometry"));
    }

    #[test]
    fn test_enum_registers_on_first_use() {
        let mapper = mapper(Dialect::Postgres).with_enums([
            EnumFact::new("public", "mood", ["sad", "ok"]),
            EnumFact::new("public", "status", ["CONFIRMED", "UNCONFIRMED"]),
        ]);
        let mut enums = EnumCollection::new();

        let status = RawType::new("status").in_schema("public");
        let first = mapper.map(&status, &mut enums).unwrap();
        let second = mapper.map(&status.clone().array(), &mut enums).unwrap();

        assert_eq!(enums.len(), 1);
        assert_eq!(first, DataType::enum_ref(EnumHandle::new(0)));
        assert_eq!(second, DataType::array_of(first));
        assert_eq!(
            enums.get(EnumHandle::new(0)).unwrap(),
            ["CONFIRMED", "UNCONFIRMED"]
        );
    }

    #[test]
    fn test_mixed_case_enum_keeps_identity() {
        let mapper = mapper(Dialect::Postgres).with_enums([EnumFact::new(
            "public",
            "OrderStatus",
            ["OPEN", "CLOSED"],
        )]);
        let mut enums = EnumCollection::new();

        let ty = mapper
            .map(&RawType::new("OrderStatus").in_schema("public"), &mut enums)
            .unwrap();

        assert_eq!(ty, DataType::enum_ref(EnumHandle::new(0)));
        let (_, identity, labels) = enums.iter().next().unwrap();
        assert_eq!(identity, &QualifiedName::new("public", "OrderStatus"));
        assert_eq!(labels, ["OPEN", "CLOSED"]);
    }

    #[test]
    fn test_builtin_names_ignore_case() {
        assert_eq!(
            map(&mapper(Dialect::Postgres), RawType::new("INT4")),
            ScalarKind::Number.into()
        );
        assert_eq!(
            map(&mapper(Dialect::Mysql), RawType::new("VARCHAR")),
            ScalarKind::String.into()
        );
    }

    #[test]
    fn test_inline_enum_conflict() {
        let mapper = mapper(Dialect::Mysql);
        let mut enums = EnumCollection::new();

        let a = RawType::new("enum").inline_enum(EnumFact::new("shop", "t_status", ["a", "b"]));
        let b = RawType::new("enum").inline_enum(EnumFact::new("shop", "t_status", ["b", "a"]));

        mapper.map(&a, &mut enums).unwrap();
        assert!(mapper.map(&b, &mut enums).is_err());
    }

    #[test]
    fn test_domains() {
        let domain = DomainFact::new("public", "email", RawType::new("text").in_schema("pg_catalog"));
        let raw = RawType::new("email").in_schema("public");

        let resolved = mapper(Dialect::Postgres).with_domains([domain.clone()]);
        assert_eq!(map(&resolved, raw.clone()), ScalarKind::String.into());

        let nominal = TypeMapper::new(
            Dialect::Postgres,
            TypeOptions {
                domains: true,
                ..TypeOptions::default()
            },
        )
        .with_domains([domain]);
        assert_eq!(
            map(&nominal, raw),
            DataType::domain(
                QualifiedName::new("public", "email"),
                ScalarKind::String.into()
            )
        );
    }

    #[test]
    fn test_mixed_case_domain_resolves() {
        let domain = DomainFact::new(
            "public",
            "EmailAddress",
            RawType::new("text").in_schema("pg_catalog"),
        );
        let nominal = TypeMapper::new(
            Dialect::Postgres,
            TypeOptions {
                domains: true,
                ..TypeOptions::default()
            },
        )
        .with_domains([domain]);

        assert_eq!(
            map(&nominal, RawType::new("EmailAddress").in_schema("public")),
            DataType::domain(
                QualifiedName::new("public", "EmailAddress"),
                ScalarKind::String.into()
            )
        );
    }

    #[test]
    fn test_self_referencing_domain_terminates() {
        let looped = DomainFact::new("public", "odd", RawType::new("odd").in_schema("public"));
        let ty = map(
            &mapper(Dialect::Postgres).with_domains([looped]),
            RawType::new("odd").in_schema("public"),
        );
        assert_eq!(ty.unknown_raw(), Some("odd"));
    }
}
