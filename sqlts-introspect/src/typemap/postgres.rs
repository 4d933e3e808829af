use sqlts_ir::ScalarKind;

use super::Builtin;

pub(super) fn builtin(name: &str) -> Option<Builtin> {
    let builtin = match name.to_ascii_lowercase().as_str() {
        "int2" | "int4" | "smallint" | "integer" | "float4" | "float8" | "real"
        | "double precision" | "oid" => Builtin::Kind(ScalarKind::Number),
        "int8" | "bigint" | "numeric" | "decimal" | "money" => Builtin::Numeric,
        "bool" | "boolean" => Builtin::Kind(ScalarKind::Boolean),
        "text" | "varchar" | "character varying" | "bpchar" | "char" | "character" | "name"
        | "citext" | "uuid" | "inet" | "cidr" | "macaddr" | "macaddr8" | "xml" | "bit"
        | "varbit" | "time" | "timetz" | "interval" | "tsvector" | "tsquery" => {
            Builtin::Kind(ScalarKind::String)
        }
        "date" => Builtin::Date,
        "timestamp" | "timestamptz" => Builtin::Kind(ScalarKind::Timestamp),
        "json" | "jsonb" => Builtin::Kind(ScalarKind::Json),
        "bytea" => Builtin::Kind(ScalarKind::Buffer),
        _ => return None,
    };
    Some(builtin)
}
