use sqlts_ir::ScalarKind;

use super::Builtin;

pub(super) fn builtin(name: &str) -> Option<Builtin> {
    let builtin = match name.to_ascii_lowercase().as_str() {
        "tinyint" | "smallint" | "mediumint" | "int" | "integer" | "year" | "float" | "double"
        | "real" => Builtin::Kind(ScalarKind::Number),
        "bigint" | "decimal" | "numeric" => Builtin::Numeric,
        "bool" | "boolean" => Builtin::Kind(ScalarKind::Boolean),
        "char" | "varchar" | "tinytext" | "text" | "mediumtext" | "longtext" | "time" | "set" => {
            Builtin::Kind(ScalarKind::String)
        }
        "binary" | "varbinary" | "tinyblob" | "blob" | "mediumblob" | "longblob" | "bit" => {
            Builtin::Kind(ScalarKind::Buffer)
        }
        "date" => Builtin::Date,
        "datetime" | "timestamp" => Builtin::Kind(ScalarKind::Timestamp),
        "json" => Builtin::Kind(ScalarKind::Json),
        _ => return None,
    };
    Some(builtin)
}
