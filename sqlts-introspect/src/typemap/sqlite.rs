use sqlts_ir::ScalarKind;

use super::Builtin;

/// Classify a declared type by SQLite's affinity rules.
///
/// Temporal and JSON values are stored as text and read back as strings.
pub(super) fn builtin(declared: &str) -> Option<Builtin> {
    let ty = declared.to_ascii_lowercase();
    let base = ty.split('(').next().unwrap_or_default().trim();

    if base.is_empty() {
        return None;
    }
    if matches!(base, "bigint" | "int8" | "unsigned big int") {
        return Some(Builtin::Numeric);
    }
    if ty.contains("int") {
        return Some(Builtin::Kind(ScalarKind::Number));
    }
    if ty.contains("char") || ty.contains("clob") || ty.contains("text") {
        return Some(Builtin::Kind(ScalarKind::String));
    }
    if ty.contains("blob") {
        return Some(Builtin::Kind(ScalarKind::Buffer));
    }
    if ty.contains("real") || ty.contains("floa") || ty.contains("doub") {
        return Some(Builtin::Kind(ScalarKind::Number));
    }
    if matches!(base, "numeric" | "decimal") {
        return Some(Builtin::Numeric);
    }
    if matches!(base, "boolean" | "bool") {
        return Some(Builtin::Kind(ScalarKind::Number));
    }
    if matches!(base, "date" | "datetime" | "timestamp" | "time" | "json") {
        return Some(Builtin::Kind(ScalarKind::String));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affinity() {
        assert_eq!(builtin("INTEGER"), Some(Builtin::Kind(ScalarKind::Number)));
        assert_eq!(builtin("BIGINT"), Some(Builtin::Numeric));
        assert_eq!(builtin("VARCHAR(255)"), Some(Builtin::Kind(ScalarKind::String)));
        assert_eq!(builtin("BLOB"), Some(Builtin::Kind(ScalarKind::Buffer)));
        assert_eq!(builtin("DOUBLE PRECISION"), Some(Builtin::Kind(ScalarKind::Number)));
        assert_eq!(builtin("DECIMAL(10,2)"), Some(Builtin::Numeric));
        assert_eq!(builtin("datetime"), Some(Builtin::Kind(ScalarKind::String)));
        assert_eq!(builtin(""), None);
        assert_eq!(builtin("geometry"), None);
    }
}
