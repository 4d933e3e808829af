//! Helpers for user-supplied regular expressions.
//!
//! Patterns may be written as bare expressions or as `/source/flags`
//! literals. These helpers only rewrite text; compiling is left to callers.

/// Rewrite a pattern into a source string accepted by the `regex` crate.
///
/// `/source/flags` literals have their flags turned into an inline group:
/// `i`, `m` and `s` are honoured, `g`, `u` and `y` carry no meaning for a
/// single match and are dropped. Anything else is returned unchanged.
pub fn regex_source(pattern: &str) -> String {
    let Some((source, flags)) = split_literal(pattern) else {
        return pattern.to_string();
    };

    let inline: String = flags.chars().filter(|f| matches!(f, 'i' | 'm' | 's')).collect();
    if inline.is_empty() {
        source.to_string()
    } else {
        format!("(?{}){}", inline, source)
    }
}

/// Whether `pattern` is written as a `/source/flags` literal.
pub fn is_regex_literal(pattern: &str) -> bool {
    split_literal(pattern).is_some()
}

fn split_literal(pattern: &str) -> Option<(&str, &str)> {
    let rest = pattern.strip_prefix('/')?;
    let end = rest.rfind('/')?;
    let flags = &rest[end + 1..];
    if !flags.chars().all(|f| "gimsuy".contains(f)) {
        return None;
    }
    Some((&rest[..end], flags))
}

/// Rewrite `$1`-style capture references as `${1}`.
///
/// Without braces the `regex` crate reads `$1us` as a group named `1us`.
pub fn replacement_template(replacement: &str) -> String {
    let mut out = String::with_capacity(replacement.len() + 4);
    let mut chars = replacement.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some(d) if d.is_ascii_digit() => {
                out.push_str("${");
                while let Some(&d) = chars.peek() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    out.push(d);
                    chars.next();
                }
                out.push('}');
            }
            Some('$') => {
                out.push_str("$$");
                chars.next();
            }
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_source_literal() {
        assert_eq!(regex_source("/(bacch)(?:us|i)$/i"), "(?i)(bacch)(?:us|i)$");
        assert_eq!(regex_source("/s$/"), "s$");
        assert_eq!(regex_source("/s$/g"), "s$");
    }

    #[test]
    fn test_regex_source_bare() {
        assert_eq!(regex_source("s$"), "s$");
        assert_eq!(regex_source("/unterminated"), "/unterminated");
        assert_eq!(regex_source("/a/b"), "/a/b");
    }

    #[test]
    fn test_is_regex_literal() {
        assert!(is_regex_literal("/^audit\\./"));
        assert!(is_regex_literal("/users/i"));
        assert!(!is_regex_literal("public.*"));
        assert!(!is_regex_literal("/a/b"));
    }

    #[test]
    fn test_replacement_template() {
        assert_eq!(replacement_template("$1us"), "${1}us");
        assert_eq!(replacement_template("$12x"), "${12}x");
        assert_eq!(replacement_template(""), "");
        assert_eq!(replacement_template("$$1"), "$$1");
        assert_eq!(replacement_template("${1}y"), "${1}y");
    }
}
