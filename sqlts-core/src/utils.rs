//! Shared utility functions for name conversion.

/// Split a catalog name into words.
///
/// Words are separated by any non-alphanumeric character and by case
/// boundaries (`userId` -> `user`, `Id`; `HTTPServer` -> `HTTP`, `Server`).
pub fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

/// Convert a string to camelCase (e.g., "hello_world" -> "helloWorld")
pub fn to_camel_case(s: &str) -> String {
    split_words(s)
        .iter()
        .enumerate()
        .map(|(i, w)| {
            if i == 0 {
                w.to_lowercase()
            } else {
                capitalize(w)
            }
        })
        .collect()
}

/// Convert a string to SCREAMING_SNAKE_CASE (e.g., "in progress" -> "IN_PROGRESS")
pub fn to_screaming_snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Check whether a string is a valid ECMAScript identifier (ASCII subset).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("bacchus_id"), vec!["bacchus", "id"]);
        assert_eq!(split_words("userId"), vec!["user", "Id"]);
        assert_eq!(split_words("HTTPServer"), vec!["HTTP", "Server"]);
        assert_eq!(split_words("in progress"), vec!["in", "progress"]);
        assert_eq!(split_words("--a--b--"), vec!["a", "b"]);
        assert!(split_words("").is_empty());
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("foo_bar_baz"), "FooBarBaz");
        assert_eq!(to_pascal_case("CONFIRMED"), "Confirmed");
        assert_eq!(to_pascal_case("order-items"), "OrderItems");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("bacchus_id"), "bacchusId");
        assert_eq!(to_camel_case("created_at"), "createdAt");
        assert_eq!(to_camel_case("createdAt"), "createdAt");
        assert_eq!(to_camel_case("userID"), "userId");
        assert_eq!(to_camel_case("address2_line"), "address2Line");
    }

    #[test]
    fn test_to_screaming_snake_case() {
        assert_eq!(to_screaming_snake_case("in progress"), "IN_PROGRESS");
        assert_eq!(to_screaming_snake_case("CONFIRMED"), "CONFIRMED");
        assert_eq!(to_screaming_snake_case("halfDone"), "HALF_DONE");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("bacchusId"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("$ref"));
        assert!(!is_identifier("public.users"));
        assert!(!is_identifier("2fa"));
        assert!(!is_identifier("with space"));
        assert!(!is_identifier(""));
    }
}
