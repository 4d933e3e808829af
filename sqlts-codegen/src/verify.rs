//! Comparison of freshly generated output against a committed file.

use std::fmt;

/// The first line where two outputs differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// 1-based line number.
    pub line: usize,
    /// The line generation produced, `None` past the end of the output.
    pub expected: Option<String>,
    /// The line found in the existing file, `None` past its end.
    pub actual: Option<String>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |line: &Option<String>| match line {
            Some(line) => format!("{:?}", line),
            None => "end of file".to_string(),
        };
        write!(
            f,
            "line {}: expected {}, found {}",
            self.line,
            show(&self.expected),
            show(&self.actual)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    Match,
    Mismatch(Mismatch),
}

impl VerifyOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, VerifyOutcome::Match)
    }
}

/// Compare generated text with an existing file's content.
///
/// Both sides are normalized the same way first: CRLF line endings become
/// LF and trailing whitespace at the end of the text is dropped.
pub fn verify(generated: &str, existing: &str) -> VerifyOutcome {
    let generated = normalize(generated);
    let existing = normalize(existing);

    if generated == existing {
        return VerifyOutcome::Match;
    }

    // Splitting on '\n' keeps every byte, so unequal texts always differ on some line.
    let expected: Vec<&str> = generated.split('\n').collect();
    let actual: Vec<&str> = existing.split('\n').collect();
    let total = expected.len().max(actual.len());
    let index = (0..total)
        .find(|&i| expected.get(i) != actual.get(i))
        .unwrap_or(total.saturating_sub(1));

    VerifyOutcome::Mismatch(Mismatch {
        line: index + 1,
        expected: expected.get(index).map(|line| line.to_string()),
        actual: actual.get(index).map(|line| line.to_string()),
    })
}

fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTPUT: &str = "export interface User {\n  id: number;\n}\n";

    #[test]
    fn test_identical_output_matches() {
        assert!(verify(OUTPUT, OUTPUT).is_match());
    }

    #[test]
    fn test_line_endings_and_trailing_newlines_ignored() {
        let committed = "export interface User {\r\n  id: number;\r\n}\r\n\r\n";
        assert_eq!(verify(OUTPUT, committed), VerifyOutcome::Match);
    }

    #[test]
    fn test_reports_first_differing_line() {
        let committed = "export interface User {\n  id: string;\n}\n";

        let VerifyOutcome::Mismatch(mismatch) = verify(OUTPUT, committed) else {
            panic!("expected a mismatch");
        };

        assert_eq!(mismatch.line, 2);
        assert_eq!(mismatch.expected.as_deref(), Some("  id: number;"));
        assert_eq!(mismatch.actual.as_deref(), Some("  id: string;"));
        assert_eq!(
            mismatch.to_string(),
            "line 2: expected \"  id: number;\", found \"  id: string;\""
        );
    }

    #[test]
    fn test_truncated_file() {
        let committed = "export interface User {\n";

        let VerifyOutcome::Mismatch(mismatch) = verify(OUTPUT, committed) else {
            panic!("expected a mismatch");
        };

        assert_eq!(mismatch.line, 2);
        assert_eq!(mismatch.actual, None);
        assert!(mismatch.to_string().ends_with("found end of file"));
    }

    #[test]
    fn test_stray_carriage_return_is_a_mismatch() {
        let VerifyOutcome::Mismatch(mismatch) = verify("a\nb\n", "a\r\r\nb\n") else {
            panic!("expected a mismatch");
        };

        assert_eq!(mismatch.line, 1);
        assert_eq!(mismatch.expected.as_deref(), Some("a"));
        assert_eq!(mismatch.actual.as_deref(), Some("a\r"));
    }

    #[test]
    fn test_empty_existing_file() {
        let VerifyOutcome::Mismatch(mismatch) = verify(OUTPUT, "") else {
            panic!("expected a mismatch");
        };
        assert_eq!(mismatch.line, 1);
    }
}
