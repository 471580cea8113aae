//! Configuration file parsing utilities.
//!
//! This module provides helpers for parsing configuration files with common
//! patterns like comment skipping and key-value parsing.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character
/// - Trims whitespace from both key and value
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (key, value) = line.trim().split_once('=')?;
    Some((key.trim().to_string(), value.trim().to_string()))
}

/// What: Normalize a settings key for lookup.
///
/// Inputs:
/// - `raw`: Key as written by the user
///
/// Output:
/// - Lowercase key with `.`, `-` and spaces replaced by `_`
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Comment and blank lines are skipped; content lines are kept.
    ///
    /// Inputs:
    /// - Mixed comment styles and a key/value line.
    ///
    /// Output:
    /// - Only the key/value line survives.
    fn skips_comments_and_blanks() {
        assert!(skip_comment_or_empty(""));
        assert!(skip_comment_or_empty("   "));
        assert!(skip_comment_or_empty("# comment"));
        assert!(skip_comment_or_empty("// comment"));
        assert!(skip_comment_or_empty("; comment"));
        assert!(!skip_comment_or_empty("clock_format = %H:%M"));
    }

    #[test]
    /// What: Key/value pairs split on the first `=` only.
    ///
    /// Inputs:
    /// - Lines with zero, one and two `=` characters.
    ///
    /// Output:
    /// - Trimmed pairs, `None` without a separator.
    fn parses_key_values() {
        assert_eq!(
            parse_key_value(" curation_delay_ms = 2000 "),
            Some(("curation_delay_ms".to_string(), "2000".to_string()))
        );
        assert_eq!(
            parse_key_value("a = b = c"),
            Some(("a".to_string(), "b = c".to_string()))
        );
        assert_eq!(parse_key_value("no separator"), None);
    }

    #[test]
    /// What: Keys normalize to snake case.
    ///
    /// Inputs:
    /// - `Clock.Format`, `scroll-top threshold`.
    ///
    /// Output:
    /// - Snake-case keys.
    fn normalizes_keys() {
        assert_eq!(normalize_key("Clock.Format"), "clock_format");
        assert_eq!(
            normalize_key("scroll-top threshold"),
            "scroll_top_threshold"
        );
    }
}
