//! Special-character stripping

use regex::Regex;
use std::sync::LazyLock;

static SPECIAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9 ]+").expect("special character class is valid"));

/// Remove every character except ASCII letters, ASCII digits and spaces
pub fn remove_special_characters(text: Option<&str>) -> Option<String> {
    text.map(|t| SPECIAL_CHARS.replace_all(t, "").into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_punctuation() {
        assert_eq!(
            remove_special_characters(Some("Hello, World! #2024")).as_deref(),
            Some("Hello World 2024")
        );
    }

    #[test]
    fn test_removes_non_ascii_and_tabs() {
        assert_eq!(
            remove_special_characters(Some("café\tnaïve_x")).as_deref(),
            Some("cafnavex")
        );
    }

    #[test]
    fn test_clean_text_unchanged() {
        assert_eq!(
            remove_special_characters(Some("plain text 123")).as_deref(),
            Some("plain text 123")
        );
    }

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(remove_special_characters(None), None);
        assert_eq!(remove_special_characters(Some("")).as_deref(), Some(""));
        assert_eq!(remove_special_characters(Some("!@#$")).as_deref(), Some(""));
    }
}
