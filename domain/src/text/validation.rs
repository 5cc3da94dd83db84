//! Email and URL validity checks

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

// local@domain, dot-atom local part, hyphenated domain labels
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// Check whether `email` is exactly one bare address.
///
/// Display-name forms (`Name <a@b.c>`) and surrounding whitespace are
/// rejected.
pub fn is_valid_email(email: Option<&str>) -> bool {
    match email {
        Some(e) if !e.trim().is_empty() => EMAIL_PATTERN.is_match(e),
        _ => false,
    }
}

/// Check whether `url` is an absolute `http` or `https` URL
pub fn is_valid_url(url: Option<&str>) -> bool {
    let Some(url) = url.filter(|u| !u.trim().is_empty()) else {
        return false;
    };
    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email(Some("user@example.com")));
        assert!(is_valid_email(Some("first.last+tag@sub.example.co.uk")));
        assert!(is_valid_email(Some("admin@localhost")));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(None));
        assert!(!is_valid_email(Some("")));
        assert!(!is_valid_email(Some("   ")));
        assert!(!is_valid_email(Some("plainaddress")));
        assert!(!is_valid_email(Some("@example.com")));
        assert!(!is_valid_email(Some("user@")));
        assert!(!is_valid_email(Some("user@@example.com")));
        assert!(!is_valid_email(Some(".user@example.com")));
        assert!(!is_valid_email(Some("user..name@example.com")));
        assert!(!is_valid_email(Some("user@-example.com")));
        assert!(!is_valid_email(Some(" user@example.com")));
        assert!(!is_valid_email(Some("Jane <jane@example.com>")));
    }

    #[test]
    fn test_valid_urls() {
        assert!(is_valid_url(Some("https://example.com")));
        assert!(is_valid_url(Some("http://localhost:8080/path?q=1#frag")));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(!is_valid_url(None));
        assert!(!is_valid_url(Some("")));
        assert!(!is_valid_url(Some("  ")));
        assert!(!is_valid_url(Some("example.com")));
        assert!(!is_valid_url(Some("/relative/path")));
        assert!(!is_valid_url(Some("ftp://example.com/file")));
        assert!(!is_valid_url(Some("mailto:user@example.com")));
        assert!(!is_valid_url(Some("http://")));
    }
}
