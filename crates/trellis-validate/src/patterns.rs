//! Built-in format checks.

use regex::Regex;
use std::sync::OnceLock;

// Pre-compiled regex patterns
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    // One `@`, no whitespace, and a dot somewhere in the domain
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

fn url_regex() -> &'static Regex {
    URL_REGEX.get_or_init(|| {
        Regex::new(r"^(https?://)?([A-Za-z0-9_.-]+)\.([a-z]{2,6})([/A-Za-z0-9_ .-]*)*/?$").unwrap()
    })
}

fn phone_regex() -> &'static Regex {
    // Mainland China mobile numbers
    PHONE_REGEX.get_or_init(|| Regex::new(r"^1[3-9][0-9]{9}$").unwrap())
}

/// Whether `value` looks like an email address.
pub fn is_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Whether `value` looks like a URL: optional `http(s)://`, a dotted host with a
/// 2-6 letter top-level label, and an optional path.
pub fn is_url(value: &str) -> bool {
    url_regex().is_match(value)
}

/// Whether `value` is an 11-digit mobile number starting `13`-`19`.
pub fn is_phone(value: &str) -> bool {
    phone_regex().is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_valid() {
        assert!(is_email("test@example.com"));
        assert!(is_email("user.name+tag@domain.co.uk"));
        assert!(is_email("a@b.c"));
    }

    #[test]
    fn email_invalid() {
        assert!(!is_email("invalid-email"));
        assert!(!is_email("@domain.com"));
        assert!(!is_email("user@"));
        assert!(!is_email("user@domain"));
        assert!(!is_email("a@b@c.com"));
        assert!(!is_email("a b@c.com"));
    }

    #[test]
    fn url_valid() {
        assert!(is_url("https://example.com"));
        assert!(is_url("http://www.example.org/path/to/page"));
        assert!(is_url("example.io"));
        assert!(is_url("sub.domain-name.com/"));
    }

    #[test]
    fn url_invalid() {
        assert!(!is_url("invalid-url"));
        assert!(!is_url("ftp://example.com"));
        assert!(!is_url("https://example.c"));
        assert!(!is_url("https://exa mple.com"));
        assert!(!is_url("http://example.com/search?q=1"));
    }

    #[test]
    fn phone_valid() {
        assert!(is_phone("13812345678"));
        assert!(is_phone("19900000000"));
    }

    #[test]
    fn phone_invalid() {
        assert!(!is_phone("123456789"));
        assert!(!is_phone("12812345678"));
        assert!(!is_phone("138123456789"));
        assert!(!is_phone("1381234567a"));
    }
}
