//! Email normalization and validation utilities
//!
//! Emails are treated case-insensitively throughout the system: every service
//! boundary normalizes before lookups, uniqueness checks, and throttle keys,
//! so `Alice@Example.com` and `alice@example.com` are the same identity.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

/// Normalize an email address for use as an identity key.
pub fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check whether a string looks like an email address.
pub fn is_valid(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}
