//! Caller-side domain normalization and syntax checks
//!
//! The expiry check itself echoes whatever domain it is given. Front ends
//! normalize and validate before calling it.

use regex::Regex;
use std::sync::OnceLock;

fn domain_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9.-]+\.[a-z]{2,}$").expect("Invalid domain pattern"))
}

/// Normalize user input to a bare lowercase host name.
///
/// `" https://Example.COM:8443/path "` becomes `"example.com"`.
pub fn normalize_domain(input: &str) -> String {
    let mut domain = input.trim().to_lowercase();

    if let Some(pos) = domain.find("://") {
        domain = domain[pos + 3..].to_string();
    }
    if let Some(pos) = domain.find(['/', '?', '#']) {
        domain.truncate(pos);
    }
    if let Some(pos) = domain.rfind(':') {
        if domain[pos + 1..].chars().all(|c| c.is_ascii_digit()) {
            domain.truncate(pos);
        }
    }

    domain.trim_end_matches('.').to_string()
}

/// Check that a normalized domain looks like `label.tld`
pub fn is_valid_domain(domain: &str) -> bool {
    domain_pattern().is_match(domain)
}
