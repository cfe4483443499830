//! Combined expiry result for a single domain

use chrono::NaiveDate;
use serde::Serialize;

/// Marks a check that ran to completion, independent of what either probe found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    #[default]
    Ok,
}

/// Outcome of probing one domain.
///
/// Absent dates serialize as `null`. Urgency is not stored here; it depends
/// on the current date and is derived with [`super::UrgencyTier`] when shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainExpiryResult {
    pub domain: String,
    pub ssl_expiry: Option<NaiveDate>,
    pub whois_expiry: Option<NaiveDate>,
    pub status: ResultStatus,
}

impl DomainExpiryResult {
    pub fn new(
        domain: impl Into<String>,
        ssl_expiry: Option<NaiveDate>,
        whois_expiry: Option<NaiveDate>,
    ) -> Self {
        Self {
            domain: domain.into(),
            ssl_expiry,
            whois_expiry,
            status: ResultStatus::Ok,
        }
    }

    /// Link to a third-party TLS checker, offered when `ssl_expiry` is absent
    pub fn ssl_manual_check_url(&self) -> String {
        format!(
            "https://www.sslshopper.com/ssl-checker.html#hostname={}",
            self.domain
        )
    }

    /// Link to a public WHOIS page, offered when `whois_expiry` is absent
    pub fn whois_manual_check_url(&self) -> String {
        format!("https://who.is/whois/{}", self.domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_wire_shape() {
        let result = DomainExpiryResult::new(
            "example.com",
            NaiveDate::from_ymd_opt(2026, 1, 15),
            None,
        );

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "domain": "example.com",
                "sslExpiry": "2026-01-15",
                "whoisExpiry": null,
                "status": "ok"
            })
        );
    }

    #[test]
    fn test_manual_check_urls() {
        let result = DomainExpiryResult::new("example.org", None, None);
        assert_eq!(
            result.ssl_manual_check_url(),
            "https://www.sslshopper.com/ssl-checker.html#hostname=example.org"
        );
        assert_eq!(result.whois_manual_check_url(), "https://who.is/whois/example.org");
    }
}
