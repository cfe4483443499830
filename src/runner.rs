//! Check orchestration engine
//!
//! Runs the certificate and WHOIS probes side by side for one domain and
//! merges them into a single result. A probe that fails only blanks its own
//! date; the request fails only for bad input or an internal fault.

use crate::checks::{CertificateProbe, SslChecker, WhoisChecker, WhoisProbe};
use crate::config::Settings;
use crate::models::DomainExpiryResult;
use crate::utils::{Result, ToolkitError};
use chrono::NaiveDate;
use serde_json::Value;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

/// Per-probe outcome, already reduced to a date or absent
enum ProbeOutcome {
    Certificate(Option<NaiveDate>),
    Whois(Option<NaiveDate>),
}

/// Runs both expiry probes for a domain
#[derive(Clone)]
pub struct ExpiryRunner {
    certificate_probe: Arc<dyn CertificateProbe>,
    whois_probe: Arc<dyn WhoisProbe>,
}

impl ExpiryRunner {
    pub fn new(
        certificate_probe: Arc<dyn CertificateProbe>,
        whois_probe: Arc<dyn WhoisProbe>,
    ) -> Self {
        Self {
            certificate_probe,
            whois_probe,
        }
    }

    /// Build a runner backed by the live network checkers
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            Arc::new(SslChecker::new(settings.ssl.clone())),
            Arc::new(WhoisChecker::new(settings.whois.clone())),
        )
    }

    /// Check certificate and registration expiry for `domain`.
    ///
    /// The domain is echoed back unchanged. Both probes run as separate tasks;
    /// dropping the returned future aborts whichever is still in flight.
    pub async fn check(&self, domain: &str) -> Result<DomainExpiryResult> {
        if domain.trim().is_empty() {
            return Err(ToolkitError::InvalidDomain);
        }

        let mut probes = JoinSet::new();

        let probe = Arc::clone(&self.certificate_probe);
        let target = domain.to_string();
        probes.spawn(async move {
            let expiry = match probe.certificate_expiry(&target).await {
                Ok(date) => Some(date),
                Err(e) => {
                    warn!("SSL probe failed for {}: {}", target, e);
                    None
                }
            };
            ProbeOutcome::Certificate(expiry)
        });

        let probe = Arc::clone(&self.whois_probe);
        let target = domain.to_string();
        probes.spawn(async move {
            let expiry = match probe.whois_expiry(&target).await {
                Ok(Some(date)) => Some(date),
                Ok(None) => {
                    debug!("WHOIS returned no expiry for {}", target);
                    None
                }
                Err(e) => {
                    warn!("WHOIS error for {}: {}", target, e);
                    None
                }
            };
            ProbeOutcome::Whois(expiry)
        });

        let mut ssl_expiry = None;
        let mut whois_expiry = None;

        while let Some(joined) = probes.join_next().await {
            match joined {
                Ok(ProbeOutcome::Certificate(expiry)) => ssl_expiry = expiry,
                Ok(ProbeOutcome::Whois(expiry)) => whois_expiry = expiry,
                Err(e) => {
                    error!("Error checking domain {}: {}", domain, e);
                    return Err(ToolkitError::CheckFailed {
                        detail: e.to_string(),
                    });
                }
            }
        }

        Ok(DomainExpiryResult::new(domain, ssl_expiry, whois_expiry))
    }

    /// Decode a JSON request body and run the check.
    pub async fn check_request(&self, body: &str) -> Result<DomainExpiryResult> {
        let domain = parse_request(body)?;
        self.check(&domain).await
    }
}

/// Extract the domain from a `{"domain": "..."}` request body.
///
/// Malformed JSON is an internal fault; a well-formed body without a
/// non-empty string `domain` is an input error.
pub fn parse_request(body: &str) -> Result<String> {
    let request: Value = serde_json::from_str(body).map_err(|e| {
        error!("Malformed request body: {}", e);
        ToolkitError::CheckFailed {
            detail: format!("malformed request body: {}", e),
        }
    })?;

    match request.get("domain") {
        Some(Value::String(domain)) if !domain.trim().is_empty() => Ok(domain.clone()),
        _ => Err(ToolkitError::InvalidDomain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request() {
        assert_eq!(
            parse_request(r#"{"domain": "example.com"}"#).unwrap(),
            "example.com"
        );
    }

    #[test]
    fn test_parse_request_rejects_bad_domain() {
        for body in [
            r#"{}"#,
            r#"{"domain": ""}"#,
            r#"{"domain": "   "}"#,
            r#"{"domain": 42}"#,
            r#"{"domain": null}"#,
            r#"{"domain": ["example.com"]}"#,
            r#""example.com""#,
        ] {
            assert!(
                matches!(parse_request(body), Err(ToolkitError::InvalidDomain)),
                "{body}"
            );
        }
    }

    #[test]
    fn test_parse_request_malformed_json() {
        assert!(matches!(
            parse_request("{domain"),
            Err(ToolkitError::CheckFailed { .. })
        ));
    }
}
