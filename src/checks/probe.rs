//! Probe seams used by the runner
//!
//! The runner only depends on these traits, so the live checkers can be
//! swapped for in-memory probes in tests.

use super::{SslChecker, WhoisChecker};
use crate::utils::{SslError, WhoisError};
use chrono::NaiveDate;

/// Source of a domain's certificate expiry date
#[async_trait::async_trait]
pub trait CertificateProbe: Send + Sync {
    async fn certificate_expiry(&self, domain: &str) -> Result<NaiveDate, SslError>;
}

/// Source of a domain's registration expiry date.
/// `Ok(None)` means the registry had no usable expiry.
#[async_trait::async_trait]
pub trait WhoisProbe: Send + Sync {
    async fn whois_expiry(&self, domain: &str) -> Result<Option<NaiveDate>, WhoisError>;
}

#[async_trait::async_trait]
impl CertificateProbe for SslChecker {
    async fn certificate_expiry(&self, domain: &str) -> Result<NaiveDate, SslError> {
        self.expiry(domain).await
    }
}

#[async_trait::async_trait]
impl WhoisProbe for WhoisChecker {
    async fn whois_expiry(&self, domain: &str) -> Result<Option<NaiveDate>, WhoisError> {
        self.expiry(domain).await
    }
}
