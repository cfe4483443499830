use async_trait::async_trait;
use chrono::NaiveDate;
use domain_expiry::checks::{CertificateProbe, WhoisProbe};
use domain_expiry::runner::ExpiryRunner;
use domain_expiry::utils::{SslError, ToolkitError, WhoisError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Certificate probe with a scripted outcome and an optional delay
struct FakeCertificate {
    outcome: Option<NaiveDate>,
    delay: Duration,
    calls: AtomicUsize,
}

impl FakeCertificate {
    fn new(outcome: Option<NaiveDate>) -> Arc<Self> {
        Self::delayed(outcome, Duration::ZERO)
    }

    fn delayed(outcome: Option<NaiveDate>, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            delay,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl CertificateProbe for FakeCertificate {
    async fn certificate_expiry(&self, _domain: &str) -> Result<NaiveDate, SslError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.outcome.ok_or(SslError::Timeout { seconds: 5 })
    }
}

/// WHOIS probe with a scripted outcome; `Err` when `fail` is set
struct FakeWhois {
    outcome: Option<NaiveDate>,
    fail: bool,
    delay: Duration,
    calls: AtomicUsize,
}

impl FakeWhois {
    fn new(outcome: Option<NaiveDate>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            fail: false,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            outcome: None,
            fail: true,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        })
    }

    fn delayed(outcome: Option<NaiveDate>, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            fail: false,
            delay,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl WhoisProbe for FakeWhois {
    async fn whois_expiry(&self, domain: &str) -> Result<Option<NaiveDate>, WhoisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        if self.fail {
            return Err(WhoisError::LookupFailed {
                domain: domain.to_string(),
                message: "connection reset".to_string(),
            });
        }
        Ok(self.outcome)
    }
}

#[tokio::test]
async fn test_both_probes_succeed() {
    let runner = ExpiryRunner::new(
        FakeCertificate::new(Some(ymd(2027, 3, 1))),
        FakeWhois::new(Some(ymd(2030, 1, 1))),
    );

    let result = runner.check("example.com").await.unwrap();
    assert_eq!(result.domain, "example.com");
    assert_eq!(result.ssl_expiry, Some(ymd(2027, 3, 1)));
    assert_eq!(result.whois_expiry, Some(ymd(2030, 1, 1)));
}

#[tokio::test]
async fn test_domain_is_echoed_unchanged() {
    let runner = ExpiryRunner::new(FakeCertificate::new(None), FakeWhois::new(None));
    let result = runner.check("Example.COM").await.unwrap();
    assert_eq!(result.domain, "Example.COM");
}

#[tokio::test]
async fn test_ssl_failure_leaves_whois_intact() {
    let runner = ExpiryRunner::new(
        FakeCertificate::new(None),
        FakeWhois::new(Some(ymd(2030, 1, 1))),
    );

    let result = runner.check("example.com").await.unwrap();
    assert_eq!(result.ssl_expiry, None);
    assert_eq!(result.whois_expiry, Some(ymd(2030, 1, 1)));
}

#[tokio::test]
async fn test_whois_failure_leaves_ssl_intact() {
    let runner = ExpiryRunner::new(
        FakeCertificate::new(Some(ymd(2027, 3, 1))),
        FakeWhois::failing(),
    );

    let result = runner.check("example.com").await.unwrap();
    assert_eq!(result.ssl_expiry, Some(ymd(2027, 3, 1)));
    assert_eq!(result.whois_expiry, None);
}

#[tokio::test]
async fn test_both_probes_fail_still_ok() {
    let runner = ExpiryRunner::new(FakeCertificate::new(None), FakeWhois::failing());

    let result = runner.check("example.com").await.unwrap();
    assert_eq!(result.ssl_expiry, None);
    assert_eq!(result.whois_expiry, None);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["status"], "ok");
    assert!(json["sslExpiry"].is_null());
    assert!(json["whoisExpiry"].is_null());
}

#[tokio::test]
async fn test_invalid_domain_makes_no_probe_calls() {
    let certificate = FakeCertificate::new(Some(ymd(2027, 3, 1)));
    let whois = FakeWhois::new(Some(ymd(2030, 1, 1)));
    let runner = ExpiryRunner::new(certificate.clone(), whois.clone());

    for domain in ["", "   "] {
        let err = runner.check(domain).await.unwrap_err();
        assert!(matches!(err, ToolkitError::InvalidDomain));
    }
    for body in [r#"{"domain": 7}"#, r#"{"name": "example.com"}"#] {
        let err = runner.check_request(body).await.unwrap_err();
        assert!(matches!(err, ToolkitError::InvalidDomain));
    }

    assert_eq!(certificate.calls.load(Ordering::SeqCst), 0);
    assert_eq!(whois.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_probes_run_concurrently() {
    let runner = ExpiryRunner::new(
        FakeCertificate::delayed(Some(ymd(2027, 3, 1)), Duration::from_secs(3)),
        FakeWhois::delayed(Some(ymd(2030, 1, 1)), Duration::from_secs(4)),
    );

    let started = tokio::time::Instant::now();
    let result = runner.check("example.com").await.unwrap();

    assert!(started.elapsed() < Duration::from_secs(5));
    assert!(result.ssl_expiry.is_some());
    assert!(result.whois_expiry.is_some());
}

/// Flips a flag when the probe future holding it is dropped
struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

struct HangingWhois {
    dropped: Arc<AtomicBool>,
}

#[async_trait]
impl WhoisProbe for HangingWhois {
    async fn whois_expiry(&self, _domain: &str) -> Result<Option<NaiveDate>, WhoisError> {
        let _guard = DropFlag(Arc::clone(&self.dropped));
        std::future::pending::<()>().await;
        Ok(None)
    }
}

#[tokio::test(start_paused = true)]
async fn test_cancelling_check_aborts_probes() {
    let dropped = Arc::new(AtomicBool::new(false));
    let runner = ExpiryRunner::new(
        FakeCertificate::new(Some(ymd(2027, 3, 1))),
        Arc::new(HangingWhois {
            dropped: Arc::clone(&dropped),
        }),
    );

    let outcome = tokio::time::timeout(Duration::from_secs(1), runner.check("example.com")).await;
    assert!(outcome.is_err());

    // Aborted tasks are dropped the next time the scheduler runs them
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(dropped.load(Ordering::SeqCst));
}

struct PanickingCertificate;

#[async_trait]
impl CertificateProbe for PanickingCertificate {
    async fn certificate_expiry(&self, _domain: &str) -> Result<NaiveDate, SslError> {
        panic!("certificate parser bug");
    }
}

#[tokio::test]
async fn test_internal_fault_is_generic_request_error() {
    let runner = ExpiryRunner::new(Arc::new(PanickingCertificate), FakeWhois::new(None));

    let err = runner.check("example.com").await.unwrap_err();
    assert!(matches!(err, ToolkitError::CheckFailed { .. }));
    assert_eq!(err.to_string(), "Failed to check domain");
}
