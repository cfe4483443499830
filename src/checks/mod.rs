//! Check modules for domain-expiry
//!
//! The two independent expiry probes and the seams the runner uses to call them.

pub mod certificate;
pub mod probe;
pub mod ssl;
pub mod whois;

pub use probe::{CertificateProbe, WhoisProbe};
pub use ssl::SslChecker;
pub use whois::{WhoisChecker, WhoisRecord};
