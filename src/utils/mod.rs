//! Utility modules for domain-expiry
//!
//! Error types, date handling, domain normalization and progress indicators.

pub mod dates;
pub mod domain;
pub mod error;
pub mod progress;

pub use error::{CertificateError, ConfigError, Result, SslError, ToolkitError, WhoisError};
