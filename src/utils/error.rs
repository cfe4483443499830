//! Custom error types for domain-expiry
//!
//! Each probe has its own error enum so the aggregator can log the precise
//! cause before downgrading it to an absent date. Only `ToolkitError` ever
//! reaches the caller.

use thiserror::Error;

/// Top-level error type returned to callers of the expiry check
#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("Invalid domain")]
    InvalidDomain,

    /// Internal fault. The detail is for logs only; callers see a generic message.
    #[error("Failed to check domain")]
    CheckFailed { detail: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// TLS certificate probe errors
#[derive(Error, Debug)]
pub enum SslError {
    #[error("connection to {host}:{port} failed: {message}")]
    ConnectionFailed {
        host: String,
        port: u16,
        message: String,
    },

    #[error("TLS handshake failed: {message}")]
    HandshakeFailed { message: String },

    #[error("TLS probe timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("No certificate found")]
    NoCertificate,

    #[error("Invalid server name: {domain}")]
    InvalidServerName { domain: String },

    #[error("TLS configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Certificate error: {0}")]
    Certificate(#[from] CertificateError),
}

/// Certificate parsing errors
#[derive(Error, Debug)]
pub enum CertificateError {
    #[error("Failed to parse certificate: {message}")]
    ParseError { message: String },

    #[error("Invalid timestamp in certificate")]
    InvalidTimestamp,
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// WHOIS lookup errors
#[derive(Error, Debug)]
pub enum WhoisError {
    #[error("WHOIS lookup failed for {domain}: {message}")]
    LookupFailed { domain: String, message: String },

    #[error("Failed to load WHOIS server list: {message}")]
    ServerList { message: String },

    #[error("WHOIS connection timed out for {domain}")]
    Timeout { domain: String },
}

/// Result type alias using ToolkitError
pub type Result<T> = std::result::Result<T, ToolkitError>;
