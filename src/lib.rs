//! Domain-Expiry Library
//!
//! Finds out when a domain's TLS certificate and its registration expire:
//! - TLS handshake against the domain to read the leaf certificate's `notAfter`
//! - WHOIS lookup to read the registry's expiry field
//! - Both probes run concurrently and fail independently
//! - Urgency classification of each date at display time
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_expiry::config::Settings;
//! use domain_expiry::models::UrgencyTier;
//! use domain_expiry::runner::ExpiryRunner;
//!
//! #[tokio::main]
//! async fn main() {
//!     let runner = ExpiryRunner::from_settings(&Settings::default());
//!     let result = runner.check("example.com").await.unwrap();
//!     println!("{:?}", UrgencyTier::from_expiry(result.ssl_expiry));
//! }
//! ```

pub mod checks;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod output;
pub mod runner;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Settings;
pub use models::{DomainExpiryResult, ResultSet, UrgencyTier};
pub use runner::ExpiryRunner;
pub use utils::{Result, ToolkitError};
