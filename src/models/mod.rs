//! Data models for domain-expiry
//!
//! This module contains the data structures shared by the probes, the
//! aggregator and the output layer.

pub mod expiry_result;
pub mod result_set;
pub mod urgency;

pub use expiry_result::{DomainExpiryResult, ResultStatus};
pub use result_set::ResultSet;
pub use urgency::{days_until, UrgencyTier, EXPIRING_SOON_DAYS};
