//! Command implementations for domain-expiry

pub mod check;
pub mod serve;

pub use check::run_check;
pub use serve::{handle_request, run_serve};
