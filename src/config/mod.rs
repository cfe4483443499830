//! Configuration module for domain-expiry
//!
//! Handles loading probe settings from TOML files.

pub mod settings;

pub use settings::{Settings, SslSettings, WhoisSettings, DEFAULT_EXPIRY_FIELDS};

use crate::utils::ConfigError;
use std::path::Path;

/// Load settings from an explicit path, or the default location when none is given
pub fn load_settings<P: AsRef<Path>>(path: Option<P>) -> Result<Settings, ConfigError> {
    match path {
        Some(path) => Settings::load_from_file(path),
        None => Settings::load_default(),
    }
}
