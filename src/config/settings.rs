//! Application settings configuration
//!
//! Defines probe timeouts, the TLS port and the WHOIS expiry field candidates.

use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// WHOIS field names checked for an expiry date, most specific first
pub const DEFAULT_EXPIRY_FIELDS: &[&str] = &[
    "Registry Expiry Date",
    "Registrar Registration Expiration Date",
    "Expiration Date",
];

/// TLS probe settings
#[derive(Debug, Clone, Deserialize)]
pub struct SslSettings {
    #[serde(default = "default_ssl_port")]
    pub port: u16,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_ssl_port() -> u16 {
    443
}

fn default_connect_timeout() -> u64 {
    5
}

impl Default for SslSettings {
    fn default() -> Self {
        Self {
            port: default_ssl_port(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl SslSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// WHOIS settings
#[derive(Debug, Clone, Deserialize)]
pub struct WhoisSettings {
    #[serde(default = "default_whois_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_follow_referrals")]
    pub follow_referrals: u16,
    #[serde(default = "default_expiry_fields")]
    pub expiry_fields: Vec<String>,
    /// Query this `host[:port]` instead of the registry picked by TLD
    #[serde(default)]
    pub server: Option<String>,
}

fn default_whois_timeout() -> u64 {
    10
}

fn default_follow_referrals() -> u16 {
    2
}

fn default_expiry_fields() -> Vec<String> {
    DEFAULT_EXPIRY_FIELDS.iter().map(|f| f.to_string()).collect()
}

impl Default for WhoisSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_whois_timeout(),
            follow_referrals: default_follow_referrals(),
            expiry_fields: default_expiry_fields(),
            server: None,
        }
    }
}

impl WhoisSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub ssl: SslSettings,
    #[serde(default)]
    pub whois: WhoisSettings,
}

impl Settings {
    /// Load settings from the default config file, falling back to built-in defaults
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        Self::from_toml(&content)
    }

    /// Parse and validate settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that would make a probe unusable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ssl.connect_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "ssl.connect_timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.whois.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "whois.timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.whois.expiry_fields.iter().all(|f| f.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                key: "whois.expiry_fields".to_string(),
                message: "at least one field name is required".to_string(),
            });
        }
        Ok(())
    }
}
