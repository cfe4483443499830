//! CLI argument definitions using clap

use crate::config::{self, Settings};
use crate::utils::domain::normalize_domain;
use crate::utils::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "domain-expiry")]
#[command(version)]
#[command(about = "Check when a domain's TLS certificate and registration expire", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<SubCommand>,

    /// Domain to check (shortcut for 'check' command)
    #[arg(value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Interactive mode: check domains one after another and keep a results table
    #[arg(short, long)]
    pub interactive: bool,

    /// Output JSON instead of formatted text
    #[arg(long)]
    pub json: bool,

    /// Settings file (defaults to config/default.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// TLS probe timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum SubCommand {
    /// Check certificate and registration expiry for a domain
    Check(CheckArgs),

    /// Answer JSON requests read line by line from stdin
    Serve,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Domain to check
    #[arg(required = true)]
    pub domain: String,
}

impl Cli {
    /// Domain argument trimmed, lowercased and stripped of scheme and path
    pub fn normalized_domain(&self) -> Option<String> {
        self.domain.as_deref().map(normalize_domain)
    }

    /// Interactive prompts are skipped when JSON output is requested
    pub fn is_interactive(&self) -> bool {
        self.interactive && !self.json
    }

    /// Load settings from `--config` (or the default path) and apply CLI overrides
    pub fn load_settings(&self) -> Result<Settings> {
        let mut settings = config::load_settings(self.config.as_ref())?;
        if let Some(timeout) = self.timeout {
            settings.ssl.connect_timeout_secs = timeout;
            settings.validate()?;
        }
        Ok(settings)
    }
}
