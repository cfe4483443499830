//! Progress indicators for CLI mode
//!
//! A spinner while both probes run, and one status line per probe once they finish.

use crate::utils::dates;
use chrono::NaiveDate;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while a domain is being probed
pub fn probe_spinner(domain: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg} {elapsed:.dim}")
            .expect("Invalid spinner template"),
    );
    spinner.set_message(format!("Checking certificate and registration for {}...", domain));
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Status line for one probe: its date, or a note that it came back empty
pub fn expiry_line(probe: &str, expiry: Option<NaiveDate>) -> String {
    match expiry {
        Some(date) => format!(
            "  {} {} expires on {}",
            style("✓").green(),
            probe,
            dates::format_date(date)
        ),
        None => format!("  {} {} expiry unavailable", style("ℹ").cyan(), probe),
    }
}
