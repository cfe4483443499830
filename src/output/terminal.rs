//! Rich terminal output formatting

use crate::models::{days_until, DomainExpiryResult, UrgencyTier};
use crate::utils::dates;
use chrono::NaiveDate;
use console::style;

/// Print section header
pub fn print_header(title: &str) {
    println!();
    println!("{}", style(format!("━━━ {} ━━━", title)).cyan().bold());
    println!();
}

/// Print an error line to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), message);
}

/// One-line summary of an expiry date, e.g. "expires 2027-01-01 (75 days)"
pub fn describe_expiry(expiry: Option<NaiveDate>, today: NaiveDate) -> String {
    let Some(date) = expiry else {
        return "unavailable".to_string();
    };

    let days = days_until(date, today);
    match UrgencyTier::classify(expiry, today) {
        UrgencyTier::Expired if days == 0 => format!("expires today ({})", dates::format_date(date)),
        UrgencyTier::Expired => format!("expired {} ({} days ago)", dates::format_date(date), -days),
        _ => format!("expires {} ({} days)", dates::format_date(date), days),
    }
}

fn styled_line(label: &str, expiry: Option<NaiveDate>, today: NaiveDate) -> String {
    let tier = UrgencyTier::classify(expiry, today);
    let icon = match tier.color_name() {
        "green" => style(tier.icon()).green(),
        "yellow" => style(tier.icon()).yellow(),
        _ => style(tier.icon()).red(),
    };
    format!("  {} {:<14} {}", icon, label, describe_expiry(expiry, today))
}

/// Print a short summary of a single result
pub fn print_result_summary(result: &DomainExpiryResult) {
    let today = dates::today();

    print_header(&result.domain);
    println!("{}", styled_line("SSL certificate", result.ssl_expiry, today));
    if result.ssl_expiry.is_none() {
        println!("      Check manually: {}", result.ssl_manual_check_url());
    }
    println!("{}", styled_line("Registration", result.whois_expiry, today));
    if result.whois_expiry.is_none() {
        println!("      Check manually: {}", result.whois_manual_check_url());
    }
    println!();
}
