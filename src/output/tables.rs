//! Table rendering using comfy-table

use crate::models::{DomainExpiryResult, UrgencyTier};
use crate::utils::dates;
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, ContentArrangement, Table};

const RESULT_HEADERS: [&str; 5] = ["Domain", "SSL Expiry", "Status", "WHOIS Expiry", "Status"];

/// Format a table to a string, indented for terminal output
pub fn format_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    // Constrain table width to terminal width minus indent, default to 120 if detection fails
    let width = crossterm::terminal::size()
        .map(|(cols, _)| cols)
        .unwrap_or(120)
        .saturating_sub(4);
    table.set_width(width);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Cyan))
        .collect();
    table.set_header(header_cells);

    for row in rows {
        let cells: Vec<Cell> = row
            .iter()
            .map(|cell_text| {
                let mut cell = Cell::new(cell_text);
                if cell_text.starts_with('✓') {
                    cell = cell.fg(Color::Green);
                } else if cell_text.starts_with('⚠') {
                    cell = cell.fg(Color::Yellow);
                } else if cell_text.starts_with('✗') {
                    cell = cell.fg(Color::Red);
                }
                cell
            })
            .collect();
        table.add_row(cells);
    }

    let mut out = String::new();
    for line in table.to_string().lines() {
        out.push_str(&format!("    {}\n", line));
    }
    out
}

/// Date cell, or a manual-check link when the date is absent
fn expiry_cell(expiry: Option<NaiveDate>, fallback_url: String) -> String {
    match expiry {
        Some(date) => dates::format_date(date),
        None => format!("Check manually: {}", fallback_url),
    }
}

fn status_cell(expiry: Option<NaiveDate>, today: NaiveDate) -> String {
    let tier = UrgencyTier::classify(expiry, today);
    format!("{} {}", tier.icon(), tier.label())
}

/// Build table rows for results. Status is derived from `today` at render time.
pub fn result_rows(results: &[DomainExpiryResult], today: NaiveDate) -> Vec<Vec<String>> {
    results
        .iter()
        .map(|r| {
            vec![
                r.domain.clone(),
                expiry_cell(r.ssl_expiry, r.ssl_manual_check_url()),
                status_cell(r.ssl_expiry, today),
                expiry_cell(r.whois_expiry, r.whois_manual_check_url()),
                status_cell(r.whois_expiry, today),
            ]
        })
        .collect()
}

/// Format the results table for the given date
pub fn format_results_table(results: &[DomainExpiryResult], today: NaiveDate) -> String {
    let headers: Vec<String> = RESULT_HEADERS.iter().map(|h| h.to_string()).collect();
    format_table(&headers, &result_rows(results, today))
}

/// Print the results table, classified against the current date
pub fn print_results_table(results: &[DomainExpiryResult]) {
    print!("{}", format_results_table(results, dates::today()));
}
