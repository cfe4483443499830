//! Calendar date helpers
//!
//! Every expiry is reduced to a UTC calendar date. WHOIS registries publish
//! dates in many layouts, so parsing tries a fixed list of them in turn.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Timestamp layouts carrying an explicit offset
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S %z",
];

/// Timestamp layouts without an offset, read as UTC
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S UTC",
    "%Y-%m-%d %H:%M:%S GMT",
    "%d-%b-%Y %H:%M:%S UTC",
];

/// Date-only layouts
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y.%m.%d", "%Y/%m/%d", "%d-%b-%Y", "%d.%m.%Y"];

/// Convert an instant to its UTC calendar date
pub fn to_calendar_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// Current UTC calendar date
pub fn today() -> NaiveDate {
    to_calendar_date(Utc::now())
}

/// Render a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse free-form expiry text into a UTC calendar date.
///
/// Returns `None` when no known layout matches. A trailing annotation after
/// the first whitespace-separated token (some registries append a zone name
/// or comment) is tolerated.
pub fn parse_expiry_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    parse_exact(text).or_else(|| {
        text.split_whitespace()
            .next()
            .filter(|token| *token != text)
            .and_then(parse_exact)
    })
}

fn parse_exact(text: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(to_calendar_date(dt.with_timezone(&Utc)));
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, format) {
            return Some(to_calendar_date(dt.with_timezone(&Utc)));
        }
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt.date());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }

    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|dt| to_calendar_date(dt.with_timezone(&Utc)))
}
