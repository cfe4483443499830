//! Output formatting module
//!
//! Provides the output formats:
//! - Rich terminal output with colors and tables
//! - JSON export

pub mod json;
pub mod tables;
pub mod terminal;

pub use json::{print_json, to_json_line, ErrorOutput};
pub use tables::{format_results_table, print_results_table};
pub use terminal::{describe_expiry, print_error, print_header, print_result_summary};
