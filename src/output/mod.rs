//! Output formatting for subnet rows, subnet summaries and truth tables.
//!
//! This module handles rendering results for the command line:
//! - `csv` - CSV output formatting
//! - `json` - JSON output via serde
//! - `markdown` - Markdown tables and lists
//! - `terminal` - field helpers shared by the text formats

mod csv;
mod json;
mod markdown;
mod terminal;

pub use csv::{report_csv, step_table_csv, subnet_rows_csv, truth_table_csv};
pub use json::to_json;
pub use markdown::{
    report_markdown, step_table_markdown, subnet_rows_markdown, truth_table_markdown,
};
pub use terminal::format_field;
