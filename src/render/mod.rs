//! Output encoders for the ranked statistics.
//!
//! Every encoder writes the sequence as given; ordering is decided
//! before rendering.

mod delimited;
mod json;
mod table;

use std::io::Write;

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::Result;
use crate::model::AuthorStat;

pub const COLUMNS: [&str; 4] = ["Name", "Lines", "Commits", "Files"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Aligned columns
    #[default]
    Tabular,
    /// Comma-separated values with a header row
    Csv,
    /// A single JSON array
    Json,
    /// One JSON object per line
    JsonLines,
}

pub fn render(format: OutputFormat, stats: &[AuthorStat], out: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Tabular => table::write_table(stats, out),
        OutputFormat::Csv => delimited::write_csv(stats, out),
        OutputFormat::Json => json::write_json(stats, out),
        OutputFormat::JsonLines => json::write_json_lines(stats, out),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
