//! Output formatting for analysis reports.
//!
//! Supports the plain-text result page, pretty-printing, JSON serialization,
//! and a CSV export of the labeled rows.

use anyhow::{Context, Result};
use tracing::debug;

use crate::analyzers::types::{LabeledRow, Report, Summary};
use csv::WriterBuilder;
use std::fs::File;

/// Renders a [`Summary`] as the lines shown to the user.
pub fn render_summary(summary: &Summary) -> String {
    format!(
        "Positive comments: {}\nNegative comments: {}\nNeutral comments: {}\nOverall sentiment: {}\nSuggestion: {}\n",
        summary.positive_count,
        summary.negative_count,
        summary.neutral_count,
        summary.overall_sentiment,
        summary.suggestion,
    )
}

/// Serializes a report (without the per-row data) as pretty-printed JSON.
pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &Report) {
    debug!("{:#?}", report);
}

/// Writes labeled rows to a CSV file at `path`, replacing any existing file.
pub fn write_labeled_rows(path: &str, rows: &[LabeledRow]) -> Result<()> {
    debug!(path, rows = rows.len(), "Writing labeled rows");

    let file = File::create(path).with_context(|| format!("failed to create '{path}'"))?;
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(file);

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
