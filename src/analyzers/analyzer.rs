use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info};

use crate::analyzers::aggregate::aggregate;
use crate::analyzers::column::locate_text_column;
use crate::analyzers::types::{LabeledRow, Report};
use crate::analyzers::vader::SentimentIntensityAnalyzer;
use crate::analyzers::verdict::classify;
use crate::config::{AnalyzerConfig, MissingTextPolicy};
use crate::error::AnalysisError;
use crate::fetch::{HttpClient, load_source, source_file_name};
use crate::parser::{Table, parse_table};

/// Labeled rows of one table plus the number of rows left out by
/// [`MissingTextPolicy::Skip`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedTable {
    pub text_column: String,
    pub rows: Vec<LabeledRow>,
    pub skipped_rows: usize,
}

/// Classifies every row of the located text column.
#[tracing::instrument(skip_all, fields(rows = table.len()))]
pub fn classify_table(
    analyzer: &SentimentIntensityAnalyzer,
    config: &AnalyzerConfig,
    table: &Table,
) -> Result<ClassifiedTable, AnalysisError> {
    let text_column = locate_text_column(table.headers(), &config.text_columns)?;
    let index = table
        .column_index(text_column)
        .ok_or(AnalysisError::MissingTextColumn)?;
    debug!(text_column, index, "Located text column");

    let mut rows = Vec::with_capacity(table.len());
    let mut skipped_rows = 0;

    for (idx, cell) in table.column(index).enumerate() {
        let text = match (cell, config.missing_text) {
            (Some(text), _) => text,
            (None, MissingTextPolicy::Empty) => "",
            (None, MissingTextPolicy::Skip) => {
                skipped_rows += 1;
                continue;
            }
        };

        let compound = analyzer.polarity_scores(text).compound;
        let sentiment = classify(compound);
        rows.push(LabeledRow {
            row: idx + 1,
            text: text.to_string(),
            compound,
            sentiment,
        });
    }

    if skipped_rows > 0 {
        debug!(skipped_rows, "Rows without text were skipped");
    }

    Ok(ClassifiedTable {
        text_column: text_column.to_string(),
        rows,
        skipped_rows,
    })
}

/// Classifies and aggregates an already-parsed table.
pub fn analyze_table(
    analyzer: &SentimentIntensityAnalyzer,
    config: &AnalyzerConfig,
    source: &str,
    table: &Table,
) -> Result<Report, AnalysisError> {
    let classified = classify_table(analyzer, config, table)?;
    let summary = aggregate(classified.rows.iter().map(|r| r.sentiment));

    info!(
        source,
        text_column = %classified.text_column,
        positive = summary.positive_count,
        negative = summary.negative_count,
        neutral = summary.neutral_count,
        skipped = classified.skipped_rows,
        overall = %summary.overall_sentiment,
        "Analysis complete"
    );

    Ok(Report {
        source: source.to_string(),
        text_column: classified.text_column,
        generated_at: Utc::now(),
        total_rows: table.len(),
        skipped_rows: classified.skipped_rows,
        summary,
        rows: classified.rows,
    })
}

/// Runs the whole pipeline over raw CSV bytes named `file_name`.
///
/// # Errors
///
/// Fails with [`AnalysisError::UnsupportedFile`] when the name does not pass
/// the extension gate, with a parse error for malformed CSV, and with
/// [`AnalysisError::MissingTextColumn`] when no candidate column exists.
#[tracing::instrument(skip(analyzer, config, bytes), fields(size = bytes.len()))]
pub fn analyze_bytes(
    analyzer: &SentimentIntensityAnalyzer,
    config: &AnalyzerConfig,
    file_name: &str,
    bytes: &[u8],
) -> Result<Report> {
    if !config.is_allowed_file(file_name) {
        return Err(AnalysisError::UnsupportedFile {
            name: file_name.to_string(),
        }
        .into());
    }

    let table = parse_table(bytes)?;
    Ok(analyze_table(analyzer, config, file_name, &table)?)
}

/// Reads or downloads `source` and analyzes it. The extension gate runs
/// before anything is read.
#[tracing::instrument(skip(client, analyzer, config))]
pub async fn analyze_source<C: HttpClient>(
    client: &C,
    analyzer: &SentimentIntensityAnalyzer,
    config: &AnalyzerConfig,
    source: &str,
) -> Result<Report> {
    let file_name = source_file_name(source);
    if !config.is_allowed_file(&file_name) {
        return Err(AnalysisError::UnsupportedFile { name: file_name }.into());
    }

    let bytes = load_source(client, source).await?;
    analyze_bytes(analyzer, config, &file_name, &bytes)
}
