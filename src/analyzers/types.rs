//! Data types used by the classification pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Polarity label assigned to one row, and the dataset-level verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified row. `row` is the 1-based data row number (header excluded).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledRow {
    pub row: usize,
    pub text: String,
    pub compound: f64,
    pub sentiment: Sentiment,
}

/// Label counts, verdict, and canned suggestion for one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub overall_sentiment: Sentiment,
    pub suggestion: String,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.positive_count + self.negative_count + self.neutral_count
    }
}

/// Everything the front end renders for one analyzed file.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub source: String,
    pub text_column: String,
    pub generated_at: DateTime<Utc>,
    /// Data rows in the table, including skipped ones.
    pub total_rows: usize,
    pub skipped_rows: usize,
    pub summary: Summary,
    #[serde(skip)]
    pub rows: Vec<LabeledRow>,
}
