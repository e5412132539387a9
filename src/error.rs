//! Domain errors the CLI needs to tell apart from plain I/O failures.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// None of the candidate column names is present in the table header.
    #[error("Error: CSV file does not contain a recognized text column.")]
    MissingTextColumn,

    #[error("Error: '{name}' does not have an allowed file extension.")]
    UnsupportedFile { name: String },

    #[error("invalid lexicon entry on line {line}: {reason}")]
    InvalidLexiconLine { line: usize, reason: String },
}
