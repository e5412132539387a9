//! CSV parser producing the in-memory [`Table`] handed to the analyzers.

use anyhow::{Context, Result, bail};
use tracing::debug;

/// A parsed CSV file: header names plus the raw cells of every data row.
///
/// Rows may be shorter than the header (missing trailing cells), never longer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Iterates over one column's cells in row order.
    ///
    /// Empty cells and cells missing from short rows are yielded as `None`.
    pub fn column(&self, index: usize) -> impl Iterator<Item = Option<&str>> {
        self.rows.iter().map(move |row| match row.get(index) {
            Some(cell) if !cell.is_empty() => Some(cell.as_str()),
            _ => None,
        })
    }
}

/// Parses CSV bytes (header row first) into a [`Table`].
///
/// # Errors
///
/// Returns an error for invalid UTF-8, broken quoting, or a row with more
/// fields than the header.
pub fn parse_table(bytes: &[u8]) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = rdr
        .headers()
        .context("failed to read CSV header")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        // header is line 1
        let lineno = idx + 2;
        let record = record.with_context(|| format!("failed to parse CSV line {lineno}"))?;
        if record.len() > headers.len() {
            bail!(
                "CSV line {lineno} has {} fields, expected at most {}",
                record.len(),
                headers.len()
            );
        }
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }

    debug!(columns = headers.len(), rows = rows.len(), "Parsed CSV table");
    Ok(Table { headers, rows })
}
