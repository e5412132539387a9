//! # Sentiment Lexicon
//!
//! Token valences in the VADER tab-separated format:
//! `token<TAB>mean[<TAB>stddev<TAB>raw ratings]`.
//!
//! The default lexicon is the full VADER table bundled with the
//! `vader_sentiment` crate; a replacement can be loaded from disk.

use std::collections::HashMap;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::error::AnalysisError;

/// Immutable token → valence map. Build it once and share it by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    words: HashMap<String, f64>,
}

impl Default for Lexicon {
    fn default() -> Self {
        let words = vader_sentiment::LEXICON
            .iter()
            .map(|(token, valence)| (token.to_string(), *valence))
            .collect();
        Self { words }
    }
}

impl Lexicon {
    /// Parses lexicon text. Blank lines and `#` comment lines without a tab
    /// are ignored; real entries such as `#-)` always carry a valence column.
    /// Tokens are stored as written and looked up in lower case.
    pub fn parse(content: &str) -> std::result::Result<Self, AnalysisError> {
        let mut words = HashMap::new();

        for (idx, line) in content.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || (line.starts_with('#') && !line.contains('\t')) {
                continue;
            }

            let invalid = |reason: String| AnalysisError::InvalidLexiconLine {
                line: idx + 1,
                reason,
            };

            let mut fields = line.split('\t');
            let token = fields.next().unwrap_or_default().trim();
            let raw = fields
                .next()
                .ok_or_else(|| invalid("missing valence column".to_string()))?
                .trim();
            let valence: f64 = raw
                .parse()
                .map_err(|_| invalid(format!("'{raw}' is not a number")))?;
            if !valence.is_finite() {
                return Err(invalid(format!("'{raw}' is not a finite valence")));
            }

            if token.is_empty() {
                return Err(invalid("empty token".to_string()));
            }

            words.insert(token.to_string(), valence);
        }

        Ok(Self { words })
    }

    /// Loads a lexicon file from disk.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read lexicon '{path}'"))?;
        let lexicon =
            Self::parse(&content).with_context(|| format!("invalid lexicon '{path}'"))?;
        if lexicon.is_empty() {
            warn!(path, "Lexicon has no entries, every comment will be Neutral");
        }
        debug!(path, entries = lexicon.len(), "Loaded lexicon");
        Ok(lexicon)
    }

    /// Loads `path` if given, otherwise the bundled VADER lexicon.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Valence of a lower-cased token.
    pub fn get(&self, token: &str) -> Option<f64> {
        self.words.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
