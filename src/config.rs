//! Analyzer settings.
//!
//! Stored as a JSON object on disk; every key is optional:
//! ```json
//! {
//!   "text_columns": ["label", "text"],
//!   "allowed_extensions": ["csv"],
//!   "missing_text": "skip",
//!   "lexicon_path": "lexicons/course_feedback.txt"
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable consulted when no `--config` flag is given.
pub const CONFIG_ENV_VAR: &str = "SENTIMENT_CONFIG";

/// What to do with a row whose text cell is empty or absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingTextPolicy {
    /// Leave the row out of the counts.
    #[default]
    Skip,
    /// Score the row as an empty string (always Neutral).
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Candidate text columns, highest priority first.
    pub text_columns: Vec<String>,
    pub allowed_extensions: Vec<String>,
    pub missing_text: MissingTextPolicy,
    pub lexicon_path: Option<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            text_columns: vec!["label".to_string(), "text".to_string()],
            allowed_extensions: vec!["csv".to_string()],
            missing_text: MissingTextPolicy::Skip,
            lexicon_path: None,
        }
    }
}

impl AnalyzerConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{path}'"))?;
        Self::from_json(&content).with_context(|| format!("invalid config file '{path}'"))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Resolves the config from an explicit path, then `SENTIMENT_CONFIG`, then defaults.
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match std::env::var(CONFIG_ENV_VAR) {
                Ok(path) if !path.is_empty() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Returns `true` if `file_name` has an extension from `allowed_extensions`.
    ///
    /// The comparison is case-insensitive and only looks at the part after the
    /// last `.`; a name without any `.` is never allowed.
    pub fn is_allowed_file(&self, file_name: &str) -> bool {
        match file_name.rsplit_once('.') {
            Some((_, ext)) => self
                .allowed_extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext)),
            None => false,
        }
    }
}
