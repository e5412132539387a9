//! Sentiment classification and aggregation.
//!
//! This module locates the text column of a parsed table, scores each row
//! with a lexicon-based analyzer, labels it against fixed thresholds, and
//! reduces the labels into a [`types::Summary`] with a verdict and suggestion.

pub mod aggregate;
pub mod analyzer;
pub mod column;
pub mod lexicon;
pub mod types;
pub mod vader;
pub mod verdict;
