use crate::analyzers::types::Sentiment;

/// Compound scores at or above this are Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound scores at or below this are Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

pub const POSITIVE_SUGGESTION: &str =
    "The comments are generally positive. Keep up the good work!";
pub const NEGATIVE_SUGGESTION: &str =
    "The comments are generally negative. Consider addressing the issues raised.";
pub const NEUTRAL_SUGGESTION: &str =
    "The comments are mixed. Try to understand the neutral points and improve accordingly.";

/// Converts a compound score (-1.0–1.0) into a sentiment label.
///
/// | Range            | Label    |
/// |------------------|----------|
/// | >= 0.05          | Positive |
/// | <= -0.05         | Negative |
/// | otherwise        | Neutral  |
pub fn classify(compound: f64) -> Sentiment {
    match compound {
        c if c >= POSITIVE_THRESHOLD => Sentiment::Positive,
        c if c <= NEGATIVE_THRESHOLD => Sentiment::Negative,
        _ => Sentiment::Neutral,
    }
}

/// Dataset verdict. Only positive and negative counts are compared; any tie
/// between them is Neutral regardless of how many neutral rows there are.
pub fn overall_sentiment(positive_count: usize, negative_count: usize) -> Sentiment {
    if positive_count > negative_count {
        Sentiment::Positive
    } else if negative_count > positive_count {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

pub fn suggestion(verdict: Sentiment) -> &'static str {
    match verdict {
        Sentiment::Positive => POSITIVE_SUGGESTION,
        Sentiment::Negative => NEGATIVE_SUGGESTION,
        Sentiment::Neutral => NEUTRAL_SUGGESTION,
    }
}
