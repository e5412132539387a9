use crate::analyzers::types::{Sentiment, Summary};
use crate::analyzers::verdict::{overall_sentiment, suggestion};

/// Reduces a sequence of row labels into a [`Summary`].
///
/// Counts each label, derives the verdict from the positive/negative counts,
/// and attaches the matching suggestion.
pub fn aggregate<I>(labels: I) -> Summary
where
    I: IntoIterator<Item = Sentiment>,
{
    let mut positive_count = 0;
    let mut negative_count = 0;
    let mut neutral_count = 0;

    for label in labels {
        match label {
            Sentiment::Positive => positive_count += 1,
            Sentiment::Negative => negative_count += 1,
            Sentiment::Neutral => neutral_count += 1,
        }
    }

    let overall = overall_sentiment(positive_count, negative_count);

    Summary {
        positive_count,
        negative_count,
        neutral_count,
        overall_sentiment: overall,
        suggestion: suggestion(overall).to_string(),
    }
}
