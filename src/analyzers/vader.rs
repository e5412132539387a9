//! Rule-based polarity scoring in the style of VADER.
//!
//! Token valences come from a [`Lexicon`]; the heuristics on top of it handle
//! negation, boosters and dampeners, ALL-CAPS emphasis, a contrastive "but",
//! a few idioms and trailing `!`/`?` emphasis. The per-token valences are
//! summed and squashed into a compound score in `[-1, 1]`.

use std::collections::HashSet;

use serde::Serialize;

use crate::analyzers::lexicon::Lexicon;
use crate::analyzers::types::Sentiment;
use crate::analyzers::verdict::classify;

const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;
/// Added to the valence of an ALL-CAPS word in mixed-case text.
const C_INCR: f64 = 0.733;
const N_SCALAR: f64 = -0.74;
/// Normalization constant approximating the max expected sum.
const ALPHA: f64 = 15.0;

static NEGATE: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

static BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("amazingly", B_INCR),
    ("awfully", B_INCR),
    ("completely", B_INCR),
    ("considerably", B_INCR),
    ("decidedly", B_INCR),
    ("deeply", B_INCR),
    ("effing", B_INCR),
    ("enormously", B_INCR),
    ("entirely", B_INCR),
    ("especially", B_INCR),
    ("exceptionally", B_INCR),
    ("extremely", B_INCR),
    ("fabulously", B_INCR),
    ("flipping", B_INCR),
    ("flippin", B_INCR),
    ("fricking", B_INCR),
    ("frickin", B_INCR),
    ("frigging", B_INCR),
    ("friggin", B_INCR),
    ("fully", B_INCR),
    ("fucking", B_INCR),
    ("greatly", B_INCR),
    ("hella", B_INCR),
    ("highly", B_INCR),
    ("hugely", B_INCR),
    ("incredibly", B_INCR),
    ("intensely", B_INCR),
    ("majorly", B_INCR),
    ("more", B_INCR),
    ("most", B_INCR),
    ("particularly", B_INCR),
    ("purely", B_INCR),
    ("quite", B_INCR),
    ("really", B_INCR),
    ("remarkably", B_INCR),
    ("so", B_INCR),
    ("substantially", B_INCR),
    ("thoroughly", B_INCR),
    ("totally", B_INCR),
    ("tremendously", B_INCR),
    ("uber", B_INCR),
    ("unbelievably", B_INCR),
    ("unusually", B_INCR),
    ("utterly", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("just enough", B_DECR),
    ("kind of", B_DECR),
    ("kinda", B_DECR),
    ("kindof", B_DECR),
    ("kind-of", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginally", B_DECR),
    ("occasionally", B_DECR),
    ("partly", B_DECR),
    ("scarcely", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
    ("sort of", B_DECR),
    ("sorta", B_DECR),
    ("sortof", B_DECR),
    ("sort-of", B_DECR),
];

/// Multi-word expressions whose valence overrides the word-level result.
static SPECIAL_CASES: &[(&str, f64)] = &[
    ("the shit", 3.0),
    ("the bomb", 3.0),
    ("bad ass", 1.5),
    ("yeah right", -2.0),
    ("cut the mustard", 2.0),
    ("kiss of death", -1.5),
    ("hand to mouth", -2.0),
];

/// Marks that may be glued to one end of a word and still let it match.
static PUNC_LIST: &[&str] = &[
    ".", "!", "?", ",", ";", ":", "-", "'", "\"", "!!", "!!!", "??", "???", "?!?", "!?!", "?!?!",
    "!?!?",
];

fn lookup(table: &[(&str, f64)], key: &str) -> Option<f64> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn booster(word: &str) -> Option<f64> {
    lookup(BOOSTERS, word)
}

/// Sentiment breakdown for one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// Scores text against an owned [`Lexicon`].
///
/// Construct once at startup and pass by reference; scoring never mutates it.
#[derive(Debug, Clone, Default)]
pub struct SentimentIntensityAnalyzer {
    lexicon: Lexicon,
}

impl SentimentIntensityAnalyzer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Labels `text` by thresholding its compound score.
    pub fn classify(&self, text: &str) -> Sentiment {
        classify(self.polarity_scores(text).compound)
    }

    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let st = SentiText::new(text);
        let words = &st.words;
        let mut sentiments = Vec::with_capacity(words.len());

        for (idx, item) in words.iter().enumerate() {
            // a repeated token is scored in the context of its first occurrence
            let i = words.iter().position(|w| w == item).unwrap_or(idx);
            let lower = item.to_lowercase();
            let kind_of =
                i + 1 < words.len() && lower == "kind" && words[i + 1].to_lowercase() == "of";
            if kind_of || booster(&lower).is_some() {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.sentiment_valence(&st, i));
        }

        but_check(words, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn sentiment_valence(&self, st: &SentiText<'_>, i: usize) -> f64 {
        let words = &st.words;
        let Some(mut valence) = self.lexicon.get(&words[i].to_lowercase()) else {
            return 0.0;
        };

        if is_upper(words[i]) && st.is_cap_diff {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }

        for start_i in 0..3 {
            if i <= start_i {
                break;
            }
            let prev = words[i - (start_i + 1)];
            if self.lexicon.contains(&prev.to_lowercase()) {
                continue;
            }
            let mut s = scalar_inc_dec(prev, valence, st.is_cap_diff);
            if start_i == 1 {
                s *= 0.95;
            } else if start_i == 2 {
                s *= 0.9;
            }
            valence += s;
            valence = never_check(valence, words, start_i, i);
            if start_i == 2 {
                valence = idioms_check(valence, words, i);
            }
        }

        self.least_check(valence, words, i)
    }

    /// "least" right before a word negates it, except in "at least" and
    /// "very least".
    fn least_check(&self, valence: f64, words: &[&str], i: usize) -> f64 {
        if i == 0 {
            return valence;
        }
        let prev = words[i - 1].to_lowercase();
        if prev != "least" || self.lexicon.contains(&prev) {
            return valence;
        }
        if i > 1 && matches!(words[i - 2].to_lowercase().as_str(), "at" | "very") {
            valence
        } else {
            valence * N_SCALAR
        }
    }
}

/// Tokenized view of one input text.
struct SentiText<'a> {
    words: Vec<&'a str>,
    is_cap_diff: bool,
}

impl<'a> SentiText<'a> {
    fn new(text: &'a str) -> Self {
        let no_punc: String = text.chars().filter(|c| !c.is_ascii_punctuation()).collect();
        let words_only: HashSet<&str> = no_punc
            .split_whitespace()
            .filter(|w| w.chars().count() > 1)
            .collect();

        let words: Vec<&str> = text
            .split_whitespace()
            .filter(|w| w.chars().count() > 1)
            .map(|token| strip_punc(token, &words_only))
            .collect();
        let is_cap_diff = allcap_differential(&words);
        Self { words, is_cap_diff }
    }
}

/// Maps a known word with one mark from [`PUNC_LIST`] glued before or after it
/// back to the bare word. Anything else, emoticons included, is kept as is.
fn strip_punc<'a>(token: &'a str, words_only: &HashSet<&str>) -> &'a str {
    for p in PUNC_LIST {
        if let Some(word) = token.strip_suffix(p) {
            if words_only.contains(word) {
                return word;
            }
        }
    }
    for p in PUNC_LIST {
        if let Some(word) = token.strip_prefix(p) {
            if words_only.contains(word) {
                return word;
            }
        }
    }
    token
}

/// At least one cased character and no lowercase ones.
fn is_upper(word: &str) -> bool {
    let mut cased = false;
    for c in word.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// True when some, but not all, words are ALL CAPS.
fn allcap_differential(words: &[&str]) -> bool {
    let allcaps = words.iter().filter(|w| is_upper(w)).count();
    let differential = words.len() - allcaps;
    differential > 0 && differential < words.len()
}

fn negated(word: &str) -> bool {
    let lower = word.to_lowercase();
    NEGATE.contains(&lower.as_str()) || lower.contains("n't")
}

/// Booster/dampener contribution of `word` relative to the sign of `valence`.
fn scalar_inc_dec(word: &str, valence: f64, is_cap_diff: bool) -> f64 {
    let Some(mut scalar) = booster(&word.to_lowercase()) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if is_upper(word) && is_cap_diff {
        if valence > 0.0 {
            scalar += C_INCR;
        } else {
            scalar -= C_INCR;
        }
    }
    scalar
}

/// Negation `start_i + 1` tokens back, plus the "never so/this" intensifier.
fn never_check(valence: f64, words: &[&str], start_i: usize, i: usize) -> f64 {
    let so_or_this = |w: &str| w == "so" || w == "this";
    match start_i {
        0 if negated(words[i - 1]) => valence * N_SCALAR,
        1 if words[i - 2] == "never" && so_or_this(words[i - 1]) => valence * 1.5,
        1 if negated(words[i - 2]) => valence * N_SCALAR,
        2 if (words[i - 3] == "never" && so_or_this(words[i - 2])) || so_or_this(words[i - 1]) => {
            valence * 1.25
        }
        2 if negated(words[i - 3]) => valence * N_SCALAR,
        _ => valence,
    }
}

/// Applies idiom overrides and multi-word dampeners. Only called with `i >= 3`.
fn idioms_check(mut valence: f64, words: &[&str], i: usize) -> f64 {
    let onezero = format!("{} {}", words[i - 1], words[i]);
    let twoonezero = format!("{} {} {}", words[i - 2], words[i - 1], words[i]);
    let twoone = format!("{} {}", words[i - 2], words[i - 1]);
    let threetwoone = format!("{} {} {}", words[i - 3], words[i - 2], words[i - 1]);
    let threetwo = format!("{} {}", words[i - 3], words[i - 2]);

    for seq in [&onezero, &twoonezero, &twoone, &threetwoone, &threetwo] {
        if let Some(v) = lookup(SPECIAL_CASES, seq) {
            valence = v;
            break;
        }
    }

    if words.len() - 1 > i {
        let zeroone = format!("{} {}", words[i], words[i + 1]);
        if let Some(v) = lookup(SPECIAL_CASES, &zeroone) {
            valence = v;
        }
    }
    if words.len() - 1 > i + 1 {
        let zeroonetwo = format!("{} {} {}", words[i], words[i + 1], words[i + 2]);
        if let Some(v) = lookup(SPECIAL_CASES, &zeroonetwo) {
            valence = v;
        }
    }

    // "sort of", "kind of", "just enough"
    if booster(&threetwo).is_some() || booster(&twoone).is_some() {
        valence += B_DECR;
    }
    valence
}

/// Words before the first "but" are halved, words after it weighted 1.5x.
fn but_check(words: &[&str], sentiments: &mut [f64]) {
    let Some(bi) = words.iter().position(|w| w.to_lowercase() == "but") else {
        return;
    };
    for (si, s) in sentiments.iter_mut().enumerate() {
        if si < bi {
            *s *= 0.5;
        } else if si > bi {
            *s *= 1.5;
        }
    }
}

fn amplify_ep(text: &str) -> f64 {
    let ep_count = text.matches('!').count().min(4);
    ep_count as f64 * 0.292
}

fn amplify_qm(text: &str) -> f64 {
    let qm_count = text.matches('?').count();
    match qm_count {
        0 | 1 => 0.0,
        2 | 3 => qm_count as f64 * 0.18,
        _ => 0.96,
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    amplify_ep(text) + amplify_qm(text)
}

/// Squashes a raw valence sum into `[-1, 1]`.
pub fn normalize(score: f64) -> f64 {
    let norm = score / (score * score + ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn sift_sentiment_scores(sentiments: &[f64]) -> (f64, f64, f64) {
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &s in sentiments {
        // +/-1 offsets compensate for neutral words counting as 1
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    (pos_sum, neg_sum, neu_count)
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::default();
    }

    let mut sum_s: f64 = sentiments.iter().sum();
    let punct_amplifier = punctuation_emphasis(text);
    if sum_s > 0.0 {
        sum_s += punct_amplifier;
    } else if sum_s < 0.0 {
        sum_s -= punct_amplifier;
    }
    let compound = normalize(sum_s);

    let (mut pos_sum, mut neg_sum, neu_count) = sift_sentiment_scores(sentiments);
    if pos_sum > neg_sum.abs() {
        pos_sum += punct_amplifier;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punct_amplifier;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    PolarityScores {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count / total).abs(), 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> SentimentIntensityAnalyzer {
        SentimentIntensityAnalyzer::default()
    }

    fn compound(text: &str) -> f64 {
        analyzer().polarity_scores(text).compound
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let scores = analyzer().polarity_scores("");
        assert_eq!(scores, PolarityScores::default());
        assert_eq!(analyzer().classify(""), Sentiment::Neutral);
        assert_eq!(analyzer().classify("   \t "), Sentiment::Neutral);
    }

    #[test]
    fn test_single_positive_word_with_exclamation() {
        // love (3.2) + one '!' (0.292) => 3.492 / sqrt(3.492^2 + 15)
        let scores = analyzer().polarity_scores("I love this!");
        assert_eq!(scores.compound, 0.6696);
        assert!(scores.pos > scores.neg);
    }

    #[test]
    fn test_single_negative_word() {
        let scores = analyzer().polarity_scores("I hate this.");
        assert_eq!(scores.compound, -0.5719);
        assert_eq!(scores.pos, 0.0);
    }

    #[test]
    fn test_no_lexicon_words_is_neutral() {
        let scores = analyzer().polarity_scores("It is a table.");
        assert_eq!(scores.compound, 0.0);
        assert_eq!(scores.neu, 1.0);
    }

    #[test]
    fn test_word_with_trailing_period_is_scored() {
        // ok (1.2)
        assert_eq!(compound("It was ok."), 0.296);
        assert_eq!(analyzer().classify("It was ok."), Sentiment::Positive);
        // no (-1.2)
        assert_eq!(compound("No."), -0.296);
        assert_eq!(analyzer().classify("No."), Sentiment::Negative);
    }

    #[test]
    fn test_no_is_scored_as_a_word() {
        // no (-1.2) + problems (-1.7); "no" is a lexicon word, so it does not
        // negate the word after it
        assert_eq!(compound("No problems at all."), -0.5994);
        assert_eq!(
            analyzer().classify("No problems at all."),
            Sentiment::Negative
        );
    }

    #[test]
    fn test_strong_positive_words_without_negation() {
        let a = analyzer();
        for word in ["great", "excellent", "love", "amazing", "wonderful", "superb"] {
            let text = format!("The workshop was {word} overall");
            assert_eq!(a.classify(&text), Sentiment::Positive, "{text}");
        }
    }

    #[test]
    fn test_negation_flips_polarity() {
        assert!(compound("The service was good") > 0.0);
        // good (1.9) * -0.74
        assert_eq!(compound("The service was not good"), -0.3412);
    }

    #[test]
    fn test_without_negates() {
        assert_eq!(compound("It was without good"), -0.3412);
    }

    #[test]
    fn test_contraction_negation() {
        assert_eq!(analyzer().classify("I don't like it"), Sentiment::Negative);
        assert_eq!(analyzer().classify("It wasn't bad"), Sentiment::Positive);
    }

    #[test]
    fn test_booster_increases_intensity() {
        let plain = compound("The food was good");
        let boosted = compound("The food was very good");
        assert!(boosted > plain);
    }

    #[test]
    fn test_dampener_decreases_intensity() {
        let plain = compound("The food was good");
        let damped = compound("The food was slightly good");
        assert!(damped < plain);
        assert!(damped > 0.0);
    }

    #[test]
    fn test_allcaps_emphasis_in_mixed_case() {
        let plain = compound("The movie was great");
        let caps = compound("The movie was GREAT");
        assert!(caps > plain);
    }

    #[test]
    fn test_allcaps_everywhere_has_no_emphasis() {
        let plain = compound("the movie was great");
        let shouting = compound("THE MOVIE WAS GREAT");
        assert_eq!(plain, shouting);
    }

    #[test]
    fn test_exclamation_marks_cap_at_four() {
        let four = compound("The talk was great !!!!");
        let six = compound("The talk was great !!!!!!");
        assert_eq!(four, six);
        assert!(four > compound("The talk was great"));
    }

    #[test]
    fn test_single_question_mark_adds_nothing() {
        assert_eq!(compound("Is it good?"), 0.4404);
    }

    #[test]
    fn test_two_question_marks_add_emphasis() {
        // good (1.9) + 2 * 0.18
        assert_eq!(compound("Is it good??"), 0.504);
    }

    #[test]
    fn test_many_question_marks_cap_emphasis() {
        // good (1.9) + 0.96
        assert_eq!(compound("Is it good ????"), 0.594);
        assert_eq!(compound("Is it good ??????"), 0.594);
    }

    #[test]
    fn test_never_so_intensifies() {
        // (good 1.9 + "so" 0.293) * 1.5
        assert_eq!(compound("never so good"), 0.6474);
    }

    #[test]
    fn test_never_so_two_back_intensifies_less() {
        // (good 1.9 + "very" 0.293 + "so" 0.293 * 0.95) * 1.25
        assert_eq!(compound("never so very good"), 0.6236);
    }

    #[test]
    fn test_sort_of_dampens() {
        // good (1.9) - 0.293
        assert_eq!(compound("it was sort of good"), 0.3832);
    }

    #[test]
    fn test_kind_of_dampens_and_is_not_scored_as_kind() {
        assert_eq!(compound("it was kind of good"), 0.3832);
        assert_eq!(compound("It is kind of there"), 0.0);
    }

    #[test]
    fn test_but_shifts_weight_to_second_clause() {
        let scores = analyzer().polarity_scores("The food was good but the service was terrible");
        assert!(scores.compound < 0.0);
    }

    #[test]
    fn test_least_negates() {
        assert!(compound("the least good answer") < 0.0);
        assert!(compound("at least good") > 0.0);
    }

    #[test]
    fn test_emoticon_survives_tokenizing() {
        assert_eq!(analyzer().classify("see you :)"), Sentiment::Positive);
    }

    #[test]
    fn test_normalize_bounds() {
        assert_eq!(normalize(0.0), 0.0);
        assert!(normalize(1_000.0) <= 1.0);
        assert!(normalize(-1_000.0) >= -1.0);
    }

    #[test]
    fn test_tokenizing() {
        let st = SentiText::new("I said: ok. No!! great!!!! :) 'fine' a");
        assert_eq!(st.words, vec!["said", "ok", "No", "great!!!!", ":)", "'fine'"]);
        assert!(!st.is_cap_diff);

        let st = SentiText::new("This is GREAT");
        assert!(st.is_cap_diff);
    }

    #[test]
    fn test_scores_are_deterministic() {
        let a = analyzer();
        let text = "Not bad at all, REALLY enjoyed it!";
        assert_eq!(a.polarity_scores(text), a.polarity_scores(text));
    }
}
