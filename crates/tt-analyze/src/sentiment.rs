//! Lexicon-based sentiment scoring.
//!
//! Fixed positive/negative word lists, a bounded score, a categorical
//! label, and emotional tone tags from small keyword sets. Explicitly a toy
//! lexicon approach: vocabulary outside the lists contributes nothing, so
//! false negatives are expected and fine.

use tt_core::{word_count, SentimentLabel, SentimentReport};

// ---------------------------------------------------------------------------
// Lexicons
// ---------------------------------------------------------------------------

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "love", "happy", "joy",
    "best", "awesome", "brilliant", "perfect", "beautiful", "delightful", "positive", "success",
    "win", "pleased",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "hate", "sad", "angry", "worst", "poor", "negative",
    "fail", "failure", "ugly", "disappointing", "wrong", "problem", "difficult", "annoying",
];

/// (tag, trigger keywords) pairs for emotional tone detection.
const TONE_TAGS: &[(&str, &[&str])] = &[
    ("Energetic", &["exciting", "energy", "dynamic", "thrilling", "vibrant"]),
    ("Calm", &["peaceful", "calm", "gentle", "quiet", "serene"]),
    (
        "Professional",
        &["therefore", "furthermore", "regarding", "pursuant", "accordingly"],
    ),
    (
        "Urgent",
        &["urgent", "immediately", "asap", "now", "deadline", "critical"],
    ),
];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Score `text` against the fixed lexicons.
///
/// `score = clamp((positive - negative) / total_words * 10, -1, 1)`; an
/// empty document is Neutral with score 0.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn score_sentiment(text: &str) -> SentimentReport {
    let total_words = word_count(text);
    let tokens: Vec<String> = text
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect();

    let positive_hits = tokens
        .iter()
        .filter(|t| POSITIVE_WORDS.contains(&t.as_str()))
        .count();
    let negative_hits = tokens
        .iter()
        .filter(|t| NEGATIVE_WORDS.contains(&t.as_str()))
        .count();

    let score = if total_words == 0 {
        0.0
    } else {
        let raw = (positive_hits as f64 - negative_hits as f64) / total_words as f64 * 10.0;
        raw.clamp(-1.0, 1.0)
    };

    let tones = TONE_TAGS
        .iter()
        .filter(|(_, keywords)| tokens.iter().any(|t| keywords.contains(&t.as_str())))
        .map(|(tag, _)| tag.to_string())
        .collect();

    SentimentReport {
        score,
        label: label_for(score),
        tones,
        positive_hits,
        negative_hits,
    }
}

/// Threshold mapping: <= -0.6 / -0.2 / 0.2 / 0.6 / else.
pub fn label_for(score: f64) -> SentimentLabel {
    if score <= -0.6 {
        SentimentLabel::VeryNegative
    } else if score <= -0.2 {
        SentimentLabel::Negative
    } else if score <= 0.2 {
        SentimentLabel::Neutral
    } else if score <= 0.6 {
        SentimentLabel::Positive
    } else {
        SentimentLabel::VeryPositive
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
