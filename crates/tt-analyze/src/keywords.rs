//! Frequency-ranked keyword extraction.
//!
//! Content words (stopwords removed, short tokens dropped) ranked by
//! occurrence count, ties broken alphabetically so output is deterministic.

use std::collections::HashMap;

const STOPWORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "day", "get", "has", "him", "his", "how", "man", "new", "now", "old", "see",
    "two", "way", "who", "did", "its", "let", "she", "too", "use", "that", "with", "have", "this",
    "will", "your", "from", "they", "been", "were", "said", "each", "which", "their", "there",
    "about", "would", "these", "other", "into", "more", "some", "them", "then", "than", "when",
    "what", "where", "while", "because", "could", "should", "after", "before", "being", "over",
    "under", "very", "just", "also", "only", "such", "most", "much", "many", "between", "both",
];

/// Default number of keywords returned by [`extract_keywords`].
pub const DEFAULT_KEYWORD_LIMIT: usize = 5;

/// Top `limit` content words of `text` by frequency.
pub fn extract_keywords_with_limit(text: &str, limit: usize) -> Vec<String> {
    let mut freq: HashMap<String, usize> = HashMap::new();

    for token in text.split(|c: char| !c.is_alphanumeric()) {
        if token.len() < 4 {
            continue;
        }
        let lower = token.to_lowercase();
        if STOPWORDS.contains(&lower.as_str()) {
            continue;
        }
        *freq.entry(lower).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = freq.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter().take(limit).map(|(w, _)| w).collect()
}

/// Top [`DEFAULT_KEYWORD_LIMIT`] content words of `text`.
pub fn extract_keywords(text: &str) -> Vec<String> {
    extract_keywords_with_limit(text, DEFAULT_KEYWORD_LIMIT)
}
