//! Recommendation synthesis — short, human-readable writing suggestions
//! derived from the computed statistics. Heuristic by design; the list may
//! be empty for unremarkable text.

use std::collections::HashMap;

use tt_core::TextStats;

const FILLER_WORDS: &[&str] = &["very", "really", "just", "actually", "basically", "literally"];

const PASSIVE_INDICATORS: &[&str] = &["was", "were", "been", "being", "is", "are", "am"];

const WEAK_STARTS: &[&str] = &["there is", "there are", "it is", "it was"];

/// Build the recommendation list for `text` given its precomputed stats.
pub fn recommendations(text: &str, stats: &TextStats) -> Vec<String> {
    let mut out = Vec::new();
    let words: Vec<String> = text
        .split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .collect();

    if stats.avg_words_per_sentence > 25.0 {
        out.push(
            "Sentences average over 25 words; consider breaking long sentences up for clarity."
                .to_string(),
        );
    }

    let filler_count = words
        .iter()
        .filter(|w| FILLER_WORDS.contains(&w.as_str()))
        .count();
    if filler_count > 0 {
        out.push(format!(
            "Found {filler_count} filler word(s) like \"very\" or \"really\"; removing them makes writing stronger."
        ));
    }

    let passive_count = words
        .iter()
        .filter(|w| PASSIVE_INDICATORS.contains(&w.as_str()))
        .count();
    if stats.words > 20 && passive_count > stats.words / 10 {
        out.push(
            "High density of \"to be\" verbs suggests passive voice; prefer active constructions."
                .to_string(),
        );
    }

    if stats.words > 50 {
        let mut freq: HashMap<&str, usize> = HashMap::new();
        for w in words.iter().filter(|w| w.len() > 4) {
            *freq.entry(w.as_str()).or_insert(0) += 1;
        }
        if freq.values().any(|&count| count > 3) {
            out.push(
                "Some words repeat more than three times; consider synonyms for variety."
                    .to_string(),
            );
        }
    }

    let lower = text.to_lowercase();
    if WEAK_STARTS.iter().any(|phrase| lower.contains(phrase)) {
        out.push(
            "Phrases like \"there is\" weaken sentences; lead with the subject and a strong verb."
                .to_string(),
        );
    }

    out
}
