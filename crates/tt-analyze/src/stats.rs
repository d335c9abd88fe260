//! Document statistics — counts and derived averages.
//!
//! Pure function of the segmenter output; no side effects, no error
//! conditions. Division by zero is avoided by clamping the sentence count
//! to a minimum of 1 when averaging.

use tt_core::{paragraph_count, sentence_count, word_count, TextStats};

/// Words-per-minute assumed for reading-time estimates.
pub const DEFAULT_READING_WPM: usize = 200;

/// Compute [`TextStats`] for `text` using the default reading speed.
pub fn compute_stats(text: &str) -> TextStats {
    compute_stats_with_wpm(text, DEFAULT_READING_WPM)
}

/// Compute [`TextStats`] with an explicit words-per-minute reading speed.
pub fn compute_stats_with_wpm(text: &str, wpm: usize) -> TextStats {
    let words = word_count(text);
    let sentences = sentence_count(text);
    let paragraphs = paragraph_count(text);

    let characters = text.chars().count();
    let characters_no_whitespace = text.chars().filter(|c| !c.is_whitespace()).count();

    let avg_words_per_sentence = words as f64 / sentences.max(1) as f64;
    let reading_time_minutes = (words as u64).div_ceil(wpm.max(1) as u64);

    TextStats {
        words,
        characters,
        characters_no_whitespace,
        sentences,
        paragraphs,
        avg_words_per_sentence,
        reading_time_minutes,
    }
}
