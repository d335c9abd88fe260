//! Flesch readability scoring.
//!
//! Formulas:
//! - Reading Ease: `206.835 - 1.015*(words/sentences) - 84.6*(syllables/words)`
//! - Flesch-Kincaid Grade: `0.39*(words/sentences) + 11.8*(syllables/words) - 15.59`
//!
//! Syllables are approximated by counting contiguous vowel groups
//! (`aeiouy`) per word with a minimum of one. The heuristic systematically
//! miscounts silent-e words and diphthongs; it is the documented trade-off,
//! not a bug. A document with zero words has no defined score and is
//! reported as [`TtError::EmptyInput`] rather than `NaN`.

use tt_core::{sentence_count, word_count, ReadabilityReport, ReadingEase, Result, TtError};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Score `text` with both Flesch formulas.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn score_readability(text: &str) -> Result<ReadabilityReport> {
    let words = word_count(text);
    if words == 0 {
        return Err(TtError::EmptyInput);
    }
    let sentences = sentence_count(text).max(1);
    let syllables = count_syllables(text);

    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;

    let reading_ease = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    let grade_level = 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59;

    Ok(ReadabilityReport {
        reading_ease,
        grade_level,
        ease_band: ease_band(reading_ease),
        syllables,
    })
}

/// Total syllables across all words of `text` (vowel-group heuristic).
pub fn count_syllables(text: &str) -> usize {
    text.split_whitespace().map(count_word_syllables).sum()
}

/// Map a Reading Ease score to its ordered difficulty band.
///
/// Thresholds: 90, 80, 70, 60, 50, 30.
pub fn ease_band(reading_ease: f64) -> ReadingEase {
    if reading_ease >= 90.0 {
        ReadingEase::VeryEasy
    } else if reading_ease >= 80.0 {
        ReadingEase::Easy
    } else if reading_ease >= 70.0 {
        ReadingEase::FairlyEasy
    } else if reading_ease >= 60.0 {
        ReadingEase::Standard
    } else if reading_ease >= 50.0 {
        ReadingEase::FairlyDifficult
    } else if reading_ease >= 30.0 {
        ReadingEase::Difficult
    } else {
        ReadingEase::VeryDifficult
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Contiguous vowel groups in one word, minimum 1 for any word containing
/// at least one alphabetic character.
fn count_word_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let mut groups = 0;
    let mut in_group = false;
    let mut has_alpha = false;

    for ch in lower.chars() {
        if ch.is_alphabetic() {
            has_alpha = true;
        }
        let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !in_group {
            groups += 1;
        }
        in_group = is_vowel;
    }

    if has_alpha {
        groups.max(1)
    } else {
        0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monosyllables_count_one() {
        assert_eq!(count_word_syllables("cat"), 1);
        assert_eq!(count_word_syllables("strength"), 1);
    }

    #[test]
    fn vowel_groups_counted_not_vowels() {
        // "ea" in "reading" is one group; total is rea-ding = 2.
        assert_eq!(count_word_syllables("reading"), 2);
        assert_eq!(count_word_syllables("aeiou"), 1);
    }

    #[test]
    fn silent_e_overcount_is_expected() {
        // True syllable count is 1; the heuristic reports 2. Documented.
        assert_eq!(count_word_syllables("came"), 2);
    }

    #[test]
    fn consonant_only_word_still_counts_one() {
        assert_eq!(count_word_syllables("hmm"), 1);
    }

    #[test]
    fn numeric_token_counts_zero() {
        assert_eq!(count_word_syllables("1234"), 0);
    }

    #[test]
    fn simple_text_is_easy() {
        let report = score_readability("The cat sat. The dog ran.").unwrap();
        assert!(report.reading_ease > 90.0, "got {}", report.reading_ease);
        assert_eq!(report.ease_band, ReadingEase::VeryEasy);
        assert!(report.grade_level < 2.0);
    }

    #[test]
    fn dense_text_is_difficult() {
        let report = score_readability(
            "The implementation of the comprehensive organizational restructuring \
             initiative necessitated the establishment of interdepartmental \
             communication protocols facilitating procedural documentation.",
        )
        .unwrap();
        assert_eq!(report.ease_band, ReadingEase::VeryDifficult);
        assert!(report.grade_level > 15.0);
    }

    #[test]
    fn scores_are_finite() {
        let report = score_readability("word").unwrap();
        assert!(report.reading_ease.is_finite());
        assert!(report.grade_level.is_finite());
    }

    #[test]
    fn empty_input_is_an_error_not_nan() {
        assert!(matches!(score_readability(""), Err(TtError::EmptyInput)));
        assert!(matches!(score_readability("   "), Err(TtError::EmptyInput)));
    }

    #[test]
    fn ease_band_thresholds() {
        assert_eq!(ease_band(95.0), ReadingEase::VeryEasy);
        assert_eq!(ease_band(90.0), ReadingEase::VeryEasy);
        assert_eq!(ease_band(85.0), ReadingEase::Easy);
        assert_eq!(ease_band(75.0), ReadingEase::FairlyEasy);
        assert_eq!(ease_band(65.0), ReadingEase::Standard);
        assert_eq!(ease_band(55.0), ReadingEase::FairlyDifficult);
        assert_eq!(ease_band(40.0), ReadingEase::Difficult);
        assert_eq!(ease_band(10.0), ReadingEase::VeryDifficult);
        assert_eq!(ease_band(-20.0), ReadingEase::VeryDifficult);
    }
}
