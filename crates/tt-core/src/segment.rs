//! Word / sentence / paragraph segmentation for plain English text.
//!
//! Segmentation rules:
//! - Words are maximal runs of non-whitespace characters; each word carries
//!   its byte offsets into the original string.
//! - Sentences are split on runs of `.`, `!`, `?`; fragments containing only
//!   whitespace are discarded. Abbreviations ("Mr.") and decimal numbers
//!   ("3.14") are therefore over-split — a documented limitation of the
//!   splitter, not an error.
//! - Paragraphs are split on blank lines. An empty or whitespace-only
//!   document has zero paragraphs; any document with visible text has at
//!   least one. This convention is applied uniformly at every call site.

// ---------------------------------------------------------------------------
// WordToken
// ---------------------------------------------------------------------------

/// A single whitespace-delimited word with its position in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordToken {
    /// The word exactly as it appears in the document.
    pub text: String,
    /// Byte offset of the first character within the source string.
    pub start: usize,
    /// Byte offset one past the last character (`start + text.len()`).
    pub end: usize,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Split `text` into [`WordToken`]s on runs of whitespace.
///
/// Empty or whitespace-only input yields an empty vec. Punctuation stays
/// attached to the word it adjoins ("fox," is one token); callers that need
/// bare words strip the edges themselves.
pub fn segment_words(text: &str) -> Vec<WordToken> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(WordToken {
                    text: text[s..idx].to_string(),
                    start: s,
                    end: idx,
                });
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(s) = start {
        tokens.push(WordToken {
            text: text[s..].to_string(),
            start: s,
            end: text.len(),
        });
    }

    tokens
}

/// Number of whitespace-delimited words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split `text` into sentences on runs of `.`, `!`, `?`.
///
/// Whitespace-only fragments are discarded, so trailing punctuation does not
/// produce an empty final sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Number of sentences in `text` per [`split_sentences`].
pub fn sentence_count(text: &str) -> usize {
    split_sentences(text).len()
}

/// Split `text` into paragraphs on one-or-more blank lines.
///
/// A line counts as blank when it contains only whitespace. Zero paragraphs
/// for empty input; a document without any blank line is one paragraph.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.trim().is_empty() {
                paragraphs.push(current.trim_end().to_string());
            }
            current.clear();
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    if !current.trim().is_empty() {
        paragraphs.push(current.trim_end().to_string());
    }

    paragraphs
}

/// Number of paragraphs in `text` per [`split_paragraphs`].
pub fn paragraph_count(text: &str) -> usize {
    split_paragraphs(text).len()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
