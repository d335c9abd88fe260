//! Word-level change summary between original and corrected text.
//!
//! Uses the Myers algorithm via the `similar` crate on whitespace-delimited
//! words. Equal stretches are omitted; only the material that changed is
//! reported, grouped into insert / delete / substitute entries for compact,
//! human-readable presentation alongside the issue list.

use serde::{Deserialize, Serialize};
use similar::{Algorithm, DiffOp};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Disposition of a group of words in the change summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Inserted,
    Deleted,
    Substituted,
}

/// A grouped word-level change entry.
///
/// For `Inserted` only `replacement` is populated; for `Deleted` only
/// `original`; for `Substituted` both are non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextChange {
    pub kind: ChangeKind,
    pub original: Vec<String>,
    pub replacement: Vec<String>,
    /// Zero-based word index of the group within the original text (for
    /// insertions: the index the new words were inserted before).
    pub original_index: usize,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the word-level change groups between `original` and `corrected`.
///
/// Identical texts yield an empty vec.
pub fn word_changes(original: &str, corrected: &str) -> Vec<TextChange> {
    let left: Vec<&str> = original.split_whitespace().collect();
    let right: Vec<&str> = corrected.split_whitespace().collect();

    let ops = similar::capture_diff_slices(Algorithm::Myers, &left, &right);

    let mut changes = Vec::new();
    for op in &ops {
        match op {
            DiffOp::Equal { .. } => {}
            DiffOp::Delete {
                old_index, old_len, ..
            } => changes.push(TextChange {
                kind: ChangeKind::Deleted,
                original: collect(&left, *old_index, *old_len),
                replacement: Vec::new(),
                original_index: *old_index,
            }),
            DiffOp::Insert {
                old_index,
                new_index,
                new_len,
            } => changes.push(TextChange {
                kind: ChangeKind::Inserted,
                original: Vec::new(),
                replacement: collect(&right, *new_index, *new_len),
                original_index: *old_index,
            }),
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => changes.push(TextChange {
                kind: ChangeKind::Substituted,
                original: collect(&left, *old_index, *old_len),
                replacement: collect(&right, *new_index, *new_len),
                original_index: *old_index,
            }),
        }
    }

    changes
}

fn collect(words: &[&str], index: usize, len: usize) -> Vec<String> {
    words[index..index + len].iter().map(|w| w.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_have_no_changes() {
        assert!(word_changes("same text here", "same text here").is_empty());
    }

    #[test]
    fn single_word_substitution() {
        let changes = word_changes("teh quick fox", "the quick fox");
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::Substituted);
        assert_eq!(changes[0].original, vec!["teh"]);
        assert_eq!(changes[0].replacement, vec!["the"]);
        assert_eq!(changes[0].original_index, 0);
    }

    #[test]
    fn deletion_reported() {
        let changes = word_changes("a very big dog", "a big dog");
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::Deleted);
        assert_eq!(changes[0].original, vec!["very"]);
    }

    #[test]
    fn insertion_reported() {
        let changes = word_changes("a dog", "a big dog");
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::Inserted);
        assert_eq!(changes[0].replacement, vec!["big"]);
        assert_eq!(changes[0].original_index, 1);
    }

    #[test]
    fn whitespace_differences_are_invisible() {
        // The summary is word-level; collapsed spaces alone produce no groups.
        assert!(word_changes("too   many  spaces", "too many spaces").is_empty());
    }

    #[test]
    fn change_kind_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&ChangeKind::Substituted).unwrap(),
            "\"substituted\""
        );
    }
}
