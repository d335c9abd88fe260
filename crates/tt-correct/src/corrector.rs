//! Spelling/grammar correction pipeline.
//!
//! Two ordered passes over the same working string:
//!
//! 1. Dictionary pass — whole-word, case-insensitive lookup against the
//!    static misspelling map. One issue is recorded per distinct misspelled
//!    word (at its first occurrence); every occurrence is replaced with the
//!    original token's capitalization pattern preserved.
//! 2. Rule pass — the ordered [`rules`] table folded over the string. Each
//!    rule records issues for the matches it finds, then performs the
//!    replacement the next rule sees.
//!
//! Issue spans reference the string the recording pass received: original
//! document offsets for the dictionary pass, working-text offsets for the
//! rule pass (earlier rules may have shifted the text).

use std::collections::HashSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

use tt_core::{segment_words, word_count, GrammarIssue, IssueKind, Severity, Span};

use crate::changes::{word_changes, TextChange};
use crate::dictionary::{apply_casing, lookup};
use crate::rules::rules;

// ---------------------------------------------------------------------------
// Correction
// ---------------------------------------------------------------------------

/// Output of the correction pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Correction {
    /// The text after both passes.
    pub corrected_text: String,
    /// Dictionary-pass issues first, then rule-pass issues; document order
    /// within each pass.
    ///
    /// Spans index the string the recording pass received, not uniformly the
    /// original document: dictionary-pass spans are original-document
    /// offsets, rule-pass spans are working-text offsets. A lengthening
    /// spelling fix ("alot" → "a lot") can therefore push a later rule
    /// span past the original document's length.
    pub issues: Vec<GrammarIssue>,
    /// `max(0, 100 - issues/words * 100)`, rounded; 100 for empty input.
    pub writing_score: u8,
    /// Word-level summary of what actually changed.
    pub changes: Vec<TextChange>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run the full correction pipeline over `text`.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn correct(text: &str) -> Correction {
    let total_words = word_count(text);

    let (after_spelling, mut issues) = spelling_pass(text);
    let (corrected_text, rule_issues) = rule_pass(&after_spelling);
    issues.extend(rule_issues);

    let writing_score = score(issues.len(), total_words);
    let changes = word_changes(text, &corrected_text);

    Correction {
        corrected_text,
        issues,
        writing_score,
        changes,
    }
}

/// Writing score heuristic. `total_words == 0` means no issue was possible,
/// so the score is a clean 100.
pub fn score(issue_count: usize, total_words: usize) -> u8 {
    if total_words == 0 {
        return 100;
    }
    let raw = 100.0 - (issue_count as f64 / total_words as f64) * 100.0;
    raw.max(0.0).round() as u8
}

// ---------------------------------------------------------------------------
// Pass 1: dictionary lookup
// ---------------------------------------------------------------------------

fn spelling_pass(text: &str) -> (String, Vec<GrammarIssue>) {
    let mut issues = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    // (lowercase misspelling, correction) in first-occurrence order.
    let mut found: Vec<(String, &'static str)> = Vec::new();

    for token in segment_words(text) {
        let trim = |c: char| !c.is_alphanumeric() && c != '\'';
        let core = token.text.trim_matches(trim);
        if core.is_empty() {
            continue;
        }
        let lower = core.to_lowercase();
        let Some(correction) = lookup(&lower) else {
            continue;
        };
        if !seen.insert(lower.clone()) {
            continue;
        }

        // Span of the bare word inside the (possibly punctuated) token.
        let lead = token.text.len() - token.text.trim_start_matches(trim).len();
        let start = token.start + lead;
        issues.push(GrammarIssue {
            kind: IssueKind::Spelling,
            message: format!("Misspelled word: \"{core}\""),
            suggestion: apply_casing(core, correction),
            span: Span::new(start, start + core.len()),
            severity: Severity::Error,
        });
        found.push((lower, correction));
    }

    // Replace every case-insensitive whole-word occurrence, preserving each
    // occurrence's own capitalization pattern.
    let mut out = text.to_string();
    for (misspelling, correction) in found {
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(&misspelling)))
            .expect("escaped word pattern must compile");
        out = pattern
            .replace_all(&out, |caps: &regex::Captures<'_>| {
                apply_casing(&caps[0], correction)
            })
            .into_owned();
    }

    (out, issues)
}

// ---------------------------------------------------------------------------
// Pass 2: grammar rule fold
// ---------------------------------------------------------------------------

fn rule_pass(text: &str) -> (String, Vec<GrammarIssue>) {
    let mut issues = Vec::new();
    let mut working = text.to_string();

    for rule in rules() {
        // Record issues for matches in this rule's input, then rewrite.
        for caps in rule.pattern.captures_iter(&working) {
            let whole = caps.get(0).expect("group 0 always present");
            let mut suggestion = String::new();
            caps.expand(rule.replacement, &mut suggestion);
            issues.push(GrammarIssue {
                kind: rule.kind,
                message: rule.message.to_string(),
                suggestion,
                span: Span::new(whole.start(), whole.end()),
                severity: rule.severity,
            });
        }
        working = rule
            .pattern
            .replace_all(&working, rule.replacement)
            .into_owned();
    }

    (working, issues)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
