//! Report value objects — the structured output of a single analysis request.
//!
//! Everything here is request-scoped and immutable once constructed: a report
//! is built exactly once per submitted document and handed back to the
//! caller. Nothing persists across requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// IssueKind / Severity / Span / GrammarIssue
// ---------------------------------------------------------------------------

/// Category of a detected writing issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Grammar,
    Spelling,
    Punctuation,
    Style,
}

/// How strongly an issue should be surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Suggestion,
}

/// Half-open byte range `[start, end)` into the text a pass observed.
///
/// Invariant: `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A single detected spelling/grammar/punctuation/style problem.
///
/// Produced by the corrector passes; never mutated after creation. `span`
/// references the string the producing pass received as input (the original
/// document for the spelling pass, the partially corrected working text for
/// later grammar rules).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarIssue {
    pub kind: IssueKind,
    /// Human-readable explanation of the problem.
    pub message: String,
    /// Replacement text the corrector applied (or proposes).
    pub suggestion: String,
    pub span: Span,
    pub severity: Severity,
}

// ---------------------------------------------------------------------------
// Tone / RewriteVariant
// ---------------------------------------------------------------------------

/// Target register for a rewrite transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Professional,
    Friendly,
    Concise,
}

/// One alternative phrasing of the input, produced per requested tone.
///
/// Variants are independent of each other; each is a pure function of the
/// raw input text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteVariant {
    /// Short display label, e.g. `"Professional"`.
    pub label: String,
    /// One-line description of what this variant changes.
    pub description: String,
    /// The rewritten text.
    pub text: String,
    pub tone: Tone,
}

// ---------------------------------------------------------------------------
// TextStats
// ---------------------------------------------------------------------------

/// Raw counts and derived averages for a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub characters_no_whitespace: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    /// `words / sentences`, with sentences clamped to a minimum of 1.
    pub avg_words_per_sentence: f64,
    /// `ceil(words / reading_wpm)`; 0 for an empty document.
    pub reading_time_minutes: u64,
}

// ---------------------------------------------------------------------------
// ReadingEase / ReadabilityReport
// ---------------------------------------------------------------------------

/// Ordered difficulty band derived from the Flesch Reading Ease score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingEase {
    VeryEasy,
    Easy,
    FairlyEasy,
    Standard,
    FairlyDifficult,
    Difficult,
    VeryDifficult,
}

impl ReadingEase {
    /// Human-readable label for this band.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingEase::VeryEasy => "Very Easy",
            ReadingEase::Easy => "Easy",
            ReadingEase::FairlyEasy => "Fairly Easy",
            ReadingEase::Standard => "Standard",
            ReadingEase::FairlyDifficult => "Fairly Difficult",
            ReadingEase::Difficult => "Difficult",
            ReadingEase::VeryDifficult => "Very Difficult",
        }
    }
}

impl std::fmt::Display for ReadingEase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flesch readability scores for a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    /// Flesch Reading Ease: higher is easier, typically within 0..=100 but
    /// unbounded for degenerate input.
    pub reading_ease: f64,
    /// Flesch-Kincaid Grade Level (US school grade).
    pub grade_level: f64,
    pub ease_band: ReadingEase,
    /// Total syllables counted by the vowel-group heuristic.
    pub syllables: usize,
}

// ---------------------------------------------------------------------------
// SentimentLabel / SentimentReport
// ---------------------------------------------------------------------------

/// Categorical sentiment band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::VeryNegative => "Very Negative",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Positive => "Positive",
            SentimentLabel::VeryPositive => "Very Positive",
        }
    }
}

/// Lexicon-based sentiment estimate.
///
/// This is a fixed-wordlist approach, not a trained model; vocabulary outside
/// the lexicons scores as neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    /// Bounded score in `[-1.0, 1.0]`.
    pub score: f64,
    pub label: SentimentLabel,
    /// Emotional tone tags ("Energetic", "Calm", ...); zero or more.
    pub tones: Vec<String>,
    pub positive_hits: usize,
    pub negative_hits: usize,
}

// ---------------------------------------------------------------------------
// AnalysisReport
// ---------------------------------------------------------------------------

/// The top-level output of a single analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Stable unique identifier for this report (UUIDv4).
    pub report_id: Uuid,
    /// UTC timestamp when the report was produced.
    pub generated_at: DateTime<Utc>,
    /// Wall-clock duration of the analysis in milliseconds.
    pub elapsed_ms: u64,
    /// SHA-256 of the submitted text, lowercase hex.
    pub source_sha256: String,
    pub stats: TextStats,
    /// `None` when the document has no words (scores would be undefined).
    pub readability: Option<ReadabilityReport>,
    pub sentiment: SentimentReport,
    /// Issues found by the corrector, spelling pass first, then grammar
    /// rules, document order within each pass.
    pub issues: Vec<GrammarIssue>,
    /// Fully corrected text after all passes.
    pub corrected_text: String,
    /// 0-100 heuristic penalizing issues relative to document length.
    pub writing_score: u8,
    /// One variant per requested tone, in request order.
    pub variants: Vec<RewriteVariant>,
    /// Frequency-ranked content words.
    pub keywords: Vec<String>,
    pub recommendations: Vec<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
