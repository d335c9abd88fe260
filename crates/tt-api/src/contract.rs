//! Wire contract types for the text-analysis backend.
//!
//! These mirror the JSON shapes the backend returns. The backend is an
//! opaque collaborator: every field is `#[serde(default)]` so absent or
//! null members fall back to zero/empty instead of failing the whole
//! response, matching how the consuming client treats partial payloads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Standard `{success, data, error}` response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Wrap a successful payload.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Wrap a failure message.
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Analysis endpoint
// ---------------------------------------------------------------------------

/// Request body for the analysis and grammar endpoints: `{text}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasicStats {
    #[serde(default)]
    pub word_count: usize,
    #[serde(default)]
    pub character_count: usize,
    #[serde(default)]
    pub sentence_count: usize,
    #[serde(default)]
    pub paragraph_count: usize,
    #[serde(default)]
    pub avg_words_per_sentence: f64,
    #[serde(default)]
    pub reading_time_minutes: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadabilityOut {
    #[serde(default)]
    pub flesch_reading_ease: f64,
    #[serde(default)]
    pub grade_level: f64,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentimentOut {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub tones: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualityMetrics {
    #[serde(default)]
    pub writing_score: u8,
    #[serde(default)]
    pub issue_count: usize,
}

/// `data` member of the analysis endpoint response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeData {
    #[serde(default)]
    pub basic_stats: BasicStats,
    #[serde(default)]
    pub readability: ReadabilityOut,
    #[serde(default)]
    pub sentiment: SentimentOut,
    #[serde(default)]
    pub quality_metrics: QualityMetrics,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

// ---------------------------------------------------------------------------
// Grammar endpoint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueOut {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default)]
    pub start: usize,
    #[serde(default)]
    pub end: usize,
    #[serde(default)]
    pub severity: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrammarScores {
    #[serde(default)]
    pub writing_score: u8,
}

/// `data` member of the grammar-check endpoint response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrammarData {
    #[serde(default)]
    pub grammar_issues: Vec<IssueOut>,
    #[serde(default)]
    pub spelling_issues: Vec<IssueOut>,
    #[serde(default)]
    pub style_issues: Vec<IssueOut>,
    #[serde(default)]
    pub corrected_text: String,
    #[serde(default)]
    pub scores: GrammarScores,
}

// ---------------------------------------------------------------------------
// Rewrite endpoint
// ---------------------------------------------------------------------------

/// Request body for the rewrite endpoint: `{text, style, options}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteRequest {
    pub text: String,
    pub style: String,
    #[serde(default)]
    pub options: serde_json::Value,
}

/// `data` member of the rewrite endpoint response. Keys are tone slugs
/// ("professional", ...); [`variant_title`] maps them to display titles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RewriteData {
    #[serde(default)]
    pub rewritten_versions: BTreeMap<String, String>,
}

/// Human-readable title for a rewrite key; unknown keys get a capitalized
/// fallback so new backend tones still render.
pub fn variant_title(key: &str) -> String {
    match key {
        "professional" => "Professional Version".to_string(),
        "friendly" => "Friendly Version".to_string(),
        "concise" => "Concise Version".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + chars.as_str() + " Version"
                }
                None => "Version".to_string(),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
