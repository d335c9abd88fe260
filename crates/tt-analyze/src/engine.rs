//! Analysis engine — runs every pipeline stage over one document and
//! assembles the [`AnalysisReport`].
//!
//! Stage order:
//! 1. Statistics (segmenter-derived counts).
//! 2. Readability (skipped for empty documents — scores would be undefined).
//! 3. Sentiment.
//! 4. Correction pipeline (issues, corrected text, writing score).
//! 5. Rewrite variants for the requested tones, computed in parallel with
//!    rayon; output order always follows the request order.
//! 6. Keywords and recommendations.
//!
//! Every stage is a pure function of the input text; the engine owns no
//! state beyond its configuration, so one engine can serve any number of
//! independent requests.

use std::time::Instant;

use chrono::Utc;
use rayon::prelude::*;
use uuid::Uuid;

use tt_core::{sha256_hex, AnalysisReport, ReadabilityReport, Result, Tone};
use tt_correct::{correct, rewrite};

use crate::keywords::extract_keywords;
use crate::readability::score_readability;
use crate::recommend::recommendations;
use crate::sentiment::score_sentiment;
use crate::stats::{compute_stats_with_wpm, DEFAULT_READING_WPM};

// ---------------------------------------------------------------------------
// AnalyzeConfig
// ---------------------------------------------------------------------------

/// Runtime configuration for the analysis engine.
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    /// Tones to produce rewrite variants for, in output order.
    /// Default: all three.
    pub tones: Vec<Tone>,
    /// When `false`, no variants are computed at all.
    pub include_rewrites: bool,
    /// Words-per-minute for the reading time estimate. Default: 200.
    pub reading_wpm: usize,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            tones: vec![Tone::Professional, Tone::Friendly, Tone::Concise],
            include_rewrites: true,
            reading_wpm: DEFAULT_READING_WPM,
        }
    }
}

// ---------------------------------------------------------------------------
// AnalyzeEngine
// ---------------------------------------------------------------------------

/// Stateless analysis engine.
///
/// Call [`AnalyzeEngine::analyze`] with the raw document text to get an
/// [`AnalysisReport`].
#[derive(Debug, Default)]
pub struct AnalyzeEngine {
    config: AnalyzeConfig,
}

impl AnalyzeEngine {
    /// Create a new engine with the given configuration.
    pub fn new(config: AnalyzeConfig) -> Self {
        Self { config }
    }

    /// Analyze `text` and produce a complete report.
    ///
    /// An empty document is not an error at this level: the report carries
    /// zeroed stats, no readability block, a neutral sentiment, no issues,
    /// and a writing score of 100.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        let start = Instant::now();

        let stats = compute_stats_with_wpm(text, self.config.reading_wpm);

        // Readability is undefined for zero words; report "cannot compute"
        // as absence rather than propagating NaN.
        let readability: Option<ReadabilityReport> = if stats.words == 0 {
            None
        } else {
            Some(score_readability(text)?)
        };

        let sentiment = score_sentiment(text);
        let correction = correct(text);

        let variants = if self.config.include_rewrites {
            self.config
                .tones
                .par_iter()
                .map(|&tone| rewrite(text, tone))
                .collect()
        } else {
            Vec::new()
        };

        let keywords = extract_keywords(text);
        let recs = recommendations(text, &stats);

        Ok(AnalysisReport {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            elapsed_ms: start.elapsed().as_millis() as u64,
            source_sha256: sha256_hex(text),
            stats,
            readability,
            sentiment,
            issues: correction.issues,
            corrected_text: correction.corrected_text,
            writing_score: correction.writing_score,
            variants,
            keywords,
            recommendations: recs,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
