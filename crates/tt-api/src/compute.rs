//! Computation capability with a remote-first/local-fallback strategy.
//!
//! [`Computer`] abstracts "something that can analyze, grammar-check, and
//! rewrite text". [`LocalComputer`] is the pure in-process implementation;
//! a remote implementation is whatever the embedding application supplies
//! (typically an HTTP client for the backend — transport is out of scope
//! here). [`FallbackComputer`] tries the primary exactly once — no retry,
//! no timeout of its own — and on any error silently recomputes locally,
//! reporting which path served the request.

use serde::{Deserialize, Serialize};

use tt_analyze::{AnalyzeConfig, AnalyzeEngine};
use tt_core::{AnalysisReport, IssueKind, Result, Tone};
use tt_correct::correct;

use crate::contract::{
    AnalyzeData, BasicStats, GrammarData, GrammarScores, IssueOut, QualityMetrics,
    ReadabilityOut, RewriteData, SentimentOut,
};

// ---------------------------------------------------------------------------
// Computer
// ---------------------------------------------------------------------------

/// Capability interface shared by the remote and local code paths.
pub trait Computer {
    fn analyze(&self, text: &str) -> Result<AnalyzeData>;
    fn check_grammar(&self, text: &str) -> Result<GrammarData>;
    fn rewrite(&self, text: &str, tones: &[Tone]) -> Result<RewriteData>;
}

/// Which implementation actually produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputePath {
    Remote,
    LocalFallback,
}

// ---------------------------------------------------------------------------
// LocalComputer
// ---------------------------------------------------------------------------

/// Pure in-process implementation backed by the analysis engine and the
/// correction pipeline.
#[derive(Debug, Default)]
pub struct LocalComputer {
    engine: AnalyzeEngine,
}

impl LocalComputer {
    pub fn new() -> Self {
        Self {
            engine: AnalyzeEngine::new(AnalyzeConfig::default()),
        }
    }
}

impl Computer for LocalComputer {
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    fn analyze(&self, text: &str) -> Result<AnalyzeData> {
        let report = self.engine.analyze(text)?;
        Ok(analyze_data_from_report(&report))
    }

    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    fn check_grammar(&self, text: &str) -> Result<GrammarData> {
        let correction = correct(text);

        let mut data = GrammarData {
            corrected_text: correction.corrected_text,
            scores: GrammarScores {
                writing_score: correction.writing_score,
            },
            ..GrammarData::default()
        };
        for issue in &correction.issues {
            let out = IssueOut {
                message: issue.message.clone(),
                suggestion: issue.suggestion.clone(),
                start: issue.span.start,
                end: issue.span.end,
                severity: severity_slug(issue).to_string(),
            };
            match issue.kind {
                IssueKind::Spelling => data.spelling_issues.push(out),
                IssueKind::Style => data.style_issues.push(out),
                IssueKind::Grammar | IssueKind::Punctuation => data.grammar_issues.push(out),
            }
        }
        Ok(data)
    }

    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    fn rewrite(&self, text: &str, tones: &[Tone]) -> Result<RewriteData> {
        let mut data = RewriteData::default();
        for &tone in tones {
            let variant = tt_correct::rewrite(text, tone);
            data.rewritten_versions
                .insert(tone_slug(tone).to_string(), variant.text);
        }
        Ok(data)
    }
}

// ---------------------------------------------------------------------------
// FallbackComputer
// ---------------------------------------------------------------------------

/// Remote-first strategy: one attempt against the primary, then a silent
/// local recomputation on any failure.
pub struct FallbackComputer<P: Computer> {
    primary: P,
    local: LocalComputer,
}

impl<P: Computer> FallbackComputer<P> {
    pub fn new(primary: P) -> Self {
        Self {
            primary,
            local: LocalComputer::new(),
        }
    }

    pub fn analyze(&self, text: &str) -> Result<(AnalyzeData, ComputePath)> {
        match self.primary.analyze(text) {
            Ok(data) => Ok((data, ComputePath::Remote)),
            Err(err) => {
                tracing::debug!(%err, "primary analyze failed, falling back to local");
                Ok((self.local.analyze(text)?, ComputePath::LocalFallback))
            }
        }
    }

    pub fn check_grammar(&self, text: &str) -> Result<(GrammarData, ComputePath)> {
        match self.primary.check_grammar(text) {
            Ok(data) => Ok((data, ComputePath::Remote)),
            Err(err) => {
                tracing::debug!(%err, "primary grammar check failed, falling back to local");
                Ok((self.local.check_grammar(text)?, ComputePath::LocalFallback))
            }
        }
    }

    pub fn rewrite(&self, text: &str, tones: &[Tone]) -> Result<(RewriteData, ComputePath)> {
        match self.primary.rewrite(text, tones) {
            Ok(data) => Ok((data, ComputePath::Remote)),
            Err(err) => {
                tracing::debug!(%err, "primary rewrite failed, falling back to local");
                Ok((self.local.rewrite(text, tones)?, ComputePath::LocalFallback))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// Flatten an [`AnalysisReport`] into the wire shape.
pub fn analyze_data_from_report(report: &AnalysisReport) -> AnalyzeData {
    AnalyzeData {
        basic_stats: BasicStats {
            word_count: report.stats.words,
            character_count: report.stats.characters,
            sentence_count: report.stats.sentences,
            paragraph_count: report.stats.paragraphs,
            avg_words_per_sentence: report.stats.avg_words_per_sentence,
            reading_time_minutes: report.stats.reading_time_minutes,
        },
        readability: report
            .readability
            .as_ref()
            .map(|r| ReadabilityOut {
                flesch_reading_ease: r.reading_ease,
                grade_level: r.grade_level,
                label: r.ease_band.as_str().to_string(),
            })
            .unwrap_or_default(),
        sentiment: SentimentOut {
            score: report.sentiment.score,
            label: report.sentiment.label.as_str().to_string(),
            tones: report.sentiment.tones.clone(),
        },
        quality_metrics: QualityMetrics {
            writing_score: report.writing_score,
            issue_count: report.issues.len(),
        },
        keywords: report.keywords.clone(),
        recommendations: report.recommendations.clone(),
    }
}

fn tone_slug(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => "professional",
        Tone::Friendly => "friendly",
        Tone::Concise => "concise",
    }
}

fn severity_slug(issue: &tt_core::GrammarIssue) -> &'static str {
    match issue.severity {
        tt_core::Severity::Error => "error",
        tt_core::Severity::Warning => "warning",
        tt_core::Severity::Suggestion => "suggestion",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tt_core::TtError;

    /// Primary that always fails, as an unreachable backend would.
    struct DownComputer;

    impl Computer for DownComputer {
        fn analyze(&self, _text: &str) -> Result<AnalyzeData> {
            Err(TtError::Remote("connection refused".into()))
        }
        fn check_grammar(&self, _text: &str) -> Result<GrammarData> {
            Err(TtError::Remote("connection refused".into()))
        }
        fn rewrite(&self, _text: &str, _tones: &[Tone]) -> Result<RewriteData> {
            Err(TtError::Remote("connection refused".into()))
        }
    }

    /// Primary that answers with a recognizable canned payload.
    struct CannedComputer;

    impl Computer for CannedComputer {
        fn analyze(&self, _text: &str) -> Result<AnalyzeData> {
            let mut data = AnalyzeData::default();
            data.keywords.push("from-remote".to_string());
            Ok(data)
        }
        fn check_grammar(&self, _text: &str) -> Result<GrammarData> {
            Ok(GrammarData {
                corrected_text: "from-remote".to_string(),
                ..GrammarData::default()
            })
        }
        fn rewrite(&self, _text: &str, _tones: &[Tone]) -> Result<RewriteData> {
            Ok(RewriteData::default())
        }
    }

    #[test]
    fn local_analyze_fills_wire_shape() {
        let data = LocalComputer::new().analyze("The cat sat. It was great.").unwrap();
        assert_eq!(data.basic_stats.word_count, 6);
        assert_eq!(data.basic_stats.sentence_count, 2);
        assert_eq!(data.quality_metrics.writing_score, 100);
        assert!(!data.readability.label.is_empty());
        assert!(!data.sentiment.label.is_empty());
    }

    #[test]
    fn local_grammar_buckets_issues_by_kind() {
        let data = LocalComputer::new()
            .check_grammar("teh cat  sat , ok")
            .unwrap();
        assert_eq!(data.spelling_issues.len(), 1);
        assert!(!data.style_issues.is_empty());
        assert!(!data.grammar_issues.is_empty());
        assert_eq!(data.corrected_text, "the cat sat, ok");
    }

    #[test]
    fn local_rewrite_produces_requested_keys() {
        let data = LocalComputer::new()
            .rewrite("hey, thanks", &[Tone::Professional, Tone::Concise])
            .unwrap();
        assert_eq!(data.rewritten_versions.len(), 2);
        assert!(data.rewritten_versions.contains_key("professional"));
        assert!(data.rewritten_versions.contains_key("concise"));
    }

    #[test]
    fn fallback_uses_remote_when_healthy() {
        let computer = FallbackComputer::new(CannedComputer);
        let (data, path) = computer.analyze("anything").unwrap();
        assert_eq!(path, ComputePath::Remote);
        assert_eq!(data.keywords, vec!["from-remote".to_string()]);
    }

    #[test]
    fn fallback_recomputes_locally_when_remote_fails() {
        let computer = FallbackComputer::new(DownComputer);
        let (data, path) = computer.analyze("The cat sat on the mat.").unwrap();
        assert_eq!(path, ComputePath::LocalFallback);
        assert_eq!(data.basic_stats.word_count, 6);
    }

    #[test]
    fn fallback_grammar_and_rewrite_paths() {
        let computer = FallbackComputer::new(DownComputer);
        let (grammar, path) = computer.check_grammar("teh fox").unwrap();
        assert_eq!(path, ComputePath::LocalFallback);
        assert_eq!(grammar.corrected_text, "the fox");

        let (rewrite, path) = computer.rewrite("hey", &[Tone::Friendly]).unwrap();
        assert_eq!(path, ComputePath::LocalFallback);
        assert!(rewrite.rewritten_versions.contains_key("friendly"));
    }

    #[test]
    fn empty_text_analyzes_locally_without_error() {
        let data = LocalComputer::new().analyze("").unwrap();
        assert_eq!(data.basic_stats.word_count, 0);
        assert_eq!(data.quality_metrics.writing_score, 100);
    }

    #[test]
    fn compute_path_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&ComputePath::LocalFallback).unwrap(),
            "\"local_fallback\""
        );
    }
}
