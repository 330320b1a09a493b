// Copyright 2025-present Solam Eteva
// SPDX-License-Identifier: Apache-2.0

//! The analysis entry points.
//!
//! [`Analyzer`] binds a scoring strategy to the report assembly and the
//! optional context layer. The free [`analyze`] function is the stable
//! one-call surface: it uses a process-wide analyzer over the built-in
//! lexicons and the keyword strategy. Alternative strategies plug into
//! [`Analyzer::with_strategy`] without changing the report shape.
//!
//! Everything here is pure and synchronous: no I/O, no shared mutable state,
//! identical input always yields a field-for-field identical report.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::context::{
    contextual_notes, contextual_reframing, reframing_appropriate, ContentContext, ContextDetector,
    ContextHints,
};
use crate::lexicon::LexiconPair;
use crate::scoring::{report_from_tally, KeywordLexiconScorer, ScoreStrategy};
use crate::types::UnityReport;

static DEFAULT_ANALYZER: Lazy<Analyzer> = Lazy::new(Analyzer::default);

/// Analyze text with the built-in lexicons and the keyword strategy.
///
/// The sole integration surface most callers need. Equivalent to
/// `Analyzer::default().analyze(text)` without rebuilding the analyzer.
pub fn analyze(text: &str) -> UnityReport {
    DEFAULT_ANALYZER.analyze(text)
}

/// Like [`analyze`], but with context-aware reframing.
pub fn analyze_with_context(text: &str) -> ContextualReport {
    DEFAULT_ANALYZER.analyze_with_context(text, None)
}

/// A report enriched with detected content context.
///
/// The inner report's coefficient and hit maps are identical to the plain
/// analysis; only `conscious_reframing` carries the context-aware composite
/// message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextualReport {
    /// The analysis report, with context-aware reframing text.
    pub report: UnityReport,
    /// The detected or caller-supplied content context.
    pub context: ContentContext,
    /// Whether a reframing suggestion was considered appropriate.
    pub reframing_appropriate: bool,
    /// Short human-readable observations about the analysis.
    pub notes: Vec<String>,
}

/// Binds a scoring strategy to report assembly and context interpretation.
pub struct Analyzer {
    strategy: Box<dyn ScoreStrategy + Send + Sync>,
    detector: ContextDetector,
}

impl Default for Analyzer {
    /// Keyword lexicon strategy over the built-in marker lists.
    fn default() -> Self {
        Self::with_strategy(KeywordLexiconScorer::builtin())
    }
}

impl Analyzer {
    /// Keyword lexicon strategy over a custom lexicon pair.
    pub fn new(lexicons: LexiconPair) -> Self {
        Self::with_strategy(KeywordLexiconScorer::new(lexicons))
    }

    /// Use an arbitrary scoring strategy.
    pub fn with_strategy(strategy: impl ScoreStrategy + Send + Sync + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
            detector: ContextDetector::new(),
        }
    }

    /// Identifier of the active strategy.
    pub fn method(&self) -> &'static str {
        self.strategy.method()
    }

    /// Analyze `text` and return the report.
    ///
    /// Accepts any string including the empty string; no-marker input yields
    /// the neutral-baseline report (coefficient 0.5, empty hit maps).
    pub fn analyze(&self, text: &str) -> UnityReport {
        let tally = self.strategy.score(text);
        log::debug!(
            "scored {} chars: {} separation, {} unity",
            text.len(),
            tally.separation_total(),
            tally.unity_total()
        );
        report_from_tally(self.strategy.method(), tally)
    }

    /// Analyze `text` and interpret the result in context.
    ///
    /// `hints`, when given, are trusted over detection. The coefficient and
    /// hit maps are exactly those of [`Analyzer::analyze`].
    pub fn analyze_with_context(
        &self,
        text: &str,
        hints: Option<&ContextHints>,
    ) -> ContextualReport {
        let mut report = self.analyze(text);
        let context = self.detector.detect(text, hints);
        let appropriate = reframing_appropriate(report.coefficient, &context);
        let notes = contextual_notes(report.coefficient, &context);
        report.conscious_reframing =
            contextual_reframing(report.coefficient, &report.conscious_reframing, &context);

        ContextualReport {
            report,
            context,
            reframing_appropriate: appropriate,
            notes,
        }
    }
}
