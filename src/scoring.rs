// Copyright 2025-present Solam Eteva
// SPDX-License-Identifier: Apache-2.0

//! The math behind the Unity Coefficient.
//!
//! The coefficient is the unity share of all marker hits: `U / (U + S)`.
//! When nothing matches there is nothing to divide, so the coefficient falls
//! back to the neutral baseline 0.5 rather than dividing by zero.
//!
//! # Key invariant
//!
//! For any tally, `0.0 <= coefficient <= 1.0`:
//!
//! ```text
//! S = 0, U > 0  →  1.0
//! S > 0, U = 0  →  0.0
//! S = U = 0     →  0.5  (neutral baseline)
//! ```
//!
//! Labeling thresholds are evaluated top-down, first match wins; the exact
//! neutral value 0.5 lands in the Balanced band.

use crate::lexicon::LexiconPair;
use crate::types::{MarkerTally, UnityReport};
use crate::utils::{count_occurrences, normalize};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Coefficient reported when no marker from either lexicon matches.
pub const NEUTRAL_COEFFICIENT: f64 = 0.5;

/// Coefficients at or above this are High Unity Alignment.
pub const HIGH_UNITY_THRESHOLD: f64 = 0.75;

/// Coefficients at or above this (and below the high threshold) are Balanced.
pub const BALANCED_THRESHOLD: f64 = 0.5;

/// Fixed identifier for the keyword lexicon strategy.
pub const KEYWORD_LEXICON_METHOD: &str = "V1: Keyword Lexicon Density";

/// Reports carry four decimal places, matching the published schema.
const COEFFICIENT_SCALE: f64 = 10_000.0;

/// Compute the Unity Coefficient from per-polarity totals.
///
/// Returns [`NEUTRAL_COEFFICIENT`] when both totals are zero, otherwise
/// `unity / (unity + separation)` rounded to four decimal places.
pub fn coefficient(separation_total: u64, unity_total: u64) -> f64 {
    let total = separation_total + unity_total;
    if total == 0 {
        return NEUTRAL_COEFFICIENT;
    }
    let raw = unity_total as f64 / total as f64;
    (raw * COEFFICIENT_SCALE).round() / COEFFICIENT_SCALE
}

/// Categorical band a coefficient falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// `coefficient >= 0.75`
    HighUnity,
    /// `0.5 <= coefficient < 0.75`, including the neutral baseline.
    Balanced,
    /// `coefficient < 0.5`
    SeparationLeaning,
}

impl Alignment {
    /// Classify a coefficient. Thresholds are checked top-down.
    pub fn from_coefficient(coefficient: f64) -> Self {
        if coefficient >= HIGH_UNITY_THRESHOLD {
            Alignment::HighUnity
        } else if coefficient >= BALANCED_THRESHOLD {
            Alignment::Balanced
        } else {
            Alignment::SeparationLeaning
        }
    }

    /// The conscious reframing message for this band.
    pub fn reframing(self) -> &'static str {
        match self {
            Alignment::HighUnity => {
                "High Unity Alignment. The intent is rooted in love and abundance."
            }
            Alignment::Balanced => {
                "Balanced Alignment. The potential for conscious co-creation is strong, \
                 requiring only slight reframing."
            }
            Alignment::SeparationLeaning => {
                "The content leans towards separation logic. Re-evaluate the core premise \
                 from the perspective of our shared source and inherent abundance."
            }
        }
    }
}

/// A scoring strategy: turns text into a [`MarkerTally`].
///
/// The keyword lexicon scorer is the only implementation today. The trait
/// exists so richer strategies (semantic similarity, embeddings) can be
/// substituted behind [`crate::Analyzer`] without changing the report shape.
pub trait ScoreStrategy {
    /// Stable identifier recorded in `UnityReport::analysis_method`.
    fn method(&self) -> &'static str;

    /// Match `text` against the strategy's notion of markers.
    fn score(&self, text: &str) -> MarkerTally;
}

/// The V1 strategy: case-insensitive substring counting against a lexicon
/// pair.
///
/// Matching is substring containment, not word-boundary tokenization:
/// "possible" fires inside "impossible", and phrase entries like
/// "us versus them" match verbatim. Occurrences are counted
/// non-overlapping per term.
#[derive(Debug, Clone)]
pub struct KeywordLexiconScorer {
    lexicons: LexiconPair,
}

impl KeywordLexiconScorer {
    /// Score against a custom lexicon pair.
    pub fn new(lexicons: LexiconPair) -> Self {
        Self { lexicons }
    }

    /// Score against the built-in marker lists.
    pub fn builtin() -> Self {
        Self::new(LexiconPair::builtin().clone())
    }

    /// The lexicon pair this scorer matches against.
    pub fn lexicons(&self) -> &LexiconPair {
        &self.lexicons
    }
}

impl Default for KeywordLexiconScorer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ScoreStrategy for KeywordLexiconScorer {
    fn method(&self) -> &'static str {
        KEYWORD_LEXICON_METHOD
    }

    fn score(&self, text: &str) -> MarkerTally {
        let normalized = normalize(text);
        let mut tally = MarkerTally::default();

        for term in self.lexicons.separation().terms() {
            let count = count_occurrences(&normalized, term);
            if count > 0 {
                tally.separation_hits.insert(term.to_string(), count);
            }
        }
        for term in self.lexicons.unity().terms() {
            let count = count_occurrences(&normalized, term);
            if count > 0 {
                tally.unity_hits.insert(term.to_string(), count);
            }
        }

        tally
    }
}

/// Assemble a report from a strategy's tally.
///
/// This is the single place where coefficient, labeling, and method
/// identifier come together, so every strategy produces the same shape.
pub(crate) fn report_from_tally(method: &str, tally: MarkerTally) -> UnityReport {
    let coefficient = coefficient(tally.separation_total(), tally.unity_total());
    let alignment = Alignment::from_coefficient(coefficient);
    UnityReport {
        coefficient,
        analysis_method: method.to_string(),
        separation_hits: tally.separation_hits,
        unity_hits: tally.unity_hits,
        conscious_reframing: alignment.reframing().to_string(),
    }
}
