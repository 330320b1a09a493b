// Copyright 2025-present Solam Eteva
// SPDX-License-Identifier: Apache-2.0

//! The output schema of an analysis.
//!
//! | Rust Type      | Purpose                                       |
//! |----------------|-----------------------------------------------|
//! | `UnityReport`  | The complete, immutable analysis result       |
//! | `MarkerTally`  | Raw per-polarity hit counts from a strategy   |
//! | `HitCounts`    | Matched term → occurrence count               |
//!
//! `UnityReport` is the sole integration surface for downstream consumers
//! (LLMs, APIs, the CLI). Its JSON shape is stable: `coefficient` as a
//! number, `analysis_method` and `conscious_reframing` as strings, and the
//! two hit maps as string→integer objects (empty object when nothing
//! matched, never null).
//!
//! # Invariants
//!
//! - `coefficient ∈ [0.0, 1.0]`, a pure function of the hit maps.
//! - Hit maps only contain terms with count > 0.
//! - `BTreeMap` keeps hit ordering deterministic, so identical inputs
//!   serialize to byte-identical JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Matched term → number of non-overlapping occurrences.
///
/// Ordered map so reports are deterministic field-for-field.
pub type HitCounts = BTreeMap<String, u32>;

/// Raw output of a scoring strategy: which markers matched, and how often.
///
/// The coefficient and the categorical label are derived from a tally
/// uniformly across strategies; a strategy only decides what counts as a hit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerTally {
    /// Separation markers found, with counts > 0.
    pub separation_hits: HitCounts,
    /// Unity markers found, with counts > 0.
    pub unity_hits: HitCounts,
}

impl MarkerTally {
    /// Sum of all separation marker counts.
    pub fn separation_total(&self) -> u64 {
        self.separation_hits.values().map(|&c| u64::from(c)).sum()
    }

    /// Sum of all unity marker counts.
    pub fn unity_total(&self) -> u64 {
        self.unity_hits.values().map(|&c| u64::from(c)).sum()
    }

    /// Whether no marker from either lexicon matched.
    pub fn is_empty(&self) -> bool {
        self.separation_hits.is_empty() && self.unity_hits.is_empty()
    }
}

/// Standardized report of a text's alignment, the sole output entity.
///
/// Immutable once constructed; it has no identity beyond its fields and no
/// relation to any other report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnityReport {
    /// The Unity Coefficient in `[0.0, 1.0]` (0.0 = separation, 1.0 = unity).
    pub coefficient: f64,

    /// Identifier of the strategy that produced the hit maps,
    /// e.g. `"V1: Keyword Lexicon Density"`.
    pub analysis_method: String,

    /// Separation markers found and their occurrence counts.
    #[serde(default)]
    pub separation_hits: HitCounts,

    /// Unity markers found and their occurrence counts.
    #[serde(default)]
    pub unity_hits: HitCounts,

    /// Categorical label derived from `coefficient` via fixed thresholds,
    /// possibly enriched with context awareness.
    pub conscious_reframing: String,
}
