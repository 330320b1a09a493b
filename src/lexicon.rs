// Copyright 2025-present Solam Eteva
// SPDX-License-Identifier: Apache-2.0

//! Lexicons: immutable, polarity-tagged marker term sets.
//!
//! A [`Lexicon`] holds the lowercase terms for one polarity. A
//! [`LexiconPair`] holds one lexicon of each polarity and enforces the
//! invariant that no term carries both polarities. Both are validated at
//! construction and never mutated afterwards, which keeps the scorer pure.
//!
//! # Invariants
//!
//! - **Lexicon**: terms are non-empty, lowercase, and unique within the set.
//! - **LexiconPair**: `separation.terms ∩ unity.terms = ∅`.
//!
//! The built-in pair ([`LexiconPair::builtin`]) is constructed lazily from
//! the data in [`crate::markers`] and lives for the whole process.

use std::collections::BTreeSet;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::LexiconError;
use crate::markers::{SEPARATION_MARKERS, UNITY_MARKERS};

/// Which side of the coefficient a lexicon feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Markers of separation-oriented framing. Pull the coefficient to 0.0.
    Separation,
    /// Markers of unity-oriented framing. Pull the coefficient to 1.0.
    Unity,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Separation => f.write_str("separation"),
            Polarity::Unity => f.write_str("unity"),
        }
    }
}

/// An immutable set of lowercase marker terms tagged with one polarity.
///
/// Terms may be single words or multi-word phrases ("us versus them").
/// Matching against text is the scorer's job; the lexicon only owns the
/// vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    polarity: Polarity,
    terms: BTreeSet<String>,
}

impl Lexicon {
    /// Build a validated lexicon from an iterator of terms.
    ///
    /// Terms are lowercased before insertion. Returns an error if a term is
    /// empty (or whitespace-only) or appears twice after lowercasing.
    pub fn new<I, S>(polarity: Polarity, terms: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for term in terms {
            let term = term.as_ref().to_lowercase();
            if term.trim().is_empty() {
                return Err(LexiconError::EmptyTerm { polarity });
            }
            if !set.insert(term.clone()) {
                return Err(LexiconError::DuplicateTerm { term, polarity });
            }
        }
        Ok(Self { polarity, terms: set })
    }

    /// The polarity this lexicon feeds.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Iterate the terms in lexicographic order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Whether `term` (lowercased) is in this lexicon.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(&term.to_lowercase())
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the lexicon has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// One separation lexicon plus one unity lexicon, guaranteed disjoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconPair {
    separation: Lexicon,
    unity: Lexicon,
}

impl LexiconPair {
    /// Pair a separation lexicon with a unity lexicon.
    ///
    /// Returns an error if either lexicon carries the wrong polarity, or if
    /// any term appears in both sets. A dual-polarity marker would make the
    /// coefficient meaningless, so it is rejected here rather than tolerated.
    pub fn new(separation: Lexicon, unity: Lexicon) -> Result<Self, LexiconError> {
        if separation.polarity() != Polarity::Separation {
            return Err(LexiconError::PolarityMismatch {
                expected: Polarity::Separation,
                found: separation.polarity(),
            });
        }
        if unity.polarity() != Polarity::Unity {
            return Err(LexiconError::PolarityMismatch {
                expected: Polarity::Unity,
                found: unity.polarity(),
            });
        }
        if let Some(term) = separation.terms.intersection(&unity.terms).next() {
            return Err(LexiconError::CrossPolarity { term: term.clone() });
        }
        Ok(Self { separation, unity })
    }

    /// The process-wide built-in lexicon pair.
    ///
    /// Constructed once on first use from [`crate::markers`]; the data is
    /// validated by `marker_lists_are_valid` in this module's tests, so
    /// construction cannot fail at runtime.
    pub fn builtin() -> &'static LexiconPair {
        static BUILTIN: Lazy<LexiconPair> = Lazy::new(|| {
            let separation = Lexicon::new(Polarity::Separation, SEPARATION_MARKERS)
                .expect("built-in separation markers are unique and non-empty");
            let unity = Lexicon::new(Polarity::Unity, UNITY_MARKERS)
                .expect("built-in unity markers are unique and non-empty");
            LexiconPair::new(separation, unity).expect("built-in marker lists are disjoint")
        });
        &BUILTIN
    }

    /// The separation lexicon.
    pub fn separation(&self) -> &Lexicon {
        &self.separation
    }

    /// The unity lexicon.
    pub fn unity(&self) -> &Lexicon {
        &self.unity
    }
}

impl Default for LexiconPair {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_lists_are_valid() {
        // Guards the expect() calls in LexiconPair::builtin.
        let separation = Lexicon::new(Polarity::Separation, SEPARATION_MARKERS).unwrap();
        let unity = Lexicon::new(Polarity::Unity, UNITY_MARKERS).unwrap();
        let pair = LexiconPair::new(separation, unity).unwrap();

        assert_eq!(pair.separation().len(), SEPARATION_MARKERS.len());
        assert_eq!(pair.unity().len(), UNITY_MARKERS.len());
    }

    #[test]
    fn builtin_contains_core_terms() {
        let pair = LexiconPair::builtin();
        assert!(pair.separation().contains("fear"));
        assert!(pair.separation().contains("us versus them"));
        assert!(pair.unity().contains("love"));
        assert!(pair.unity().contains("shared source"));
    }

    #[test]
    fn terms_are_lowercased() {
        let lexicon = Lexicon::new(Polarity::Unity, ["LOVE", "Peace"]).unwrap();
        assert!(lexicon.contains("love"));
        assert!(lexicon.contains("PEACE"));
    }

    #[test]
    fn duplicate_term_rejected() {
        let err = Lexicon::new(Polarity::Unity, ["love", "Love"]).unwrap_err();
        assert_eq!(
            err,
            LexiconError::DuplicateTerm {
                term: "love".to_string(),
                polarity: Polarity::Unity,
            }
        );
    }

    #[test]
    fn empty_term_rejected() {
        let err = Lexicon::new(Polarity::Separation, ["fear", "  "]).unwrap_err();
        assert_eq!(err, LexiconError::EmptyTerm { polarity: Polarity::Separation });
    }

    #[test]
    fn cross_polarity_term_rejected() {
        let separation = Lexicon::new(Polarity::Separation, ["fear", "shadow"]).unwrap();
        let unity = Lexicon::new(Polarity::Unity, ["love", "shadow"]).unwrap();
        let err = LexiconPair::new(separation, unity).unwrap_err();
        assert_eq!(err, LexiconError::CrossPolarity { term: "shadow".to_string() });
    }

    #[test]
    fn polarity_mismatch_rejected() {
        let a = Lexicon::new(Polarity::Unity, ["love"]).unwrap();
        let b = Lexicon::new(Polarity::Unity, ["peace"]).unwrap();
        let err = LexiconPair::new(a, b).unwrap_err();
        assert_eq!(
            err,
            LexiconError::PolarityMismatch {
                expected: Polarity::Separation,
                found: Polarity::Unity,
            }
        );
    }
}
