//! Error types for lexicon construction.
//!
//! Analysis itself is total: every string input produces a report. The only
//! thing that can fail at runtime is building a custom lexicon that violates
//! the uniqueness or disjointness invariants.

use thiserror::Error;

use crate::lexicon::Polarity;

/// Errors raised while constructing a [`crate::Lexicon`] or
/// [`crate::LexiconPair`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconError {
    /// A term appeared more than once within the same lexicon (after
    /// lowercasing).
    #[error("duplicate term {term:?} in {polarity} lexicon")]
    DuplicateTerm {
        /// The offending term, lowercased.
        term: String,
        /// Which lexicon it was added to.
        polarity: Polarity,
    },

    /// A term was empty or whitespace-only.
    #[error("empty term in {polarity} lexicon")]
    EmptyTerm {
        /// Which lexicon it was added to.
        polarity: Polarity,
    },

    /// The same term appeared in both the separation and the unity lexicon.
    /// A marker cannot carry both polarities.
    #[error("term {term:?} appears in both the separation and unity lexicons")]
    CrossPolarity {
        /// The offending term, lowercased.
        term: String,
    },

    /// A lexicon was supplied where the other polarity was expected.
    #[error("expected a {expected} lexicon, got a {found} lexicon")]
    PolarityMismatch {
        /// The polarity the constructor expected.
        expected: Polarity,
        /// The polarity actually supplied.
        found: Polarity,
    },
}
