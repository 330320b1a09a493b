//! Unity Coefficient Algorithm: lexicon-based polarity scoring for text.
//!
//! Analyzes a string and produces a normalized coefficient in `[0.0, 1.0]`
//! reflecting the relative frequency of two disjoint marker vocabularies:
//! separation markers (pulling towards 0.0) and unity markers (pulling
//! towards 1.0). The result is an immutable [`UnityReport`] with the
//! coefficient, the per-term hit counts, and a categorical reframing label.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  markers.rs │────▶│  lexicon.rs  │────▶│ scoring.rs  │
//! │ (term data) │     │ (validated   │     │ (coefficient│
//! │             │     │  term sets)  │     │  + labeling)│
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                                                 │
//!                     ┌──────────────┐            ▼
//!                     │  context.rs  │◀────┌─────────────┐
//!                     │ (creative-   │     │ analyze.rs  │
//!                     │  license     │────▶│ (Analyzer,  │
//!                     │  awareness)  │     │  analyze()) │
//!                     └──────────────┘     └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! let report = unicoef::analyze("we co-create a world of love and abundance");
//!
//! assert_eq!(report.coefficient, 1.0);
//! assert_eq!(report.unity_hits.get("love"), Some(&1));
//! assert!(report.conscious_reframing.starts_with("High Unity Alignment"));
//! ```
//!
//! Matching is case-insensitive substring containment: "possible" also fires
//! inside "impossible". That rule is deliberate - the lexicons contain
//! multi-word phrases, and containment keeps them matchable - and it is the
//! documented reference behavior. See [`KeywordLexiconScorer`].
//!
//! The computation is a pure, single-pass, synchronous transform: no I/O, no
//! shared mutable state, no failure modes for any string input. The only
//! runtime errors are lexicon construction violations ([`LexiconError`]).

// Module declarations
mod analyze;
pub mod context;
mod error;
mod lexicon;
pub mod markers;
mod scoring;
mod types;
mod utils;

// Re-exports for public API
pub use analyze::{analyze, analyze_with_context, Analyzer, ContextualReport};
pub use context::{ContentContext, ContentType, ContextDetector, ContextHints};
pub use error::LexiconError;
pub use lexicon::{Lexicon, LexiconPair, Polarity};
pub use scoring::{
    coefficient, Alignment, KeywordLexiconScorer, ScoreStrategy, BALANCED_THRESHOLD,
    HIGH_UNITY_THRESHOLD, KEYWORD_LEXICON_METHOD, NEUTRAL_COEFFICIENT,
};
pub use types::{HitCounts, MarkerTally, UnityReport};
