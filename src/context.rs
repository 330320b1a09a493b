//! Context-aware interpretation of coefficients.
//!
//! A low coefficient means something different in a horror story than in a
//! quarterly business memo. This module detects what kind of content is being
//! analyzed (keyword-indicator heuristics, no NLU) and adjusts how the
//! coefficient is *presented* - the coefficient itself and the hit maps are
//! never altered by context.
//!
//! Creative content (fiction, horror, comedy, satire, artistic) gets its
//! license respected: no reframing is suggested, whatever the coefficient.
//! Business and technical content gets a suggestion when the coefficient
//! drops below the balanced threshold; everything else only when it drops
//! below [`REFRAME_FLOOR`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::scoring::{BALANCED_THRESHOLD, HIGH_UNITY_THRESHOLD};
use crate::utils::normalize;

/// Non-business/technical content is only nudged below this coefficient.
pub const REFRAME_FLOOR: f64 = 0.3;

/// Minimum indicator score for a content type to be claimed at all.
const DETECTION_FLOOR: f32 = 0.1;

// Indicator keyword lists, matched by substring containment like the marker
// lexicons. Data, not logic.

const FICTION_INDICATORS: &[&str] = &[
    "chapter", "protagonist", "character", "plot", "story", "novel", "narrative", "scene",
    "dialogue", "narrator", "fiction",
];

const HORROR_INDICATORS: &[&str] = &[
    "horror", "terror", "fear", "scream", "blood", "death", "monster", "nightmare", "haunted",
    "ghost", "zombie", "vampire", "demon",
];

const COMEDY_INDICATORS: &[&str] = &[
    "comedy", "humor", "joke", "funny", "satire", "parody", "irony", "sarcasm", "wit", "amusing",
    "hilarious", "laugh",
];

const TECHNICAL_INDICATORS: &[&str] = &[
    "function", "class", "method", "algorithm", "implementation", "documentation", "api", "code",
    "syntax", "compile", "debug",
];

const ACADEMIC_INDICATORS: &[&str] = &[
    "abstract", "methodology", "hypothesis", "research", "study", "analysis", "conclusion",
    "bibliography", "citation", "peer-reviewed",
];

const ARTISTIC_INDICATORS: &[&str] = &[
    "artistic", "creative", "expression", "art", "poetry", "prose", "metaphor", "symbolism",
    "imagery", "aesthetic",
];

/// Kinds of content that call for different coefficient interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Fiction,
    Horror,
    Comedy,
    Satire,
    Technical,
    Business,
    Personal,
    Academic,
    Spiritual,
    Artistic,
    Journalistic,
    Unknown,
}

impl ContentType {
    /// Lowercase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Fiction => "fiction",
            ContentType::Horror => "horror",
            ContentType::Comedy => "comedy",
            ContentType::Satire => "satire",
            ContentType::Technical => "technical",
            ContentType::Business => "business",
            ContentType::Personal => "personal",
            ContentType::Academic => "academic",
            ContentType::Spiritual => "spiritual",
            ContentType::Artistic => "artistic",
            ContentType::Journalistic => "journalistic",
            ContentType::Unknown => "unknown",
        }
    }

    /// Whether this content type inherently carries creative license.
    pub fn is_creative(self) -> bool {
        matches!(
            self,
            ContentType::Fiction
                | ContentType::Horror
                | ContentType::Comedy
                | ContentType::Satire
                | ContentType::Artistic
        )
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fiction" => Ok(ContentType::Fiction),
            "horror" => Ok(ContentType::Horror),
            "comedy" => Ok(ContentType::Comedy),
            "satire" => Ok(ContentType::Satire),
            "technical" => Ok(ContentType::Technical),
            "business" => Ok(ContentType::Business),
            "personal" => Ok(ContentType::Personal),
            "academic" => Ok(ContentType::Academic),
            "spiritual" => Ok(ContentType::Spiritual),
            "artistic" => Ok(ContentType::Artistic),
            "journalistic" => Ok(ContentType::Journalistic),
            "unknown" => Ok(ContentType::Unknown),
            other => Err(format!("unknown content type: {other:?}")),
        }
    }
}

/// The detected (or user-supplied) context of analyzed content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentContext {
    /// The primary content type.
    pub content_type: ContentType,
    /// Specific genre within the type, if any ("horror", "comedy").
    pub genre: Option<String>,
    /// Detected intent ("artistic", "educational", "research").
    pub intent: Option<String>,
    /// Whether creative/artistic freedom applies.
    pub creative_license: bool,
    /// Confidence in the detection, `[0.0, 1.0]`. User hints are 1.0.
    pub confidence: f32,
}

/// Caller-supplied context hints. Hints are trusted over detection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextHints {
    /// Declared content type.
    pub content_type: Option<ContentType>,
    /// Declared genre.
    pub genre: Option<String>,
    /// Declared intent.
    pub intent: Option<String>,
    /// Whether the caller claims creative license.
    pub creative_license: bool,
}

/// Detects content context from indicator keywords.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextDetector;

impl ContextDetector {
    pub fn new() -> Self {
        Self
    }

    /// Detect the context of `text`, or adopt the caller's `hints` wholesale
    /// when present.
    pub fn detect(&self, text: &str, hints: Option<&ContextHints>) -> ContentContext {
        if let Some(hints) = hints {
            return ContentContext {
                content_type: hints.content_type.unwrap_or(ContentType::Unknown),
                genre: hints.genre.clone(),
                intent: hints.intent.clone(),
                creative_license: hints.creative_license,
                confidence: 1.0,
            };
        }

        let lower = normalize(text);
        let (content_type, confidence) = detect_content_type(&lower);
        let genre = detect_genre(&lower, content_type);
        let intent = detect_intent(content_type);
        let creative_license =
            content_type.is_creative() || matches!(genre, Some("horror" | "comedy" | "satire"));

        ContentContext {
            content_type,
            genre: genre.map(str::to_string),
            intent: intent.map(str::to_string),
            creative_license,
            confidence,
        }
    }
}

/// Fraction of an indicator list present in the text.
fn indicator_score(lower: &str, indicators: &[&str]) -> f32 {
    if indicators.is_empty() {
        return 0.0;
    }
    let matches = indicators.iter().filter(|term| lower.contains(*term)).count();
    matches as f32 / indicators.len() as f32
}

fn detect_content_type(lower: &str) -> (ContentType, f32) {
    let scores = [
        (ContentType::Fiction, indicator_score(lower, FICTION_INDICATORS)),
        (ContentType::Horror, indicator_score(lower, HORROR_INDICATORS)),
        (ContentType::Comedy, indicator_score(lower, COMEDY_INDICATORS)),
        (ContentType::Technical, indicator_score(lower, TECHNICAL_INDICATORS)),
        (ContentType::Academic, indicator_score(lower, ACADEMIC_INDICATORS)),
        (ContentType::Artistic, indicator_score(lower, ARTISTIC_INDICATORS)),
    ];

    let best = scores
        .iter()
        .copied()
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .unwrap_or((ContentType::Unknown, 0.0));

    if best.1 < DETECTION_FLOOR {
        (ContentType::Unknown, 0.0)
    } else {
        (best.0, best.1.min(1.0))
    }
}

fn detect_genre(lower: &str, content_type: ContentType) -> Option<&'static str> {
    if matches!(content_type, ContentType::Fiction | ContentType::Artistic) {
        if HORROR_INDICATORS.iter().any(|term| lower.contains(term)) {
            return Some("horror");
        }
        if COMEDY_INDICATORS.iter().any(|term| lower.contains(term)) {
            return Some("comedy");
        }
    }
    None
}

fn detect_intent(content_type: ContentType) -> Option<&'static str> {
    match content_type {
        ContentType::Fiction | ContentType::Artistic | ContentType::Horror => Some("artistic"),
        ContentType::Technical => Some("educational"),
        ContentType::Academic => Some("research"),
        _ => None,
    }
}

/// Whether a reframing suggestion is appropriate for this coefficient in
/// this context. Never for creative content.
pub fn reframing_appropriate(coefficient: f64, context: &ContentContext) -> bool {
    if context.creative_license {
        return false;
    }
    match context.content_type {
        ContentType::Business | ContentType::Technical => coefficient < BALANCED_THRESHOLD,
        _ => coefficient < REFRAME_FLOOR,
    }
}

/// Context-aware one-line interpretation of the coefficient.
pub fn interpret_coefficient(coefficient: f64, context: &ContentContext) -> String {
    if context.creative_license {
        return match context.content_type {
            ContentType::Horror => format!(
                "Unity Coefficient: {coefficient:.2} (Genre: Horror Fiction)\n\
                 Low coefficient expected for this genre. Creative license respected."
            ),
            ContentType::Comedy | ContentType::Satire => format!(
                "Unity Coefficient: {coefficient:.2} (Genre: Comedy/Satire)\n\
                 Coefficient reflects comedic/satirical intent. Creative expression honored."
            ),
            _ => format!(
                "Unity Coefficient: {coefficient:.2} (Artistic Expression)\n\
                 Creative license recognized. No restrictions applied."
            ),
        };
    }

    if coefficient >= HIGH_UNITY_THRESHOLD {
        format!("Unity Coefficient: {coefficient:.2} - High unity alignment")
    } else if coefficient >= BALANCED_THRESHOLD {
        format!("Unity Coefficient: {coefficient:.2} - Balanced alignment")
    } else {
        format!("Unity Coefficient: {coefficient:.2} - Separation-leaning patterns detected")
    }
}

/// Short observations accompanying a contextualized report.
pub fn contextual_notes(coefficient: f64, context: &ContentContext) -> Vec<String> {
    let mut notes = Vec::new();

    if context.creative_license {
        notes.push("Creative license respected".to_string());
        notes.push("No restrictions applied".to_string());
        match context.content_type {
            ContentType::Horror => notes.push(
                "Note: Horror genre naturally employs separation themes for emotional impact"
                    .to_string(),
            ),
            ContentType::Comedy | ContentType::Satire => notes.push(
                "Note: Comedy/satire often uses contrast and conflict for humorous effect"
                    .to_string(),
            ),
            _ => {}
        }
    } else if coefficient < BALANCED_THRESHOLD {
        notes.push("Observation: Content shows separation-based patterns".to_string());
        notes.push("Suggestion: Alternative framing available if desired".to_string());
    } else if coefficient >= HIGH_UNITY_THRESHOLD {
        notes.push("Observation: Strong unity consciousness present".to_string());
        notes.push("Recognition: Content promotes collaborative awareness".to_string());
    }

    if context.confidence < 0.5 {
        notes.push(format!(
            "Note: Context detection confidence is {:.0}%",
            f64::from(context.confidence) * 100.0
        ));
        notes.push("Tip: Provide explicit context hints for more accurate analysis".to_string());
    }

    notes
}

/// Compose the context-aware reframing message from the base lexicon message.
pub fn contextual_reframing(coefficient: f64, base: &str, context: &ContentContext) -> String {
    let interpretation = interpret_coefficient(coefficient, context);

    if context.creative_license {
        return format!(
            "{interpretation}\n\n\
             Creative Expression Recognized:\n\
             Your artistic vision is respected. No reframing suggested.\n\
             The consciousness patterns detected are appropriate for {} content.",
            context.content_type
        );
    }

    if reframing_appropriate(coefficient, context) {
        return format!(
            "{interpretation}\n\n\
             Observation: {base}\n\n\
             Note: This is informational only. You have complete sovereignty over your \
             expression. Alternative framings are available if desired."
        );
    }

    format!("{interpretation}\n\n{base}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const HORROR_TEXT: &str = "Chapter 1: the nightmare begins. Blood and terror filled the \
                               haunted corridor as the monster closed in. Death seemed certain.";

    #[test]
    fn detects_horror_with_creative_license() {
        let context = ContextDetector::new().detect(HORROR_TEXT, None);
        assert_eq!(context.content_type, ContentType::Horror);
        assert!(context.creative_license);
        assert!(context.confidence > 0.0);
    }

    #[test]
    fn detects_technical_content() {
        let text = "This function implements the binary search algorithm. The implementation \
                    has O(log n) complexity; see the documentation and api reference.";
        let context = ContextDetector::new().detect(text, None);
        assert_eq!(context.content_type, ContentType::Technical);
        assert!(!context.creative_license);
        assert_eq!(context.intent.as_deref(), Some("educational"));
    }

    #[test]
    fn plain_text_is_unknown() {
        let context = ContextDetector::new().detect("The sky is blue today.", None);
        assert_eq!(context.content_type, ContentType::Unknown);
        assert_eq!(context.confidence, 0.0);
    }

    #[test]
    fn hints_override_detection() {
        let hints = ContextHints {
            content_type: Some(ContentType::Fiction),
            genre: Some("adventure".to_string()),
            creative_license: true,
            ..ContextHints::default()
        };
        let context = ContextDetector::new().detect("The storm destroyed everything.", Some(&hints));

        assert_eq!(context.content_type, ContentType::Fiction);
        assert_eq!(context.genre.as_deref(), Some("adventure"));
        assert!(context.creative_license);
        assert_eq!(context.confidence, 1.0);
    }

    #[test]
    fn fiction_genre_refinement() {
        let text = "The story's protagonist drives the plot of this novel; every chapter \
                    and scene builds the narrative toward one great joke.";
        let context = ContextDetector::new().detect(text, None);
        // Fiction wins the type; the comedy indicator refines the genre.
        assert_eq!(context.content_type, ContentType::Fiction);
        assert_eq!(context.genre.as_deref(), Some("comedy"));
        assert!(context.creative_license);
    }

    #[test]
    fn no_reframing_for_creative_content() {
        let context = ContextDetector::new().detect(HORROR_TEXT, None);
        assert!(!reframing_appropriate(0.1, &context));
    }

    #[test]
    fn reframing_for_low_business_content() {
        let hints = ContextHints {
            content_type: Some(ContentType::Business),
            ..ContextHints::default()
        };
        let context = ContextDetector::new().detect("quarterly memo", Some(&hints));
        assert!(reframing_appropriate(0.4, &context));
        assert!(!reframing_appropriate(0.6, &context));
    }

    #[test]
    fn unknown_content_only_nudged_below_floor() {
        let context = ContextDetector::new().detect("plain words", None);
        assert!(reframing_appropriate(0.2, &context));
        assert!(!reframing_appropriate(0.4, &context));
    }

    #[test]
    fn content_type_round_trips_from_str() {
        for ty in [
            ContentType::Fiction,
            ContentType::Horror,
            ContentType::Business,
            ContentType::Unknown,
        ] {
            assert_eq!(ty.as_str().parse::<ContentType>(), Ok(ty));
        }
        assert!("sonnet".parse::<ContentType>().is_err());
    }
}
