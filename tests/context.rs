//! Tests for context-aware evaluation: creative license is respected,
//! reframing suggestions only appear where they are appropriate, and user
//! hints are trusted over detection.

use unicoef::{analyze_with_context, Analyzer, ContentType, ContextHints};

const HORROR_TEXT: &str = "Chapter 1: The Nightmare Begins. The blood-soaked corridor \
                           stretched endlessly before her. Sarah's heart pounded with terror \
                           as the monster's footsteps echoed closer. Death seemed inevitable. \
                           Fear consumed every thought.";

#[test]
fn horror_fiction_gets_creative_license() {
    let contextual = analyze_with_context(HORROR_TEXT);

    assert!(contextual.report.coefficient < 0.5);
    assert_eq!(contextual.context.content_type, ContentType::Horror);
    assert!(contextual.context.creative_license);
    assert!(!contextual.reframing_appropriate);

    let reframing = contextual.report.conscious_reframing.to_lowercase();
    assert!(reframing.contains("creative") || reframing.contains("artistic"));
    assert!(reframing.contains("respected"));
}

#[test]
fn business_content_gets_a_suggestion() {
    let text = "We need to dominate the competition and crush our rivals. This is a \
                zero-sum game where we must win at all costs.";
    let hints = ContextHints {
        content_type: Some(ContentType::Business),
        ..ContextHints::default()
    };
    let contextual = Analyzer::default().analyze_with_context(text, Some(&hints));

    assert!(contextual.report.coefficient < 0.5);
    assert!(!contextual.context.creative_license);
    assert!(contextual.reframing_appropriate);
    assert!(contextual.report.conscious_reframing.contains("Observation:"));
    assert!(contextual.report.conscious_reframing.contains("sovereignty"));
}

#[test]
fn user_hints_are_trusted() {
    let text = "The violent storm destroyed everything in its path.";
    let hints = ContextHints {
        content_type: Some(ContentType::Fiction),
        genre: Some("adventure".to_string()),
        creative_license: true,
        ..ContextHints::default()
    };

    let detected = Analyzer::default().analyze_with_context(text, None);
    let hinted = Analyzer::default().analyze_with_context(text, Some(&hints));

    assert!(hinted.context.creative_license);
    assert_eq!(hinted.context.content_type, ContentType::Fiction);
    assert_eq!(hinted.context.confidence, 1.0);
    // Same text, same coefficient; only interpretation differs.
    assert_eq!(hinted.report.coefficient, detected.report.coefficient);
}

#[test]
fn technical_documentation_is_recognized() {
    let text = "This function implements the binary search algorithm to find elements \
                in a sorted array. The algorithm halves the search space on each \
                iteration, achieving logarithmic time complexity.";
    let contextual = analyze_with_context(text);

    assert!(contextual.report.coefficient >= 0.4);
    assert_eq!(contextual.context.content_type, ContentType::Technical);
    assert!(!contextual.context.creative_license);
}

#[test]
fn unity_aligned_content_is_celebrated() {
    let text = "Together, we co-create abundance for all beings. Through collaboration \
                and shared purpose, we open infinite possibility. Love and unity guide \
                our journey toward collective harmony.";
    let contextual = analyze_with_context(text);

    assert!(contextual.report.coefficient >= 0.75);
    assert!(!contextual.reframing_appropriate);
    assert!(contextual.report.conscious_reframing.contains("High Unity Alignment"));
}

#[test]
fn context_report_serializes_with_nested_report() {
    let value = serde_json::to_value(analyze_with_context(HORROR_TEXT)).unwrap();

    assert!(value["report"]["coefficient"].is_number());
    assert_eq!(value["context"]["content_type"], "horror");
    assert_eq!(value["context"]["creative_license"], true);
    assert!(value["reframing_appropriate"].is_boolean());
    assert!(value["notes"].is_array());
}

#[test]
fn low_confidence_detection_is_noted() {
    let contextual = analyze_with_context("A few plain words about nothing much.");

    assert_eq!(contextual.context.content_type, ContentType::Unknown);
    assert!(contextual
        .notes
        .iter()
        .any(|note| note.contains("confidence")));
}
