//! Tests for mapping oracle completions into suggestion spans.

use crate::OracleSuggestion;
use crate::OracleSuggestionContext;
use crate::SuggestionContext;
use crate::SuggestionSpan;

fn span(start: usize, end: usize, text: &str) -> SuggestionSpan {
    SuggestionSpan {
        start_offset: start,
        end_offset: end,
        replacement_text: text.to_string(),
    }
}

/// Verifies that a candidate whose text does not contain its label is
/// dropped while a matching one survives.
#[test]
fn drops_candidates_that_do_not_extend_their_label() {
    let context = OracleSuggestionContext {
        suggestions: vec![
            OracleSuggestion::labeled(2, 5, "AND", "AND"),
            OracleSuggestion::labeled(2, 5, "AND", "banana"),
        ],
        ..OracleSuggestionContext::new(5)
    };

    let mapped = SuggestionContext::from_oracle(&context);
    assert_eq!(mapped.cursor_position, 5);
    assert_eq!(mapped.suggestions, vec![span(2, 5, "AND")]);
}

#[test]
fn unlabeled_candidates_always_survive() {
    let context = OracleSuggestionContext {
        suggestions: vec![
            OracleSuggestion::new(10, 13, "and"),
            OracleSuggestion::new(10, 12, "or"),
        ],
        ..OracleSuggestionContext::new(10)
    };

    let mapped = SuggestionContext::from_oracle(&context);
    assert_eq!(mapped.suggestions, vec![span(10, 13, "and"), span(10, 12, "or")]);
}

/// Verifies that label matching ignores case and accepts a label found
/// anywhere in the text.
#[test]
fn label_match_ignores_case() {
    let context = OracleSuggestionContext {
        suggestions: vec![
            OracleSuggestion::labeled(0, 2, "Na", "name"),
            OracleSuggestion::labeled(0, 2, "ver", "assignedds.version"),
            OracleSuggestion::labeled(0, 2, "na", "description"),
        ],
        ..OracleSuggestionContext::new(2)
    };

    let mapped = SuggestionContext::from_oracle(&context);
    let texts: Vec<_> = mapped
        .suggestions
        .iter()
        .map(|suggestion| suggestion.replacement_text.as_str())
        .collect();
    assert_eq!(texts, ["name", "assignedds.version"]);
}

/// Verifies that the cursor is copied even when no candidate survives.
#[test]
fn cursor_is_copied_when_everything_is_dropped() {
    let context = OracleSuggestionContext {
        suggestions: vec![OracleSuggestion::labeled(0, 1, "x", "y")],
        ..OracleSuggestionContext::new(7)
    };

    let mapped = SuggestionContext::from_oracle(&context);
    assert_eq!(mapped, SuggestionContext::empty(7));
    assert!(mapped.is_empty());
}

#[test]
fn empty_oracle_context_maps_to_empty() {
    let mapped = SuggestionContext::from_oracle(&OracleSuggestionContext::new(0));
    assert!(mapped.is_empty());
    assert_eq!(mapped.cursor_position, 0);
}
