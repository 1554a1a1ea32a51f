use crate::OracleSuggestion;
use crate::OracleSuggestionContext;

/// A proposed edit: replace the half-open character range
/// `start_offset..end_offset` of the query with `replacement_text`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SuggestionSpan {
    pub start_offset: usize,
    pub end_offset: usize,
    pub replacement_text: String,
}

/// Completions for one cursor position, ready to cross the client/server
/// boundary.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SuggestionContext {
    pub cursor_position: usize,
    pub suggestions: Vec<SuggestionSpan>,
}

impl SuggestionContext {
    pub fn empty(cursor_position: usize) -> Self {
        Self {
            cursor_position,
            suggestions: vec![],
        }
    }

    /// Maps the oracle's completion context.
    ///
    /// The cursor is copied verbatim. A candidate survives only if it has no
    /// label, or if its replacement text contains the label (ignoring ASCII
    /// case); candidates whose label and text disagree would not extend what
    /// the user already typed.
    pub fn from_oracle(context: &OracleSuggestionContext) -> Self {
        let suggestions = context
            .suggestions
            .iter()
            .filter(|candidate| extends_label(candidate))
            .map(|candidate| SuggestionSpan {
                start_offset: candidate.start,
                end_offset: candidate.end,
                replacement_text: candidate.text.clone(),
            })
            .collect::<Vec<_>>();

        let dropped = context.suggestions.len() - suggestions.len();
        if dropped > 0 {
            tracing::trace!(dropped, "dropped suggestions whose text does not match their label");
        }

        Self {
            cursor_position: context.cursor_position,
            suggestions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

fn extends_label(candidate: &OracleSuggestion) -> bool {
    match &candidate.label {
        None => true,
        Some(label) => candidate
            .text
            .to_ascii_lowercase()
            .contains(&label.to_ascii_lowercase()),
    }
}
