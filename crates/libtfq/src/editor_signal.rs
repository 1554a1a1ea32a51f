use crate::ActionGating;
use crate::ValidationFeedback;
use crate::ValidationResult;
use crate::Validity;
use libtfq_diagnostics::SuggestionContextDto;
use serde::Serialize;

/// Output for the editing surface to render.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "signal", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EditorSignal {
    Gating(ActionGating),
    Feedback(ValidationFeedback),

    /// The diagnostic for the text that was just validated.
    Validated(ValidationResult),

    Suggestions(SuggestionContextDto),

    /// Run the (externally owned) repository search with this query.
    ExecuteQuery {
        query: String,
    },

    ExecuteRejected {
        validity: Validity,
    },
}
