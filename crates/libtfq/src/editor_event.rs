use crate::RequestId;
use crate::ValidationResult;
use libtfq_diagnostics::SuggestionContext;

/// Input from the editing surface.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EditorEvent {
    /// The query text changed. `cursor` is a character offset.
    TextChanged {
        text: String,
        cursor: usize,
    },

    NameChanged {
        name: String,
    },

    /// The user asked to run the query (e.g. pressed Enter).
    ExecuteRequested,
}

/// Everything one oracle round-trip produced for a text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleEvaluation {
    pub validation: ValidationResult,
    pub suggestions: SuggestionContext,
}

/// A worker's report back to the coordinator loop.
#[derive(Debug)]
pub(crate) struct OracleResponded {
    pub request_id: RequestId,
    pub outcome: OracleReply,
}

#[derive(Debug)]
pub(crate) enum OracleReply {
    Completed(OracleEvaluation),
    TimedOut,

    /// The oracle panicked or its worker was torn down.
    Failed(String),
}
