use crate::SmallVec;
use crate::TerminalId;

/// One alternative the parser was willing to accept at the failure point.
///
/// Uses SmallVec since most alternatives are one or two terminals long.
pub type ExpectedTokenRow = SmallVec<[TerminalId; 4]>;

/// Capability implemented by a grammar's syntax-error record to expose the
/// terminals it expected at the point of failure.
///
/// The table has one row per alternative, in the order the grammar produced
/// them.
pub trait ExpectedTokenProvider {
    fn expected_token_sequences(&self) -> Result<&[ExpectedTokenRow], ExtractionError>;
}

/// A failure reported by the query parser.
///
/// Parsers usually wrap their low-level syntax error in one or more outer
/// errors. `ParseFailure` makes that chain walkable and lets the link that is
/// the grammar's syntax-error record identify itself.
pub trait ParseFailure: std::error::Error + Send + Sync {
    /// Returns this failure's expected-token table if it is the grammar's
    /// syntax-error record.
    fn syntax_error(&self) -> Option<&dyn ExpectedTokenProvider> {
        None
    }

    /// The failure this one wraps, if any.
    fn inner(&self) -> Option<&dyn ParseFailure> {
        None
    }
}

/// Why the expected tokens of a parse failure could not be read.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ExtractionError {
    #[error("no syntax error record in the failure chain")]
    NoSyntaxErrorRecord,

    #[error("syntax error record carries no expected-token table")]
    Missing,

    #[error("expected-token table is unreadable: {reason}")]
    Unreadable {
        reason: String,
    },
}
