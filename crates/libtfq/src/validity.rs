use serde::Deserialize;
use serde::Serialize;

/// What the editing surface currently knows about its query.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Validity {
    /// Nothing to validate (empty query), or the oracle could not answer.
    #[default]
    Unknown,

    /// A request for the current text is pending or in flight.
    Validating,

    Valid,
    Invalid,
}

impl std::fmt::Display for Validity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Unknown => "unknown",
            Self::Validating => "validating",
            Self::Valid => "valid",
            Self::Invalid => "invalid",
        })
    }
}
