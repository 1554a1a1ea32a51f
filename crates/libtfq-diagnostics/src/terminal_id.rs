use serde::Deserialize;
use serde::Serialize;

/// A parser's numeric code for a grammar terminal (a token class such as a
/// literal, an operator or a parenthesis).
///
/// Terminal ids are only meaningful relative to the [`TokenCatalog`] of the
/// grammar that produced them.
///
/// [`TokenCatalog`]: crate::TokenCatalog
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TerminalId(pub u16);

impl TerminalId {
    /// Position of this terminal in its catalog's literal table.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl From<u16> for TerminalId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TerminalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
