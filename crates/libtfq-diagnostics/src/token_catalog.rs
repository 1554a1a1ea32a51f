use crate::TerminalId;

/// Terminal ids of the RSQL grammar, numbered the way the RSQL parser
/// numbers its token kinds.
pub mod rsql {
    use crate::TerminalId;

    /// End of input. Never rendered as an expected token.
    pub const EOF: TerminalId = TerminalId(0);
    pub const SPACE: TerminalId = TerminalId(1);
    pub const TAB: TerminalId = TerminalId(2);
    pub const CARRIAGE_RETURN: TerminalId = TerminalId(3);
    pub const LINE_FEED: TerminalId = TerminalId(4);
    pub const ALPHA: TerminalId = TerminalId(5);
    pub const ESCAPED_CHAR: TerminalId = TerminalId(6);
    pub const UNRESERVED_STR: TerminalId = TerminalId(7);
    pub const SINGLE_QUOTED_STR: TerminalId = TerminalId(8);
    pub const DOUBLE_QUOTED_STR: TerminalId = TerminalId(9);
    pub const AND: TerminalId = TerminalId(10);
    pub const OR: TerminalId = TerminalId(11);
    pub const LPAREN: TerminalId = TerminalId(12);
    pub const RPAREN: TerminalId = TerminalId(13);
    pub const COMP_FIQL: TerminalId = TerminalId(14);
    pub const COMP_ALT: TerminalId = TerminalId(15);
}

const RSQL_LITERALS: [&str; 16] = [
    "end of input",
    "space",
    "tab",
    "carriage return",
    "line feed",
    "letter",
    "escaped character",
    "unquoted value",
    "single-quoted value",
    "double-quoted value",
    "AND",
    "OR",
    "(",
    ")",
    "comparison operator",
    "alternative comparison operator",
];

/// The process-wide catalog for the RSQL grammar.
///
/// The identifier pair `{ALPHA, UNRESERVED_STR}` is what the parser reports
/// when it is waiting for a field selector. That pairing is a property of
/// the grammar's token numbering, not something the parser describes about
/// itself, so it must be revisited whenever the grammar is regenerated.
pub static RSQL_TOKEN_CATALOG: TokenCatalog = TokenCatalog::new(
    &RSQL_LITERALS,
    rsql::EOF,
    [rsql::ALPHA, rsql::UNRESERVED_STR],
);

/// An immutable, ordered table mapping terminal ids to human-readable
/// literals.
///
/// The table is fixed at compile time; callers that want to manipulate the
/// literals get their own copy through [`all_literals()`](Self::all_literals).
#[derive(Debug)]
pub struct TokenCatalog {
    literals: &'static [&'static str],
    end_of_input: TerminalId,
    identifier_terminals: [TerminalId; 2],
}

impl TokenCatalog {
    /// Creates a catalog over a static literal table.
    ///
    /// `end_of_input` is the sentinel id that is never rendered, and
    /// `identifier_terminals` is the pair of ids the grammar reports when it
    /// expects a field identifier.
    pub const fn new(
        literals: &'static [&'static str],
        end_of_input: TerminalId,
        identifier_terminals: [TerminalId; 2],
    ) -> Self {
        Self {
            literals,
            end_of_input,
            identifier_terminals,
        }
    }

    /// Returns the literal for `terminal`.
    ///
    /// # Panics
    ///
    /// Panics if `terminal` is not part of this catalog. Ids come from the
    /// grammar this catalog was built for, so an unknown id is a bug.
    pub fn literal_of(&self, terminal: TerminalId) -> &'static str {
        match self.try_literal_of(terminal) {
            Some(literal) => literal,
            None => panic!(
                "terminal id {terminal} is outside the token catalog (size {})",
                self.literals.len(),
            ),
        }
    }

    /// Returns the literal for `terminal`, or `None` if the id is unknown.
    pub fn try_literal_of(&self, terminal: TerminalId) -> Option<&'static str> {
        self.literals.get(terminal.index()).copied()
    }

    /// Returns a fresh copy of every literal, in terminal-id order.
    pub fn all_literals(&self) -> Vec<String> {
        self.literals.iter().map(|literal| (*literal).to_string()).collect()
    }

    /// Iterates over `(terminal id, literal)` entries in id order.
    pub fn entries(&self) -> impl Iterator<Item = (TerminalId, &'static str)> + '_ {
        self.literals
            .iter()
            .enumerate()
            .map(|(index, literal)| (TerminalId(index as u16), *literal))
    }

    pub fn end_of_input(&self) -> TerminalId {
        self.end_of_input
    }

    pub fn identifier_terminals(&self) -> [TerminalId; 2] {
        self.identifier_terminals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}
