use crate::FieldCatalog;
use crate::OracleSuggestion;
use regex::Regex;
use std::sync::LazyLock;

pub const LOGICAL_OPERATORS: [&str; 2] = ["and", "or"];

pub const COMPARISON_OPERATORS: [&str; 8] =
    ["==", "!=", "=ge=", "=le=", "=gt=", "=lt=", "=in=", "=out="];

static MAP_KEY_OPERATOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"((?-u:\w)+)\.(?-u:\w)+[=!]$")
        .expect("Invalid map key operator regex")
});

/// Suggests `and` / `or` after a complete query.
///
/// Only offered once the user has typed a trailing space, so that typing a
/// value is not interrupted. The suggestions insert at the end of the query.
pub fn logical_operator_suggestions(query: &str) -> Vec<OracleSuggestion> {
    if !query.ends_with(' ') {
        return vec![];
    }
    let end = query.chars().count();
    LOGICAL_OPERATORS
        .iter()
        .map(|operator| OracleSuggestion::new(end, end + operator.len(), *operator))
        .collect()
}

/// Suggests comparison operators right after `<map field>.<key>` followed
/// by `=` or `!`, e.g. `attribute.hwRevision=`.
///
/// The suggestions replace the trailing `=`/`!` with a full operator.
pub fn comparison_operator_suggestions(
    query: &str,
    fields: &FieldCatalog,
) -> Vec<OracleSuggestion> {
    let Some(map_field) = map_key_operator_prefix(query) else {
        return vec![];
    };
    if !fields.is_map(map_field) {
        return vec![];
    }
    let start = query.chars().count() - 1;
    COMPARISON_OPERATORS
        .iter()
        .map(|operator| OracleSuggestion::new(start, start + operator.len(), *operator))
        .collect()
}

/// Returns the map field of a query ending in `<field>.<key>` followed by
/// a single `=` or `!`. Word characters are ASCII only.
fn map_key_operator_prefix(query: &str) -> Option<&str> {
    MAP_KEY_OPERATOR_REGEX
        .captures(query)
        .and_then(|captures| captures.get(1))
        .map(|field| field.as_str())
}
