use crate::ExpectedTokenProvider;
use crate::ExtractionError;
use crate::ParseFailure;
use crate::TerminalId;

/// Returns the terminals the parser expected where `failure` occurred.
///
/// Walks the failure chain to the first syntax-error record and flattens
/// its expected-token table row by row. Order and duplicates are kept as
/// the grammar reported them.
///
/// When the chain holds no syntax-error record, or the record's table
/// cannot be read, this degrades to an empty list and logs the reason at
/// debug level.
pub fn extract_expected_token_ids(failure: &dyn ParseFailure) -> Vec<TerminalId> {
    match try_extract_expected_token_ids(failure) {
        Ok(ids) => ids,
        Err(error) => {
            tracing::debug!(
                %error,
                failure = %failure,
                "no expected tokens available for parse failure"
            );
            vec![]
        },
    }
}

/// Like [`extract_expected_token_ids`], but reports why extraction failed.
pub fn try_extract_expected_token_ids(
    failure: &dyn ParseFailure,
) -> Result<Vec<TerminalId>, ExtractionError> {
    let record = find_syntax_error(failure).ok_or(ExtractionError::NoSyntaxErrorRecord)?;
    let rows = record.expected_token_sequences()?;
    Ok(rows.iter().flat_map(|row| row.iter().copied()).collect())
}

fn find_syntax_error(failure: &dyn ParseFailure) -> Option<&dyn ExpectedTokenProvider> {
    let mut current = Some(failure);
    while let Some(link) = current {
        if let Some(record) = link.syntax_error() {
            return Some(record);
        }
        current = link.inner();
    }
    None
}
