use crate::output_utils;
use crate::CommandResult;
use crate::RunnableCommand;
use libtfq::diagnostics::FieldCatalog;
use libtfq::diagnostics::TerminalId;
use libtfq::diagnostics::RSQL_TOKEN_CATALOG;
use libtfq::DiagnosticFormatter;
use std::sync::Arc;

/// Formats a raw parser failure the way the query editor would show it.
#[derive(Debug, clap::Args)]
pub(crate) struct ExplainCmd {
    #[arg(
        help="Terminal ids the parser expected at the failure point.",
        long,
        value_delimiter = ',',
    )]
    expected: Vec<u16>,

    #[arg(
        help="Filterable field names to offer when the parser expects a \
             field selector. Defaults to the device (target) fields.",
        long,
        value_delimiter = ',',
    )]
    fields: Vec<String>,

    #[arg(
        help="Print the diagnostic as JSON.",
        long,
    )]
    json: bool,

    #[arg(
        help="Treat the message as a semantic error (unknown field or \
             malformed value) instead of a syntax error.",
        long,
        conflicts_with = "expected",
    )]
    semantic: bool,

    #[arg(
        help="The raw message reported by the parser.",
        name="RAW_MESSAGE",
        required=true,
    )]
    raw_message: String,
}

#[inherent::inherent]
impl RunnableCommand for ExplainCmd {
    pub async fn run(self) -> CommandResult {
        let formatter =
            if self.fields.is_empty() {
                DiagnosticFormatter::for_targets()
            } else {
                DiagnosticFormatter::new(
                    &RSQL_TOKEN_CATALOG,
                    Arc::new(FieldCatalog::from_names(&self.fields)),
                )
            };

        let expected: Vec<TerminalId> =
            self.expected.iter()
                .copied()
                .map(TerminalId)
                .collect();
        log::debug!(
            "Explaining a {} error with {} expected terminals.",
            if self.semantic { "semantic" } else { "syntax" },
            expected.len(),
        );

        let result =
            if self.semantic {
                formatter.format_semantic(&self.raw_message)
            } else {
                formatter.format(&self.raw_message, &expected)
            };

        if self.json {
            return match serde_json::to_string_pretty(&result) {
                Ok(json) => CommandResult::stdout(format_args!("{json}")),
                Err(e) => CommandResult::stderr(format_args!(
                    "{} Could not serialize the diagnostic: {e}",
                    output_utils::RED_X,
                )),
            };
        }

        let mut output = format!("{} {}", output_utils::RED_X, result.message());
        if !result.expected_tokens().is_empty() {
            output.push_str("\n  Expected tokens:");
            for token in result.expected_tokens() {
                output.push_str(&format!("\n  * {token}"));
            }
        }
        CommandResult::stdout(format_args!("{output}"))
    }
}
