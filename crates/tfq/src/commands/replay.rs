use crate::output_utils;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libtfq::diagnostics::completion::CompletingOracle;
use libtfq::diagnostics::FieldCatalog;
use libtfq::diagnostics::RSQL_TOKEN_CATALOG;
use libtfq::CoordinatorConfig;
use libtfq::DiagnosticFormatter;
use libtfq::EditorEvent;
use libtfq::QueryEditCoordinator;
use libtfq::QueryEditSession;
use libtfq::QueryEditState;
use libtfq::QueryOracle;
use libtfq::ScriptedOracle;
use libtfq::ScriptedResponse;
use libtfq::Validity;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// A recorded editing session: how the surface was opened, what the oracle
/// answers, and the user's actions in order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReplayScript {
    #[serde(default)]
    session: SessionSetup,
    #[serde(default)]
    config: Option<CoordinatorConfig>,
    #[serde(default)]
    fields: Option<Vec<String>>,
    #[serde(default)]
    responses: Vec<ScriptedResponse>,
    steps: Vec<ReplayStep>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionSetup {
    /// Set for the update flow.
    #[serde(default)]
    saved: Option<SavedSetup>,
    #[serde(default = "may_save_default")]
    may_save: bool,
}

impl Default for SessionSetup {
    fn default() -> Self {
        Self {
            saved: None,
            may_save: may_save_default(),
        }
    }
}

fn may_save_default() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct SavedSetup {
    name: String,
    query: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum ReplayStep {
    TextChanged {
        text: String,
        #[serde(default)]
        cursor: Option<usize>,
    },
    NameChanged {
        name: String,
    },
    Execute,
    Wait {
        ms: u64,
    },
}

/// Replays an editing session against a scripted oracle and prints every
/// signal the coordinator emits as a JSON line.
#[derive(Debug, clap::Args)]
pub(crate) struct ReplayCmd {
    #[arg(
        help="Add field-name and operator completions to the scripted \
             oracle's suggestions.",
        long,
    )]
    complete: bool,

    #[arg(
        help="Override the script's debounce window, in milliseconds.",
        long,
    )]
    debounce_ms: Option<u64>,

    #[arg(
        help="Override the script's oracle timeout, in milliseconds.",
        long,
    )]
    oracle_timeout_ms: Option<u64>,

    #[arg(
        help="Path to a JSON replay script.",
        name="SCRIPT_PATH",
        required=true,
    )]
    script_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for ReplayCmd {
    pub async fn run(self) -> CommandResult {
        match self.replay().await {
            Ok((lines, final_validity)) => {
                let output = lines.join("\n");
                if final_validity == Validity::Invalid {
                    CommandResult::rejected(format_args!(
                        "{output}\n{} Session ended with an invalid query.",
                        output_utils::RED_X,
                    ))
                } else {
                    CommandResult::stdout(format_args!(
                        "{output}\n{} Session ended with a query that is {final_validity}.",
                        output_utils::GREEN_CHECK,
                    ))
                }
            },

            Err(e) => CommandResult::stderr(format_args!(
                "{} Replay failed: {e:#}",
                output_utils::RED_X,
            )),
        }
    }
}

impl ReplayCmd {
    async fn replay(&self) -> anyhow::Result<(Vec<String>, Validity)> {
        let script_text = std::fs::read_to_string(&self.script_path)
            .with_context(|| format!("reading {:#?}", self.script_path))?;
        let script: ReplayScript = serde_json::from_str(&script_text)
            .with_context(|| format!("parsing {:#?}", self.script_path))?;
        log::debug!(
            "Replaying {} steps against {} scripted responses.",
            script.steps.len(),
            script.responses.len(),
        );

        let mut config = script.config.unwrap_or_default();
        if let Some(debounce_ms) = self.debounce_ms {
            config = config.with_debounce_ms(debounce_ms);
        }
        if let Some(oracle_timeout_ms) = self.oracle_timeout_ms {
            config = config.with_oracle_timeout_ms(oracle_timeout_ms);
        }

        let fields = Arc::new(match &script.fields {
            Some(names) => FieldCatalog::from_names(names),
            None => FieldCatalog::target_fields(),
        });
        let formatter = DiagnosticFormatter::new(&RSQL_TOKEN_CATALOG, Arc::clone(&fields));
        let scripted = ScriptedOracle::new(script.responses)?;
        let oracle: Arc<dyn QueryOracle> =
            if self.complete {
                Arc::new(CompletingOracle::new(scripted, fields))
            } else {
                Arc::new(scripted)
            };

        let state = match script.session.saved {
            Some(saved) => QueryEditState::for_update(saved.name, saved.query, script.session.may_save),
            None => QueryEditState::for_create(script.session.may_save),
        };
        let QueryEditSession { handle, mut signals, task } =
            QueryEditCoordinator::spawn(state, oracle, formatter, config);

        // Signals are drained concurrently with the steps.
        let collector = tokio::spawn(async move {
            let mut lines = vec![];
            while let Some(signal) = signals.recv().await {
                lines.push(serde_json::to_string(&signal));
            }
            lines
        });

        for step in script.steps {
            log::trace!("Replaying {step:?}.");
            let event = match step {
                ReplayStep::TextChanged { text, cursor } => {
                    let cursor = cursor.unwrap_or_else(|| text.chars().count());
                    EditorEvent::TextChanged { text, cursor }
                },
                ReplayStep::NameChanged { name } => EditorEvent::NameChanged { name },
                ReplayStep::Execute => EditorEvent::ExecuteRequested,
                ReplayStep::Wait { ms } => {
                    tokio::time::sleep(Duration::from_millis(ms)).await;
                    continue
                },
            };
            handle.send(event).await?;
        }

        drop(handle);
        let state = task.await.context("coordinator task failed")?;
        let lines = collector
            .await
            .context("signal collector failed")?
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .context("serializing a signal")?;
        Ok((lines, state.validity()))
    }
}
