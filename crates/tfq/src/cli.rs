use clap::CommandFactory;
use crate::commands;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[derive(clap::Parser, Debug)]
#[command(name = "tfq", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        action=clap::ArgAction::Count,
        help="Log coordinator activity to stderr. Repeat (-vv) to include \
             per-request traces.",
        long,
        short='v',
    )]
    pub verbose: u8,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }

    /// The logging level from `-v` flags, else from the `TFQ_LOG`
    /// environment variable. Unrecognized `TFQ_LOG` values fall back to the
    /// default and are returned as warnings to log once logging is up.
    pub(crate) fn log_level(&self) -> (tracing::Level, Option<String>) {
        if self.verbose > 0 {
            let level = if self.verbose == 1 {
                tracing::Level::DEBUG
            } else {
                tracing::Level::TRACE
            };
            return (level, None);
        }

        let Ok(env_val) = std::env::var("TFQ_LOG") else {
            return (DEFAULT_LOG_LEVEL, None);
        };
        match env_val.trim().to_ascii_lowercase().as_str() {
            "trace" => (tracing::Level::TRACE, None),
            "debug" | "verbose" => (tracing::Level::DEBUG, None),
            "info" => (tracing::Level::INFO, None),
            "warn" => (tracing::Level::WARN, None),
            "error" => (tracing::Level::ERROR, None),
            other => (
                DEFAULT_LOG_LEVEL,
                Some(format!("Invalid `TFQ_LOG` environment variable value: `{other}`")),
            ),
        }
    }
}
