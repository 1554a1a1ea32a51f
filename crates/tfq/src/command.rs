use crate::CommandResult;

/// A `tfq` subcommand. Runs to completion and reports what to print and
/// how to exit; it never prints by itself.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self) -> CommandResult;
}
