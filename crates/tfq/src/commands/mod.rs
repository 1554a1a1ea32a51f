mod explain;
mod replay;

use crate::CommandResult;
use explain::ExplainCmd;
use replay::ReplayCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "tfq")]
pub(crate) enum CommandEnum {
    Explain(Box<ExplainCmd>),
    Replay(Box<ReplayCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self) -> CommandResult {
        match self {
            Self::Explain(cmd) => cmd.run().await,
            Self::Replay(cmd) => cmd.run().await,
        }
    }
}
