use clap::Args;
use tracing::instrument;
use vibe_core::ready_merge::ready_and_merge;
use vibe_developer_platforms::gh_cli::GhCliProvider;
use vibe_developer_platforms::process::SystemProcessRunner;

use crate::errors::CliError;

/// Arguments for the ready-merge command
#[derive(Args, Debug)]
pub struct ReadyMergeArgs {
    /// Pull request number, URL or branch; defaults to the PR of the current branch
    #[arg(value_name = "PR")]
    pub pr: Option<String>,
}

/// Execute the ready-merge command
#[instrument]
pub async fn execute(args: ReadyMergeArgs) -> Result<(), CliError> {
    let runner = SystemProcessRunner::new();
    let prs = GhCliProvider::new(runner);

    ready_and_merge(&prs, &runner, args.pr.as_deref(), &mut std::io::stdout()).await?;
    Ok(())
}
