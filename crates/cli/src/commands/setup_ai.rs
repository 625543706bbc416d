use clap::Args;
use tracing::instrument;
use vibe_core::setup_ai::create_setup_issue;
use vibe_developer_platforms::gh_cli::GhCliProvider;
use vibe_developer_platforms::process::SystemProcessRunner;

use crate::errors::CliError;

/// Arguments for the setup-ai command
#[derive(Args, Debug)]
pub struct SetupAiArgs {}

/// Execute the setup-ai command
#[instrument]
pub async fn execute(_args: SetupAiArgs) -> Result<(), CliError> {
    let issues = GhCliProvider::new(SystemProcessRunner::new());

    create_setup_issue(&issues, &mut std::io::stdout()).await?;
    Ok(())
}
