use clap::Args;
use std::io::Write;
use tracing::{debug, instrument};
use vibe_core::errors::VibeError;
use vibe_core::init::{initialize_repository, InitOptions};
use vibe_developer_platforms::models::RepositoryId;
use vibe_developer_platforms::process::SystemProcessRunner;
use vibe_developer_platforms::working_copy::{WorkingCopyContext, GH_REPO_ENV};
use vibe_developer_platforms::ProcessRunner;

use crate::auth::{github_api, system_env};
use crate::config::AppConfig;
use crate::errors::CliError;

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Repository to initialize; defaults to the repository of the current directory
    #[arg(value_name = "OWNER/REPO")]
    pub repository: Option<String>,

    /// Branch to protect [default: main, or `defaults.branch` from the config file]
    #[arg(short, long)]
    pub branch: Option<String>,
}

impl InitArgs {
    /// Combines the arguments with the configured defaults.
    pub fn to_options(&self, config: &AppConfig) -> InitOptions {
        InitOptions {
            repository: self.repository.clone(),
            branch: self
                .branch
                .clone()
                .unwrap_or_else(|| config.defaults.branch.clone()),
        }
    }
}

/// Execute the init command
#[instrument(skip(config))]
pub async fn execute(args: InitArgs, config: &AppConfig) -> Result<(), CliError> {
    run(
        args,
        config,
        system_env,
        &SystemProcessRunner::new(),
        &mut std::io::stdout(),
    )
    .await
}

/// Runs `init` with the given environment lookup and process runner. Both the
/// token lookup and the working copy inspection go through them.
async fn run<F, R, W>(
    args: InitArgs,
    config: &AppConfig,
    env: F,
    runner: &R,
    out: &mut W,
) -> Result<(), CliError>
where
    F: Fn(&str) -> Option<String>,
    R: ProcessRunner,
    W: Write,
{
    let options = args.to_options(config);
    debug!(branch = options.branch.as_str(), "Initializing repository");

    // A malformed argument is reported before any token lookup.
    if let Some(repository) = &options.repository {
        repository
            .parse::<RepositoryId>()
            .map_err(VibeError::InvalidRepository)?;
    }

    let mut context = WorkingCopyContext::new(runner);
    if let Some(value) = env(GH_REPO_ENV).filter(|v| !v.is_empty()) {
        context = context.with_override(value);
    }

    let api = github_api(config, &env, runner).await?;

    initialize_repository(&api, &context, &options, out).await?;
    Ok(())
}
