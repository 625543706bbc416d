//! # gh-vibe
//!
//! GitHub CLI extension with a handful of commands for vibe coding workflows.
//! Installed as `gh-vibe`, it runs as `gh vibe <command>`.
//!
//! # Commands
//!
//! - `init` - Protect a branch and enable squash-only merges with auto branch cleanup
//! - `ready-merge` - Mark a pull request ready, squash merge it and pull the target branch
//! - `setup-ai` - File an issue asking the Copilot coding agent to onboard the repository
//! - `usage` - Show premium request usage for the authenticated user
//!
//! # Examples
//!
//! ```bash
//! # Protect `develop` on acme/widgets
//! gh vibe init acme/widgets --branch develop
//!
//! # Merge the pull request of the current branch
//! gh vibe ready-merge
//!
//! # Total premium requests used this month
//! gh vibe usage --summary
//! ```

#![deny(missing_docs)]

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Token lookup for the REST-backed commands.
mod auth;

/// Command implementations for the CLI.
mod commands;

/// Configuration management for the CLI.
mod config;

/// Error types specific to the CLI.
mod errors;

use commands::{
    init::InitArgs, ready_merge::ReadyMergeArgs, setup_ai::SetupAiArgs, usage::UsageArgs,
};
use config::{get_config_path, AppConfig};
use errors::CliError;

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// Fakes shared by the unit tests.
#[cfg(test)]
mod test_support;

/// Environment variable holding the log filter, e.g. `GH_VIBE_LOG=debug`
const LOG_ENV_VAR: &str = "GH_VIBE_LOG";

/// Command-line interface structure for gh-vibe.
#[derive(Parser, Debug)]
#[command(name = "gh-vibe", author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Alternate config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// The subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

/// Available commands for the gh-vibe CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Set up branch protection and merge settings for a repository
    Init(InitArgs),

    /// Mark a PR ready for review, squash merge it, then checkout and pull its target branch
    #[command(name = "ready-merge")]
    ReadyMerge(ReadyMergeArgs),

    /// Create an issue asking Copilot to set up repository instructions
    #[command(name = "setup-ai")]
    SetupAi(SetupAiArgs),

    /// Show premium request usage for the authenticated user
    Usage(UsageArgs),
}

/// Installs the stderr log subscriber. `GH_VIBE_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

impl Commands {
    /// Whether the command reads the configuration file.
    fn uses_config(&self) -> bool {
        matches!(self, Commands::Init(_) | Commands::Usage(_))
    }
}

/// Loads the configuration for commands that read it. The other commands get the
/// defaults, so a broken file cannot make them fail.
fn load_config(command: &Commands, config_path: Option<&str>) -> Result<AppConfig, CliError> {
    if !command.uses_config() {
        return Ok(AppConfig::default());
    }

    let config = AppConfig::load_or_default(&get_config_path(config_path))?;
    debug!(config = ?config, "Configuration loaded");
    Ok(config)
}

/// Loads the configuration and dispatches to the command handler.
async fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(&cli.command, cli.config.as_deref())?;

    match cli.command {
        Commands::Init(args) => commands::init::execute(args, &config).await,
        Commands::ReadyMerge(args) => commands::ready_merge::execute(args).await,
        Commands::SetupAi(args) => commands::setup_ai::execute(args).await,
        Commands::Usage(args) => commands::usage::execute(args, &config).await,
    }
}

/// Main entry point for the gh-vibe CLI.
///
/// Exits with 0 on success and 1 on any failure, including invalid arguments.
/// `--help` and `--version` exit with 0.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}
