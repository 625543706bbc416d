use clap::Args;
use tracing::instrument;
use vibe_core::usage::{report_usage, UsageOptions};
use vibe_developer_platforms::process::SystemProcessRunner;

use crate::auth::{github_api, system_env};
use crate::config::AppConfig;
use crate::errors::CliError;

/// Arguments for the usage command
#[derive(Args, Debug)]
pub struct UsageArgs {
    /// Show only the total gross quantity
    #[arg(short, long)]
    pub summary: bool,

    /// Billing year to report on [default: current year]
    #[arg(long)]
    pub year: Option<i32>,

    /// Billing month (1-12) to report on [default: current month]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
}

impl From<UsageArgs> for UsageOptions {
    fn from(args: UsageArgs) -> Self {
        UsageOptions {
            summary: args.summary,
            year: args.year,
            month: args.month,
        }
    }
}

/// Execute the usage command
#[instrument(skip(config))]
pub async fn execute(args: UsageArgs, config: &AppConfig) -> Result<(), CliError> {
    let api = github_api(config, system_env, &SystemProcessRunner::new()).await?;

    report_usage(&api, &args.into(), &mut std::io::stdout()).await?;
    Ok(())
}
