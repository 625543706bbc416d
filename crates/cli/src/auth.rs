//! Token lookup for the REST-backed commands.

use tracing::{debug, instrument};
use vibe_developer_platforms::github::{create_token_client, GitHubApi};
use vibe_developer_platforms::ProcessRunner;

use crate::config::AppConfig;
use crate::errors::CliError;

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;

/// Environment variables checked for a token, in order.
pub const TOKEN_ENV_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

/// Finds a GitHub token in the environment, falling back to `gh auth token`.
///
/// `env` looks up an environment variable; unset and empty values are skipped.
#[instrument(skip(env, runner))]
pub async fn resolve_token<F, R>(env: F, runner: &R) -> Result<String, CliError>
where
    F: Fn(&str) -> Option<String>,
    R: ProcessRunner + ?Sized,
{
    for name in TOKEN_ENV_VARS {
        if let Some(token) = env(name).map(|t| t.trim().to_string()) {
            if !token.is_empty() {
                debug!(source = name, "Using token from the environment");
                return Ok(token);
            }
        }
    }

    let args = vec!["auth".to_string(), "token".to_string()];
    let output = runner.run("gh", &args).await.map_err(|e| {
        CliError::AuthError(format!(
            "no GitHub token found, set GH_TOKEN or run 'gh auth login': {}",
            e
        ))
    })?;

    let token = output.stdout.trim().to_string();
    if token.is_empty() {
        return Err(CliError::AuthError(
            "'gh auth token' returned an empty token".to_string(),
        ));
    }

    debug!("Using token from gh auth token");
    Ok(token)
}

/// Reads a variable from the process environment.
pub fn system_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Creates the REST client used by `init` and `usage`, with a token from [`resolve_token`].
pub async fn github_api<F, R>(
    config: &AppConfig,
    env: F,
    runner: &R,
) -> Result<GitHubApi, CliError>
where
    F: Fn(&str) -> Option<String>,
    R: ProcessRunner + ?Sized,
{
    let token = resolve_token(env, runner).await?;
    let client = create_token_client(&token, config.github.api_url.as_deref())
        .map_err(|e| CliError::ConfigError(e.to_string()))?;

    Ok(GitHubApi::new(client))
}
