//! Repository initialization: branch protection and merge settings.

use std::io::Write;
use tracing::{info, instrument};
use vibe_developer_platforms::models::{HttpMethod, RepositoryId};
use vibe_developer_platforms::{PlatformApi, RepositoryContext};

use crate::errors::{StepCause, VibeError};
use crate::sequence::{Step, StepSequencer};
use crate::settings::{BranchProtectionSettings, MergeSettings};

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;

/// Branch protected when none is configured or given on the command line.
pub const DEFAULT_PROTECTED_BRANCH: &str = "main";

/// Inputs of the `init` command.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Explicit `owner/repo`; the working copy's repository is used when absent
    pub repository: Option<String>,

    /// Branch to protect
    pub branch: String,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            repository: None,
            branch: DEFAULT_PROTECTED_BRANCH.to_string(),
        }
    }
}

/// Path of the branch protection endpoint.
///
/// The branch name is sent as-is, so `release/1.0` keeps its `/`. Each
/// `/`-separated part is percent-encoded, so a character such as `#` or `?`
/// cannot end the path early.
pub fn branch_protection_path(repo: &RepositoryId, branch: &str) -> String {
    let branch = branch
        .split('/')
        .map(|part| urlencoding::encode(part).into_owned())
        .collect::<Vec<_>>()
        .join("/");

    format!(
        "/repos/{}/{}/branches/{}/protection",
        repo.owner(),
        repo.name(),
        branch
    )
}

/// Path of the repository endpoint, used to update merge settings.
pub fn repository_path(repo: &RepositoryId) -> String {
    format!("/repos/{}/{}", repo.owner(), repo.name())
}

/// Resolves the target repository from an explicit `owner/repo` argument, or from
/// the working copy when no argument is given.
pub async fn resolve_repository<C>(
    argument: Option<&str>,
    context: &C,
) -> Result<RepositoryId, VibeError>
where
    C: RepositoryContext + ?Sized,
{
    match argument {
        Some(value) => value.parse().map_err(VibeError::InvalidRepository),
        None => context
            .current_repository()
            .await
            .map_err(VibeError::RepositoryContext),
    }
}

/// Applies branch protection and merge settings to a repository.
///
/// The repository is resolved before any API call is made, so a malformed
/// `owner/repo` argument never reaches the platform. If the merge settings update
/// fails, the branch protection that was already applied stays in place.
///
/// # Errors
///
/// - [`VibeError::InvalidRepository`] for a malformed `owner/repo` argument
/// - [`VibeError::RepositoryContext`] when the working copy has no repository
/// - [`VibeError::StepFailed`] naming the API call that failed
#[instrument(skip(api, context, out))]
pub async fn initialize_repository<A, C, W>(
    api: &A,
    context: &C,
    options: &InitOptions,
    out: &mut W,
) -> Result<(), VibeError>
where
    A: PlatformApi + ?Sized,
    C: RepositoryContext + ?Sized,
    W: Write,
{
    let repo = resolve_repository(options.repository.as_deref(), context).await?;
    let branch = options.branch.as_str();

    let mut sequencer = StepSequencer::new(out);
    sequencer.begin(&format!("Initializing repository {}...", repo))?;

    sequencer
        .run(
            Step::new("set branch protection")
                .announce(format!("Setting branch protection for {} branch...", branch)),
            async {
                let body = serde_json::to_value(BranchProtectionSettings::default())?;
                api.request(
                    HttpMethod::Put,
                    &branch_protection_path(&repo, branch),
                    Some(&body),
                )
                .await?;
                Ok::<_, StepCause>(())
            },
        )
        .await?;

    sequencer
        .run(
            Step::new("update repository settings").announce("Updating repository settings..."),
            async {
                let body = serde_json::to_value(MergeSettings::default())?;
                api.request(HttpMethod::Patch, &repository_path(&repo), Some(&body))
                    .await?;
                Ok::<_, StepCause>(())
            },
        )
        .await?;

    info!(repository = %repo, branch, "Repository initialized");
    sequencer.finish("Repository initialized successfully!")
}
