//! Resolution of the repository that the current working copy belongs to.

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, instrument};

use crate::{errors::Error, models::RepositoryId, ProcessRunner, RepositoryContext};

#[cfg(test)]
#[path = "working_copy_tests.rs"]
mod tests;

/// Environment variable that overrides the repository of the working copy.
pub const GH_REPO_ENV: &str = "GH_REPO";

/// Remote names checked in order before falling back to the first listed remote.
pub const PREFERRED_REMOTES: [&str; 3] = ["upstream", "github", "origin"];

lazy_static! {
    /// Matches `https://host/owner/repo(.git)`, `ssh://user@host/owner/repo(.git)`
    /// and scp-like `user@host:owner/repo(.git)` remote URLs.
    static ref REMOTE_URL_REGEX: Regex = Regex::new(
        r"^(?:(?:https?|ssh|git)://(?:[^@/]+@)?[^/]+/|[^@\s/]+@[^:/]+:)(?P<owner>[^/]+)/(?P<name>[^/]+?)(?:\.git)?/?$"
    ).expect("Failed to compile remote URL regex");
}

/// Extracts the repository from a git remote URL.
///
/// # Examples
///
/// ```
/// use vibe_developer_platforms::working_copy::parse_remote_url;
///
/// let repo = parse_remote_url("git@github.com:acme/widgets.git").unwrap();
/// assert_eq!(repo.to_string(), "acme/widgets");
/// ```
pub fn parse_remote_url(url: &str) -> Result<RepositoryId, Error> {
    let url = url.trim();
    let captures = REMOTE_URL_REGEX
        .captures(url)
        .ok_or_else(|| Error::InvalidRemoteUrl(url.to_string()))?;

    RepositoryId::new(&captures["owner"], &captures["name"])
        .map_err(|_| Error::InvalidRemoteUrl(url.to_string()))
}

/// Parses a `GH_REPO` override: `owner/repo`, `host/owner/repo`, or a URL.
pub fn parse_repo_override(value: &str) -> Result<RepositoryId, Error> {
    let value = value.trim();
    if value.contains("://") || value.contains('@') {
        return parse_remote_url(value);
    }

    let parts: Vec<&str> = value.split('/').collect();
    match parts.as_slice() {
        [_host, owner, name] => RepositoryId::new(*owner, *name)
            .map_err(|_| Error::InvalidRepository(value.to_string())),
        _ => value.parse(),
    }
}

/// [`RepositoryContext`] that inspects the git remotes of the current directory.
#[derive(Debug)]
pub struct WorkingCopyContext<R> {
    runner: R,
    repo_override: Option<String>,
}

impl<R: ProcessRunner> WorkingCopyContext<R> {
    /// Creates a context that only consults git remotes.
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            repo_override: None,
        }
    }

    /// Creates a context that honours the `GH_REPO` environment variable.
    pub fn from_env(runner: R) -> Self {
        Self {
            runner,
            repo_override: std::env::var(GH_REPO_ENV).ok().filter(|v| !v.is_empty()),
        }
    }

    /// Uses `value` instead of the git remotes.
    pub fn with_override(mut self, value: impl Into<String>) -> Self {
        self.repo_override = Some(value.into());
        self
    }

    async fn git(&self, args: &[&str]) -> Result<String, Error> {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        match self.runner.run("git", &args).await {
            Ok(output) => Ok(output.stdout),
            Err(Error::ProcessFailed { output, .. }) => {
                Err(Error::NoRepositoryContext(output.trim().to_string()))
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl<R: ProcessRunner> RepositoryContext for WorkingCopyContext<R> {
    #[instrument(skip(self))]
    async fn current_repository(&self) -> Result<RepositoryId, Error> {
        if let Some(value) = &self.repo_override {
            debug!(value = value.as_str(), "Using repository from {}", GH_REPO_ENV);
            return parse_repo_override(value);
        }

        let listing = self.git(&["remote"]).await?;
        let remotes: Vec<&str> = listing
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let remote = PREFERRED_REMOTES
            .iter()
            .find(|p| remotes.contains(*p))
            .copied()
            .or_else(|| remotes.first().copied())
            .ok_or_else(|| Error::NoRepositoryContext("no git remotes found".to_string()))?;

        let url = self.git(&["remote", "get-url", remote]).await?;
        debug!(remote, url = url.trim(), "Resolving repository from git remote");

        parse_remote_url(&url)
    }
}
