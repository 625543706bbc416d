//! Pull request and issue operations performed through the `gh` CLI.
//!
//! `gh` already knows which pull request belongs to the checked-out branch and how
//! to assign issues to the Copilot coding agent, so these operations shell out to
//! it instead of calling the REST API directly.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::{errors::Error, models::NewIssue, IssueProvider, ProcessRunner, PullRequestProvider};

#[cfg(test)]
#[path = "gh_cli_tests.rs"]
mod tests;

/// Name of the GitHub CLI executable.
pub const GH_PROGRAM: &str = "gh";

/// [`PullRequestProvider`] and [`IssueProvider`] backed by the `gh` CLI.
#[derive(Debug)]
pub struct GhCliProvider<R> {
    runner: R,
}

impl<R: ProcessRunner> GhCliProvider<R> {
    /// Creates a provider running `gh` through `runner`.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    async fn gh(&self, args: Vec<String>) -> Result<String, Error> {
        let output = self.runner.run(GH_PROGRAM, &args).await?;
        Ok(output.stdout)
    }
}

/// Builds `gh` arguments, appending the pull request selector when one was given.
fn with_selector(args: &[&str], selector: Option<&str>) -> Vec<String> {
    let mut result: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    if let Some(s) = selector {
        result.push(s.to_string());
    }

    result
}

#[async_trait]
impl<R: ProcessRunner> PullRequestProvider for GhCliProvider<R> {
    #[instrument(skip(self))]
    async fn target_branch(&self, selector: Option<&str>) -> Result<String, Error> {
        let stdout = self
            .gh(with_selector(
                &["pr", "view", "--json", "baseRefName", "--jq", ".baseRefName"],
                selector,
            ))
            .await?;

        let branch = stdout.trim().to_string();
        debug!(branch = branch.as_str(), "Resolved pull request target branch");
        Ok(branch)
    }

    #[instrument(skip(self))]
    async fn mark_ready(&self, selector: Option<&str>) -> Result<String, Error> {
        self.gh(with_selector(&["pr", "ready"], selector)).await
    }

    #[instrument(skip(self))]
    async fn squash_merge(&self, selector: Option<&str>) -> Result<String, Error> {
        self.gh(with_selector(&["pr", "merge", "--squash"], selector))
            .await
    }
}

#[async_trait]
impl<R: ProcessRunner> IssueProvider for GhCliProvider<R> {
    #[instrument(skip(self, issue), fields(title = issue.title.as_str()))]
    async fn create_issue(&self, issue: &NewIssue) -> Result<String, Error> {
        let args = vec![
            "issue".to_string(),
            "create".to_string(),
            "--title".to_string(),
            issue.title.clone(),
            "--body".to_string(),
            issue.body.clone(),
            "--assignee".to_string(),
            issue.assignee.clone(),
        ];

        self.gh(args).await
    }
}
