//! # Vibe Developer Platforms
//!
//! Narrow interfaces over the external collaborators used by `gh-vibe`:
//!
//! - [`PlatformApi`]: structured REST requests against GitHub
//! - [`ProcessRunner`]: synchronous-looking local process invocations (`git`, `gh`)
//! - [`PullRequestProvider`] and [`IssueProvider`]: pull request and issue
//!   operations that need the `gh` CLI's knowledge of the current branch
//! - [`RepositoryContext`]: the repository the working copy belongs to
//!
//! Production implementations live in [`github`], [`process`], [`gh_cli`] and
//! [`working_copy`]. Tests substitute their own implementations of the traits.

use async_trait::async_trait;
use serde_json::Value;

pub mod errors;

pub mod gh_cli;

pub mod github;

pub mod models;

pub mod process;

#[cfg(test)]
mod test_support;

pub mod working_copy;

use errors::Error;
use models::{HttpMethod, NewIssue, ProcessOutput, RepositoryId};

/// Performs authenticated REST calls against the developer platform.
///
/// Implementations perform exactly one request per call. There are no retries
/// and no timeouts beyond the transport defaults.
#[async_trait]
pub trait PlatformApi: Send + Sync {
    /// Sends a request and returns the parsed JSON response.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method
    /// * `path` - The API path, starting with `/`, including any query string
    /// * `body` - An optional JSON request body
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, Error>;
}

/// Runs local programs to completion, capturing their output.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Runs `program` with `args`.
    ///
    /// Returns the captured output when the process exits successfully. A non-zero
    /// exit status yields [`Error::ProcessFailed`] carrying the combined output.
    async fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, Error>;
}

#[async_trait]
impl<T: ProcessRunner + ?Sized> ProcessRunner for &T {
    async fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, Error> {
        (**self).run(program, args).await
    }
}

/// Resolves the repository of the ambient working copy.
#[async_trait]
pub trait RepositoryContext: Send + Sync {
    /// Returns the `owner/repo` the working copy belongs to.
    async fn current_repository(&self) -> Result<RepositoryId, Error>;
}

/// Pull request operations.
///
/// Every method takes an optional selector (number, URL or branch). When it is
/// `None` the pull request associated with the current branch is used.
#[async_trait]
pub trait PullRequestProvider: Send + Sync {
    /// Returns the name of the branch the pull request merges into.
    async fn target_branch(&self, selector: Option<&str>) -> Result<String, Error>;

    /// Marks a draft pull request ready for review.
    ///
    /// Returns any informational text produced by the platform.
    async fn mark_ready(&self, selector: Option<&str>) -> Result<String, Error>;

    /// Merges the pull request as a single squashed commit.
    ///
    /// Returns any informational text produced by the platform.
    async fn squash_merge(&self, selector: Option<&str>) -> Result<String, Error>;
}

/// Issue operations on the current repository.
#[async_trait]
pub trait IssueProvider: Send + Sync {
    /// Files a new issue and returns the platform's response text (usually the issue URL).
    async fn create_issue(&self, issue: &NewIssue) -> Result<String, Error>;
}
