#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Error types for calls made against the developer platform and the local working copy.
///
/// Every variant carries the diagnostic text that was available at the point of
/// failure: the GitHub error message for API calls and the combined process output
/// for local commands. Callers are expected to wrap these errors with the intent of
/// the operation that failed rather than inspect them.
///
/// # Examples
///
/// ```rust
/// use vibe_developer_platforms::errors::Error;
///
/// let error = Error::NoRepositoryContext("no git remotes found".to_string());
/// assert_eq!(
///     error.to_string(),
///     "Unable to determine the current repository: no git remotes found"
/// );
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A REST API request failed.
    ///
    /// Parameters: HTTP method, request path, diagnostic text from the platform.
    #[error("{0} {1} failed: {2}")]
    ApiRequest(String, String, String),

    /// The REST client could not be constructed.
    #[error("Failed to create the API client: {0}")]
    ClientBuild(String),

    /// A repository string was not of the form `owner/repo`.
    #[error("invalid repository format: expected 'owner/repo', got '{0}'")]
    InvalidRepository(String),

    /// A git remote URL did not point at an `owner/repo` pair.
    #[error("Unable to parse repository from remote URL '{0}'")]
    InvalidRemoteUrl(String),

    /// The working copy gave no usable repository information.
    #[error("Unable to determine the current repository: {0}")]
    NoRepositoryContext(String),

    /// A local process exited with a non-zero status.
    ///
    /// `output` holds the combined standard output and standard error.
    #[error("{command} failed: {output}: {status}")]
    ProcessFailed {
        /// The command line that was executed
        command: String,
        /// The exit status as reported by the operating system
        status: String,
        /// Combined standard output and standard error
        output: String,
    },

    /// A local process could not be started at all.
    #[error("Failed to run {command}: {source}")]
    ProcessSpawn {
        /// The command line that was attempted
        command: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
