use std::process::ExitCode;
use thiserror::Error;
use vibe_core::errors::VibeError;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Authentication error
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// A command workflow failed
    #[error(transparent)]
    CommandFailed(#[from] VibeError),
}

impl CliError {
    /// Process exit code reported for this error. Every failure exits with 1.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }
}
