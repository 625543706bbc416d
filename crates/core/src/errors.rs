use thiserror::Error;
use vibe_developer_platforms::errors::Error as PlatformError;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Boxed cause of a failed step.
pub type StepCause = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum VibeError {
    #[error("{0}")]
    InvalidRepository(#[source] PlatformError),

    #[error("failed to get current repository: {0}")]
    RepositoryContext(#[source] PlatformError),

    #[error("failed to {step}: {source}")]
    StepFailed {
        step: String,
        #[source]
        source: StepCause,
    },

    #[error("cannot run '{attempted}': an earlier step '{failed}' already failed")]
    SequenceHalted { failed: String, attempted: String },

    /// The pull request was merged but the local working copy could not be
    /// brought up to date with the target branch.
    #[error("PR was merged, but failed to checkout and pull '{branch}': {source}")]
    MergedButNotSynced {
        branch: String,
        #[source]
        source: StepCause,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl VibeError {
    /// Name of the step that failed, if the error came out of a step sequence.
    pub fn failed_step(&self) -> Option<&str> {
        match self {
            VibeError::StepFailed { step, .. } => Some(step.as_str()),
            VibeError::SequenceHalted { failed, .. } => Some(failed.as_str()),
            _ => None,
        }
    }
}
