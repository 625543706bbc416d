//! Marks a pull request ready, squash-merges it and syncs the local target branch.

use std::io::Write;
use tracing::{info, instrument};
use vibe_developer_platforms::errors::Error as PlatformError;
use vibe_developer_platforms::{ProcessRunner, PullRequestProvider};

use crate::errors::VibeError;
use crate::sequence::{Step, StepSequencer};

#[cfg(test)]
#[path = "ready_merge_tests.rs"]
mod tests;

const CHECKOUT_AND_PULL: &str = "checkout and pull";

/// Switches the working copy to `branch` and pulls the latest changes.
pub async fn checkout_and_pull<R>(runner: &R, branch: &str) -> Result<(), PlatformError>
where
    R: ProcessRunner + ?Sized,
{
    runner
        .run("git", &["checkout".to_string(), branch.to_string()])
        .await?;
    runner.run("git", &["pull".to_string()]).await?;
    Ok(())
}

/// Readies and squash-merges a pull request, then checks out its target branch.
///
/// `selector` identifies the pull request; with `None` the pull request of the
/// current branch is used. The target branch is read before anything changes on
/// the platform, because the head branch may be deleted by the merge.
///
/// # Errors
///
/// - [`VibeError::StepFailed`] if reading, readying or merging the pull request fails
/// - [`VibeError::MergedButNotSynced`] if the merge went through but `git checkout`
///   or `git pull` failed afterwards. The merge is not undone.
#[instrument(skip(prs, runner, out))]
pub async fn ready_and_merge<P, R, W>(
    prs: &P,
    runner: &R,
    selector: Option<&str>,
    out: &mut W,
) -> Result<(), VibeError>
where
    P: PullRequestProvider + ?Sized,
    R: ProcessRunner + ?Sized,
    W: Write,
{
    let mut sequencer = StepSequencer::new(out);

    let target_branch = sequencer
        .run(
            Step::new("get PR target branch"),
            prs.target_branch(selector),
        )
        .await?;

    let ready_output = sequencer
        .run(
            Step::new("mark PR ready").announce("Marking PR ready for review..."),
            prs.mark_ready(selector),
        )
        .await?;
    sequencer.echo(&ready_output)?;

    let merge_output = sequencer
        .run(
            Step::new("merge PR").announce("Merging PR with squash..."),
            prs.squash_merge(selector),
        )
        .await?;
    sequencer.echo(&merge_output)?;

    sequencer
        .run(
            Step::new(CHECKOUT_AND_PULL).announce(format!(
                "Checking out {} and pulling latest changes...",
                target_branch
            )),
            checkout_and_pull(runner, &target_branch),
        )
        .await
        .map_err(|e| match e {
            VibeError::StepFailed { step, source } if step == CHECKOUT_AND_PULL => {
                VibeError::MergedButNotSynced {
                    branch: target_branch.clone(),
                    source,
                }
            }
            other => other,
        })?;

    info!(branch = target_branch.as_str(), "Pull request merged");
    sequencer.finish("PR merged successfully!")
}
