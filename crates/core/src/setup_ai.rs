//! Files the bootstrap issue that asks the Copilot coding agent to onboard a repository.

use indoc::indoc;
use std::io::Write;
use tracing::instrument;
use vibe_developer_platforms::models::NewIssue;
use vibe_developer_platforms::IssueProvider;

use crate::errors::VibeError;
use crate::sequence::{Step, StepSequencer};

#[cfg(test)]
#[path = "setup_ai_tests.rs"]
mod tests;

pub const ISSUE_TITLE: &str = "✨ Set up Copilot instructions";

pub const ISSUE_BODY: &str = indoc! {"
    Configure instructions for this repository as documented in [Best practices for Copilot coding agent in your repository](https://gh.io/copilot-coding-agent-tips).

    <Onboard this repo>"};

/// The Copilot coding agent, as understood by `gh issue create --assignee`.
pub const ISSUE_ASSIGNEE: &str = "@copilot";

/// The onboarding issue filed by [`create_setup_issue`].
pub fn setup_issue() -> NewIssue {
    NewIssue {
        title: ISSUE_TITLE.to_string(),
        body: ISSUE_BODY.to_string(),
        assignee: ISSUE_ASSIGNEE.to_string(),
    }
}

/// Creates the onboarding issue on the current repository.
#[instrument(skip(issues, out))]
pub async fn create_setup_issue<I, W>(issues: &I, out: &mut W) -> Result<(), VibeError>
where
    I: IssueProvider + ?Sized,
    W: Write,
{
    let issue = setup_issue();
    let mut sequencer = StepSequencer::new(out);
    sequencer.begin("Creating issue to set up Copilot instructions...")?;

    let created = sequencer
        .run(Step::new("create issue"), issues.create_issue(&issue))
        .await?;
    sequencer.echo(&created)?;

    sequencer.finish("Issue created successfully!")
}
