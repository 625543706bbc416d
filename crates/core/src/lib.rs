//! # Vibe Core
//!
//! The workflows behind the `gh vibe` commands. Each workflow is a short, fixed
//! sequence of steps run through a [`sequence::StepSequencer`], talking to GitHub
//! and the local working copy only through the traits in
//! [`vibe_developer_platforms`].
//!
//! | Command       | Workflow                                  |
//! |---------------|-------------------------------------------|
//! | `init`        | [`init::initialize_repository`]           |
//! | `ready-merge` | [`ready_merge::ready_and_merge`]          |
//! | `setup-ai`    | [`setup_ai::create_setup_issue`]          |
//! | `usage`       | [`usage::report_usage`]                   |
//!
//! Progress lines go to the writer handed to each workflow, so the binary passes
//! stdout while tests capture the output in a buffer.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use vibe_core::setup_ai::create_setup_issue;
//! use vibe_developer_platforms::gh_cli::GhCliProvider;
//! use vibe_developer_platforms::process::SystemProcessRunner;
//!
//! # async fn example() -> Result<(), vibe_core::errors::VibeError> {
//! let issues = GhCliProvider::new(SystemProcessRunner::new());
//! create_setup_issue(&issues, &mut std::io::stdout()).await?;
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod init;
pub mod ready_merge;
pub mod sequence;
pub mod settings;
pub mod setup_ai;
pub mod usage;

#[cfg(test)]
mod test_support;
