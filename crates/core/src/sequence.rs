//! Ordered execution of labeled steps.
//!
//! A command is a fixed list of steps run one after the other. Values produced by a
//! step are returned to the caller, so a later step can use them directly. The first
//! failing step halts the sequence: its error is wrapped with the step's name, and
//! nothing already done is rolled back.
//!
//! ```rust
//! use vibe_core::sequence::{Step, StepSequencer};
//! use vibe_core::errors::VibeError;
//!
//! # async fn example() -> Result<(), VibeError> {
//! let mut out = Vec::new();
//! let mut sequencer = StepSequencer::new(&mut out);
//!
//! sequencer.begin("Doing things...")?;
//! let answer = sequencer
//!     .run(Step::new("compute the answer"), async { Ok::<_, std::io::Error>(42) })
//!     .await?;
//! sequencer
//!     .run(
//!         Step::new("print the answer").announce(format!("The answer is {}", answer)),
//!         async { Ok::<_, std::io::Error>(()) },
//!     )
//!     .await?;
//! sequencer.finish("Done!")?;
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::io::Write;
use tracing::{debug, error, info};

use crate::errors::{StepCause, VibeError};

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;

/// A unit of work within a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    name: String,
    announcement: Option<String>,
}

impl Step {
    /// Creates a step. `name` describes the step's intent and is used in error
    /// messages as `failed to <name>: <cause>`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            announcement: None,
        }
    }

    /// Sets the progress line written when the step starts.
    pub fn announce(mut self, line: impl Into<String>) -> Self {
        self.announcement = Some(line.into());
        self
    }

    /// The step's name, as used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Runs steps strictly in order, writing user-facing progress lines to `out`.
///
/// Once a step has failed the sequencer is halted: later calls to
/// [`StepSequencer::run`] return [`VibeError::SequenceHalted`] without polling
/// the work they were given.
pub struct StepSequencer<'a, W: Write> {
    out: &'a mut W,
    completed: Vec<String>,
    failed: Option<String>,
}

impl<'a, W: Write> StepSequencer<'a, W> {
    /// Creates a sequencer writing its progress lines to `out`.
    pub fn new(out: &'a mut W) -> Self {
        Self {
            out,
            completed: Vec::new(),
            failed: None,
        }
    }

    /// Writes a heading line before the first step.
    pub fn begin(&mut self, line: &str) -> Result<(), VibeError> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    /// Runs a single step and returns the value it produced.
    ///
    /// # Errors
    ///
    /// - [`VibeError::SequenceHalted`] if an earlier step failed
    /// - [`VibeError::StepFailed`] if `work` fails
    /// - [`VibeError::Output`] if the progress line cannot be written
    pub async fn run<T, E, F>(&mut self, step: Step, work: F) -> Result<T, VibeError>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<StepCause>,
    {
        if let Some(failed) = &self.failed {
            return Err(VibeError::SequenceHalted {
                failed: failed.clone(),
                attempted: step.name,
            });
        }

        if let Some(line) = &step.announcement {
            writeln!(self.out, "{}", line)?;
        }

        debug!(step = step.name.as_str(), "Starting step");
        match work.await {
            Ok(value) => {
                info!(step = step.name.as_str(), "Step completed");
                self.completed.push(step.name);
                Ok(value)
            }
            Err(e) => {
                let cause: StepCause = e.into();
                error!(
                    step = step.name.as_str(),
                    error = cause.to_string(),
                    "Step failed"
                );
                self.failed = Some(step.name.clone());
                Err(VibeError::StepFailed {
                    step: step.name,
                    source: cause,
                })
            }
        }
    }

    /// Writes output captured from an external call, verbatim, if there is any.
    pub fn echo(&mut self, text: &str) -> Result<(), VibeError> {
        if !text.is_empty() {
            write!(self.out, "{}", text)?;
        }

        Ok(())
    }

    /// Names of the steps that completed, in order.
    pub fn completed(&self) -> &[String] {
        &self.completed
    }

    /// Writes the final success line and ends the sequence.
    pub fn finish(self, line: &str) -> Result<(), VibeError> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        Ok(())
    }
}
