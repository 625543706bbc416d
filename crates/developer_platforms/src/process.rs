use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument, warn};

use crate::{errors::Error, models::ProcessOutput, ProcessRunner};

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;

/// [`ProcessRunner`] that executes programs on the local machine.
///
/// Processes inherit the current working directory and environment. Each call
/// waits for the process to exit before returning.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    /// Creates a runner for the local machine.
    pub fn new() -> Self {
        Self
    }
}

/// Renders a command line for diagnostics, e.g. `git checkout main`.
pub(crate) fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl ProcessRunner for SystemProcessRunner {
    #[instrument(skip(self))]
    async fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, Error> {
        let command = command_line(program, args);
        debug!(command = command.as_str(), "Running process");

        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|e| Error::ProcessSpawn {
                command: command.clone(),
                source: e,
            })?;

        let captured = ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        if !output.status.success() {
            warn!(
                command = command.as_str(),
                status = %output.status,
                stderr = captured.stderr.as_str(),
                "Process failed"
            );
            return Err(Error::ProcessFailed {
                command,
                status: output.status.to_string(),
                output: captured.combined(),
            });
        }

        Ok(captured)
    }
}
