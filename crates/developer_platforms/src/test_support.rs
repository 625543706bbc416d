//! Fakes shared by the unit tests of this crate.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::{errors::Error, models::ProcessOutput, ProcessRunner};

/// Records every invocation and replays queued results in order.
///
/// Once the queue is exhausted every call succeeds with empty output.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<Vec<String>>>,
    results: Mutex<VecDeque<Result<ProcessOutput, Error>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_stdout(&self, stdout: &str) {
        self.results.lock().unwrap().push_back(Ok(ProcessOutput {
            stdout: stdout.to_string(),
            stderr: String::new(),
        }));
    }

    pub fn push_failure(&self, command: &str, output: &str) {
        self.results
            .lock()
            .unwrap()
            .push_back(Err(Error::ProcessFailed {
                command: command.to_string(),
                status: "exit status: 1".to_string(),
                output: output.to_string(),
            }));
    }

    /// Each call as `[program, args...]`.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessRunner for RecordingRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, Error> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().cloned());
        self.calls.lock().unwrap().push(call);

        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ProcessOutput::default()))
    }
}

