//! Fakes shared by the command and auth tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use vibe_developer_platforms::errors::Error;
use vibe_developer_platforms::models::ProcessOutput;
use vibe_developer_platforms::ProcessRunner;

/// Answers every process with the same result and records `[program, args...]`.
pub struct FakeGh {
    result: Result<String, String>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeGh {
    pub fn returning(stdout: &str) -> Self {
        Self {
            result: Ok(stdout.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(output: &str) -> Self {
        Self {
            result: Err(output.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessRunner for FakeGh {
    async fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, Error> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().cloned());
        self.calls.lock().unwrap().push(call.clone());

        match &self.result {
            Ok(stdout) => Ok(ProcessOutput {
                stdout: stdout.clone(),
                stderr: String::new(),
            }),
            Err(output) => Err(Error::ProcessFailed {
                command: call.join(" "),
                status: "exit status: 1".to_string(),
                output: output.clone(),
            }),
        }
    }
}

/// An environment lookup over a fixed set of variables.
pub fn env_with(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

/// `["gh", "auth", "token"]`, as recorded by [`FakeGh`].
pub fn gh_auth_token_call() -> Vec<String> {
    vec!["gh".to_string(), "auth".to_string(), "token".to_string()]
}
