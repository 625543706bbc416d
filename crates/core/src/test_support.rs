//! Recording fakes for the platform traits, shared by the command tests.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

use vibe_developer_platforms::errors::Error;
use vibe_developer_platforms::models::{HttpMethod, NewIssue, ProcessOutput, RepositoryId};
use vibe_developer_platforms::{
    IssueProvider, PlatformApi, ProcessRunner, PullRequestProvider, RepositoryContext,
};

/// A request seen by [`FakeApi`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
}

/// Replays queued responses in order; an empty queue answers `{}`.
#[derive(Debug, Default)]
pub struct FakeApi {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<Result<Value, Error>>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, value: Value) {
        self.responses.lock().unwrap().push_back(Ok(value));
    }

    pub fn fail(&self, detail: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(Error::ApiRequest(
                "FAKE".to_string(),
                "/fake".to_string(),
                detail.to_string(),
            )));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlatformApi for FakeApi {
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, Error> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Value::Object(Default::default())))
    }
}

/// Working copy context returning a fixed answer.
#[derive(Debug)]
pub struct FakeContext {
    repository: Option<RepositoryId>,
    lookups: Mutex<u32>,
}

impl FakeContext {
    pub fn with_repository(owner: &str, name: &str) -> Self {
        Self {
            repository: Some(RepositoryId::new(owner, name).unwrap()),
            lookups: Mutex::new(0),
        }
    }

    pub fn without_repository() -> Self {
        Self {
            repository: None,
            lookups: Mutex::new(0),
        }
    }

    pub fn lookups(&self) -> u32 {
        *self.lookups.lock().unwrap()
    }
}

#[async_trait]
impl RepositoryContext for FakeContext {
    async fn current_repository(&self) -> Result<RepositoryId, Error> {
        *self.lookups.lock().unwrap() += 1;
        self.repository
            .clone()
            .ok_or_else(|| Error::NoRepositoryContext("no git remotes found".to_string()))
    }
}

/// Pull request provider recording `(operation, selector)` pairs.
#[derive(Debug)]
pub struct FakePullRequests {
    target: String,
    fail_on: Option<&'static str>,
    calls: Mutex<Vec<(String, Option<String>)>>,
}

impl FakePullRequests {
    pub fn targeting(branch: &str) -> Self {
        Self {
            target: branch.to_string(),
            fail_on: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Makes the named operation (`view`, `ready` or `merge`) fail.
    pub fn failing_on(mut self, operation: &'static str) -> Self {
        self.fail_on = Some(operation);
        self
    }

    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &str, selector: Option<&str>) -> Result<(), Error> {
        self.calls
            .lock()
            .unwrap()
            .push((operation.to_string(), selector.map(str::to_string)));

        if self.fail_on.is_some_and(|f| f == operation) {
            return Err(Error::ProcessFailed {
                command: format!("gh pr {}", operation),
                status: "exit status: 1".to_string(),
                output: "no pull requests found for branch \"feature\"".to_string(),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl PullRequestProvider for FakePullRequests {
    async fn target_branch(&self, selector: Option<&str>) -> Result<String, Error> {
        self.record("view", selector)?;
        Ok(self.target.clone())
    }

    async fn mark_ready(&self, selector: Option<&str>) -> Result<String, Error> {
        self.record("ready", selector)?;
        Ok("✓ Pull request is marked as \"ready for review\"\n".to_string())
    }

    async fn squash_merge(&self, selector: Option<&str>) -> Result<String, Error> {
        self.record("merge", selector)?;
        Ok(String::new())
    }
}

/// Issue provider recording the issues it was asked to create.
#[derive(Debug, Default)]
pub struct FakeIssues {
    fail: bool,
    created: Mutex<Vec<NewIssue>>,
}

impl FakeIssues {
    pub fn failing() -> Self {
        Self {
            fail: true,
            created: Mutex::new(Vec::new()),
        }
    }

    pub fn created(&self) -> Vec<NewIssue> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl IssueProvider for FakeIssues {
    async fn create_issue(&self, issue: &NewIssue) -> Result<String, Error> {
        self.created.lock().unwrap().push(issue.clone());
        if self.fail {
            return Err(Error::ProcessFailed {
                command: "gh issue create".to_string(),
                status: "exit status: 1".to_string(),
                output: "could not assign user: 'copilot' not found".to_string(),
            });
        }

        Ok("https://github.com/acme/widgets/issues/1\n".to_string())
    }
}

/// Process runner recording `[program, args...]` and failing on a chosen command.
#[derive(Debug, Default)]
pub struct FakeRunner {
    fail_on: Option<Vec<String>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(command: &[&str]) -> Self {
        Self {
            fail_on: Some(command.iter().map(|c| c.to_string()).collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessRunner for FakeRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, Error> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().cloned());
        self.calls.lock().unwrap().push(call.clone());

        if self.fail_on.as_ref() == Some(&call) {
            return Err(Error::ProcessFailed {
                command: call.join(" "),
                status: "exit status: 1".to_string(),
                output: "error: Your local changes would be overwritten by checkout.".to_string(),
            });
        }

        Ok(ProcessOutput::default())
    }
}

/// Splits captured output into lines.
pub fn lines(out: &[u8]) -> Vec<String> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(|l| l.to_string())
        .collect()
}
