use async_trait::async_trait;
use octocrab::Octocrab;
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::{errors::Error, models::HttpMethod, PlatformApi};

#[cfg(test)]
#[path = "github_tests.rs"]
mod tests;

/// Creates an `Octocrab` client authenticated with a personal access token.
///
/// # Arguments
///
/// * `token` - The access token, e.g. the output of `gh auth token`
/// * `api_url` - Base URL of the REST API. `None` targets `https://api.github.com`;
///   GitHub Enterprise Server uses `https://<host>/api/v3`.
///
/// # Errors
///
/// Returns [`Error::ClientBuild`] if the base URL cannot be parsed or the client
/// cannot be constructed.
///
/// # Example
///
/// ```rust,no_run
/// use vibe_developer_platforms::github::{create_token_client, GitHubApi};
///
/// #[tokio::main]
/// async fn main() -> Result<(), vibe_developer_platforms::errors::Error> {
///     let client = create_token_client("ghp_example", None)?;
///     let api = GitHubApi::new(client);
///     Ok(())
/// }
/// ```
#[instrument(skip(token))]
pub fn create_token_client(token: &str, api_url: Option<&str>) -> Result<Octocrab, Error> {
    let mut builder = Octocrab::builder().personal_token(token.to_string());
    if let Some(url) = api_url {
        builder = builder.base_uri(url.to_string()).map_err(|e| {
            Error::ClientBuild(format!("Invalid API URL '{}'. Error was: {}", url, e))
        })?;
    }

    builder
        .build()
        .map_err(|e| Error::ClientBuild(e.to_string()))
}

/// Turns an octocrab error into the diagnostic text reported to the user, and logs it.
fn describe_octocrab_error(message: &str, e: &octocrab::Error) -> String {
    match e {
        octocrab::Error::GitHub { source, .. } => {
            error!(
                error_message = source.message,
                status = source.status_code.as_u16(),
                "{}. Received an error from GitHub",
                message
            );
            format!("{} ({})", source.message, source.status_code)
        }
        octocrab::Error::Serde { source, .. } => {
            error!(
                error_message = source.to_string(),
                "{}. The response could not be parsed.", message
            );
            format!("invalid response: {}", source)
        }
        _ => {
            error!(error_message = e.to_string(), message);
            e.to_string()
        }
    }
}

/// [`PlatformApi`] backed by the GitHub REST API.
#[derive(Debug)]
pub struct GitHubApi {
    client: Octocrab,
}

impl GitHubApi {
    /// Wraps an authenticated client, e.g. from [`create_token_client`].
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PlatformApi for GitHubApi {
    #[instrument(skip(self, body))]
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, Error> {
        debug!(method = %method, path, has_body = body.is_some(), "Sending API request");

        let response: Result<Value, octocrab::Error> = match method {
            HttpMethod::Get => self.client.get(path, None::<&()>).await,
            HttpMethod::Put => self.client.put(path, body).await,
            HttpMethod::Patch => self.client.patch(path, body).await,
            HttpMethod::Post => self.client.post(path, body).await,
        };

        response.map_err(|e| {
            let detail = describe_octocrab_error("API request failed", &e);
            Error::ApiRequest(method.to_string(), path.to_string(), detail)
        })
    }
}
