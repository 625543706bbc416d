//! # Models
//!
//! Data shapes exchanged with the developer platform and the local working copy.
//!
//! These are transient, per-invocation values. Payload types mirror the JSON the
//! GitHub REST API sends and expects, so they serialize with the API's field names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::Error;

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// HTTP methods used against the platform REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
    Patch,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Post => "POST",
        };
        f.write_str(name)
    }
}

/// Identifies a repository by owner and name.
///
/// Both parts are guaranteed to be non-empty.
///
/// # Examples
///
/// ```
/// use vibe_developer_platforms::models::RepositoryId;
///
/// let repo: RepositoryId = "acme/widgets".parse().unwrap();
/// assert_eq!(repo.owner(), "acme");
/// assert_eq!(repo.name(), "widgets");
/// assert_eq!(repo.to_string(), "acme/widgets");
///
/// assert!("acme".parse::<RepositoryId>().is_err());
/// assert!("acme/widgets/extra".parse::<RepositoryId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryId {
    owner: String,
    name: String,
}

impl RepositoryId {
    /// Creates a repository identifier, rejecting empty parts.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self, Error> {
        let owner = owner.into();
        let name = name.into();
        if owner.is_empty() || name.is_empty() {
            return Err(Error::InvalidRepository(format!("{}/{}", owner, name)));
        }

        Ok(Self { owner, name })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RepositoryId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            return Err(Error::InvalidRepository(s.to_string()));
        }

        Ok(Self {
            owner: parts[0].to_string(),
            name: parts[1].to_string(),
        })
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Captured output of a finished local process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Text written to standard output
    pub stdout: String,

    /// Text written to standard error
    pub stderr: String,
}

impl ProcessOutput {
    /// Standard output followed by standard error.
    ///
    /// The streams are captured separately, so lines are not interleaved in the
    /// order the process wrote them. All of stdout comes first.
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// An issue to be filed on the current repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub assignee: String,
}

/// The authenticated account, as returned by `GET /user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// The account login
    pub login: String,
}

/// Premium request usage for a single user and billing period.
///
/// Mirrors the body of `GET /users/{login}/settings/billing/premium_request/usage`.
/// Fields not listed here are ignored when reading the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageReport {
    /// The billing period the report covers
    pub time_period: TimePeriod,

    /// The login the usage belongs to
    pub user: String,

    /// One entry per product, SKU and model combination
    #[serde(default)]
    pub usage_items: Vec<UsageItem>,
}

impl UsageReport {
    /// Sum of the gross quantity over all usage items; `0.0` when there are none.
    pub fn total_gross_quantity(&self) -> f64 {
        // Starts from +0.0: an empty f64 `sum()` yields -0.0, which prints as "-0.0".
        self.usage_items
            .iter()
            .fold(0.0, |total, item| total + item.gross_quantity)
    }
}

/// Billing period of a usage report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePeriod {
    pub year: i32,

    pub month: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

/// A single metered line of premium request usage.
///
/// The API reports `net = gross - discount` for both quantity and amount. The
/// values are passed through as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageItem {
    #[serde(default)]
    pub product: String,

    #[serde(default)]
    pub sku: String,

    #[serde(default)]
    pub model: String,

    #[serde(default)]
    pub unit_type: String,

    #[serde(default)]
    pub price_per_unit: f64,

    #[serde(default)]
    pub gross_quantity: f64,

    #[serde(default)]
    pub gross_amount: f64,

    #[serde(default)]
    pub discount_quantity: f64,

    #[serde(default)]
    pub discount_amount: f64,

    #[serde(default)]
    pub net_quantity: f64,

    #[serde(default)]
    pub net_amount: f64,
}
