//! Premium request usage report for the authenticated user.

use std::io::Write;
use tracing::{debug, instrument};
use vibe_developer_platforms::models::{HttpMethod, UsageReport, User};
use vibe_developer_platforms::PlatformApi;

use crate::errors::{StepCause, VibeError};
use crate::sequence::{Step, StepSequencer};

#[cfg(test)]
#[path = "usage_tests.rs"]
mod tests;

/// Inputs of the `usage` command.
#[derive(Debug, Clone, Default)]
pub struct UsageOptions {
    /// Print only the total gross quantity
    pub summary: bool,

    /// Billing year to report on; the API defaults to the current one
    pub year: Option<i32>,

    /// Billing month (1-12) to report on; the API defaults to the current one
    pub month: Option<u32>,
}

/// Path of the premium request usage endpoint, with optional period filters.
pub fn usage_path(login: &str, year: Option<i32>, month: Option<u32>) -> String {
    let mut path = format!(
        "/users/{}/settings/billing/premium_request/usage",
        urlencoding::encode(login)
    );

    let query: Vec<String> = [
        year.map(|y| format!("year={}", y)),
        month.map(|m| format!("month={}", m)),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !query.is_empty() {
        path.push('?');
        path.push_str(&query.join("&"));
    }

    path
}

/// Total gross quantity with one decimal place, e.g. `3.8`.
pub fn format_summary(report: &UsageReport) -> String {
    format!("{:.1}", report.total_gross_quantity())
}

/// The full report as JSON indented by two spaces.
pub fn format_report(report: &UsageReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Fetches the authenticated user's premium request usage and prints it.
///
/// # Errors
///
/// - [`VibeError::StepFailed`] if either API call fails or returns an unexpected body
#[instrument(skip(api, out))]
pub async fn report_usage<A, W>(
    api: &A,
    options: &UsageOptions,
    out: &mut W,
) -> Result<(), VibeError>
where
    A: PlatformApi + ?Sized,
    W: Write,
{
    let mut sequencer = StepSequencer::new(out);

    let login = sequencer
        .run(Step::new("get authenticated user"), async {
            let value = api.request(HttpMethod::Get, "/user", None).await?;
            let user: User = serde_json::from_value(value)?;
            Ok::<_, StepCause>(user.login)
        })
        .await?;
    debug!(login = login.as_str(), "Resolved authenticated user");

    let report = sequencer
        .run(Step::new("fetch usage data"), async {
            let path = usage_path(&login, options.year, options.month);
            let value = api.request(HttpMethod::Get, &path, None).await?;
            let report: UsageReport = serde_json::from_value(value)?;
            Ok::<_, StepCause>(report)
        })
        .await?;

    let rendered = if options.summary {
        format_summary(&report)
    } else {
        sequencer
            .run(Step::new("format usage report"), async {
                format_report(&report)
            })
            .await?
    };

    sequencer.echo(&format!("{}\n", rendered))
}
