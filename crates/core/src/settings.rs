//! Fixed repository configuration applied by `init`.
//!
//! Both payloads are sent verbatim to the GitHub REST API. `None` fields
//! serialize as JSON `null`, which the branch protection endpoint requires for
//! the settings it should leave disabled.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;

/// Body of `PUT /repos/{owner}/{repo}/branches/{branch}/protection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchProtectionSettings {
    pub required_status_checks: Option<Value>,
    pub enforce_admins: bool,
    pub required_pull_request_reviews: Option<Value>,
    pub restrictions: Option<Value>,
    pub allow_force_pushes: bool,
    pub allow_deletions: bool,
}

impl Default for BranchProtectionSettings {
    /// Admins included, no required checks or reviews, no force pushes or deletions.
    fn default() -> Self {
        Self {
            required_status_checks: None,
            enforce_admins: true,
            required_pull_request_reviews: None,
            restrictions: None,
            allow_force_pushes: false,
            allow_deletions: false,
        }
    }
}

/// Merge related fields of `PATCH /repos/{owner}/{repo}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeSettings {
    pub allow_squash_merge: bool,
    pub allow_merge_commit: bool,
    pub allow_rebase_merge: bool,
    pub allow_update_branch: bool,
    pub delete_branch_on_merge: bool,
}

impl Default for MergeSettings {
    /// Squash merges only, branch updates allowed, head branches deleted after merge.
    fn default() -> Self {
        Self {
            allow_squash_merge: true,
            allow_merge_commit: false,
            allow_rebase_merge: false,
            allow_update_branch: true,
            delete_branch_on_merge: true,
        }
    }
}
