use super::*;
use serde_json::json;

#[test]
fn test_branch_protection_payload() {
    let value = serde_json::to_value(BranchProtectionSettings::default()).unwrap();

    assert_eq!(
        value,
        json!({
            "required_status_checks": null,
            "enforce_admins": true,
            "required_pull_request_reviews": null,
            "restrictions": null,
            "allow_force_pushes": false,
            "allow_deletions": false
        })
    );
}

#[test]
fn test_merge_settings_payload() {
    let value = serde_json::to_value(MergeSettings::default()).unwrap();

    assert_eq!(
        value,
        json!({
            "allow_squash_merge": true,
            "allow_merge_commit": false,
            "allow_rebase_merge": false,
            "allow_update_branch": true,
            "delete_branch_on_merge": true
        })
    );
}
