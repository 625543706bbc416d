use super::*;
use crate::test_support::{lines, FakeApi, FakeContext, RecordedRequest};
use proptest::prelude::*;
use serde_json::json;

fn options(repository: Option<&str>, branch: &str) -> InitOptions {
    InitOptions {
        repository: repository.map(str::to_string),
        branch: branch.to_string(),
    }
}

#[test]
fn test_default_options_protect_main() {
    let options = InitOptions::default();

    assert_eq!(options.repository, None);
    assert_eq!(options.branch, "main");
}

#[test]
fn test_branch_protection_path_keeps_slashes_and_encodes_parts() {
    let repo = RepositoryId::new("acme", "widgets").unwrap();

    assert_eq!(
        branch_protection_path(&repo, "develop"),
        "/repos/acme/widgets/branches/develop/protection"
    );
    assert_eq!(
        branch_protection_path(&repo, "release/1.0"),
        "/repos/acme/widgets/branches/release/1.0/protection"
    );
    assert_eq!(
        branch_protection_path(&repo, "feature/#12?draft"),
        "/repos/acme/widgets/branches/feature/%2312%3Fdraft/protection"
    );
    assert_eq!(repository_path(&repo), "/repos/acme/widgets");
}

#[tokio::test]
async fn test_init_explicit_repository_end_to_end() {
    let api = FakeApi::new();
    let context = FakeContext::without_repository();
    let mut out = Vec::new();

    initialize_repository(
        &api,
        &context,
        &options(Some("acme/widgets"), "develop"),
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(
        api.requests(),
        vec![
            RecordedRequest {
                method: HttpMethod::Put,
                path: "/repos/acme/widgets/branches/develop/protection".to_string(),
                body: Some(json!({
                    "required_status_checks": null,
                    "enforce_admins": true,
                    "required_pull_request_reviews": null,
                    "restrictions": null,
                    "allow_force_pushes": false,
                    "allow_deletions": false
                })),
            },
            RecordedRequest {
                method: HttpMethod::Patch,
                path: "/repos/acme/widgets".to_string(),
                body: Some(json!({
                    "allow_squash_merge": true,
                    "allow_merge_commit": false,
                    "allow_rebase_merge": false,
                    "allow_update_branch": true,
                    "delete_branch_on_merge": true
                })),
            },
        ]
    );
    assert_eq!(
        lines(&out),
        vec![
            "Initializing repository acme/widgets...",
            "Setting branch protection for develop branch...",
            "Updating repository settings...",
            "Repository initialized successfully!",
        ]
    );
    assert_eq!(context.lookups(), 0);
}

#[tokio::test]
async fn test_init_uses_working_copy_when_no_argument() {
    let api = FakeApi::new();
    let context = FakeContext::with_repository("octo", "project");
    let mut out = Vec::new();

    initialize_repository(&api, &context, &InitOptions::default(), &mut out)
        .await
        .unwrap();

    let requests = api.requests();
    assert_eq!(context.lookups(), 1);
    assert_eq!(
        requests[0].path,
        "/repos/octo/project/branches/main/protection"
    );
    assert_eq!(requests[1].path, "/repos/octo/project");
}

#[tokio::test]
async fn test_init_without_repository_context_fails_before_api_calls() {
    let api = FakeApi::new();
    let context = FakeContext::without_repository();
    let mut out = Vec::new();

    let err = initialize_repository(&api, &context, &InitOptions::default(), &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, VibeError::RepositoryContext(_)));
    assert!(err.to_string().starts_with("failed to get current repository:"));
    assert!(api.requests().is_empty());
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_init_malformed_repository_fails_before_api_calls() {
    for input in ["acme", "acme/", "/widgets", "acme/widgets/extra", ""] {
        let api = FakeApi::new();
        let context = FakeContext::with_repository("octo", "project");
        let mut out = Vec::new();

        let err = initialize_repository(&api, &context, &options(Some(input), "main"), &mut out)
            .await
            .unwrap_err();

        assert!(
            matches!(err, VibeError::InvalidRepository(_)),
            "'{}' should be rejected",
            input
        );
        assert_eq!(
            err.to_string(),
            format!(
                "invalid repository format: expected 'owner/repo', got '{}'",
                input
            )
        );
        assert!(api.requests().is_empty());
        assert_eq!(context.lookups(), 0);
    }
}

#[tokio::test]
async fn test_merge_settings_failure_keeps_branch_protection() {
    let api = FakeApi::new();
    api.respond(json!({ "url": "protection" }));
    api.fail("Validation Failed (422 Unprocessable Entity)");
    let context = FakeContext::without_repository();
    let mut out = Vec::new();

    let err = initialize_repository(
        &api,
        &context,
        &options(Some("acme/widgets"), "main"),
        &mut out,
    )
    .await
    .unwrap_err();

    assert_eq!(err.failed_step(), Some("update repository settings"));
    assert_eq!(api.requests().len(), 2);
    assert_eq!(
        lines(&out),
        vec![
            "Initializing repository acme/widgets...",
            "Setting branch protection for main branch...",
            "Updating repository settings...",
        ]
    );
}

#[tokio::test]
async fn test_branch_protection_failure_skips_merge_settings() {
    let api = FakeApi::new();
    api.fail("Not Found (404 Not Found)");
    let context = FakeContext::without_repository();
    let mut out = Vec::new();

    let err = initialize_repository(
        &api,
        &context,
        &options(Some("acme/widgets"), "main"),
        &mut out,
    )
    .await
    .unwrap_err();

    assert_eq!(err.failed_step(), Some("set branch protection"));
    assert!(err.to_string().contains("Not Found (404 Not Found)"));
    assert_eq!(api.requests().len(), 1);
}

proptest! {
    #[test]
    fn test_resolve_repository_accepts_well_formed_names(
        owner in "[A-Za-z0-9-]{1,39}",
        name in "[A-Za-z0-9._-]{1,100}",
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let context = FakeContext::without_repository();
        let argument = format!("{}/{}", owner, name);

        let repo = runtime
            .block_on(resolve_repository(Some(argument.as_str()), &context))
            .unwrap();

        prop_assert_eq!(repo.owner(), owner.as_str());
        prop_assert_eq!(repo.name(), name.as_str());
        prop_assert_eq!(context.lookups(), 0);
    }

    #[test]
    fn test_resolve_repository_rejects_extra_separators(
        parts in proptest::collection::vec("[a-z]{1,8}", 3..5),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let context = FakeContext::with_repository("octo", "project");
        let argument = parts.join("/");

        let result = runtime.block_on(resolve_repository(Some(argument.as_str()), &context));

        prop_assert!(matches!(result, Err(VibeError::InvalidRepository(_))));
        prop_assert_eq!(context.lookups(), 0);
    }
}
