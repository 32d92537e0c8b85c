use crate::gcloud_harness::{ScriptedOracle, TOOL_NAME, allow, deny, harness};
use gcloud_guard::config::AccessConfig;
use gcloud_guard::tools::RUN_GCLOUD_COMMAND;
use serde_json::json;

#[tokio::test]
async fn allowed_command_runs_once_with_every_argument() {
    let h = harness(
        &AccessConfig::default(),
        ScriptedOracle::knowing(&["compute instances describe"]),
    );
    let result = h
        .registry
        .execute(
            RUN_GCLOUD_COMMAND,
            json!({
                "args": ["compute", "instances", "describe", "my-vm", "--zone", "us-central1-a"]
            }),
        )
        .await
        .unwrap();

    assert!(result.success);
    assert!(result.error.is_none());
    assert_eq!(
        h.runner.seen(),
        vec![vec![
            "compute".to_string(),
            "instances".into(),
            "describe".into(),
            "my-vm".into(),
            "--zone".into(),
            "us-central1-a".into(),
        ]]
    );
}

#[tokio::test]
async fn allowlist_miss_never_executes() {
    let h = harness(
        &allow(&["compute list"]),
        ScriptedOracle::knowing(&["compute create"]),
    );
    let result = h
        .registry
        .execute(RUN_GCLOUD_COMMAND, json!({"args": ["compute", "create"]}))
        .await
        .unwrap();

    assert!(!result.success);
    assert!(result.error.is_none());
    assert!(result.output.contains("allowlist"));
    assert_eq!(h.runner.count(), 0);
}

#[tokio::test]
async fn suggested_alternative_is_not_executed() {
    let h = harness(
        &deny(&["beta compute instances list"]),
        ScriptedOracle::knowing(&["compute instances list", "beta compute instances list"]),
    );
    let result = h
        .registry
        .execute(
            RUN_GCLOUD_COMMAND,
            json!({"args": ["beta", "compute", "instances", "list"]}),
        )
        .await
        .unwrap();

    assert!(!result.success);
    assert!(result.output.contains("Retry with that command"));
    assert_eq!(h.runner.count(), 0);
}

#[tokio::test]
async fn oracle_failure_sets_the_error_flag() {
    let h = harness(
        &AccessConfig::default(),
        ScriptedOracle::knowing(&["projects list"]).failing_on(&["projects list"]),
    );
    let result = h
        .registry
        .execute(RUN_GCLOUD_COMMAND, json!({"args": ["projects", "list"]}))
        .await
        .unwrap();

    assert!(!result.success);
    assert!(result.error.is_some());
    assert_eq!(h.runner.count(), 0);
}

#[tokio::test]
async fn debug_config_through_the_tool() {
    let h = harness(&deny(&["sql instances delete"]), ScriptedOracle::default());
    let result = h
        .registry
        .execute(
            RUN_GCLOUD_COMMAND,
            json!({"args": [TOOL_NAME, "debug", "config"]}),
        )
        .await
        .unwrap();

    assert!(result.success);
    assert!(result.output.contains("sql instances delete"));
    assert_eq!(h.oracle.call_count(), 0);
    assert_eq!(h.runner.count(), 0);
}
