use crate::gcloud_harness::{ScriptedOracle, TOOL_NAME, allow, args, deny, harness};
use gcloud_guard::config::AccessConfig;
use gcloud_guard::error::LintError;
use gcloud_guard::gcloud::{Admission, AdmissionEngine};
use gcloud_guard::security::{DEFAULT_DENYLIST, Decision, DenialKind, Verdict};

async fn verdict(engine: &AdmissionEngine, command: &str) -> Verdict {
    match engine.admit(&args(command)).await.unwrap() {
        Admission::Verdict { verdict, .. } => verdict,
        Admission::Introspection(text) => panic!("unexpected introspection: {text}"),
    }
}

#[tokio::test]
async fn beta_denial_suggests_ga_equivalent() {
    let h = harness(
        &deny(&["beta compute instances list"]),
        ScriptedOracle::knowing(&["compute instances list", "beta compute instances list"]),
    );
    let v = verdict(&h.engine, "beta compute instances list").await;

    assert_eq!(v.decision(), Decision::Deny);
    let suggestion = v.suggestion().expect("GA suggestion");
    assert_eq!(suggestion.command.command_string(), "compute instances list");
    assert!(v.reason().contains("`gcloud compute instances list`"));
    assert_eq!(
        h.oracle.calls(),
        vec!["beta compute instances list", "compute instances list"]
    );
}

#[tokio::test]
async fn alpha_denial_tries_ga_before_beta() {
    let h = harness(
        &deny(&["alpha compute instances list", "beta compute instances list"]),
        ScriptedOracle::knowing(&[
            "compute instances list",
            "alpha compute instances list",
            "beta compute instances list",
        ]),
    );
    let v = verdict(&h.engine, "alpha compute instances list").await;

    let suggestion = v.suggestion().expect("GA suggestion");
    assert_eq!(suggestion.command.command_string(), "compute instances list");
    assert_eq!(
        h.oracle.calls(),
        vec!["alpha compute instances list", "compute instances list"]
    );
}

#[tokio::test]
async fn alpha_denial_falls_back_to_beta_when_ga_does_not_exist() {
    let h = harness(
        &deny(&["alpha compute future-thing"]),
        ScriptedOracle::knowing(&[
            "alpha compute future-thing list",
            "beta compute future-thing list",
        ]),
    );
    let v = verdict(&h.engine, "alpha compute future-thing list --zone us-east1-b").await;

    let suggestion = v.suggestion().expect("beta suggestion");
    assert_eq!(
        suggestion.command.command_string(),
        "beta compute future-thing list --zone us-east1-b"
    );
    assert_eq!(h.oracle.call_count(), 3);
}

#[tokio::test]
async fn ga_deny_entry_covers_every_prerelease_variant() {
    let h = harness(
        &deny(&["compute instances delete"]),
        ScriptedOracle::knowing(&[
            "compute instances delete",
            "alpha compute instances delete",
            "beta compute instances delete",
            "preview compute instances delete",
        ]),
    );
    for prefix in ["", "alpha ", "beta ", "preview "] {
        let v = verdict(&h.engine, &format!("{prefix}compute instances delete vm-1")).await;
        assert_eq!(v.denial_kind(), Some(DenialKind::DenylistHit), "{prefix}");
        assert!(v.suggestion().is_none(), "{prefix}");
    }
}

#[tokio::test]
async fn denylist_text_enumerates_default_entries() {
    let h = harness(
        &AccessConfig::default(),
        ScriptedOracle::knowing(&["compute ssh"]),
    );
    let v = verdict(&h.engine, "compute ssh vm-1 --zone us-east1-b").await;

    assert_eq!(v.denial_kind(), Some(DenialKind::DenylistHit));
    assert!(v.reason().contains("permanent"));
    for entry in DEFAULT_DENYLIST {
        assert!(v.reason().contains(entry), "missing {entry}");
    }
}

#[tokio::test]
async fn allowlist_miss_is_denied_after_a_single_lint() {
    let h = harness(
        &allow(&["compute list"]),
        ScriptedOracle::knowing(&["compute create"]),
    );
    let v = verdict(&h.engine, "compute create").await;

    assert_eq!(v.denial_kind(), Some(DenialKind::AllowlistMiss));
    assert!(v.reason().contains(&format!("{TOOL_NAME} debug config")));
    assert_eq!(h.oracle.calls(), vec!["compute create"]);
    assert_eq!(h.runner.count(), 0);
}

#[tokio::test]
async fn allowlisted_commands_still_hit_the_default_denylist() {
    let h = harness(&allow(&["compute"]), ScriptedOracle::knowing(&["compute ssh"]));
    let v = verdict(&h.engine, "compute ssh vm-1").await;
    assert_eq!(v.denial_kind(), Some(DenialKind::DenylistHit));
}

#[tokio::test]
async fn allowlist_entries_match_on_word_boundaries() {
    let h = harness(
        &allow(&["app"]),
        ScriptedOracle::knowing(&["app deploy", "apphub applications list"]),
    );
    assert!(verdict(&h.engine, "app deploy").await.is_allowed());
    assert_eq!(
        verdict(&h.engine, "apphub applications list").await.denial_kind(),
        Some(DenialKind::AllowlistMiss)
    );
}

#[tokio::test]
async fn unparseable_command_is_denied_without_fallback() {
    let h = harness(
        &deny(&["beta compute instances list"]),
        ScriptedOracle::knowing(&["compute instances list"]),
    );
    let v = verdict(&h.engine, "beta compute instancez list").await;

    assert_eq!(v.denial_kind(), Some(DenialKind::SyntaxInvalid));
    assert!(v.reason().contains("Invalid choice"));
    assert!(v.reason().contains("Do not retry this exact command"));
    assert_eq!(h.oracle.call_count(), 1);
}

#[tokio::test]
async fn debug_config_skips_lint_and_lists_every_entry() {
    let entries = ["compute instances list", "storage buckets list", "beta run services list"];
    let h = harness(&allow(&entries), ScriptedOracle::default());

    let admission = h
        .engine
        .admit(&args(&format!("{TOOL_NAME} debug config")))
        .await
        .unwrap();
    let Admission::Introspection(text) = admission else {
        panic!("expected introspection");
    };
    for entry in entries {
        assert!(text.contains(entry), "missing {entry}");
    }
    assert_eq!(h.oracle.call_count(), 0);
}

#[tokio::test]
async fn oracle_failure_surfaces_as_error() {
    let h = harness(
        &AccessConfig::default(),
        ScriptedOracle::knowing(&["projects list"]).failing_on(&["projects list"]),
    );
    let err = h.engine.admit(&args("projects list")).await.unwrap_err();
    assert!(matches!(err, LintError::MalformedResponse(_)));
}
