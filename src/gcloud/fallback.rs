use super::lint::LintOracle;
use super::normalize::CommandInvocation;
use super::track::ReleaseTrack;
use crate::security::{AccessPolicy, Suggestion};
use tracing::{debug, warn};

/// Look for a permitted equivalent of a denied prerelease command.
///
/// `origin` is the track of the linted command path, which can differ from
/// the raw first token when global flags come first. GA is tried first; beta
/// only when starting from alpha. Each candidate is linted (never executed)
/// and must classify as allowed under the full policy. Oracle failures here
/// only skip the tier: the denial stands either way.
pub async fn find_alternative(
    oracle: &dyn LintOracle,
    policy: &AccessPolicy,
    invocation: &CommandInvocation,
    origin: ReleaseTrack,
) -> Option<Suggestion> {
    for &track in origin.fallback_order() {
        let candidate = invocation.with_track(track);
        let command = candidate.command_string();
        if command.is_empty() {
            continue;
        }

        let result = match oracle.lint(&command).await {
            Ok(result) => result,
            Err(e) => {
                warn!(%track, error = %e, "lint failed during release-track fallback");
                continue;
            }
        };

        let Some(path) = result.canonical_path() else {
            debug!(%track, "no equivalent command on this track");
            continue;
        };

        if !policy.classify(path).is_allowed() {
            debug!(%track, %path, "equivalent command is not permitted either");
            continue;
        }

        debug!(%track, %path, "found permitted equivalent");
        return Some(Suggestion {
            track,
            command: candidate,
            path: path.clone(),
        });
    }

    None
}
