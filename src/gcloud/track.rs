use serde::{Deserialize, Serialize};

/// Stability tier of a gcloud command variant.
///
/// GA has no prefix token; the others are selected by a leading `alpha`,
/// `beta`, or `preview` group.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReleaseTrack {
    #[default]
    #[strum(serialize = "GA")]
    Ga,
    Alpha,
    Beta,
    Preview,
}

impl ReleaseTrack {
    /// Parse a prerelease track token, ignoring ASCII case. GA has no token,
    /// so this never returns it.
    pub fn from_token(token: &str) -> Option<Self> {
        [Self::Alpha, Self::Beta, Self::Preview]
            .into_iter()
            .find(|track| track.token().is_some_and(|t| t.eq_ignore_ascii_case(token)))
    }

    /// The leading token selecting this track, if any.
    pub const fn token(self) -> Option<&'static str> {
        match self {
            Self::Ga => None,
            Self::Alpha => Some("alpha"),
            Self::Beta => Some("beta"),
            Self::Preview => Some("preview"),
        }
    }

    pub const fn is_prerelease(self) -> bool {
        !matches!(self, Self::Ga)
    }

    /// Tracks to try, in order, when a command on this track is denied.
    ///
    /// GA always comes first; beta is only reachable from alpha.
    pub const fn fallback_order(self) -> &'static [ReleaseTrack] {
        match self {
            Self::Alpha => &[Self::Ga, Self::Beta],
            Self::Beta => &[Self::Ga],
            Self::Ga | Self::Preview => &[],
        }
    }
}

/// Split a space-delimited command path into its track and the GA remainder.
///
/// `"beta compute instances list"` → `(Beta, "compute instances list")`;
/// a path with no track token is returned unchanged as GA.
pub fn split_track(path: &str) -> (ReleaseTrack, &str) {
    let (head, rest) = path.split_once(' ').unwrap_or((path, ""));
    match ReleaseTrack::from_token(head) {
        Some(track) => (track, rest.trim_start()),
        None => (ReleaseTrack::Ga, path),
    }
}
