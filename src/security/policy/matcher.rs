use crate::gcloud::normalize::CLI_NAME;
use crate::gcloud::track::{ReleaseTrack, split_track};

/// Prefix matcher over space-delimited command paths.
///
/// An entry matches a candidate when the candidate equals it or continues it
/// at a word boundary (`app` matches `app deploy`, never `apphub`). A GA entry
/// also matches the same path on any prerelease track, so denying
/// `compute ssh` denies `alpha compute ssh` and `beta compute ssh` too. The
/// reverse does not hold: a `beta ...` entry never matches the GA command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandMatcher {
    entries: Vec<String>,
}

impl CommandMatcher {
    /// Build from raw prefix strings. Entries may be space- or dot-delimited
    /// (`compute.instances.delete`); they are split on both, lowercased, and
    /// stripped of a leading `gcloud`. Empties and duplicates are skipped.
    /// Order of first appearance is kept.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<String> = Vec::new();
        for prefix in prefixes {
            let entry = normalize_entry(prefix.as_ref());
            if !entry.is_empty() && !entries.contains(&entry) {
                entries.push(entry);
            }
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.matching_entry(candidate).is_some()
    }

    /// First entry matching `candidate`, if any.
    pub fn matching_entry(&self, candidate: &str) -> Option<&str> {
        let candidate = normalize_entry(candidate);
        self.entries
            .iter()
            .find(|entry| entry_matches(entry, &candidate))
            .map(String::as_str)
    }
}

fn normalize_entry(raw: &str) -> String {
    let mut tokens: Vec<String> = raw
        .split(|c: char| c.is_whitespace() || c == '.')
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect();
    if tokens.first().is_some_and(|first| first == CLI_NAME) {
        tokens.remove(0);
    }
    tokens.join(" ")
}

fn prefix_matches(entry: &str, candidate: &str) -> bool {
    candidate
        .strip_prefix(entry)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(' '))
}

fn entry_matches(entry: &str, candidate: &str) -> bool {
    if prefix_matches(entry, candidate) {
        return true;
    }
    if split_track(entry).0 != ReleaseTrack::Ga {
        return false;
    }
    let (track, ga_candidate) = split_track(candidate);
    track.is_prerelease() && prefix_matches(entry, ga_candidate)
}
