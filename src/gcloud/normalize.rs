//! Command normalization.
//!
//! Two shapes of the same command flow through admission control:
//! - [`CommandInvocation`]: every token the caller supplied (groups, verb,
//!   positionals, flags), used for linting and execution.
//! - [`CommandPath`]: only the groups and the leaf verb, used for policy
//!   matching. Produced from the lint oracle's canonical output.

use super::track::{ReleaseTrack, split_track};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Program name that callers may (but should not) include as the first token.
pub const CLI_NAME: &str = "gcloud";

/// Full ordered token list of one requested command, without the program name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandInvocation {
    args: Vec<String>,
}

impl CommandInvocation {
    /// Build an invocation, dropping empty tokens and one leading `gcloud`.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args: Vec<String> = args
            .into_iter()
            .map(Into::into)
            .filter(|arg| !arg.trim().is_empty())
            .collect();
        if args.first().is_some_and(|first| first == CLI_NAME) {
            args.remove(0);
        }
        Self { args }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Space-joined command string, as handed to the lint oracle.
    pub fn command_string(&self) -> String {
        self.args.join(" ")
    }

    /// Index of the first token that is not a flag: where a track token sits.
    fn group_start(&self) -> usize {
        self.args
            .iter()
            .position(|arg| !arg.starts_with('-'))
            .unwrap_or(self.args.len())
    }

    /// Track selected by the first non-flag token, in any case.
    pub fn release_track(&self) -> ReleaseTrack {
        self.args
            .get(self.group_start())
            .and_then(|token| ReleaseTrack::from_token(token))
            .unwrap_or_default()
    }

    /// Same invocation re-targeted at `track`, keeping every positional and
    /// flag in place. Global flags ahead of the track token stay ahead of it.
    pub fn with_track(&self, track: ReleaseTrack) -> Self {
        let start = self.group_start();
        let (head, tail) = self.args.split_at(start);
        let rest = match self.release_track() {
            ReleaseTrack::Ga => tail,
            _ => &tail[1..],
        };
        let args = head
            .iter()
            .cloned()
            .chain(track.token().map(str::to_string))
            .chain(rest.iter().cloned())
            .collect();
        Self { args }
    }
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_string())
    }
}

/// Command groups plus leaf verb, lowercase, never containing flags or the
/// program name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct CommandPath {
    tokens: Vec<String>,
}

impl CommandPath {
    /// Parse a canonical command string such as the lint oracle's
    /// `command_string_no_args`.
    pub fn parse(canonical: &str) -> Self {
        let mut tokens: Vec<String> = canonical
            .split_whitespace()
            .filter(|token| !token.starts_with('-'))
            .map(str::to_lowercase)
            .collect();
        if tokens.first().is_some_and(|first| first == CLI_NAME) {
            tokens.remove(0);
        }
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn release_track(&self) -> ReleaseTrack {
        split_track(&self.as_string()).0
    }

    /// Space-joined form used by the access matchers.
    pub fn as_string(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for CommandPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl From<String> for CommandPath {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<CommandPath> for String {
    fn from(value: CommandPath) -> Self {
        value.as_string()
    }
}
