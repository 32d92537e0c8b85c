use crate::gcloud::normalize::{CommandInvocation, CommandPath};
use crate::gcloud::track::ReleaseTrack;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Decision {
    Allow,
    Deny,
}

/// Why a command was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DenialKind {
    /// The lint oracle could not parse the command. Not retryable as-is.
    SyntaxInvalid,
    /// An allowlist is configured and the command is not on it.
    AllowlistMiss,
    /// The command matches the (default or user) denylist.
    DenylistHit,
}

/// Result of checking a canonical command path against the access lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Allowed,
    AllowlistMiss,
    DenylistHit { entry: String },
}

impl Classification {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// A permitted command on another release track, offered after a denial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub track: ReleaseTrack,
    /// Full command, original positionals and flags included.
    pub command: CommandInvocation,
    pub path: CommandPath,
}

/// Terminal output of the admission engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Allowed {
        path: CommandPath,
    },
    Denied {
        kind: DenialKind,
        reason: String,
    },
    DeniedWithSuggestion {
        path: CommandPath,
        suggestion: Suggestion,
        reason: String,
    },
}

impl Verdict {
    pub fn decision(&self) -> Decision {
        match self {
            Self::Allowed { .. } => Decision::Allow,
            Self::Denied { .. } | Self::DeniedWithSuggestion { .. } => Decision::Deny,
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.decision() == Decision::Allow
    }

    pub fn denial_kind(&self) -> Option<DenialKind> {
        match self {
            Self::Allowed { .. } => None,
            Self::Denied { kind, .. } => Some(*kind),
            Self::DeniedWithSuggestion { .. } => Some(DenialKind::DenylistHit),
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            Self::Allowed { .. } => "allowed by access policy",
            Self::Denied { reason, .. } | Self::DeniedWithSuggestion { reason, .. } => reason,
        }
    }

    pub fn suggestion(&self) -> Option<&Suggestion> {
        match self {
            Self::DeniedWithSuggestion { suggestion, .. } => Some(suggestion),
            _ => None,
        }
    }
}
