mod matcher;
mod types;

pub use matcher::CommandMatcher;
pub use types::{Classification, Decision, DenialKind, Suggestion, Verdict};

use crate::config::AccessConfig;
use crate::error::ConfigError;
use crate::gcloud::normalize::CommandPath;
use std::fmt::Write as _;

/// Immutable allow/deny configuration consulted before any gcloud command runs.
///
/// At most one of allowlist or user denylist is configured. The default
/// denylist is always merged in and cannot be removed.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    allow: Option<CommandMatcher>,
    user_deny: CommandMatcher,
    deny: CommandMatcher,
    /// Non-blank entries exactly as configured, for `describe`.
    allow_listed: Vec<String>,
    deny_listed: Vec<String>,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::build(None, Vec::new())
    }
}

impl AccessPolicy {
    /// Build from config sections. Both lists configured is a conflict.
    pub fn from_config(access: &AccessConfig) -> Result<Self, ConfigError> {
        access.validate()?;
        Ok(Self::build(
            access.effective_allow().map(<[String]>::to_vec),
            access.effective_deny().to_vec(),
        ))
    }

    fn build(allow: Option<Vec<String>>, user_deny: Vec<String>) -> Self {
        let allow_listed = verbatim(allow.as_deref().unwrap_or_default());
        let deny_listed = verbatim(&user_deny);
        let user_deny = CommandMatcher::new(user_deny);
        let deny = CommandMatcher::new(
            crate::security::default_denied_commands()
                .iter()
                .chain(user_deny.entries()),
        );
        Self {
            allow: allow.map(CommandMatcher::new).filter(|m| !m.is_empty()),
            user_deny,
            deny,
            allow_listed,
            deny_listed,
        }
    }

    pub fn allowlist(&self) -> Option<&CommandMatcher> {
        self.allow.as_ref()
    }

    /// Effective denylist: defaults merged with user entries.
    pub fn denylist(&self) -> &CommandMatcher {
        &self.deny
    }

    /// Allowlist first (when configured), then denylist.
    pub fn classify(&self, path: &CommandPath) -> Classification {
        let candidate = path.as_string();
        if let Some(allow) = &self.allow
            && !allow.matches(&candidate)
        {
            return Classification::AllowlistMiss;
        }
        match self.deny.matching_entry(&candidate) {
            Some(entry) => Classification::DenylistHit {
                entry: entry.to_string(),
            },
            None => Classification::Allowed,
        }
    }

    /// Plain-text rendering of the effective configuration.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        if self.allow.is_some() {
            out.push_str("Mode: allowlist (only the commands below may run)\n");
            out.push_str("Allowed commands:\n");
            push_entries(&mut out, &self.allow_listed);
        } else if !self.user_deny.is_empty() {
            out.push_str("Mode: denylist (every command except the ones below may run)\n");
            out.push_str("Denied commands:\n");
            push_entries(&mut out, &self.deny_listed);
        } else {
            out.push_str("Mode: unrestricted (no allowlist or denylist configured)\n");
        }
        out.push_str("Always denied (default denylist):\n");
        push_entries(&mut out, crate::security::DEFAULT_DENYLIST);
        out
    }
}

fn verbatim(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| !entry.trim().is_empty())
        .cloned()
        .collect()
}

fn push_entries<S: AsRef<str>>(out: &mut String, entries: &[S]) {
    if entries.is_empty() {
        out.push_str("  (none)\n");
    }
    for entry in entries {
        let _ = writeln!(out, "  - {}", entry.as_ref());
    }
}
