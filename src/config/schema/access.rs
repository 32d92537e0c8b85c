use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// `[access]` section: which gcloud commands the agent may run.
///
/// Entries are command-path prefixes such as `"compute instances list"` or
/// `"storage"`. `allow` and `deny` are mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deny: Option<Vec<String>>,
}

impl AccessConfig {
    /// Allowlist, if one is configured and non-empty.
    pub fn effective_allow(&self) -> Option<&[String]> {
        self.allow.as_deref().filter(|entries| has_entries(entries))
    }

    /// User denylist (possibly empty).
    pub fn effective_deny(&self) -> &[String] {
        self.deny.as_deref().unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.effective_allow().is_some() && has_entries(self.effective_deny()) {
            return Err(ConfigError::Conflict);
        }
        Ok(())
    }
}

fn has_entries(entries: &[String]) -> bool {
    entries.iter().any(|entry| !entry.trim().is_empty())
}
