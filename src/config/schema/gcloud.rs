use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_binary() -> String {
    if cfg!(windows) {
        "gcloud.cmd".into()
    } else {
        "gcloud".into()
    }
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_max_output_bytes() -> usize {
    1_048_576
}

fn default_tool_name() -> String {
    "gcloud-mcp".into()
}

/// `[gcloud]` section: how the CLI is located and invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcloudConfig {
    /// Program name or path; `~` is expanded.
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Applies to lint calls and to command execution.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Per-stream cap on captured output.
    #[serde(default = "default_max_output_bytes")]
    pub max_output_bytes: usize,

    /// First token of the `<tool_name> debug config` introspection command.
    #[serde(default = "default_tool_name")]
    pub tool_name: String,
}

impl Default for GcloudConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            timeout_secs: default_timeout_secs(),
            max_output_bytes: default_max_output_bytes(),
            tool_name: default_tool_name(),
        }
    }
}

impl GcloudConfig {
    pub fn resolved_binary(&self) -> String {
        shellexpand::tilde(&self.binary).to_string()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.binary.trim().is_empty() {
            errors.push("gcloud.binary cannot be empty".to_string());
        }
        if self.timeout_secs == 0 {
            errors.push("gcloud.timeout_secs must be > 0".to_string());
        }
        if self.max_output_bytes == 0 {
            errors.push("gcloud.max_output_bytes must be > 0".to_string());
        }
        if self.tool_name.trim().is_empty() || self.tool_name.contains(char::is_whitespace) {
            errors.push("gcloud.tool_name must be a single non-empty token".to_string());
        }
        errors
    }
}
