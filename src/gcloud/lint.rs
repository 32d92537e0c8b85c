//! External lint oracle.
//!
//! gcloud ships its own command parser behind
//! `gcloud meta lint-gcloud-commands`. It is the only authority on which
//! command groups and verbs exist, so admission control asks it instead of
//! carrying a copy of the grammar.

use super::normalize::{CLI_NAME, CommandPath};
use super::process::{SpawnFailure, decode_truncated, gcloud_command, output_with_timeout};
use crate::error::LintError;
use serde::Deserialize;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tracing::debug;

/// Diagnostics beyond this size are not useful to the agent.
const MAX_DIAGNOSTIC_BYTES: usize = 16 * 1024;

/// Outcome of linting one command string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintOutcome {
    /// The command parses; carries the groups + verb with arguments removed.
    Valid(CommandPath),
    /// The command does not parse.
    Invalid { diagnostic: String },
}

/// One lint call's result. Produced fresh per call, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintResult {
    pub outcome: LintOutcome,
    pub raw_output: String,
}

impl LintResult {
    pub fn valid(path: CommandPath, raw_output: impl Into<String>) -> Self {
        Self {
            outcome: LintOutcome::Valid(path),
            raw_output: raw_output.into(),
        }
    }

    pub fn invalid(diagnostic: impl Into<String>, raw_output: impl Into<String>) -> Self {
        Self {
            outcome: LintOutcome::Invalid {
                diagnostic: diagnostic.into(),
            },
            raw_output: raw_output.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.outcome, LintOutcome::Valid(_))
    }

    pub fn canonical_path(&self) -> Option<&CommandPath> {
        match &self.outcome {
            LintOutcome::Valid(path) => Some(path),
            LintOutcome::Invalid { .. } => None,
        }
    }
}

/// Authority deciding whether a command string is a real gcloud command.
pub trait LintOracle: Send + Sync {
    /// Lint `command` (no leading program name).
    fn lint<'a>(
        &'a self,
        command: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<LintResult, LintError>> + Send + 'a>>;
}

#[derive(Debug, Deserialize)]
struct LintEntry {
    #[serde(default)]
    command_string_no_args: Option<String>,
    success: bool,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    error_type: Option<String>,
}

/// Parse the JSON array printed by `gcloud meta lint-gcloud-commands`.
///
/// Only the first entry matters: one command string is linted per call.
pub fn parse_lint_output(stdout: &str) -> Result<LintResult, LintError> {
    let entries: Vec<LintEntry> = serde_json::from_str(stdout.trim())
        .map_err(|e| LintError::MalformedResponse(e.to_string()))?;
    let Some(entry) = entries.into_iter().next() else {
        return Err(LintError::EmptyResponse);
    };

    if entry.success {
        let canonical = entry
            .command_string_no_args
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                LintError::MalformedResponse(
                    "successful entry is missing command_string_no_args".into(),
                )
            })?;
        return Ok(LintResult::valid(CommandPath::parse(&canonical), stdout));
    }

    let message = entry
        .error_message
        .unwrap_or_else(|| "command did not parse".to_string());
    let diagnostic = match entry.error_type {
        Some(kind) if !kind.is_empty() => format!("{kind}: {message}"),
        _ => message,
    };
    Ok(LintResult::invalid(diagnostic, stdout))
}

/// Lint oracle backed by the real `gcloud` binary.
#[derive(Debug, Clone)]
pub struct GcloudLintOracle {
    binary: String,
    timeout: Duration,
}

impl GcloudLintOracle {
    pub fn new(binary: impl Into<String>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }

    async fn run(&self, command: &str) -> Result<LintResult, LintError> {
        let command_string = format!("{CLI_NAME} {command}");
        debug!(command = %command_string, "linting gcloud command");

        let cmd = gcloud_command(
            &self.binary,
            [
                "meta",
                "lint-gcloud-commands",
                "--command-string",
                command_string.as_str(),
            ],
        );
        let output = match output_with_timeout(cmd, self.timeout).await {
            Ok(output) => output,
            Err(SpawnFailure::Io(source)) => {
                return Err(LintError::Spawn {
                    binary: self.binary.clone(),
                    source,
                });
            }
            Err(SpawnFailure::TimedOut) => {
                return Err(LintError::TimedOut {
                    secs: self.timeout.as_secs(),
                });
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        if !output.status.success() {
            let stderr = decode_truncated(&output.stderr, MAX_DIAGNOSTIC_BYTES, "lint stderr");
            debug!(status = %output.status, "lint exited unsuccessfully");
            return Ok(LintResult::invalid(stderr.trim().to_string(), stdout));
        }

        parse_lint_output(&stdout)
    }
}

impl LintOracle for GcloudLintOracle {
    fn lint<'a>(
        &'a self,
        command: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<LintResult, LintError>> + Send + 'a>> {
        Box::pin(self.run(command))
    }
}
