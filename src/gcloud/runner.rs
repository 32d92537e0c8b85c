use super::normalize::CommandInvocation;
use super::process::{SpawnFailure, decode_truncated, gcloud_command, output_with_timeout};
use crate::error::ExecError;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tracing::debug;

/// Captured result of one executed gcloud command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Executes commands that passed admission control.
pub trait CommandRunner: Send + Sync {
    fn run<'a>(
        &'a self,
        invocation: &'a CommandInvocation,
    ) -> Pin<Box<dyn Future<Output = Result<RunOutput, ExecError>> + Send + 'a>>;
}

/// Runs the real `gcloud` binary with the invocation's argument vector.
/// No shell is involved, so arguments are never re-parsed.
#[derive(Debug, Clone)]
pub struct GcloudRunner {
    binary: String,
    timeout: Duration,
    max_output_bytes: usize,
}

impl GcloudRunner {
    pub fn new(binary: impl Into<String>, timeout: Duration, max_output_bytes: usize) -> Self {
        Self {
            binary: binary.into(),
            timeout,
            max_output_bytes,
        }
    }

    async fn execute(&self, invocation: &CommandInvocation) -> Result<RunOutput, ExecError> {
        debug!(command = %invocation, "executing gcloud command");
        let cmd = gcloud_command(&self.binary, invocation.args());

        let output = match output_with_timeout(cmd, self.timeout).await {
            Ok(output) => output,
            Err(SpawnFailure::Io(source)) => {
                return Err(ExecError::Spawn {
                    binary: self.binary.clone(),
                    source,
                });
            }
            Err(SpawnFailure::TimedOut) => {
                return Err(ExecError::TimedOut {
                    secs: self.timeout.as_secs(),
                });
            }
        };

        Ok(RunOutput {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: decode_truncated(&output.stdout, self.max_output_bytes, "stdout"),
            stderr: decode_truncated(&output.stderr, self.max_output_bytes, "stderr"),
        })
    }
}

impl CommandRunner for GcloudRunner {
    fn run<'a>(
        &'a self,
        invocation: &'a CommandInvocation,
    ) -> Pin<Box<dyn Future<Output = Result<RunOutput, ExecError>> + Send + 'a>> {
        Box::pin(self.execute(invocation))
    }
}
