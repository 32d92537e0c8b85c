use super::traits::Tool;
use super::types::ToolResult;
use crate::gcloud::{Admission, AdmissionEngine, CommandRunner};
use serde_json::json;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{error, warn};

pub const RUN_GCLOUD_COMMAND: &str = "run_gcloud_command";

/// Runs a gcloud command on behalf of the agent, after admission control.
pub struct RunGcloudCommandTool {
    engine: Arc<AdmissionEngine>,
    runner: Arc<dyn CommandRunner>,
}

impl RunGcloudCommandTool {
    pub fn new(engine: Arc<AdmissionEngine>, runner: Arc<dyn CommandRunner>) -> Self {
        Self { engine, runner }
    }

    fn parse_args(args: &serde_json::Value) -> anyhow::Result<Vec<String>> {
        let list = args
            .get("args")
            .and_then(|v| v.as_array())
            .ok_or_else(|| anyhow::anyhow!("Missing 'args' parameter"))?;
        list.iter()
            .map(|v| {
                v.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| anyhow::anyhow!("'args' must be a list of strings"))
            })
            .collect()
    }
}

impl Tool for RunGcloudCommandTool {
    fn name(&self) -> &str {
        RUN_GCLOUD_COMMAND
    }

    fn description(&self) -> &str {
        "Run a gcloud CLI command. Pass the arguments without the leading `gcloud`. \
         Commands are syntax-checked and filtered by the server's allow and deny lists \
         before they run."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "args": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "gcloud arguments, e.g. [\"compute\", \"instances\", \"list\"]"
                }
            },
            "required": ["args"]
        })
    }

    fn execute<'a>(
        &'a self,
        args: serde_json::Value,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + 'a>> {
        Box::pin(async move {
            let args = Self::parse_args(&args)?;

            let admission = match self.engine.admit(&args).await {
                Ok(admission) => admission,
                Err(e) => {
                    error!(error = %e, "gcloud lint failed");
                    return Ok(ToolResult::failed(format!(
                        "Could not validate the command: {e}"
                    )));
                }
            };

            let (invocation, verdict) = match admission {
                Admission::Introspection(text) => return Ok(ToolResult::ok(text)),
                Admission::Verdict {
                    invocation,
                    verdict,
                } => (invocation, verdict),
            };

            if !verdict.is_allowed() {
                return Ok(ToolResult::refused(verdict.reason()));
            }

            match self.runner.run(&invocation).await {
                Ok(out) if out.success => Ok(ToolResult::ok(out.stdout)),
                Ok(out) => {
                    let error = if out.stderr.trim().is_empty() {
                        match out.exit_code {
                            Some(code) => format!("gcloud exited with status {code}"),
                            None => "gcloud was terminated by a signal".to_string(),
                        }
                    } else {
                        out.stderr
                    };
                    Ok(ToolResult {
                        success: false,
                        output: out.stdout,
                        error: Some(error),
                    })
                }
                Err(e) => {
                    warn!(error = %e, "gcloud execution failed");
                    Ok(ToolResult::failed(e.to_string()))
                }
            }
        })
    }
}
