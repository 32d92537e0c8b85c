use super::types::{ToolResult, ToolSpec};
use std::future::Future;
use std::pin::Pin;

/// Core tool trait: one capability exposed to the calling agent.
pub trait Tool: Send + Sync {
    /// Tool name (used in agent function calling)
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON schema for parameters
    fn parameters_schema(&self) -> serde_json::Value;

    /// Execute the tool with given arguments. Malformed arguments are an
    /// `Err`; refusals and command failures are reported in the result.
    fn execute<'a>(
        &'a self,
        args: serde_json::Value,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + 'a>>;

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters_schema(),
        }
    }
}
