pub mod gcloud_run;
pub mod registry;
pub mod traits;
pub mod types;

use crate::gcloud::{AdmissionEngine, CommandRunner};
use std::sync::Arc;

pub use gcloud_run::{RUN_GCLOUD_COMMAND, RunGcloudCommandTool};
pub use registry::ToolRegistry;
pub use traits::Tool;
pub use types::{ToolResult, ToolSpec};

/// Registry with every tool this server exposes.
pub fn default_registry(
    engine: Arc<AdmissionEngine>,
    runner: Arc<dyn CommandRunner>,
) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(RunGcloudCommandTool::new(engine, runner)));
    registry
}
