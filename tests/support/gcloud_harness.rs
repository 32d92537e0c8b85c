#![allow(dead_code)]

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use gcloud_guard::config::AccessConfig;
use gcloud_guard::error::{ExecError, LintError};
use gcloud_guard::gcloud::{
    AdmissionEngine, CommandInvocation, CommandPath, CommandRunner, LintOracle, LintResult,
    RunOutput,
};
use gcloud_guard::security::AccessPolicy;
use gcloud_guard::tools::{self, ToolRegistry};

pub const TOOL_NAME: &str = "gcloud-mcp";

/// Lint oracle that knows a fixed set of command paths. A command lints if
/// it starts with a known path at a word boundary; the path is its canonical
/// form, mimicking how gcloud strips positionals and flags.
#[derive(Default)]
pub struct ScriptedOracle {
    known: Vec<String>,
    broken: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedOracle {
    pub fn knowing(paths: &[&str]) -> Self {
        let mut known: Vec<String> = paths.iter().map(ToString::to_string).collect();
        // longest first so `compute instances list` wins over `compute instances`
        known.sort_by_key(|path| std::cmp::Reverse(path.len()));
        Self {
            known,
            ..Self::default()
        }
    }

    /// Commands that make the oracle itself fail.
    pub fn failing_on(mut self, commands: &[&str]) -> Self {
        self.broken = commands.iter().map(ToString::to_string).collect();
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }
}

impl LintOracle for ScriptedOracle {
    fn lint<'a>(
        &'a self,
        command: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<LintResult, LintError>> + Send + 'a>> {
        Box::pin(async move {
            self.calls
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .push(command.to_string());
            if self.broken.iter().any(|b| b == command) {
                return Err(LintError::MalformedResponse("scripted failure".into()));
            }
            let known = self
                .known
                .iter()
                .find(|path| command == path.as_str() || command.starts_with(&format!("{path} ")));
            Ok(match known {
                Some(path) => LintResult::valid(CommandPath::parse(path), ""),
                None => LintResult::invalid(
                    format!("UnknownCommandError: Invalid choice in `{command}`"),
                    "",
                ),
            })
        })
    }
}

/// Runner that records every execution instead of spawning gcloud.
#[derive(Default)]
pub struct CountingRunner {
    count: AtomicUsize,
    seen: Mutex<Vec<Vec<String>>>,
}

impl CountingRunner {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<Vec<String>> {
        self.seen
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl CommandRunner for CountingRunner {
    fn run<'a>(
        &'a self,
        invocation: &'a CommandInvocation,
    ) -> Pin<Box<dyn Future<Output = Result<RunOutput, ExecError>> + Send + 'a>> {
        Box::pin(async move {
            self.count.fetch_add(1, Ordering::SeqCst);
            self.seen
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .push(invocation.args().to_vec());
            Ok(RunOutput {
                success: true,
                exit_code: Some(0),
                stdout: format!("ran: {invocation}\n"),
                stderr: String::new(),
            })
        })
    }
}

pub fn list(entries: &[&str]) -> Option<Vec<String>> {
    Some(entries.iter().map(ToString::to_string).collect())
}

pub fn allow(entries: &[&str]) -> AccessConfig {
    AccessConfig {
        allow: list(entries),
        deny: None,
    }
}

pub fn deny(entries: &[&str]) -> AccessConfig {
    AccessConfig {
        allow: None,
        deny: list(entries),
    }
}

pub fn args(command: &str) -> Vec<String> {
    command.split_whitespace().map(str::to_string).collect()
}

pub struct Harness {
    pub oracle: Arc<ScriptedOracle>,
    pub runner: Arc<CountingRunner>,
    pub engine: Arc<AdmissionEngine>,
    pub registry: ToolRegistry,
}

pub fn harness(access: &AccessConfig, oracle: ScriptedOracle) -> Harness {
    let oracle = Arc::new(oracle);
    let runner = Arc::new(CountingRunner::default());
    let policy = Arc::new(AccessPolicy::from_config(access).expect("valid access config"));
    let engine = Arc::new(AdmissionEngine::new(policy, oracle.clone(), TOOL_NAME));
    let registry = tools::default_registry(Arc::clone(&engine), runner.clone());
    Harness {
        oracle,
        runner,
        engine,
        registry,
    }
}
