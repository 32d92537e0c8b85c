use crate::app::status::render_status;
use crate::cli::commands::{Cli, Commands};
use anyhow::{Context, Result, bail};
use gcloud_guard::config::Config;
use gcloud_guard::gcloud::{
    Admission, AdmissionEngine, CommandInvocation, CommandRunner, GcloudLintOracle, GcloudRunner,
};
use gcloud_guard::security::{AccessPolicy, Verdict};
use gcloud_guard::tools::{self, RUN_GCLOUD_COMMAND, ToolRegistry};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Everything a command needs, wired from one validated config.
struct Services {
    policy: Arc<AccessPolicy>,
    engine: Arc<AdmissionEngine>,
    runner: Arc<GcloudRunner>,
    registry: ToolRegistry,
}

impl Services {
    fn build(config: &Config) -> Result<Self> {
        let policy = Arc::new(
            AccessPolicy::from_config(&config.access).context("Invalid access configuration")?,
        );
        let binary = config.gcloud.resolved_binary();
        let oracle = Arc::new(GcloudLintOracle::new(binary.clone(), config.gcloud.timeout()));
        let engine = Arc::new(AdmissionEngine::new(
            Arc::clone(&policy),
            oracle,
            config.gcloud.tool_name.clone(),
        ));
        let runner = Arc::new(GcloudRunner::new(
            binary,
            config.gcloud.timeout(),
            config.gcloud.max_output_bytes,
        ));
        let registry = tools::default_registry(Arc::clone(&engine), runner.clone());
        Ok(Self {
            policy,
            engine,
            runner,
            registry,
        })
    }
}

fn verdict_json(invocation: &CommandInvocation, verdict: &Verdict) -> serde_json::Value {
    json!({
        "command": invocation.command_string(),
        "decision": verdict.decision(),
        "denial_kind": verdict.denial_kind(),
        "reason": verdict.reason(),
        "suggestion": verdict.suggestion(),
    })
}

async fn run_check(services: &Services, args: &[String], as_json: bool) -> Result<()> {
    let admission = services.engine.admit(args).await?;
    let (invocation, verdict) = match admission {
        Admission::Introspection(text) => {
            println!("{text}");
            return Ok(());
        }
        Admission::Verdict {
            invocation,
            verdict,
        } => (invocation, verdict),
    };

    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&verdict_json(&invocation, &verdict))?
        );
    } else {
        println!("{}: gcloud {invocation}", verdict.decision());
        if !verdict.is_allowed() {
            println!("{}", verdict.reason());
        }
    }
    Ok(())
}

async fn run_tool(services: &Services, args: Vec<String>) -> Result<()> {
    let result = services
        .registry
        .execute(RUN_GCLOUD_COMMAND, json!({ "args": args }))
        .await?;

    print!("{}", result.output);
    if !result.output.is_empty() && !result.output.ends_with('\n') {
        println!();
    }
    if let Some(error) = &result.error {
        eprintln!("{error}");
    }
    if !result.success {
        bail!("gcloud command was not completed");
    }
    Ok(())
}

async fn run_doctor(config: &Config, services: &Services) -> Result<()> {
    let binary = config.gcloud.resolved_binary();
    info!(%binary, "checking gcloud binary");
    let out = services
        .runner
        .run(&CommandInvocation::new(["--version"]))
        .await
        .with_context(|| format!("Could not run `{binary} --version`"))?;
    if !out.success {
        bail!("`{binary} --version` failed: {}", out.stderr.trim());
    }
    println!("✓ {binary}");
    print!("{}", out.stdout);
    Ok(())
}

pub async fn dispatch(cli: Cli, config: Arc<Config>) -> Result<()> {
    let services = Services::build(&config)?;

    match cli.command {
        Commands::Check { json, args } => run_check(&services, &args, json).await,
        Commands::Run { args } => run_tool(&services, args).await,
        Commands::Config => {
            println!("{}", render_status(&config, &services.policy));
            Ok(())
        }
        Commands::Tools => {
            println!(
                "{}",
                serde_json::to_string_pretty(&services.registry.specs())?
            );
            Ok(())
        }
        Commands::Doctor => run_doctor(&config, &services).await,
    }
}
