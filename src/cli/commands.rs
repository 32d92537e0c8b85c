use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `gcloud-guard` - admission control for agent-issued gcloud commands.
#[derive(Parser, Debug)]
#[command(name = "gcloud-guard")]
#[command(version)]
#[command(
    about = "Lint, filter and run gcloud commands on behalf of an AI agent.",
    long_about = None
)]
pub struct Cli {
    /// Config file (TOML, or JSON when it ends in .json). Defaults to ~/.gcloud-guard/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decide whether a command would be admitted, without running it
    Check {
        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,

        /// gcloud arguments (the leading `gcloud` is optional)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        args: Vec<String>,
    },

    /// Admit and run a command through the `run_gcloud_command` tool
    Run {
        /// gcloud arguments (the leading `gcloud` is optional)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        args: Vec<String>,
    },

    /// Show the effective allow and deny lists
    Config,

    /// Print the exposed tool specs as JSON
    Tools,

    /// Verify that the configured gcloud binary responds
    Doctor,
}
