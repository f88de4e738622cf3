pub mod run;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jsgate")]
#[command(
    author,
    version,
    about = "Fail-fast CI gate orchestrator for JavaScript projects (eslint, Flow, Jest)"
)]
pub struct Cli {
    /// Worker count forwarded to the Jest step
    #[arg(long = "maxWorkers", value_name = "N")]
    pub max_workers: Option<u32>,

    /// Path to the Jest binary
    #[arg(long = "jestBinary", value_name = "PATH")]
    pub jest_binary: Option<PathBuf>,

    /// Path to the yarn binary
    #[arg(long = "yarnBinary", value_name = "PATH")]
    pub yarn_binary: Option<PathBuf>,

    /// Attempt budget per step (accepted for compatibility; steps run once)
    #[arg(long, value_name = "N")]
    pub retries: Option<u32>,

    /// Path to config file (jsgate.yaml in the working directory if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show the step plan without executing
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose/debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
