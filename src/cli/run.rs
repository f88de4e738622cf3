use crate::cli::Cli;
use crate::config::Config;
use crate::gate::{CheckStep, Orchestrator};
use crate::workdir::WorkdirGuard;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};

pub async fn execute(args: Cli) -> anyhow::Result<ExitCode> {
    // Load config and apply CLI overrides
    let mut config = Config::load_or_default(args.config.as_deref())?;

    if let Some(max_workers) = args.max_workers {
        config.max_workers = max_workers;
    }
    if let Some(retries) = args.retries {
        config.retries = retries;
    }
    if let Some(jest_binary) = args.jest_binary {
        config.jest_binary = jest_binary;
    }
    if let Some(yarn_binary) = args.yarn_binary {
        config.yarn_binary = yarn_binary;
    }

    config.validate()?;

    if args.dry_run {
        print_step_plan(&config);
        return Ok(ExitCode::SUCCESS);
    }

    // Child scripts share this directory; the caller's shell gets it back
    // on every exit path.
    let _workdir = WorkdirGuard::acquire()?;
    if config.root != Path::new(".") {
        std::env::set_current_dir(&config.root)?;
    }

    let orchestrator = Orchestrator::new(config);
    let report = orchestrator.run().await;

    info!(
        "Gate {} in {:.1}s after {} of {} steps",
        report.outcome,
        report.total_duration.as_secs_f64(),
        report.steps.len(),
        CheckStep::SEQUENCE.len()
    );

    if report.outcome.exit_code() != 0 {
        error!("Gate {}", report.outcome);
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_step_plan(config: &Config) {
    println!("\n=== Gate Plan ===\n");
    println!("Root: {}", config.root.display());
    println!("maxWorkers: {}", config.max_workers);
    println!("retries: {}", config.retries);

    println!("\nSteps, in order:");
    for step in CheckStep::SEQUENCE {
        println!("  - {}: {}", step.label(), step.command(config));
    }
    println!();
}
