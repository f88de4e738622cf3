use crate::config::Config;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::executor::{ProcessExecutor, StepExecutor};
use super::step::CheckStep;

/// Synthetic exit code recorded when a step's binary cannot be launched
/// at all. A missing tool fails the gate the same way a failing tool does.
const SPAWN_FAILURE_CODE: i32 = 127;

#[derive(Debug)]
pub struct RunReport {
    pub outcome: GateOutcome,
    pub steps: Vec<StepResult>,
    pub total_duration: Duration,
}

#[derive(Debug)]
pub struct StepResult {
    pub step: CheckStep,
    pub exit_code: i32,
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Passed,
    Failed { step: CheckStep },
}

impl GateOutcome {
    /// Process exit code summarizing the run: 0 all passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            GateOutcome::Passed => 0,
            GateOutcome::Failed { .. } => 1,
        }
    }
}

impl fmt::Display for GateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateOutcome::Passed => write!(f, "passed"),
            GateOutcome::Failed { step } => write!(f, "failed at {}", step),
        }
    }
}

pub struct Orchestrator {
    config: Config,
    executor: Arc<dyn StepExecutor>,
}

impl Orchestrator {
    pub fn new(config: Config) -> Self {
        let executor = Arc::new(ProcessExecutor {
            working_dir: config.root.clone(),
        });
        Self { config, executor }
    }

    /// Substitute the process-spawning layer; sequencing stays identical.
    pub fn with_executor(config: Config, executor: Arc<dyn StepExecutor>) -> Self {
        Self { config, executor }
    }

    /// Run every step in order, stopping at the first non-zero exit code.
    pub async fn run(&self) -> RunReport {
        let start = std::time::Instant::now();
        let mut steps = Vec::new();

        println!("Executing JavaScript tests");

        for step in CheckStep::SEQUENCE {
            let command = step.command(&self.config);

            println!("\n>>>>> Test: {}\n", step.label());
            debug!("Running {}", command);

            let step_start = std::time::Instant::now();
            let exit_code = match self.executor.execute(&command).await {
                Ok(output) => output.exit_code,
                Err(e) => {
                    warn!("Could not execute {}: {}", step.label(), e);
                    SPAWN_FAILURE_CODE
                }
            };
            let duration = step_start.elapsed();

            info!(
                "Step {} exited with code {} in {:.1}s",
                step.label(),
                exit_code,
                duration.as_secs_f64()
            );

            steps.push(StepResult {
                step,
                exit_code,
                duration,
            });

            if exit_code != 0 {
                println!("{}", step.failure_message());
                return RunReport {
                    outcome: GateOutcome::Failed { step },
                    steps,
                    total_duration: start.elapsed(),
                };
            }
        }

        RunReport {
            outcome: GateOutcome::Passed,
            steps,
            total_duration: start.elapsed(),
        }
    }
}
