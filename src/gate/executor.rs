use crate::error::ExecError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tokio::process::Command;

use super::step::StepCommand;

#[derive(Debug)]
pub struct StepOutput {
    pub exit_code: i32,
    pub duration: Duration,
}

/// Spawns one check and reports its exit code. The gate never inspects
/// step output; the exit code is the whole verdict.
#[async_trait]
pub trait StepExecutor: Send + Sync {
    async fn execute(&self, command: &StepCommand) -> Result<StepOutput, ExecError>;
}

pub struct ProcessExecutor {
    pub working_dir: PathBuf,
}

#[async_trait]
impl StepExecutor for ProcessExecutor {
    async fn execute(&self, command: &StepCommand) -> Result<StepOutput, ExecError> {
        // Path-like names are spawned directly; plain names go through PATH
        let program_str = command.program.to_string_lossy();
        let mut cmd = if program_str.contains('/') || program_str.contains('\\') {
            Command::new(&command.program)
        } else {
            Command::new(program_str.as_ref())
        };

        cmd.args(&command.args).current_dir(&self.working_dir);

        let start = std::time::Instant::now();

        // Stdio stays inherited so the tool's own output streams through.
        let status = cmd.status().await.map_err(|e| ExecError::Spawn {
            program: command.program.clone(),
            source: e,
        })?;

        Ok(StepOutput {
            // None means the child died on a signal
            exit_code: status.code().unwrap_or(-1),
            duration: start.elapsed(),
        })
    }
}
