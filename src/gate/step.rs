use crate::config::Config;
use std::fmt;
use std::path::PathBuf;

/// One named quality-gate check. Exit code zero gates progression to the
/// next step in [`CheckStep::SEQUENCE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckStep {
    /// yarn run lint
    Lint,

    /// yarn run flow-check-ios
    FlowCheckIos,

    /// yarn run flow-check-android
    FlowCheckAndroid,

    /// jest --maxWorkers=<n> --ci --reporters=default --reporters=jest-junit
    Jest,
}

impl CheckStep {
    /// Fixed gate order. Lint and type checks are cheaper than the test
    /// run, so they go first.
    pub const SEQUENCE: [CheckStep; 4] = [
        CheckStep::Lint,
        CheckStep::FlowCheckIos,
        CheckStep::FlowCheckAndroid,
        CheckStep::Jest,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CheckStep::Lint => "eslint",
            CheckStep::FlowCheckIos => "Flow check (iOS)",
            CheckStep::FlowCheckAndroid => "Flow check (Android)",
            CheckStep::Jest => "Jest",
        }
    }

    /// Diagnostic written to stdout when this step exits non-zero.
    pub fn failure_message(&self) -> &'static str {
        match self {
            CheckStep::Lint => "Failed to run eslint.",
            CheckStep::FlowCheckIos | CheckStep::FlowCheckAndroid => "Failed to run flow.",
            CheckStep::Jest => "Failed to run JavaScript tests.\nMost likely the code is broken.",
        }
    }

    /// Build the command line for this step from the resolved options.
    pub fn command(&self, config: &Config) -> StepCommand {
        match self {
            CheckStep::Lint => StepCommand::yarn_script(config, "lint"),
            CheckStep::FlowCheckIos => StepCommand::yarn_script(config, "flow-check-ios"),
            CheckStep::FlowCheckAndroid => StepCommand::yarn_script(config, "flow-check-android"),
            CheckStep::Jest => StepCommand {
                program: config.jest_binary.clone(),
                args: vec![
                    format!("--maxWorkers={}", config.max_workers),
                    "--ci".to_string(),
                    "--reporters=default".to_string(),
                    "--reporters=jest-junit".to_string(),
                ],
            },
        }
    }
}

impl fmt::Display for CheckStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A program plus its argument list, ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl StepCommand {
    fn yarn_script(config: &Config, script: &str) -> Self {
        Self {
            program: config.yarn_binary.clone(),
            args: vec!["run".to_string(), script.to_string()],
        }
    }
}

impl fmt::Display for StepCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
