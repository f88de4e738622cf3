mod executor;
mod orchestrator;
mod step;

pub use executor::{ProcessExecutor, StepExecutor, StepOutput};
pub use orchestrator::{GateOutcome, Orchestrator, RunReport, StepResult};
pub use step::{CheckStep, StepCommand};
