use std::path::PathBuf;
use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum GateError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Exec error: {0}")]
    Exec(#[from] ExecError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("maxWorkers must be at least 1")]
    ZeroMaxWorkers,

    #[error("retries must be at least 1")]
    ZeroRetries,
}

#[derive(Error, Debug)]
pub enum ExecError {
    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
