use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Directory the checks run in and the shell is returned to.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Worker count forwarded to Jest. The gate itself never parallelizes;
    /// earlier checks must gate later ones.
    #[serde(default = "default_max_workers")]
    pub max_workers: u32,

    /// Attempt budget accepted for compatibility with existing CI
    /// invocations. Every step currently runs exactly once.
    #[serde(default = "default_retries")]
    pub retries: u32,

    #[serde(default = "default_jest_binary")]
    pub jest_binary: PathBuf,

    #[serde(default = "default_yarn_binary")]
    pub yarn_binary: PathBuf,
}
