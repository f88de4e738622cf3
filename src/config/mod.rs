mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::path::Path;

/// Config file picked up from the working directory when no --config is given.
pub const DEFAULT_CONFIG_FILE: &str = "jsgate.yaml";

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            max_workers: default_max_workers(),
            retries: default_retries(),
            jest_binary: default_jest_binary(),
            yarn_binary: default_yarn_binary(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the config: an explicit path must exist, the default path
    /// is used only when present, otherwise built-in defaults apply.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_workers == 0 {
            return Err(ConfigError::ZeroMaxWorkers);
        }
        if self.retries == 0 {
            return Err(ConfigError::ZeroRetries);
        }
        Ok(())
    }
}
