use std::path::PathBuf;

pub fn default_root() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_max_workers() -> u32 {
    1
}

pub fn default_retries() -> u32 {
    1
}

pub fn default_jest_binary() -> PathBuf {
    PathBuf::from("./node_modules/.bin/jest")
}

pub fn default_yarn_binary() -> PathBuf {
    // Plain name - resolved on PATH at spawn time
    PathBuf::from("yarn")
}
