use std::env;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Holds the directory the process started in and moves back there when
/// dropped, on every exit path including panics.
pub struct WorkdirGuard {
    original: PathBuf,
}

impl WorkdirGuard {
    pub fn acquire() -> io::Result<Self> {
        Ok(Self {
            original: env::current_dir()?,
        })
    }

    #[allow(dead_code)]
    pub fn original(&self) -> &Path {
        &self.original
    }
}

impl Drop for WorkdirGuard {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.original) {
            warn!(
                "Failed to restore working directory to {}: {}",
                self.original.display(),
                e
            );
        }
    }
}
