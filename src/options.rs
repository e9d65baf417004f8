//! Discovery options and the validation gate in front of `find_files`.

use std::path::{Path, PathBuf};

use crate::error::{DiscoveryError, Result};
use crate::paths;

/// Options consumed by file discovery.
///
/// The working directory anchors relative patterns and is normalized at
/// construction time (no trailing separator, no `.`/`..` segments).
#[derive(Debug, Clone)]
pub struct FindOptions {
    cwd: PathBuf,
    glob_input_paths: bool,
    error_on_unmatched_pattern: bool,
}

impl FindOptions {
    /// Create options rooted at `cwd`, with glob interpretation enabled and
    /// unmatched patterns treated as errors.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: paths::normalize_path(&cwd.into()),
            glob_input_paths: true,
            error_on_unmatched_pattern: true,
        }
    }

    /// Set whether unresolved inputs may be interpreted as glob patterns.
    pub fn with_glob_input_paths(mut self, enabled: bool) -> Self {
        self.glob_input_paths = enabled;
        self
    }

    /// Set whether a pattern that matches no files is an error.
    pub fn with_error_on_unmatched_pattern(mut self, enabled: bool) -> Self {
        self.error_on_unmatched_pattern = enabled;
        self
    }

    /// The normalized working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Whether unresolved inputs may be interpreted as glob patterns.
    pub fn glob_input_paths(&self) -> bool {
        self.glob_input_paths
    }

    /// Whether a pattern that matches no files is an error.
    pub fn error_on_unmatched_pattern(&self) -> bool {
        self.error_on_unmatched_pattern
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.cwd.is_absolute() {
            return Err(DiscoveryError::RelativeCwd(self.cwd.clone()));
        }
        Ok(())
    }
}
