//! The configuration provider seam, plus a static reference implementation.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rustc_hash::FxHashMap;

use crate::error::Result;

/// External collaborator answering which paths are ignored and which
/// configuration applies to a file.
///
/// Implementations must be idempotent and cache internally: the walker
/// queries freely during traversal and keeps no configuration cache of its
/// own. The `load_*` operations warm the cache for a path before the
/// corresponding query (`is_directory_ignored` for directories, `get_config`
/// for files) is consulted.
///
/// Provider failures are folded into a provider error via
/// [`DiscoveryError::provider`](crate::DiscoveryError::provider) and
/// propagated through discovery unchanged.
pub trait ConfigProvider: Sync {
    /// The aggregated configuration handed back for files.
    type Config;

    /// Warm the cache for a directory about to be queried or descended into.
    fn load_config_for_directory(&self, path: &Path) -> Result<()>;

    /// Warm the cache for a file about to be queried.
    fn load_config_for_file(&self, path: &Path) -> Result<()>;

    /// Whether descent into `path` is blocked by configuration.
    fn is_directory_ignored(&self, path: &Path) -> Result<bool>;

    /// The configuration applying to a file, or `None` when no
    /// configuration reaches it. Files without a configuration are excluded
    /// from discovery results unless passed literally.
    fn get_config(&self, path: &Path) -> Result<Option<Self::Config>>;
}

/// A provider backed by fixed path sets, for callers without per-directory
/// configuration files.
///
/// Directories under any registered ignore root report as ignored; every
/// file receives a unit configuration unless explicitly registered as
/// unconfigured. Ignore lookups memoize per path.
#[derive(Debug, Default)]
pub struct StaticConfigProvider {
    ignored_dirs: Vec<PathBuf>,
    unconfigured: Vec<PathBuf>,
    ignore_cache: Mutex<FxHashMap<PathBuf, bool>>,
}

impl StaticConfigProvider {
    /// Create a provider that ignores nothing and configures everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a directory (and everything beneath it) as ignored.
    pub fn ignore_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.ignored_dirs.push(path.into());
        self
    }

    /// Mark a file as having no applicable configuration.
    pub fn without_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.unconfigured.push(path.into());
        self
    }
}

impl ConfigProvider for StaticConfigProvider {
    type Config = ();

    fn load_config_for_directory(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn load_config_for_file(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn is_directory_ignored(&self, path: &Path) -> Result<bool> {
        // Unwrap: a poisoned lock means another query thread panicked
        let mut cache = self.ignore_cache.lock().unwrap();
        if let Some(&ignored) = cache.get(path) {
            return Ok(ignored);
        }
        let ignored = self.ignored_dirs.iter().any(|dir| path.starts_with(dir));
        cache.insert(path.to_path_buf(), ignored);
        Ok(ignored)
    }

    fn get_config(&self, path: &Path) -> Result<Option<()>> {
        let absent = self.unconfigured.iter().any(|p| p == path);
        Ok((!absent).then_some(()))
    }
}
