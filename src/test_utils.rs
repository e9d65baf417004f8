#[cfg(test)]
pub mod fixtures {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    use tempfile::TempDir;

    use crate::error::Result;
    use crate::provider::{ConfigProvider, StaticConfigProvider};

    /// Materialize `files` (relative paths) as an on-disk tree.
    pub fn create_tree(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for file in files {
            let path = dir.path().join(file);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, b"content").unwrap();
        }
        dir
    }

    /// Provider that records every query, for asserting what a walk touched.
    pub struct RecordingProvider {
        inner: StaticConfigProvider,
        pub config_queries: Mutex<Vec<PathBuf>>,
        pub ignore_queries: Mutex<Vec<PathBuf>>,
    }

    impl RecordingProvider {
        pub fn new(inner: StaticConfigProvider) -> Self {
            Self {
                inner,
                config_queries: Mutex::new(Vec::new()),
                ignore_queries: Mutex::new(Vec::new()),
            }
        }
    }

    impl ConfigProvider for RecordingProvider {
        type Config = ();

        fn load_config_for_directory(&self, path: &Path) -> Result<()> {
            self.inner.load_config_for_directory(path)
        }

        fn load_config_for_file(&self, path: &Path) -> Result<()> {
            self.inner.load_config_for_file(path)
        }

        fn is_directory_ignored(&self, path: &Path) -> Result<bool> {
            self.ignore_queries.lock().unwrap().push(path.to_path_buf());
            self.inner.is_directory_ignored(path)
        }

        fn get_config(&self, path: &Path) -> Result<Option<()>> {
            self.config_queries.lock().unwrap().push(path.to_path_buf());
            self.inner.get_config(path)
        }
    }
}
