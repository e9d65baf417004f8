//! Error types for file discovery.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for discovery operations.
pub type Result<T> = std::result::Result<T, DiscoveryError>;

/// Errors surfaced by [`find_files`](crate::find_files).
///
/// `NoFilesFound` and `AllFilesIgnored` carry the pattern exactly as the
/// user typed it and are only raised when unmatched patterns are treated as
/// errors. Everything else is a system failure passed through unchanged.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// A pattern produced nothing, and nothing ignored would have matched.
    #[error("No files matching the pattern '{pattern}' were found")]
    NoFilesFound {
        pattern: String,
        /// Whether glob interpretation of inputs was enabled; callers use
        /// this to suggest enabling it when a glob-looking pattern missed.
        glob_enabled: bool,
    },

    /// A pattern produced matches, every one of which was ignored.
    #[error("All files matched by '{pattern}' are ignored")]
    AllFilesIgnored { pattern: String },

    /// A pattern was classified as a glob but does not compile.
    #[error("Invalid search pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// The working directory handed to discovery was not absolute.
    #[error("Expected an absolute working directory, got: {}", .0.display())]
    RelativeCwd(PathBuf),

    /// Directory traversal failed.
    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    /// The configuration provider failed; the source is passed through
    /// unchanged.
    #[error("Configuration provider error: {0}")]
    Provider(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DiscoveryError {
    /// Wrap a provider-side failure for propagation through discovery.
    pub fn provider(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Box::new(source))
    }
}
