//! Directory walking with pluggable descent and yield filters.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// One entry surfaced during a walk, in base-relative form.
#[derive(Debug)]
pub struct WalkEntry<'a> {
    /// Path relative to the walk's base; empty for the base itself.
    pub relative_path: &'a Path,
    /// Whether the entry is a directory.
    pub is_directory: bool,
    /// Component count below the base; 0 for the base itself.
    pub depth: usize,
}

/// Capability interface consulted during a walk.
///
/// `enter_directory` runs for every directory, the base included, before
/// any of its children are surfaced; returning `false` prunes the whole
/// subtree. `yield_file` decides whether a file is produced. Either filter
/// may fail, which aborts the walk and propagates the error.
pub trait WalkFilter {
    fn enter_directory(&mut self, entry: &WalkEntry<'_>) -> Result<bool>;
    fn yield_file(&mut self, entry: &WalkEntry<'_>) -> Result<bool>;
}

/// Walk `base_path` and collect the absolute paths of accepted files.
///
/// A base that does not exist walks as empty; every other traversal error
/// aborts the walk. Symlinks are not followed. Directory handles live only
/// as long as the iteration; they are released when the walk returns or
/// errors.
pub fn walk_files<F: WalkFilter>(base_path: &Path, filter: &mut F) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut entries = WalkDir::new(base_path).follow_links(false).into_iter();

    while let Some(entry) = entries.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                if error.depth() == 0 && is_not_found(&error) {
                    break;
                }
                return Err(error.into());
            }
        };
        let relative = entry.path().strip_prefix(base_path).unwrap_or(entry.path());
        let walk_entry = WalkEntry {
            relative_path: relative,
            is_directory: entry.file_type().is_dir(),
            depth: entry.depth(),
        };

        if walk_entry.is_directory {
            if !filter.enter_directory(&walk_entry)? {
                entries.skip_current_dir();
            }
        } else if entry.file_type().is_file() && filter.yield_file(&walk_entry)? {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_not_found(error: &walkdir::Error) -> bool {
    error
        .io_error()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}
