//! Lexical path helpers shared by classification, grouping, and matching.

use std::path::{Component, Path, PathBuf};

/// Normalize a path lexically: drop `.` segments, fold `..` into the parent,
/// and strip trailing separators. The filesystem is never consulted.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // `..` of the root is the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(Component::ParentDir.as_os_str()),
            },
            Component::Normal(part) => normalized.push(part),
        }
    }
    normalized
}

/// Resolve `input` against `base` (absolute inputs stand on their own) and
/// normalize the result lexically.
pub fn resolve_in(base: &Path, input: &str) -> PathBuf {
    let input = Path::new(input);
    if input.is_absolute() {
        normalize_path(input)
    } else {
        normalize_path(&base.join(input))
    }
}

/// Render a path with forward-slash separators for matcher input.
#[cfg(not(windows))]
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Render a path with forward-slash separators for matcher input.
#[cfg(windows)]
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Forward-slash form of a raw pattern string.
#[cfg(not(windows))]
pub fn normalize_separators(pattern: &str) -> String {
    pattern.to_string()
}

/// Forward-slash form of a raw pattern string.
#[cfg(windows)]
pub fn normalize_separators(pattern: &str) -> String {
    pattern.replace('\\', "/")
}
