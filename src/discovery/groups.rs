//! Grouping patterns by their static base directory.
//!
//! Every glob shares a walk with the other globs rooted at the same base,
//! so the tree under each base is read exactly once.

use std::path::PathBuf;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::discovery::classify::{self, PatternKind};
use crate::options::FindOptions;
use crate::paths;

/// Patterns sharing one base directory, walked as a unit.
#[derive(Debug)]
pub struct SearchGroup {
    /// Absolute, normalized root of this group's walk.
    pub base_path: PathBuf,
    /// Absolute forward-slash patterns rooted at `base_path`; index-aligned
    /// with `raw_patterns`.
    pub patterns: Vec<String>,
    /// The patterns exactly as the user typed them.
    pub raw_patterns: Vec<String>,
    /// Whether the user named `base_path` itself on the command line, as
    /// opposed to it being derived from a glob's static prefix.
    pub explicit_base: bool,
}

impl SearchGroup {
    fn new(base_path: PathBuf) -> Self {
        Self {
            base_path,
            patterns: Vec::new(),
            raw_patterns: Vec::new(),
            explicit_base: false,
        }
    }

    fn push_pattern(&mut self, pattern: String, raw: String) {
        self.patterns.push(pattern);
        self.raw_patterns.push(raw);
    }

    /// The group's patterns re-expressed relative to `base_path`, in
    /// forward-slash form; index-aligned with `patterns`.
    pub fn relative_patterns(&self) -> Vec<String> {
        let base = paths::to_forward_slashes(&self.base_path);
        self.patterns
            .iter()
            .map(|pattern| {
                pattern
                    .strip_prefix(&base)
                    .map(|rest| rest.trim_start_matches('/'))
                    .unwrap_or(pattern)
                    .to_string()
            })
            .collect()
    }
}

/// Outcome of classifying and grouping every user pattern.
#[derive(Debug, Default)]
pub struct GroupedPatterns {
    /// Files the user named directly; they bypass the walk entirely.
    pub literal_files: Vec<PathBuf>,
    /// Search groups in creation order. The pre-seeded working-directory
    /// group may end up empty; callers filter it out.
    pub groups: Vec<SearchGroup>,
    /// Raw patterns that neither resolved on disk nor read as globs.
    pub missing_patterns: Vec<String>,
}

/// Classify each pattern and bucket globs by static prefix.
///
/// A literal directory becomes a `**` pattern rooted at itself: the user
/// chose that directory, so no ancestor's configuration may block descent
/// into it.
pub fn group_patterns(patterns: &[String], options: &FindOptions) -> GroupedPatterns {
    let mut grouped = GroupedPatterns::default();
    let mut index: FxHashMap<PathBuf, usize> = FxHashMap::default();

    // Seed the working-directory group so cwd-based globs share one walk.
    ensure_group(&mut grouped.groups, &mut index, options.cwd().to_path_buf());

    for raw in patterns {
        match classify::classify(raw, options) {
            PatternKind::LiteralFile(path) => {
                trace!(pattern = %raw, "resolved to a literal file");
                grouped.literal_files.push(path);
            }
            PatternKind::LiteralDirectory(path) => {
                let pattern = join_pattern(&paths::to_forward_slashes(&path), "**");
                let slot = ensure_group(&mut grouped.groups, &mut index, path);
                let group = &mut grouped.groups[slot];
                group.explicit_base = true;
                group.push_pattern(pattern, raw.clone());
            }
            PatternKind::Glob { normalized } => {
                let (prefix, remainder) = split_static_prefix(&normalized);
                let base_path = paths::resolve_in(options.cwd(), prefix);
                let pattern = join_pattern(&paths::to_forward_slashes(&base_path), remainder);
                let slot = ensure_group(&mut grouped.groups, &mut index, base_path);
                grouped.groups[slot].push_pattern(pattern, raw.clone());
            }
            PatternKind::Missing => {
                trace!(pattern = %raw, "pattern did not resolve");
                grouped.missing_patterns.push(raw.clone());
            }
        }
    }

    grouped
}

fn ensure_group(
    groups: &mut Vec<SearchGroup>,
    index: &mut FxHashMap<PathBuf, usize>,
    base_path: PathBuf,
) -> usize {
    if let Some(&slot) = index.get(&base_path) {
        return slot;
    }
    let slot = groups.len();
    index.insert(base_path.clone(), slot);
    groups.push(SearchGroup::new(base_path));
    slot
}

/// Split a normalized pattern into its static prefix (the longest leading
/// run of glob-free segments) and the glob remainder.
fn split_static_prefix(pattern: &str) -> (&str, &str) {
    let mut prefix_end = 0;
    let mut offset = 0;
    for segment in pattern.split('/') {
        if classify::is_glob_pattern(segment) {
            break;
        }
        prefix_end = offset + segment.len();
        offset = prefix_end + 1;
    }
    (
        &pattern[..prefix_end],
        pattern[prefix_end..].trim_start_matches('/'),
    )
}

fn join_pattern(base: &str, relative: &str) -> String {
    if base.ends_with('/') {
        format!("{base}{relative}")
    } else {
        format!("{base}/{relative}")
    }
}
