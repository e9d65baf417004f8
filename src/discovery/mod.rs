//! Discovery layer: pattern classification, grouping, matching, walking.
//!
//! This module turns user-supplied path patterns into a deduplicated set of
//! absolute file paths:
//! - Pattern classification (literal file, literal directory, glob, missing)
//! - Grouping of globs by their static base directory
//! - Matcher compilation (full-path and prefix matching)
//! - Parallel per-base walks filtered by the configuration provider
//! - Reconciliation of patterns that matched nothing

pub mod classify;
pub mod find;
pub mod groups;
pub mod matcher;
mod reconcile;
pub mod walker;

pub use classify::PatternKind;
pub use find::find_files;
pub use groups::{GroupedPatterns, SearchGroup};
pub use matcher::CompiledMatcher;
pub use walker::{WalkEntry, WalkFilter, walk_files};
