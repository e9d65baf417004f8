//! Second-pass diagnosis for patterns whose walk produced nothing.

use std::path::Path;

use tracing::debug;

use crate::discovery::find::UnmatchedPattern;
use crate::discovery::matcher::CompiledMatcher;
use crate::discovery::walker::{self, WalkEntry, WalkFilter};
use crate::error::{DiscoveryError, Result};

/// Re-walk `base_path` for a single unmatched pattern with configuration
/// disabled, to tell "nothing there" apart from "everything there is
/// ignored".
///
/// The first walk cannot answer this by itself: it prunes ignored
/// directories and skips unconfigured files, and it stops maintaining the
/// unmatched set as soon as that set empties, so by the time a pattern
/// finishes the walk unmatched the evidence is already gone.
pub(crate) fn diagnose_unmatched(
    base_path: &Path,
    pattern: &UnmatchedPattern,
) -> Result<DiscoveryError> {
    let matcher = CompiledMatcher::new(&pattern.relative)?;
    let mut probe = ProbeFilter {
        matcher: &matcher,
        found: false,
    };
    walker::walk_files(base_path, &mut probe)?;

    debug!(
        pattern = %pattern.raw,
        found_ignored = probe.found,
        "reconciled unmatched pattern"
    );
    if probe.found {
        Ok(DiscoveryError::AllFilesIgnored {
            pattern: pattern.raw.clone(),
        })
    } else {
        Ok(DiscoveryError::NoFilesFound {
            pattern: pattern.raw.clone(),
            glob_enabled: true,
        })
    }
}

/// Walks with the pattern-prefix descent filter alone and stops expanding
/// once a single match is found.
struct ProbeFilter<'a> {
    matcher: &'a CompiledMatcher,
    found: bool,
}

impl WalkFilter for ProbeFilter<'_> {
    fn enter_directory(&mut self, entry: &WalkEntry<'_>) -> Result<bool> {
        if self.found {
            return Ok(false);
        }
        if entry.depth == 0 {
            return Ok(true);
        }
        Ok(self.matcher.matches_prefix(entry.relative_path))
    }

    fn yield_file(&mut self, entry: &WalkEntry<'_>) -> Result<bool> {
        if !self.found && self.matcher.matches(entry.relative_path) {
            self.found = true;
        }
        Ok(false)
    }
}
