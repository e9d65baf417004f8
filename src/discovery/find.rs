//! The discovery entry point: classify, group, walk groups in parallel,
//! reconcile unmatched patterns, merge and deduplicate.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::discovery::groups::{self, SearchGroup};
use crate::discovery::matcher::CompiledMatcher;
use crate::discovery::reconcile;
use crate::discovery::walker::{self, WalkEntry, WalkFilter};
use crate::error::{DiscoveryError, Result};
use crate::options::FindOptions;
use crate::provider::ConfigProvider;

/// Resolve `patterns` to a deduplicated set of absolute file paths.
///
/// Literal files are returned as given; literal directories and globs are
/// walked under their base directory, with the configuration provider
/// deciding which directories are skipped and which files carry a
/// configuration. Walks of distinct bases run in parallel.
///
/// Ordering of the returned list is unspecified; callers must not rely on
/// it. When several groups fail, the error comes from the first failing
/// group in walk-launch order, and within it from the first unmatched
/// pattern.
pub fn find_files<P: ConfigProvider>(
    patterns: &[String],
    options: &FindOptions,
    provider: &P,
) -> Result<Vec<PathBuf>> {
    options.validate()?;

    let grouped = groups::group_patterns(patterns, options);

    if options.error_on_unmatched_pattern()
        && let Some(missing) = grouped.missing_patterns.first()
    {
        return Err(DiscoveryError::NoFilesFound {
            pattern: missing.clone(),
            glob_enabled: options.glob_input_paths(),
        });
    }

    let groups: Vec<&SearchGroup> = grouped
        .groups
        .iter()
        .filter(|group| !group.patterns.is_empty())
        .collect();

    debug!(
        literal_files = grouped.literal_files.len(),
        groups = groups.len(),
        "resolved search patterns"
    );

    let outcomes: Vec<Result<GroupOutcome>> = groups
        .par_iter()
        .map(|group| walk_group(group, provider))
        .collect();

    let mut walked = Vec::with_capacity(outcomes.len());
    for (group, outcome) in groups.iter().zip(outcomes) {
        let outcome = outcome?;
        if options.error_on_unmatched_pattern()
            && let Some(unmatched) = outcome.unmatched.first()
        {
            return Err(reconcile::diagnose_unmatched(&group.base_path, unmatched)?);
        }
        walked.push(outcome.files);
    }

    let mut seen = FxHashSet::default();
    let mut files = Vec::new();
    for path in grouped
        .literal_files
        .into_iter()
        .chain(walked.into_iter().flatten())
    {
        if seen.insert(path.clone()) {
            files.push(path);
        }
    }

    Ok(files)
}

/// A pattern that produced no accepted file during its group's walk.
///
/// This record stays inside the crate; the orchestrator converts it into
/// one of the user-facing errors via the reconciler.
#[derive(Debug)]
pub(crate) struct UnmatchedPattern {
    pub relative: String,
    pub raw: String,
}

struct GroupOutcome {
    files: Vec<PathBuf>,
    unmatched: Vec<UnmatchedPattern>,
}

fn walk_group<P: ConfigProvider>(group: &SearchGroup, provider: &P) -> Result<GroupOutcome> {
    let relative = group.relative_patterns();
    let matchers = relative
        .iter()
        .map(|pattern| CompiledMatcher::new(pattern))
        .collect::<Result<Vec<_>>>()?;

    let mut filter = GroupFilter {
        base_path: &group.base_path,
        explicit_base: group.explicit_base,
        matchers: &matchers,
        provider,
        unmatched: (0..matchers.len()).collect(),
    };
    let files = walker::walk_files(&group.base_path, &mut filter)?;

    let mut indices: Vec<usize> = filter.unmatched.into_iter().collect();
    indices.sort_unstable();
    let unmatched = indices
        .into_iter()
        .map(|index| UnmatchedPattern {
            relative: relative[index].clone(),
            raw: group.raw_patterns[index].clone(),
        })
        .collect();

    Ok(GroupOutcome { files, unmatched })
}

/// The per-group walk filter: descent is gated by pattern prefixes and the
/// provider's directory ignores; files are gated by pattern matches and the
/// presence of a configuration.
struct GroupFilter<'a, P: ConfigProvider> {
    base_path: &'a Path,
    explicit_base: bool,
    matchers: &'a [CompiledMatcher],
    provider: &'a P,
    /// Indices of matchers that have not accepted a file yet. Once empty,
    /// file matching short-circuits on the first hit.
    unmatched: FxHashSet<usize>,
}

impl<P: ConfigProvider> WalkFilter for GroupFilter<'_, P> {
    fn enter_directory(&mut self, entry: &WalkEntry<'_>) -> Result<bool> {
        if entry.depth == 0 {
            // A base the user named directly is walked no matter what the
            // provider thinks of it.
            if self.explicit_base {
                return Ok(true);
            }
            self.provider.load_config_for_directory(self.base_path)?;
            return Ok(!self.provider.is_directory_ignored(self.base_path)?);
        }

        if !self
            .matchers
            .iter()
            .any(|matcher| matcher.matches_prefix(entry.relative_path))
        {
            trace!(
                path = %entry.relative_path.display(),
                "pruned: no pattern matches below"
            );
            return Ok(false);
        }

        let absolute = self.base_path.join(entry.relative_path);
        self.provider.load_config_for_directory(&absolute)?;
        if self.provider.is_directory_ignored(&absolute)? {
            trace!(path = %absolute.display(), "pruned: ignored by configuration");
            return Ok(false);
        }
        Ok(true)
    }

    fn yield_file(&mut self, entry: &WalkEntry<'_>) -> Result<bool> {
        let absolute = self.base_path.join(entry.relative_path);
        self.provider.load_config_for_file(&absolute)?;
        let config_present = self.provider.get_config(&absolute)?.is_some();

        let matched = if self.unmatched.is_empty() {
            self.matchers
                .iter()
                .any(|matcher| matcher.matches(entry.relative_path))
        } else {
            let mut matched = false;
            for (index, matcher) in self.matchers.iter().enumerate() {
                if matcher.matches(entry.relative_path) && config_present {
                    self.unmatched.remove(&index);
                    matched = true;
                }
            }
            matched
        };

        if matched && config_present {
            trace!(path = %absolute.display(), "accepted");
            return Ok(true);
        }
        Ok(false)
    }
}
