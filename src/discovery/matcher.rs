//! Compiled glob matchers: full-path matching plus prefix matching used to
//! prune directory descent.

use std::path::Path;

use globset::{GlobBuilder, GlobMatcher};

use crate::error::{DiscoveryError, Result};

/// A compiled relative glob pattern.
///
/// Compiled once per search group and shared across the whole walk.
/// [`matches`](CompiledMatcher::matches) answers "does this file match";
/// [`matches_prefix`](CompiledMatcher::matches_prefix) answers "could this
/// directory be an ancestor of a match".
#[derive(Debug)]
pub struct CompiledMatcher {
    pattern: String,
    negated: bool,
    full: GlobMatcher,
    prefixes: Vec<GlobMatcher>,
}

impl CompiledMatcher {
    /// Compile a base-relative, forward-slash pattern.
    ///
    /// A leading `!` negates the whole pattern. Dot files are matched like
    /// any other name; explicit patterns are expected to reach hidden files
    /// without the walker re-filtering them.
    pub fn new(pattern: &str) -> Result<Self> {
        let (negated, body) = match pattern.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, pattern),
        };
        let full = compile(pattern, body)?;
        let prefixes = if negated {
            Vec::new()
        } else {
            prefix_globs(pattern, body)?
        };
        Ok(Self {
            pattern: pattern.to_string(),
            negated,
            full,
            prefixes,
        })
    }

    /// The relative pattern this matcher was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Full match of a base-relative file path.
    pub fn matches(&self, path: &Path) -> bool {
        self.negated ^ self.full.is_match(path)
    }

    /// Whether `path`, a base-relative directory, could be an ancestor of a
    /// matching file. A negated pattern admits every directory: its matches
    /// can live anywhere.
    pub fn matches_prefix(&self, path: &Path) -> bool {
        if self.negated {
            return true;
        }
        self.prefixes.iter().any(|prefix| prefix.is_match(path))
    }
}

fn compile(original: &str, body: &str) -> Result<GlobMatcher> {
    GlobBuilder::new(body)
        .literal_separator(true)
        .backslash_escape(true)
        .empty_alternates(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| DiscoveryError::InvalidPattern {
            pattern: original.to_string(),
            source,
        })
}

/// One glob per leading segment run. A directory at depth `d` is a viable
/// ancestor when the first `d` segments match it. A `**` segment admits
/// every deeper directory, so compilation stops there; the final segment
/// names a file and is only included when it is itself `**`.
fn prefix_globs(original: &str, body: &str) -> Result<Vec<GlobMatcher>> {
    let segments: Vec<&str> = body.split('/').collect();
    let mut globs = Vec::new();
    for end in 1..=segments.len() {
        let recursive = segments[end - 1] == "**";
        if end == segments.len() && !recursive {
            break;
        }
        globs.push(compile(original, &segments[..end].join("/"))?);
        if recursive {
            break;
        }
    }
    Ok(globs)
}
