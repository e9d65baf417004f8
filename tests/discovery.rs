//! End-to-end discovery scenarios over a real filesystem tree.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use lintwalk::{ConfigProvider, DiscoveryError, FindOptions, StaticConfigProvider, find_files};

/// The shared scenario tree:
///
/// ```text
/// a/x.js          (config present)
/// a/y.txt         (config absent)
/// b/z.js          (config present; b is ignored by the provider)
/// c/d/w.js        (config present)
/// c/d/.hidden.js  (config present)
/// ```
fn scenario_tree() -> (TempDir, StaticConfigProvider) {
    let dir = TempDir::new().unwrap();
    for file in ["a/x.js", "a/y.txt", "b/z.js", "c/d/w.js", "c/d/.hidden.js"] {
        let path = dir.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"content").unwrap();
    }
    let provider = StaticConfigProvider::new()
        .ignore_dir(dir.path().join("b"))
        .without_config(dir.path().join("a/y.txt"));
    (dir, provider)
}

fn patterns(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn as_set(files: Vec<PathBuf>) -> BTreeSet<PathBuf> {
    files.into_iter().collect()
}

fn expected(root: &Path, files: &[&str]) -> BTreeSet<PathBuf> {
    files.iter().map(|f| root.join(f)).collect()
}

mod resolution {
    use super::*;

    #[test]
    fn test_literal_file_is_returned() {
        let (tree, provider) = scenario_tree();
        let options = FindOptions::new(tree.path());

        let files = find_files(&patterns(&["a/x.js"]), &options, &provider).unwrap();
        assert_eq!(files, vec![tree.path().join("a/x.js")]);
    }

    #[test]
    fn test_recursive_glob_respects_ignores_and_reaches_hidden_files() {
        let (tree, provider) = scenario_tree();
        let options = FindOptions::new(tree.path());

        let files = find_files(&patterns(&["**/*.js"]), &options, &provider).unwrap();
        assert_eq!(
            as_set(files),
            expected(tree.path(), &["a/x.js", "c/d/w.js", "c/d/.hidden.js"])
        );
    }

    #[test]
    fn test_explicit_directory_overrides_its_own_ignore() {
        let (tree, provider) = scenario_tree();
        let options = FindOptions::new(tree.path());

        let files = find_files(&patterns(&["b"]), &options, &provider).unwrap();
        assert_eq!(files, vec![tree.path().join("b/z.js")]);
    }

    #[test]
    fn test_literal_file_without_config_is_returned() {
        let (tree, provider) = scenario_tree();
        let options = FindOptions::new(tree.path());

        let files = find_files(&patterns(&["a/y.txt"]), &options, &provider).unwrap();
        assert_eq!(files, vec![tree.path().join("a/y.txt")]);
    }

    #[test]
    fn test_static_prefix_outside_cwd_is_walked_under_that_prefix() {
        let (tree, provider) = scenario_tree();
        let options = FindOptions::new(tree.path().join("a"));

        let files = find_files(&patterns(&["../c/**/*.js"]), &options, &provider).unwrap();
        assert_eq!(
            as_set(files),
            expected(tree.path(), &["c/d/w.js", "c/d/.hidden.js"])
        );
    }
}

mod boundaries {
    use super::*;

    #[test]
    fn test_empty_patterns_return_empty_without_error() {
        let (tree, provider) = scenario_tree();
        let options = FindOptions::new(tree.path());

        let files = find_files(&[], &options, &provider).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_dot_descends_recursively_but_star_matches_only_top_level() {
        let (tree, provider) = scenario_tree();
        let options = FindOptions::new(tree.path()).with_error_on_unmatched_pattern(false);

        let dot = find_files(&patterns(&["."]), &options, &provider).unwrap();
        assert_eq!(
            as_set(dot),
            expected(tree.path(), &["a/x.js", "c/d/w.js", "c/d/.hidden.js"])
        );

        // The tree has no top-level files, only directories.
        let star = find_files(&patterns(&["*"]), &options, &provider).unwrap();
        assert!(star.is_empty());
    }

    #[test]
    fn test_results_are_absolute_and_deduplicated() {
        let (tree, provider) = scenario_tree();
        let options = FindOptions::new(tree.path());

        let files = find_files(
            &patterns(&["a/x.js", "a/**/*.js", "**/*.js"]),
            &options,
            &provider,
        )
        .unwrap();

        assert!(files.iter().all(|p| p.is_absolute()));
        let deduplicated: BTreeSet<_> = files.iter().collect();
        assert_eq!(deduplicated.len(), files.len());
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_glob_matching_nothing_raises_no_files_found() {
        let (tree, provider) = scenario_tree();
        let options = FindOptions::new(tree.path());

        let err = find_files(&patterns(&["**/*.py"]), &options, &provider).unwrap_err();
        assert!(matches!(
            err,
            DiscoveryError::NoFilesFound { pattern, glob_enabled: true } if pattern == "**/*.py"
        ));
    }

    #[test]
    fn test_glob_into_ignored_directory_raises_all_files_ignored() {
        let (tree, provider) = scenario_tree();
        let options = FindOptions::new(tree.path());

        let err = find_files(&patterns(&["b/**/*.js"]), &options, &provider).unwrap_err();
        assert!(matches!(
            err,
            DiscoveryError::AllFilesIgnored { pattern } if pattern == "b/**/*.js"
        ));
    }

    #[test]
    fn test_glob_with_missing_base_raises_no_files_found() {
        let (tree, provider) = scenario_tree();
        let options = FindOptions::new(tree.path());

        let err = find_files(&patterns(&["ghost/**/*.js"]), &options, &provider).unwrap_err();
        assert!(matches!(
            err,
            DiscoveryError::NoFilesFound { pattern, glob_enabled: true } if pattern == "ghost/**/*.js"
        ));
    }

    #[test]
    fn test_glob_disabled_turns_globs_into_missing_patterns() {
        let (tree, provider) = scenario_tree();
        let options = FindOptions::new(tree.path()).with_glob_input_paths(false);

        let err = find_files(&patterns(&["**/*.js"]), &options, &provider).unwrap_err();
        assert!(matches!(
            err,
            DiscoveryError::NoFilesFound { pattern, glob_enabled: false } if pattern == "**/*.js"
        ));
    }

    #[test]
    fn test_unmatched_errors_are_suppressed_when_disabled() {
        let (tree, provider) = scenario_tree();
        let options = FindOptions::new(tree.path()).with_error_on_unmatched_pattern(false);

        let files = find_files(
            &patterns(&["**/*.py", "missing.js", "b/**/*.js", "**/*.js"]),
            &options,
            &provider,
        )
        .unwrap();
        assert_eq!(
            as_set(files),
            expected(tree.path(), &["a/x.js", "c/d/w.js", "c/d/.hidden.js"])
        );
    }

    #[test]
    fn test_first_unmatched_pattern_wins_within_a_group() {
        let (tree, provider) = scenario_tree();
        let options = FindOptions::new(tree.path());

        // Both patterns share the cwd group and both go unmatched; the
        // error reports the one that appeared first.
        let err = find_files(&patterns(&["**/*.py", "**/*.rb"]), &options, &provider).unwrap_err();
        assert!(matches!(
            err,
            DiscoveryError::NoFilesFound { pattern, .. } if pattern == "**/*.py"
        ));
    }

    #[test]
    fn test_mixed_group_with_one_unmatched_pattern_still_errors() {
        let (tree, provider) = scenario_tree();
        let options = FindOptions::new(tree.path());

        let err = find_files(&patterns(&["**/*.js", "**/*.py"]), &options, &provider).unwrap_err();
        assert!(matches!(
            err,
            DiscoveryError::NoFilesFound { pattern, .. } if pattern == "**/*.py"
        ));
    }

    #[test]
    fn test_provider_failures_propagate_unchanged() {
        struct FailingProvider;

        impl ConfigProvider for FailingProvider {
            type Config = ();

            fn load_config_for_directory(&self, _path: &Path) -> lintwalk::Result<()> {
                Ok(())
            }

            fn load_config_for_file(&self, _path: &Path) -> lintwalk::Result<()> {
                Ok(())
            }

            fn is_directory_ignored(&self, _path: &Path) -> lintwalk::Result<bool> {
                Err(DiscoveryError::provider(std::io::Error::other(
                    "provider exploded",
                )))
            }

            fn get_config(&self, _path: &Path) -> lintwalk::Result<Option<()>> {
                Ok(Some(()))
            }
        }

        let (tree, _) = scenario_tree();
        let options = FindOptions::new(tree.path());

        let err = find_files(&patterns(&["**/*.js"]), &options, &FailingProvider).unwrap_err();
        assert!(matches!(err, DiscoveryError::Provider(_)));
        assert!(err.to_string().contains("provider exploded"));
    }
}

mod properties {
    use super::*;

    #[test]
    fn test_pattern_order_does_not_change_the_result_set() {
        let (tree, provider) = scenario_tree();
        let options = FindOptions::new(tree.path());

        let forward = find_files(
            &patterns(&["a/x.js", "**/*.js", "c/d/*.js"]),
            &options,
            &provider,
        )
        .unwrap();
        let backward = find_files(
            &patterns(&["c/d/*.js", "**/*.js", "a/x.js"]),
            &options,
            &provider,
        )
        .unwrap();
        assert_eq!(as_set(forward), as_set(backward));
    }

    #[test]
    fn test_discovery_is_idempotent_over_its_own_output() {
        let (tree, provider) = scenario_tree();
        let options = FindOptions::new(tree.path());

        let first = find_files(&patterns(&["**/*.js"]), &options, &provider).unwrap();
        let as_literals: Vec<String> = first
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        let second = find_files(&as_literals, &options, &provider).unwrap();

        assert_eq!(as_set(first), as_set(second));
    }
}
