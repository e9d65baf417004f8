pub mod discovery;
pub mod error;
pub mod options;
pub mod paths;
pub mod provider;

#[cfg(test)]
pub mod test_utils;

pub use discovery::{
    CompiledMatcher, GroupedPatterns, PatternKind, SearchGroup, WalkEntry, WalkFilter, find_files,
    walk_files,
};
pub use error::{DiscoveryError, Result};
pub use options::FindOptions;
pub use provider::{ConfigProvider, StaticConfigProvider};
