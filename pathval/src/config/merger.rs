//! Configuration merging and precedence handling.

use crate::config::schema::FileSystemConfig;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathval::config::{ConfigMerger, FileSystemConfig};
///
/// let low = FileSystemConfig { home_directory: Some("/low".to_string()), ..Default::default() };
/// let high = FileSystemConfig { home_directory: Some("/high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.home_directory, Some("/high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configurations given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: &[FileSystemConfig]) -> FileSystemConfig {
        let mut result = FileSystemConfig::default();
        for source in sources {
            Self::merge_into(&mut result, source);
        }
        result
    }

    /// Merge source config into target; every `Some` in source wins.
    pub fn merge_into(target: &mut FileSystemConfig, source: &FileSystemConfig) {
        if source.path_separator.is_some() {
            target.path_separator = source.path_separator;
        }

        if source.case_sensitive.is_some() {
            target.case_sensitive = source.case_sensitive;
        }

        if source.home_directory.is_some() {
            target.home_directory.clone_from(&source.home_directory);
        }

        if source.current_directory.is_some() {
            target.current_directory.clone_from(&source.current_directory);
        }
    }
}
