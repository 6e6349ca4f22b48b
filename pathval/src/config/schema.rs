//! Configuration schema definitions.
//!
//! This module defines the settings that shape a filesystem capability:
//! the component separator, a case-sensitivity override and optional
//! overrides for the home and current directories.

use serde::{Deserialize, Serialize};

/// Filesystem capability configuration.
///
/// Every field is optional; `None` means "use the platform default" and
/// lets lower-precedence sources fill the value in during merging.
///
/// # Examples
///
/// ```
/// use pathval::config::FileSystemConfig;
///
/// let config = FileSystemConfig {
///     home_directory: Some("/home/ada".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.path_separator, None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileSystemConfig {
    /// Character separating path components (default `/`).
    pub path_separator: Option<char>,

    /// Force case-sensitive (`true`) or case-insensitive (`false`) prefix
    /// matching instead of asking the platform.
    pub case_sensitive: Option<bool>,

    /// Directory `~` expands to, instead of the user's home directory.
    pub home_directory: Option<String>,

    /// Directory relative paths resolve against, instead of the process's
    /// working directory.
    pub current_directory: Option<String>,
}
