//! Configuration file loading.
//!
//! Configuration files are YAML documents matching
//! [`FileSystemConfig`](crate::config::FileSystemConfig).

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::FileSystemConfig;
use crate::error::{Error, Result};
use crate::path::PathValue;

/// Name of the per-user configuration file inside [`ConfigLoader::user_config_dir`].
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Loads configuration from YAML files and strings.
///
/// # Examples
///
/// ```
/// use pathval::config::ConfigLoader;
///
/// let config = ConfigLoader::from_yaml_str("home_directory: /home/ada\n").unwrap();
/// assert_eq!(config.home_directory.as_deref(), Some("/home/ada"));
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`/`PermissionDenied`/`Io` if the file cannot be read
    /// and `Configuration` if the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<FileSystemConfig> {
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::from_io(&PathValue::new(path.to_string_lossy()), e)
        })?;

        log::debug!("loaded configuration from {}", path.display());
        Self::from_yaml_str(&contents)
    }

    /// Parse a YAML configuration document.
    ///
    /// An empty document yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the YAML is invalid or has unknown fields.
    pub fn from_yaml_str(contents: &str) -> Result<FileSystemConfig> {
        if contents.trim().is_empty() {
            return Ok(FileSystemConfig::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Directory holding the per-user configuration (`~/.pathval`).
    ///
    /// Returns `None` if the home directory cannot be determined.
    #[must_use]
    pub fn user_config_dir() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(".pathval"))
    }

    /// Load the per-user configuration if the file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config() -> Result<Option<FileSystemConfig>> {
        let Some(path) = Self::user_config_dir().map(|dir| dir.join(USER_CONFIG_FILE)) else {
            return Ok(None);
        };

        if !path.exists() {
            return Ok(None);
        }

        Self::load_file(&path).map(Some)
    }
}
