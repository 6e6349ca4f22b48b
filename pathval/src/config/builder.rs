//! Configuration builder.
//!
//! Collects configuration from every source, merges it by precedence and
//! validates the result.

use std::path::PathBuf;

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::FileSystemConfig;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use crate::fs::OsFileSystem;

/// Builder for loading and merging configuration.
///
/// # Examples
///
/// ```
/// use pathval::config::{ConfigBuilder, FileSystemConfig};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(FileSystemConfig {
///         home_directory: Some("/home/ada".to_string()),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.home_directory.as_deref(), Some("/home/ada"));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<FileSystemConfig>,
}

impl ConfigBuilder {
    /// Create a new configuration builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load this file in place of the per-user configuration.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Skip loading configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skip environment variable overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Add programmatic configuration overrides (highest precedence).
    #[must_use]
    pub fn with_config(mut self, config: FileSystemConfig) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Build the final configuration.
    ///
    /// Sources are applied lowest to highest: defaults, the configuration
    /// file, `PATHVAL_*` environment variables, programmatic overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a configuration file cannot be read or parsed
    /// - an environment variable has an invalid value
    /// - the merged configuration fails validation
    pub fn build(self) -> Result<FileSystemConfig> {
        let mut config = FileSystemConfig::default();

        if !self.skip_files {
            let from_file = match &self.config_file {
                Some(path) => Some(ConfigLoader::load_file(path)?),
                None => ConfigLoader::load_user_config()?,
            };
            if let Some(ref file_config) = from_file {
                ConfigMerger::merge_into(&mut config, file_config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        log::debug!("configuration resolved: {config:?}");

        Ok(config)
    }

    /// Build the configuration and bind an [`OsFileSystem`] to it.
    ///
    /// # Errors
    ///
    /// Returns an error if [`build`](Self::build) fails or the home or
    /// current directory cannot be determined.
    pub fn build_file_system(self) -> Result<OsFileSystem> {
        let config = self.build()?;
        OsFileSystem::from_config(&config)
    }
}
