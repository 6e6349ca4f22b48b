//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHVAL_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::FileSystemConfig;
use crate::error::{Error, Result};

/// Overrides `path_separator`; must be exactly one character.
pub const ENV_SEPARATOR: &str = "PATHVAL_SEPARATOR";
/// Overrides `case_sensitive`; accepts true/false/1/0/yes/no/on/off.
pub const ENV_CASE_SENSITIVE: &str = "PATHVAL_CASE_SENSITIVE";
/// Overrides `home_directory`.
pub const ENV_HOME: &str = "PATHVAL_HOME";
/// Overrides `current_directory`.
pub const ENV_CWD: &str = "PATHVAL_CWD";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathval::config::{EnvironmentConfig, FileSystemConfig};
///
/// let mut config = FileSystemConfig::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., a multi-character separator, an invalid boolean).
    pub fn apply_overrides(config: &mut FileSystemConfig) -> Result<()> {
        if let Ok(val) = env::var(ENV_SEPARATOR) {
            config.path_separator = Some(Self::parse_separator(ENV_SEPARATOR, &val)?);
        }

        if let Ok(val) = env::var(ENV_CASE_SENSITIVE) {
            config.case_sensitive = Some(Self::parse_bool(ENV_CASE_SENSITIVE, &val)?);
        }

        if let Ok(home) = env::var(ENV_HOME) {
            config.home_directory = Some(home);
        }

        if let Ok(cwd) = env::var(ENV_CWD) {
            config.current_directory = Some(cwd);
        }

        Ok(())
    }

    /// Parse a single-character separator.
    fn parse_separator(field: &str, s: &str) -> Result<char> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("Separator must be exactly one character, got '{s}'"),
            }),
        }
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
