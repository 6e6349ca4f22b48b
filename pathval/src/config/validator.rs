//! Configuration validation.

use crate::config::schema::FileSystemConfig;
use crate::error::{Error, Result};
use crate::fs::DEFAULT_SEPARATOR;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pathval::config::{ConfigValidator, FileSystemConfig};
///
/// ConfigValidator::validate(&FileSystemConfig::default()).unwrap();
///
/// let bad = FileSystemConfig { path_separator: Some('.'), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if:
    /// - the separator is `.`, `~`, alphanumeric or whitespace
    /// - a directory override is empty or not absolute under the separator
    pub fn validate(config: &FileSystemConfig) -> Result<()> {
        let separator = config.path_separator.unwrap_or(DEFAULT_SEPARATOR);
        Self::validate_separator(separator)?;

        if let Some(ref home) = config.home_directory {
            Self::validate_directory("home_directory", home, separator)?;
        }

        if let Some(ref cwd) = config.current_directory {
            Self::validate_directory("current_directory", cwd, separator)?;
        }

        Ok(())
    }

    fn validate_separator(separator: char) -> Result<()> {
        if separator == '.' || separator == '~' {
            return Err(Error::Validation {
                field: "path_separator".into(),
                message: format!("'{separator}' has its own meaning in paths"),
            });
        }

        if separator.is_alphanumeric() || separator.is_whitespace() {
            return Err(Error::Validation {
                field: "path_separator".into(),
                message: format!("'{separator}' cannot separate components"),
            });
        }

        Ok(())
    }

    fn validate_directory(field: &str, directory: &str, separator: char) -> Result<()> {
        if directory.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Directory cannot be empty".into(),
            });
        }

        if !directory.starts_with(separator) {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Directory must be absolute (start with '{separator}')"),
            });
        }

        Ok(())
    }
}
