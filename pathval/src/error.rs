//! Error types for the pathval library.
//!
//! Only the filesystem capabilities and configuration loading can fail. The
//! string transforms on [`PathValue`](crate::PathValue) are total and never
//! produce one of these errors.

use std::io::{self, ErrorKind};

use thiserror::Error;

use crate::path::PathValue;

/// Result type alias for operations that may fail with a pathval error.
///
/// # Examples
///
/// ```
/// use pathval::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/tmp".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathval library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path does not exist.
    #[error("path not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: PathValue,
    },

    /// A path exists but is not a symbolic link.
    #[error("not a symbolic link: {path}")]
    NotASymlink {
        /// The path that was expected to be a link.
        path: PathValue,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathValue,
    },

    /// A path could not be represented as a `PathValue`.
    #[error("invalid path {path}: {reason}")]
    InvalidPath {
        /// The offending path, lossily converted.
        path: PathValue,
        /// The reason the path is invalid.
        reason: String,
    },

    /// The home directory could not be determined.
    #[error("cannot determine home directory")]
    HomeDirectoryUnavailable,

    /// The current working directory could not be determined.
    #[error("cannot determine current directory: {0}")]
    CurrentDirectoryUnavailable(#[source] io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Map an I/O error raised while querying `path` onto the error taxonomy.
    ///
    /// `InvalidInput` is what `readlink(2)` reports (`EINVAL`) for a path
    /// that exists but is not a link.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::{Error, PathValue};
    /// use std::io;
    ///
    /// let err = Error::from_io(
    ///     &PathValue::new("/missing"),
    ///     io::Error::from(io::ErrorKind::NotFound),
    /// );
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn from_io(path: &PathValue, err: io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => Self::NotFound { path: path.clone() },
            ErrorKind::PermissionDenied => Self::PermissionDenied { path: path.clone() },
            ErrorKind::InvalidInput => Self::NotASymlink { path: path.clone() },
            _ => Self::Io(err),
        }
    }

    /// Returns true if this error indicates a missing path.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
            || matches!(self, Self::Io(e) if e.kind() == ErrorKind::NotFound)
    }

    /// Returns true if this error indicates the path is not a symbolic link.
    #[must_use]
    pub fn is_not_a_symlink(&self) -> bool {
        matches!(self, Self::NotASymlink { .. })
    }

    /// Returns true if this error indicates a permission problem.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
            || matches!(self, Self::Io(e) if e.kind() == ErrorKind::PermissionDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NotFound {
            path: PathValue::new("/a/b"),
        };
        assert_eq!(err.to_string(), "path not found: /a/b");

        let err = Error::NotASymlink {
            path: PathValue::new("/etc/hosts"),
        };
        assert_eq!(err.to_string(), "not a symbolic link: /etc/hosts");

        let err = Error::Validation {
            field: "path_separator".into(),
            message: "must not be '.'".into(),
        };
        assert_eq!(
            err.to_string(),
            "validation error for 'path_separator': must not be '.'"
        );
    }

    #[test]
    fn test_from_io_kind_mapping() {
        let path = PathValue::new("/x");

        let err = Error::from_io(&path, io::Error::from(ErrorKind::NotFound));
        assert!(err.is_not_found());

        let err = Error::from_io(&path, io::Error::from(ErrorKind::PermissionDenied));
        assert!(err.is_permission_denied());

        let err = Error::from_io(&path, io::Error::from(ErrorKind::InvalidInput));
        assert!(err.is_not_a_symlink());

        let err = Error::from_io(&path, io::Error::other("boom"));
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_io_not_found_is_not_found() {
        let err = Error::Io(io::Error::from(ErrorKind::NotFound));
        assert!(err.is_not_found());
    }
}
