//! Filesystem capability backed by the running operating system.

use std::env;
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::config::FileSystemConfig;
use crate::error::{Error, Result};
use crate::fs::{FileSystemInfo, PathQuery, DEFAULT_SEPARATOR};
use crate::path::PathValue;

/// The OS-backed filesystem capability.
///
/// The home and current directories are captured when the capability is
/// built. Relative paths handed to the query methods are resolved against
/// that captured current directory, never against the process's live one,
/// so changing the process directory later has no effect until
/// [`refresh_current_directory`](OsFileSystem::refresh_current_directory)
/// is called.
///
/// A configured separator other than the platform's is translated at the OS
/// boundary: path strings handed to the OS use the platform separator, and
/// directories and link targets read back from it use the configured one.
///
/// # Examples
///
/// ```no_run
/// use pathval::fs::OsFileSystem;
/// use pathval::PathValue;
///
/// let fs = OsFileSystem::new().unwrap();
/// let here = PathValue::new(".").absolute(&fs);
/// assert!(here.is_absolute(&fs));
/// println!("{}", here.abbreviated(&fs));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsFileSystem {
    separator: char,
    case_sensitive: Option<bool>,
    home_directory: PathValue,
    current_directory: PathValue,
}

impl OsFileSystem {
    /// Build the capability from the process environment with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the home or current directory cannot be
    /// determined or is not valid UTF-8.
    pub fn new() -> Result<Self> {
        Self::from_config(&FileSystemConfig::default())
    }

    /// Build the capability from a configuration.
    ///
    /// Directory overrides in the configuration win over what the process
    /// environment reports.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory without an override cannot be
    /// determined or is not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::config::FileSystemConfig;
    /// use pathval::fs::{OsFileSystem, PathQuery};
    ///
    /// let config = FileSystemConfig {
    ///     home_directory: Some("/home/ada".to_string()),
    ///     current_directory: Some("/tmp".to_string()),
    ///     ..Default::default()
    /// };
    /// let fs = OsFileSystem::from_config(&config).unwrap();
    /// assert_eq!(fs.home_directory().as_str(), "/home/ada");
    /// ```
    pub fn from_config(config: &FileSystemConfig) -> Result<Self> {
        let separator = config.path_separator.unwrap_or(DEFAULT_SEPARATOR);

        let home_directory = match &config.home_directory {
            Some(home) => PathValue::new(home.as_str()),
            None => {
                let home = home::home_dir().ok_or(Error::HomeDirectoryUnavailable)?;
                from_os_path(&home, separator)?
            }
        };

        let current_directory = match &config.current_directory {
            Some(cwd) => PathValue::new(cwd.as_str()),
            None => current_dir(separator)?,
        };

        log::debug!("filesystem capability bound: home={home_directory} cwd={current_directory}");

        Ok(Self {
            separator,
            case_sensitive: config.case_sensitive,
            home_directory,
            current_directory,
        })
    }

    /// Replace the captured current directory.
    #[must_use]
    pub fn with_current_directory(mut self, directory: impl Into<PathValue>) -> Self {
        self.current_directory = directory.into();
        self
    }

    /// Replace the captured home directory.
    #[must_use]
    pub fn with_home_directory(mut self, directory: impl Into<PathValue>) -> Self {
        self.home_directory = directory.into();
        self
    }

    /// Re-read the process's current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn refresh_current_directory(&mut self) -> Result<()> {
        self.current_directory = current_dir(self.separator)?;
        Ok(())
    }

    /// The OS path for `path`, anchored at the captured current directory.
    fn os_path(&self, path: &PathValue) -> PathBuf {
        let anchored = if path.is_absolute(self) {
            path.clone()
        } else {
            self.current_directory.join(path, self)
        };

        if self.separator == MAIN_SEPARATOR {
            anchored.to_path_buf()
        } else {
            PathBuf::from(anchored.as_str().replace(self.separator, &MAIN_SEPARATOR.to_string()))
        }
    }
}

fn current_dir(separator: char) -> Result<PathValue> {
    let cwd = env::current_dir().map_err(Error::CurrentDirectoryUnavailable)?;
    from_os_path(&cwd, separator)
}

/// Convert an OS path into a `PathValue` written with `separator`.
fn from_os_path(path: &Path, separator: char) -> Result<PathValue> {
    let value = PathValue::from_path(path)?;
    if separator == MAIN_SEPARATOR {
        return Ok(value);
    }
    Ok(PathValue::new(
        value.as_str().replace(MAIN_SEPARATOR, &separator.to_string()),
    ))
}

impl FileSystemInfo for OsFileSystem {
    fn path_separator(&self) -> char {
        self.separator
    }

    fn is_case_sensitive(&self, path: &PathValue) -> bool {
        if let Some(case_sensitive) = self.case_sensitive {
            return case_sensitive;
        }

        if cfg!(target_os = "macos") {
            // APFS and HFS+ default to case-insensitive volumes
            probe_case_sensitivity(&self.os_path(path)).unwrap_or(false)
        } else {
            true
        }
    }
}

impl PathQuery for OsFileSystem {
    fn exists(&self, path: &PathValue) -> bool {
        !path.is_empty() && self.os_path(path).exists()
    }

    fn is_directory(&self, path: &PathValue) -> bool {
        !path.is_empty() && self.os_path(path).is_dir()
    }

    fn is_file(&self, path: &PathValue) -> bool {
        !path.is_empty() && self.os_path(path).is_file()
    }

    fn current_directory(&self) -> PathValue {
        self.current_directory.clone()
    }

    fn home_directory(&self) -> PathValue {
        self.home_directory.clone()
    }

    fn symlink_target(&self, path: &PathValue) -> Result<String> {
        if path.is_empty() {
            return Err(Error::NotFound { path: path.clone() });
        }

        let target = fs::read_link(self.os_path(path)).map_err(|e| Error::from_io(path, e))?;
        log::trace!("read link {path} -> {}", target.display());

        Ok(from_os_path(&target, self.separator)?.into_string())
    }
}

/// Decide case sensitivity by looking the path up with its case swapped.
///
/// Returns `None` when the path does not exist or has no cased letters.
#[cfg(unix)]
fn probe_case_sensitivity(path: &std::path::Path) -> Option<bool> {
    use std::os::unix::fs::MetadataExt;

    let original = fs::symlink_metadata(path).ok()?;
    let raw = path.to_str()?;
    let swapped = swap_case(raw);
    if swapped == raw {
        return None;
    }

    match fs::symlink_metadata(&swapped) {
        Ok(other) => Some(!(other.dev() == original.dev() && other.ino() == original.ino())),
        Err(_) => Some(true),
    }
}

#[cfg(not(unix))]
fn probe_case_sensitivity(_path: &std::path::Path) -> Option<bool> {
    None
}

fn swap_case(s: &str) -> String {
    let mut swapped = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_lowercase() {
            swapped.extend(c.to_uppercase());
        } else {
            swapped.extend(c.to_lowercase());
        }
    }
    swapped
}
