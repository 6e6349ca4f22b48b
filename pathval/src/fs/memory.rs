//! In-memory filesystem capability.
//!
//! Useful for tests and for sandboxes where path arithmetic must not touch
//! the real filesystem. Entries are keyed by their absolute, normalized form
//! (lowercased when the filesystem is case-insensitive), so `a/./b`, `/cwd/a/b`
//! and `~/../cwd/a/b` all name the same entry.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::fs::{FileSystemInfo, PathQuery, DEFAULT_SEPARATOR};
use crate::path::PathValue;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    File,
    Directory,
    Symlink(String),
}

/// An in-memory filesystem capability.
///
/// Defaults: separator `/`, case-sensitive, home `/home/user`, current
/// directory `/`, no entries.
///
/// # Examples
///
/// ```
/// use pathval::fs::{MemoryFileSystem, PathQuery};
/// use pathval::PathValue;
///
/// let fs = MemoryFileSystem::new()
///     .with_current_directory("/project")
///     .with_directory("/project/src")
///     .with_file("/project/src/main.rs")
///     .with_symlink("/project/latest", "src/main.rs");
///
/// assert!(PathValue::new("src/main.rs").is_file(&fs));
/// assert!(PathValue::new("src").is_directory(&fs));
/// assert_eq!(fs.symlink_target(&PathValue::new("latest")).unwrap(), "src/main.rs");
/// ```
#[derive(Debug, Clone)]
pub struct MemoryFileSystem {
    separator: char,
    case_sensitive: bool,
    home_directory: PathValue,
    current_directory: PathValue,
    entries: HashMap<PathValue, Entry>,
}

impl Default for MemoryFileSystem {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            case_sensitive: true,
            home_directory: PathValue::new("/home/user"),
            current_directory: PathValue::new("/"),
            entries: HashMap::new(),
        }
    }
}

impl MemoryFileSystem {
    /// Create an empty in-memory filesystem with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `separator` between components.
    ///
    /// The default home and current directories are rewritten to use it.
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        let previous = self.separator;
        let replacement = separator.to_string();
        self.home_directory =
            PathValue::new(self.home_directory.as_str().replace(previous, &replacement));
        self.current_directory =
            PathValue::new(self.current_directory.as_str().replace(previous, &replacement));
        self.separator = separator;
        self
    }

    /// Set whether names compare case-sensitively.
    #[must_use]
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set the directory `~` expands to.
    #[must_use]
    pub fn with_home_directory(mut self, directory: impl Into<PathValue>) -> Self {
        self.home_directory = directory.into();
        self
    }

    /// Set the directory relative paths resolve against.
    #[must_use]
    pub fn with_current_directory(mut self, directory: impl Into<PathValue>) -> Self {
        self.current_directory = directory.into();
        self
    }

    /// Add a regular file.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathValue>) -> Self {
        self.with_entry(path.into(), Entry::File)
    }

    /// Add a directory.
    #[must_use]
    pub fn with_directory(self, path: impl Into<PathValue>) -> Self {
        self.with_entry(path.into(), Entry::Directory)
    }

    /// Add a symbolic link whose raw target is `target`.
    #[must_use]
    pub fn with_symlink(self, path: impl Into<PathValue>, target: impl Into<String>) -> Self {
        self.with_entry(path.into(), Entry::Symlink(target.into()))
    }

    fn with_entry(mut self, path: PathValue, entry: Entry) -> Self {
        let key = self.key(&path);
        self.entries.insert(key, entry);
        self
    }

    fn key(&self, path: &PathValue) -> PathValue {
        let absolute = path.absolute(self);
        if self.case_sensitive {
            absolute
        } else {
            PathValue::new(absolute.as_str().to_lowercase())
        }
    }

    fn entry(&self, path: &PathValue) -> Option<&Entry> {
        if path.is_empty() {
            return None;
        }
        self.entries.get(&self.key(path))
    }
}

impl FileSystemInfo for MemoryFileSystem {
    fn path_separator(&self) -> char {
        self.separator
    }

    fn is_case_sensitive(&self, _path: &PathValue) -> bool {
        self.case_sensitive
    }
}

impl PathQuery for MemoryFileSystem {
    fn exists(&self, path: &PathValue) -> bool {
        self.entry(path).is_some()
    }

    fn is_directory(&self, path: &PathValue) -> bool {
        matches!(self.entry(path), Some(Entry::Directory))
    }

    fn is_file(&self, path: &PathValue) -> bool {
        matches!(self.entry(path), Some(Entry::File))
    }

    fn current_directory(&self) -> PathValue {
        self.current_directory.clone()
    }

    fn home_directory(&self) -> PathValue {
        self.home_directory.clone()
    }

    fn symlink_target(&self, path: &PathValue) -> Result<String> {
        match self.entry(path) {
            Some(Entry::Symlink(target)) => Ok(target.clone()),
            Some(_) => Err(Error::NotASymlink { path: path.clone() }),
            None => Err(Error::NotFound { path: path.clone() }),
        }
    }
}
