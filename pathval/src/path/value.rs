//! The `PathValue` type and its purely syntactic operations.
//!
//! Everything here works on the raw string alone, consulting the capability
//! only for the separator character. Normalization, abbreviation and symlink
//! resolution live in their own modules because they need the filesystem
//! queries as well.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fs::{FileSystem, FileSystemInfo};

/// An immutable filesystem path held as a UTF-8 string.
///
/// Construction never validates or normalizes: two values are equal exactly
/// when their raw strings are equal, so `a/./b` and `a/b` are different
/// values until [`normalized`](PathValue::normalized) is applied.
///
/// # Examples
///
/// ```
/// use pathval::fs::MemoryFileSystem;
/// use pathval::PathValue;
///
/// let fs = MemoryFileSystem::new();
/// let path = PathValue::new("a/b/../c");
///
/// assert!(path.is_relative(&fs));
/// assert_ne!(path, PathValue::new("a/c"));
/// assert_eq!(path.normalized(&fs), PathValue::new("a/c"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathValue {
    path: String,
}

/// Trailing `.suffix` of a component, including the lone `.` of `..`.
fn extension_suffix() -> &'static Regex {
    static EXTENSION_SUFFIX: OnceLock<Regex> = OnceLock::new();
    EXTENSION_SUFFIX.get_or_init(|| Regex::new(r"\.[\w-]*$").expect("Invalid extension regex"))
}

impl PathValue {
    /// Create a path from a string, stored verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::PathValue;
    ///
    /// let path = PathValue::new("//tmp/./x");
    /// assert_eq!(path.as_str(), "//tmp/./x");
    /// ```
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Create a path from an optional string; `None` gives the empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::PathValue;
    ///
    /// assert!(PathValue::from_optional(None::<&str>).is_empty());
    /// assert_eq!(PathValue::from_optional(Some("/tmp")).as_str(), "/tmp");
    /// ```
    #[must_use]
    pub fn from_optional<S: Into<String>>(path: Option<S>) -> Self {
        path.map(Self::new).unwrap_or_default()
    }

    /// Create a path by joining segments with the separator.
    ///
    /// A leading segment equal to the separator marks the path absolute and
    /// produces exactly one leading separator, so the output of
    /// [`components`](PathValue::components) rebuilds the original path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::fs::MemoryFileSystem;
    /// use pathval::PathValue;
    ///
    /// let fs = MemoryFileSystem::new();
    ///
    /// let path = PathValue::from_components(["/", "usr", "bin"], &fs);
    /// assert_eq!(path.as_str(), "/usr/bin");
    ///
    /// let path = PathValue::from_components(["src", "lib.rs"], &fs);
    /// assert_eq!(path.as_str(), "src/lib.rs");
    ///
    /// let path = PathValue::from_components(Vec::<String>::new(), &fs);
    /// assert!(path.is_empty());
    /// ```
    #[must_use]
    pub fn from_components<I, S, F>(segments: I, info: &F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FileSystemInfo + ?Sized,
    {
        let separator = info.path_separator();
        let separator_str = separator.to_string();
        let segments: Vec<S> = segments.into_iter().collect();

        let Some(first) = segments.first() else {
            return Self::default();
        };

        if segments.len() > 1 && first.as_ref() == separator_str {
            let rest = join_segments(&segments[1..], &separator_str);
            let mut path = String::with_capacity(rest.len() + separator.len_utf8());
            path.push(separator);
            path.push_str(rest.trim_start_matches(separator));
            return Self { path };
        }

        Self::new(join_segments(&segments, &separator_str))
    }

    /// Create a path from a standard library path.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` if the path is not valid UTF-8.
    pub fn from_path(path: &Path) -> Result<Self> {
        path.to_str().map(Self::new).ok_or_else(|| Error::InvalidPath {
            path: Self::new(path.to_string_lossy()),
            reason: "path contains invalid UTF-8".to_string(),
        })
    }

    /// The capability's current directory.
    #[must_use]
    pub fn current<F: FileSystem + ?Sized>(fs: &F) -> Self {
        fs.current_directory()
    }

    /// The capability's home directory.
    #[must_use]
    pub fn home<F: FileSystem + ?Sized>(fs: &F) -> Self {
        fs.home_directory()
    }

    /// The raw string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Convert into the raw string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.path
    }

    /// Convert into a standard library `PathBuf`.
    #[must_use]
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }

    /// Returns true for the empty path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns true if the raw string begins with the separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::fs::MemoryFileSystem;
    /// use pathval::PathValue;
    ///
    /// let fs = MemoryFileSystem::new();
    /// assert!(PathValue::new("/etc").is_absolute(&fs));
    /// assert!(!PathValue::new("~/etc").is_absolute(&fs));
    /// assert!(!PathValue::new("").is_absolute(&fs));
    /// ```
    #[must_use]
    pub fn is_absolute<F: FileSystemInfo + ?Sized>(&self, info: &F) -> bool {
        self.path.starts_with(info.path_separator())
    }

    /// Negation of [`is_absolute`](PathValue::is_absolute).
    #[must_use]
    pub fn is_relative<F: FileSystemInfo + ?Sized>(&self, info: &F) -> bool {
        !self.is_absolute(info)
    }

    /// Split the path into components.
    ///
    /// An absolute path yields a separator element first, followed by the
    /// split of the whole string. Because that string still starts with the
    /// separator, the split contributes an empty segment right after it:
    /// `/usr/bin` gives `["/", "", "usr", "bin"]`. Callers that rebuild paths
    /// should go through [`from_components`](PathValue::from_components),
    /// which absorbs the extra segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::fs::MemoryFileSystem;
    /// use pathval::PathValue;
    ///
    /// let fs = MemoryFileSystem::new();
    ///
    /// assert_eq!(PathValue::new("/usr/bin").components(&fs), ["/", "", "usr", "bin"]);
    /// assert_eq!(PathValue::new("a/b").components(&fs), ["a", "b"]);
    /// assert!(PathValue::new("").components(&fs).is_empty());
    /// ```
    #[must_use]
    pub fn components<F: FileSystemInfo + ?Sized>(&self, info: &F) -> Vec<String> {
        if self.path.is_empty() {
            return Vec::new();
        }

        let separator = info.path_separator();
        let mut components = Vec::new();
        if self.path.starts_with(separator) {
            components.push(separator.to_string());
        }
        components.extend(self.path.split(separator).map(str::to_owned));
        components
    }

    /// The last element of [`components`](PathValue::components).
    ///
    /// A trailing separator makes this the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::fs::MemoryFileSystem;
    /// use pathval::PathValue;
    ///
    /// let fs = MemoryFileSystem::new();
    /// assert_eq!(PathValue::new("/usr/bin").last_component(&fs), Some("bin"));
    /// assert_eq!(PathValue::new("/usr/").last_component(&fs), Some(""));
    /// assert_eq!(PathValue::new("").last_component(&fs), None);
    /// ```
    #[must_use]
    pub fn last_component<F: FileSystemInfo + ?Sized>(&self, info: &F) -> Option<&str> {
        if self.path.is_empty() {
            return None;
        }
        self.path.rsplit(info.path_separator()).next()
    }

    /// Text after the final `.` of the last component.
    ///
    /// A component whose only dot is its first character is a hidden name,
    /// not an extension, so `.bashrc` has none.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::fs::MemoryFileSystem;
    /// use pathval::PathValue;
    ///
    /// let fs = MemoryFileSystem::new();
    /// assert_eq!(PathValue::new("archive.tar.gz").extension(&fs), Some("gz"));
    /// assert_eq!(PathValue::new("/etc/hosts").extension(&fs), None);
    /// assert_eq!(PathValue::new("notes.").extension(&fs), None);
    /// assert_eq!(PathValue::new("/home/a/.profile").extension(&fs), None);
    /// ```
    #[must_use]
    pub fn extension<F: FileSystemInfo + ?Sized>(&self, info: &F) -> Option<&str> {
        let last = self.last_component(info)?;
        let (stem, extension) = last.rsplit_once('.')?;
        (!stem.is_empty() && !extension.is_empty()).then_some(extension)
    }

    /// The last component with a trailing `.suffix` removed.
    ///
    /// The suffix is a dot followed by word characters or `-`, possibly
    /// none, so `..` becomes `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::fs::MemoryFileSystem;
    /// use pathval::PathValue;
    ///
    /// let fs = MemoryFileSystem::new();
    /// let path = PathValue::new("/backups/archive.tar.gz");
    /// assert_eq!(path.last_component_without_extension(&fs).as_deref(), Some("archive.tar"));
    /// assert_eq!(
    ///     PathValue::new("..").last_component_without_extension(&fs).as_deref(),
    ///     Some(".")
    /// );
    /// ```
    #[must_use]
    pub fn last_component_without_extension<F: FileSystemInfo + ?Sized>(
        &self,
        info: &F,
    ) -> Option<String> {
        let last = self.last_component(info)?;
        Some(extension_suffix().replace(last, "").into_owned())
    }

    /// Join another path onto this one with a single separator between them.
    ///
    /// No normalization happens and an absolute `other` is appended like any
    /// other path. If either side is empty the other is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::fs::MemoryFileSystem;
    /// use pathval::PathValue;
    ///
    /// let fs = MemoryFileSystem::new();
    /// let base = PathValue::new("/a/b/");
    /// assert_eq!(base.join("../c", &fs).as_str(), "/a/b/../c");
    /// assert_eq!(base.join("/c", &fs).as_str(), "/a/b/c");
    /// assert_eq!(PathValue::new("").join("c", &fs).as_str(), "c");
    /// ```
    #[must_use]
    pub fn join<P, F>(&self, other: P, info: &F) -> Self
    where
        P: AsRef<str>,
        F: FileSystemInfo + ?Sized,
    {
        let other = other.as_ref();
        if self.path.is_empty() {
            return Self::new(other);
        }
        if other.is_empty() {
            return self.clone();
        }

        let separator = info.path_separator();
        let head = self.path.trim_end_matches(separator);
        let tail = other.trim_start_matches(separator);

        let mut path = String::with_capacity(head.len() + tail.len() + separator.len_utf8());
        path.push_str(head);
        path.push(separator);
        path.push_str(tail);
        Self { path }
    }

    /// The directory containing this path, computed syntactically.
    ///
    /// Trailing separators are ignored. A top-level absolute path has the
    /// root as parent and a bare relative name has `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::fs::MemoryFileSystem;
    /// use pathval::PathValue;
    ///
    /// let fs = MemoryFileSystem::new();
    /// assert_eq!(PathValue::new("/a/b/link").parent(&fs).as_str(), "/a/b");
    /// assert_eq!(PathValue::new("/a").parent(&fs).as_str(), "/");
    /// assert_eq!(PathValue::new("link").parent(&fs).as_str(), ".");
    /// ```
    #[must_use]
    pub fn parent<F: FileSystemInfo + ?Sized>(&self, info: &F) -> Self {
        let separator = info.path_separator();
        let trimmed = self.path.trim_end_matches(separator);

        if trimmed.is_empty() {
            return if self.path.is_empty() {
                Self::new(".")
            } else {
                Self::new(separator.to_string())
            };
        }

        match trimmed.rfind(separator) {
            None => Self::new("."),
            Some(index) => {
                let head = trimmed[..index].trim_end_matches(separator);
                if head.is_empty() {
                    Self::new(separator.to_string())
                } else {
                    Self::new(head)
                }
            }
        }
    }

    /// Whether the capability reports this path as existing.
    #[must_use]
    pub fn exists<F: FileSystem + ?Sized>(&self, fs: &F) -> bool {
        fs.exists(self)
    }

    /// Whether the capability reports this path as a directory.
    #[must_use]
    pub fn is_directory<F: FileSystem + ?Sized>(&self, fs: &F) -> bool {
        fs.is_directory(self)
    }

    /// Whether the capability reports this path as a regular file.
    #[must_use]
    pub fn is_file<F: FileSystem + ?Sized>(&self, fs: &F) -> bool {
        fs.is_file(self)
    }
}

fn join_segments<S: AsRef<str>>(segments: &[S], separator: &str) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(separator)
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<str> for PathValue {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl From<&str> for PathValue {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for PathValue {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<Option<String>> for PathValue {
    fn from(path: Option<String>) -> Self {
        Self::from_optional(path)
    }
}

impl From<PathValue> for String {
    fn from(path: PathValue) -> Self {
        path.path
    }
}
