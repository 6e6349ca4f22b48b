//! Path normalization functions.
//!
//! This module provides functionality to normalize paths by:
//! - Expanding a leading `~` segment to the home directory
//! - Resolving `.` and `..` segments
//! - Collapsing repeated and trailing separators
//! - Converting relative paths to absolute paths against the current directory

use crate::fs::{FileSystem, FileSystemInfo};
use crate::path::PathValue;

/// Expand a leading `~` segment to the capability's home directory.
///
/// Handles `~` and `~/path`; `~user` is left untouched.
///
/// # Examples
///
/// ```
/// use pathval::fs::MemoryFileSystem;
/// use pathval::path::normalize::expand_tilde;
/// use pathval::PathValue;
///
/// let fs = MemoryFileSystem::new().with_home_directory("/home/ada");
///
/// assert_eq!(expand_tilde(&PathValue::new("~"), &fs).as_str(), "/home/ada");
/// assert_eq!(expand_tilde(&PathValue::new("~/src"), &fs).as_str(), "/home/ada/src");
/// assert_eq!(expand_tilde(&PathValue::new("~bob/src"), &fs).as_str(), "~bob/src");
/// ```
#[must_use]
pub fn expand_tilde<F: FileSystem + ?Sized>(path: &PathValue, fs: &F) -> PathValue {
    let Some(rest) = path.as_str().strip_prefix('~') else {
        return path.clone();
    };

    if rest.is_empty() {
        fs.home_directory()
    } else if rest.starts_with(fs.path_separator()) {
        fs.home_directory().join(rest, fs)
    } else {
        path.clone()
    }
}

/// Resolve `.`, `..` and empty segments of a raw path string.
///
/// Segments are pushed onto a stack left to right. `..` pops the previous
/// segment unless there is none or it is itself an unresolved `..`. At the
/// root of an absolute path `..` is dropped, since the root is its own
/// parent; in a relative path it is kept.
///
/// A non-empty relative path that cancels out completely becomes `.`; the
/// empty path stays empty.
///
/// # Examples
///
/// ```
/// use pathval::path::normalize::resolve_components;
///
/// assert_eq!(resolve_components("a/b/../c", '/'), "a/c");
/// assert_eq!(resolve_components("../a/./b", '/'), "../a/b");
/// assert_eq!(resolve_components("//usr///bin/", '/'), "/usr/bin");
/// assert_eq!(resolve_components("/../etc", '/'), "/etc");
/// assert_eq!(resolve_components("a/..", '/'), ".");
/// ```
#[must_use]
pub fn resolve_components(path: &str, separator: char) -> String {
    if path.is_empty() {
        return String::new();
    }

    let absolute = path.starts_with(separator);
    let mut stack: Vec<&str> = Vec::new();

    for segment in path.split(separator) {
        match segment {
            "" | "." => {}
            ".." => match stack.last() {
                Some(&last) if last != ".." => {
                    stack.pop();
                }
                _ if absolute => {}
                _ => stack.push(".."),
            },
            _ => stack.push(segment),
        }
    }

    let joined = stack.join(&separator.to_string());
    if absolute {
        let mut resolved = String::with_capacity(joined.len() + separator.len_utf8());
        resolved.push(separator);
        resolved.push_str(&joined);
        resolved
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

fn starts_with_tilde_segment(path: &str, separator: char) -> bool {
    path.strip_prefix('~')
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(separator))
}

impl PathValue {
    /// Return the normalized form of this path.
    ///
    /// The leading `~` is expanded first, then `.`, `..` and redundant
    /// separators are resolved as described in [`resolve_components`].
    /// Normalizing twice gives the same result as normalizing once.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::fs::MemoryFileSystem;
    /// use pathval::PathValue;
    ///
    /// let fs = MemoryFileSystem::new().with_home_directory("/home/ada");
    ///
    /// assert_eq!(PathValue::new("a/b/../c").normalized(&fs).as_str(), "a/c");
    /// assert_eq!(PathValue::new("~/x/./y/..").normalized(&fs).as_str(), "/home/ada/x");
    /// ```
    #[must_use]
    pub fn normalized<F: FileSystem + ?Sized>(&self, fs: &F) -> PathValue {
        let separator = fs.path_separator();
        let mut resolved = resolve_components(expand_tilde(self, fs).as_str(), separator);

        // `x/../~` only exposes its tilde once `x/..` has been resolved.
        if starts_with_tilde_segment(&resolved, separator) {
            let expanded = expand_tilde(&PathValue::new(resolved), fs);
            resolved = resolve_components(expanded.as_str(), separator);
        }

        PathValue::new(resolved)
    }

    /// Normalize this path in place.
    ///
    /// Same semantics as [`normalized`](PathValue::normalized).
    pub fn normalize<F: FileSystem + ?Sized>(&mut self, fs: &F) {
        *self = self.normalized(fs);
    }

    /// Return the absolute, normalized form of this path.
    ///
    /// Relative paths are joined onto the capability's current directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::fs::MemoryFileSystem;
    /// use pathval::PathValue;
    ///
    /// let fs = MemoryFileSystem::new().with_current_directory("/work/repo");
    ///
    /// assert_eq!(PathValue::new("../other/./x").absolute(&fs).as_str(), "/work/other/x");
    /// assert_eq!(PathValue::new("/etc//hosts").absolute(&fs).as_str(), "/etc/hosts");
    /// ```
    #[must_use]
    pub fn absolute<F: FileSystem + ?Sized>(&self, fs: &F) -> PathValue {
        let normalized = self.normalized(fs);
        if normalized.is_absolute(fs) {
            return normalized;
        }

        fs.current_directory()
            .join(&normalized, fs)
            .normalized(fs)
    }
}

/// Returns true if `path` contains no `.`, `..` or empty segments.
///
/// Relative paths may still start with `..` segments, and `.` on its own
/// counts as normalized.
#[must_use]
pub fn is_normalized<F: FileSystemInfo + ?Sized>(path: &PathValue, info: &F) -> bool {
    let separator = info.path_separator();
    let raw = path.as_str();
    let absolute = path.is_absolute(info);
    if raw.is_empty() || raw == "." || (absolute && raw.len() == separator.len_utf8()) {
        return true;
    }

    let body = raw.strip_prefix(separator).unwrap_or(raw);
    let mut seen_name = false;
    for segment in body.split(separator) {
        match segment {
            "" | "." => return false,
            ".." if absolute || seen_name => return false,
            ".." => {}
            _ => seen_name = true,
        }
    }
    true
}
