//! Filesystem capabilities consumed by [`PathValue`].
//!
//! The path logic never talks to the operating system directly. Anything it
//! needs beyond the raw string (the separator, case sensitivity, the home and
//! current directories, link targets) comes from a capability passed into
//! each call:
//!
//! - [`FileSystemInfo`]: separator and case sensitivity, enough for the
//!   purely syntactic operations.
//! - [`PathQuery`]: existence checks, directory lookups and link targets.
//! - [`FileSystem`]: anything implementing both.
//!
//! Two implementations ship with the crate: [`OsFileSystem`], backed by the
//! running system, and [`MemoryFileSystem`], a self-contained in-memory tree.
//!
//! # Examples
//!
//! ```
//! use pathval::fs::{FileSystem, MemoryFileSystem};
//! use pathval::PathValue;
//!
//! fn describe(path: &PathValue, fs: &dyn FileSystem) -> String {
//!     path.abbreviated(fs).to_string()
//! }
//!
//! let fs = MemoryFileSystem::new().with_home_directory("/home/ada");
//! assert_eq!(describe(&PathValue::new("/home/ada/notes"), &fs), "~/notes");
//! ```

pub mod memory;
pub mod os;

#[cfg(test)]
pub(crate) mod mock;

pub use memory::MemoryFileSystem;
pub use os::OsFileSystem;

use crate::error::Result;
use crate::path::PathValue;

/// The separator used when no configuration says otherwise.
pub const DEFAULT_SEPARATOR: char = '/';

/// Static facts about the filesystem a path lives on.
pub trait FileSystemInfo {
    /// The character separating path components.
    fn path_separator(&self) -> char {
        DEFAULT_SEPARATOR
    }

    /// Whether names under `path` compare case-sensitively.
    ///
    /// Best-effort: the answer is only reliable when `path` exists.
    fn is_case_sensitive(&self, path: &PathValue) -> bool;
}

/// Queries that need to consult the filesystem itself.
pub trait PathQuery {
    /// Whether `path` exists.
    fn exists(&self, path: &PathValue) -> bool;

    /// Whether `path` exists and is a directory.
    fn is_directory(&self, path: &PathValue) -> bool;

    /// Whether `path` exists and is a regular file.
    fn is_file(&self, path: &PathValue) -> bool;

    /// The directory relative paths are resolved against.
    fn current_directory(&self) -> PathValue;

    /// The directory `~` stands for.
    fn home_directory(&self) -> PathValue;

    /// The raw target string of the symbolic link at `path`.
    ///
    /// # Errors
    ///
    /// Returns `NotASymlink` if `path` is not a link, `NotFound` if it does
    /// not exist, `PermissionDenied` or `Io` if the lookup fails otherwise.
    fn symlink_target(&self, path: &PathValue) -> Result<String>;
}

/// A complete filesystem capability.
///
/// Implemented automatically for every type implementing both
/// [`FileSystemInfo`] and [`PathQuery`], including `dyn FileSystem`.
pub trait FileSystem: FileSystemInfo + PathQuery {}

impl<T: FileSystemInfo + PathQuery + ?Sized> FileSystem for T {}
