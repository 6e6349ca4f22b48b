//! Path values and the string algebra over them.
//!
//! # Key Concepts
//!
//! ## Syntactic equality
//!
//! A [`PathValue`] is its raw string. Construction never rewrites the
//! string, and equality compares strings, so `a/./b` and `a/b` differ until
//! one of them is normalized.
//!
//! ## Normalization
//!
//! [`PathValue::normalized`] converts a path to a canonical form by:
//! - Expanding a leading `~` to the home directory
//! - Resolving `.` and `..` segments
//! - Collapsing repeated and trailing separators
//!
//! [`PathValue::absolute`] additionally anchors relative paths at the current
//! directory, and [`PathValue::abbreviated`] folds the home directory back
//! into `~`.
//!
//! ## Capabilities
//!
//! Anything beyond the raw string (separator, home and current directories,
//! link targets) comes from a [`FileSystem`](crate::fs::FileSystem) passed
//! into each call. No operation reads process-wide state on its own.
//!
//! # Examples
//!
//! ```
//! use pathval::fs::MemoryFileSystem;
//! use pathval::PathValue;
//!
//! let fs = MemoryFileSystem::new()
//!     .with_home_directory("/Users/alice")
//!     .with_current_directory("/Users/alice/src");
//!
//! let path = PathValue::new("../docs/./report.pdf");
//! let absolute = path.absolute(&fs);
//!
//! assert_eq!(absolute.as_str(), "/Users/alice/docs/report.pdf");
//! assert_eq!(absolute.abbreviated(&fs).as_str(), "~/docs/report.pdf");
//! assert_eq!(absolute.extension(&fs), Some("pdf"));
//! ```

mod abbreviate;
pub mod normalize;
mod symlink;
mod value;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use value::PathValue;
