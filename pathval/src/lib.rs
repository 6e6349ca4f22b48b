#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathval
//!
//! Path values and the string algebra over them.
//!
//! A [`PathValue`] wraps a path string and offers normalization, component
//! decomposition, absolute resolution, home-directory abbreviation and
//! symbolic-link destination lookup. Everything environmental (separator,
//! case sensitivity, home and current directories, link targets) comes from
//! an explicit [`FileSystem`] capability, so the same code runs against the
//! real operating system ([`OsFileSystem`]) or an in-memory double
//! ([`MemoryFileSystem`]).
//!
//! ## Core Types
//!
//! - [`PathValue`]: The path string and its operations
//! - [`FileSystem`], [`FileSystemInfo`] and [`PathQuery`]: Capabilities
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathval::{MemoryFileSystem, PathValue};
//!
//! let fs = MemoryFileSystem::new()
//!     .with_home_directory("/Users/alice")
//!     .with_current_directory("/tmp");
//!
//! let path = PathValue::new("~/Documents/../Desktop/./file.txt");
//! assert_eq!(path.normalized(&fs).as_str(), "/Users/alice/Desktop/file.txt");
//! assert_eq!(path.normalized(&fs).abbreviated(&fs).as_str(), "~/Desktop/file.txt");
//! assert_eq!(PathValue::new("notes").absolute(&fs).as_str(), "/tmp/notes");
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{ConfigBuilder, FileSystemConfig};
pub use error::{Error, Result};
pub use fs::{FileSystem, FileSystemInfo, MemoryFileSystem, OsFileSystem, PathQuery};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::PathValue;
