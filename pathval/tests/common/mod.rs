//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for testing the pathval library
//! against both the in-memory and the OS-backed filesystem capabilities.

use pathval::config::FileSystemConfig;
use pathval::{MemoryFileSystem, OsFileSystem, PathValue};
use tempfile::TempDir;

/// Home directory used by [`alice_fs`].
#[allow(dead_code)]
pub const ALICE_HOME: &str = "/Users/alice";

/// An in-memory filesystem shaped like a small user account.
///
/// Home is `/Users/alice`, the current directory is `/Users/alice/src`, and
/// a handful of files, directories and links exist.
#[allow(dead_code)]
pub fn alice_fs() -> MemoryFileSystem {
    MemoryFileSystem::new()
        .with_home_directory(ALICE_HOME)
        .with_current_directory("/Users/alice/src")
        .with_directory("/Users/alice")
        .with_directory("/Users/alice/src")
        .with_directory("/Users/alice/docs")
        .with_file("/Users/alice/docs/report.pdf")
        .with_file("/Users/alice/src/archive.tar.gz")
        .with_symlink("/a/b/link", "../target")
        .with_symlink("/Users/alice/latest", "/Users/alice/docs/report.pdf")
}

/// A temporary directory and an OS capability rooted in it.
///
/// Both the home and the current directory point at the temporary
/// directory. Keep the `TempDir` alive for as long as the capability is used.
#[allow(dead_code)]
pub fn temp_os_fs() -> (TempDir, OsFileSystem) {
    let dir = tempfile::tempdir().unwrap();
    let root = PathValue::from_path(dir.path()).unwrap();
    let fs = OsFileSystem::from_config(&FileSystemConfig {
        home_directory: Some(root.as_str().to_string()),
        current_directory: Some(root.into_string()),
        ..Default::default()
    })
    .unwrap();
    (dir, fs)
}

/// Shorthand for `PathValue::new`.
#[allow(dead_code)]
pub fn p(raw: &str) -> PathValue {
    PathValue::new(raw)
}
