//! `mockall` double for the filesystem capabilities.

use mockall::mock;

use crate::error::Result;
use crate::fs::{FileSystemInfo, PathQuery};
use crate::path::PathValue;

mock! {
    pub FileSystem {}

    impl FileSystemInfo for FileSystem {
        fn path_separator(&self) -> char;
        fn is_case_sensitive(&self, path: &PathValue) -> bool;
    }

    impl PathQuery for FileSystem {
        fn exists(&self, path: &PathValue) -> bool;
        fn is_directory(&self, path: &PathValue) -> bool;
        fn is_file(&self, path: &PathValue) -> bool;
        fn current_directory(&self) -> PathValue;
        fn home_directory(&self) -> PathValue;
        fn symlink_target(&self, path: &PathValue) -> Result<String>;
    }
}
