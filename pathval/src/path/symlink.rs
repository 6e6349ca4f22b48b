//! Symbolic link resolution.

use crate::error::Result;
use crate::fs::FileSystem;
use crate::path::PathValue;

impl PathValue {
    /// Resolve the destination of the symbolic link at this path.
    ///
    /// An absolute link target is returned as-is. A relative target `t` is
    /// placed under the link's parent directory as `parent/../t`, without
    /// normalizing; call [`normalized`](PathValue::normalized) on the result
    /// for the canonical form.
    ///
    /// # Errors
    ///
    /// Returns the capability's error unchanged: `NotASymlink`, `NotFound`,
    /// `PermissionDenied` or `Io`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::fs::MemoryFileSystem;
    /// use pathval::PathValue;
    ///
    /// let fs = MemoryFileSystem::new()
    ///     .with_symlink("/a/b/link", "../target")
    ///     .with_symlink("/a/b/abs", "/opt/target");
    ///
    /// let destination = PathValue::new("/a/b/link").symlink_destination(&fs).unwrap();
    /// assert_eq!(destination.as_str(), "/a/b/../../target");
    ///
    /// let destination = PathValue::new("/a/b/abs").symlink_destination(&fs).unwrap();
    /// assert_eq!(destination.as_str(), "/opt/target");
    ///
    /// assert!(PathValue::new("/a/b/missing").symlink_destination(&fs).is_err());
    /// ```
    pub fn symlink_destination<F: FileSystem + ?Sized>(&self, fs: &F) -> Result<PathValue> {
        let target = PathValue::new(fs.symlink_target(self)?);
        log::trace!("symlink {self} points to {target}");

        if target.is_absolute(fs) {
            return Ok(target);
        }

        Ok(self.parent(fs).join("..", fs).join(&target, fs))
    }

    /// Whether the capability can read a link target at this path.
    #[must_use]
    pub fn is_symlink<F: FileSystem + ?Sized>(&self, fs: &F) -> bool {
        fs.symlink_target(self).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::fs::mock::MockFileSystem;
    use crate::fs::MemoryFileSystem;
    use mockall::predicate::eq;

    #[test]
    fn test_relative_target_resolved_under_parent() {
        let fs = MemoryFileSystem::new().with_symlink("/a/b/link", "../target");
        let destination = PathValue::new("/a/b/link").symlink_destination(&fs).unwrap();
        assert_eq!(destination.as_str(), "/a/b/../../target");
        assert_eq!(destination.normalized(&fs).as_str(), "/target");
    }

    #[test]
    fn test_bare_relative_target() {
        let fs = MemoryFileSystem::new().with_symlink("/srv/current", "release-42");
        let destination = PathValue::new("/srv/current")
            .symlink_destination(&fs)
            .unwrap();
        assert_eq!(destination.as_str(), "/srv/../release-42");
    }

    #[test]
    fn test_absolute_target_returned_as_is() {
        let fs = MemoryFileSystem::new().with_symlink("/a/link", "/x//y/../z");
        let destination = PathValue::new("/a/link").symlink_destination(&fs).unwrap();
        assert_eq!(destination.as_str(), "/x//y/../z");
    }

    #[test]
    fn test_relative_link_path() {
        let fs = MemoryFileSystem::new()
            .with_current_directory("/work")
            .with_symlink("/work/link", "target");
        let destination = PathValue::new("link").symlink_destination(&fs).unwrap();
        assert_eq!(destination.as_str(), "./../target");
    }

    #[test]
    fn test_not_a_symlink() {
        let fs = MemoryFileSystem::new().with_file("/a/file");
        let err = PathValue::new("/a/file").symlink_destination(&fs).unwrap_err();
        assert!(err.is_not_a_symlink());
        assert!(!PathValue::new("/a/file").is_symlink(&fs));
    }

    #[test]
    fn test_missing_link() {
        let fs = MemoryFileSystem::new();
        let err = PathValue::new("/nope").symlink_destination(&fs).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_capability_queried_with_link_path() {
        let mut fs = MockFileSystem::new();
        fs.expect_path_separator().return_const('/');
        fs.expect_symlink_target()
            .with(eq(PathValue::new("/etc/alternatives/editor")))
            .times(1)
            .returning(|_| Ok("/usr/bin/vim.basic".to_string()));

        let destination = PathValue::new("/etc/alternatives/editor")
            .symlink_destination(&fs)
            .unwrap();
        assert_eq!(destination.as_str(), "/usr/bin/vim.basic");
    }

    #[test]
    fn test_capability_error_propagated_unchanged() {
        let mut fs = MockFileSystem::new();
        fs.expect_path_separator().return_const('/');
        fs.expect_symlink_target().times(1).returning(|path| {
            Err(Error::PermissionDenied { path: path.clone() })
        });

        let err = PathValue::new("/root/link")
            .symlink_destination(&fs)
            .unwrap_err();
        match err {
            Error::PermissionDenied { path } => assert_eq!(path.as_str(), "/root/link"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
