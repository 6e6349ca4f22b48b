//! Home-directory abbreviation, the inverse of tilde expansion.

use regex::RegexBuilder;

use crate::fs::FileSystem;
use crate::path::PathValue;

impl PathValue {
    /// Replace a leading home-directory prefix with `~`.
    ///
    /// The prefix match is anchored at the start of the raw string and is
    /// case-insensitive when the capability reports this path as living on a
    /// case-insensitive filesystem. What is left after the prefix decides the
    /// result:
    ///
    /// - nothing, or a lone separator: `~`
    /// - a string starting with the separator: `~` followed by it
    /// - anything else: `~` joined with it as a separate component
    ///
    /// Paths outside the home directory, and every path when the home
    /// directory is empty, come back unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::fs::MemoryFileSystem;
    /// use pathval::PathValue;
    ///
    /// let fs = MemoryFileSystem::new().with_home_directory("/Users/alice");
    ///
    /// assert_eq!(PathValue::new("/Users/alice/docs").abbreviated(&fs).as_str(), "~/docs");
    /// assert_eq!(PathValue::new("/Users/alice").abbreviated(&fs).as_str(), "~");
    /// assert_eq!(PathValue::new("/etc/hosts").abbreviated(&fs).as_str(), "/etc/hosts");
    /// ```
    #[must_use]
    pub fn abbreviated<F: FileSystem + ?Sized>(&self, fs: &F) -> PathValue {
        let home = fs.home_directory();
        let case_sensitive = fs.is_case_sensitive(self);

        let Some(rest) = strip_home_prefix(self.as_str(), home.as_str(), case_sensitive) else {
            return self.clone();
        };

        let separator = fs.path_separator();
        if rest.is_empty() || rest.strip_prefix(separator) == Some("") {
            PathValue::new("~")
        } else if rest.starts_with(separator) {
            PathValue::new(format!("~{rest}"))
        } else {
            PathValue::new("~").join(rest, fs)
        }
    }
}

/// Strip `home` from the start of `path`, returning the remainder.
fn strip_home_prefix<'a>(path: &'a str, home: &str, case_sensitive: bool) -> Option<&'a str> {
    if home.is_empty() {
        return None;
    }

    if case_sensitive {
        return path.strip_prefix(home);
    }

    let pattern = format!("^{}", regex::escape(home));
    let matcher = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(matcher) => matcher,
        Err(e) => {
            log::debug!("cannot build home prefix matcher for {home}: {e}");
            return None;
        }
    };

    matcher.find(path).map(|found| &path[found.end()..])
}
