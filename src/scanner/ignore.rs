//! Directories excluded from a scan.
//!
//! Matching is component-wise: ignoring `/data/b` excludes `/data/b` and
//! everything below it, but not the sibling `/data/bc`. Both the ignored
//! directories and the candidate paths go through
//! [`comparison_key`](super::path_utils::comparison_key) first, so `./b`,
//! `b/` and the absolute spelling of the same directory all match.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::path_utils::comparison_key;

/// A set of normalized directory paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    dirs: BTreeSet<PathBuf>,
}

impl IgnoreSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory. Returns `false` if an equivalent spelling was
    /// already present.
    pub fn insert(&mut self, dir: impl AsRef<Path>) -> bool {
        self.dirs.insert(comparison_key(dir.as_ref()))
    }

    /// Number of distinct ignored directories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    /// Whether nothing is ignored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Iterate over the normalized ignored directories in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }

    /// Whether `path` is an ignored directory or lies beneath one.
    #[must_use]
    pub fn is_ignored(&self, path: &Path) -> bool {
        if self.dirs.is_empty() {
            return false;
        }
        let key = comparison_key(path);
        self.dirs.iter().any(|dir| key.starts_with(dir))
    }
}

impl<P: AsRef<Path>> FromIterator<P> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<P: AsRef<Path>> Extend<P> for IgnoreSet {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for dir in iter {
            self.insert(dir);
        }
    }
}
