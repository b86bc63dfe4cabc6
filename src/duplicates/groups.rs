//! Grouping of hashed files into duplicate groups.
//!
//! # Overview
//!
//! [`HashGrouper`] accumulates `(digest, file)` pairs as the scan produces
//! them. Files sharing a digest are kept in arrival order, and digests are
//! kept in the order they were first seen. [`HashGrouper::into_duplicates`]
//! drops every digest with a single file and returns the rest as
//! [`DuplicateGroup`]s.
//!
//! # Example
//!
//! ```
//! use dupescan::duplicates::HashGrouper;
//! use dupescan::scanner::FileEntry;
//! use std::path::PathBuf;
//!
//! let mut grouper = HashGrouper::new();
//! grouper.add([1u8; 32], FileEntry::new(PathBuf::from("a.txt"), 5));
//! grouper.add([2u8; 32], FileEntry::new(PathBuf::from("c.txt"), 5));
//! grouper.add([1u8; 32], FileEntry::new(PathBuf::from("b.txt"), 5));
//!
//! let groups = grouper.into_duplicates();
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].paths(), vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use crate::scanner::{hash_to_hex, FileEntry, Hash};

/// Confirmed duplicate group of files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// SHA-256 hash of the file content (32 bytes)
    pub hash: Hash,
    /// Files with this content, in discovery order
    pub files: Vec<FileEntry>,
}

impl DuplicateGroup {
    /// Create a new duplicate group.
    #[must_use]
    pub fn new(hash: Hash, files: Vec<FileEntry>) -> Self {
        Self { hash, files }
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total size of all files in this group.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    /// Total wasted space (all copies minus one).
    #[must_use]
    pub fn wasted_space(&self) -> u64 {
        match self.files.first() {
            Some(first) => self.total_size().saturating_sub(first.size),
            None => 0,
        }
    }

    /// Number of duplicate copies (total - 1 original).
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.files.len().saturating_sub(1)
    }

    /// Hash as hexadecimal string.
    #[must_use]
    pub fn hash_hex(&self) -> String {
        hash_to_hex(&self.hash)
    }

    /// Get just the paths of files in this group.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| f.path.clone()).collect()
    }
}

/// Insertion-ordered accumulator from digest to files.
#[derive(Debug, Default)]
pub struct HashGrouper {
    /// Position of each digest in `groups`
    index: HashMap<Hash, usize>,
    groups: Vec<DuplicateGroup>,
}

impl HashGrouper {
    /// Create an empty grouper.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `file` hashed to `hash`.
    pub fn add(&mut self, hash: Hash, file: FileEntry) {
        match self.index.get(&hash) {
            Some(&i) => self.groups[i].files.push(file),
            None => {
                self.index.insert(hash, self.groups.len());
                self.groups.push(DuplicateGroup::new(hash, vec![file]));
            }
        }
    }

    /// Number of distinct digests seen so far.
    #[must_use]
    pub fn distinct_hashes(&self) -> usize {
        self.groups.len()
    }

    /// Number of files added so far.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.groups.iter().map(DuplicateGroup::len).sum()
    }

    /// Keep only digests shared by two or more files.
    #[must_use]
    pub fn into_duplicates(self) -> Vec<DuplicateGroup> {
        self.groups.into_iter().filter(|g| g.len() > 1).collect()
    }
}
