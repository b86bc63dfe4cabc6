//! Directory walker implementation using walkdir.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing a directory tree
//! and collecting the files that take part in duplicate detection.
//!
//! # Features
//!
//! - Single-threaded, lazy traversal
//! - Deterministic order: children are visited sorted by file name
//! - Ignored directories are pruned, never descended into
//! - Symbolic links are not followed; a link to anything but a directory
//!   is yielded like a regular file and hashed through
//! - FIFOs, sockets and device nodes are skipped (reading them can block)
//! - Errors below the root are yielded, never fatal
//!
//! # Example
//!
//! ```no_run
//! use dupescan::scanner::{IgnoreSet, Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let ignore: IgnoreSet = ["/home/user/Downloads/.cache"].into_iter().collect();
//! let walker = Walker::new(Path::new("/home/user/Downloads"), WalkerConfig::new(ignore));
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(file) => println!("{}: {} bytes", file.path.display(), file.size),
//!         Err(e) => eprintln!("Warning: {}", e),
//!     }
//! }
//! ```

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::{FileEntry, ScanError, WalkerConfig};

/// Directory walker for file discovery.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Walker configuration
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given path.
    ///
    /// The root is not validated here; a missing root makes [`Walker::walk`]
    /// yield a single error.
    #[must_use]
    pub fn new(path: &Path, config: WalkerConfig) -> Self {
        Self {
            root: path.to_path_buf(),
            config,
        }
    }

    /// Walk the directory tree, yielding file entries.
    ///
    /// Returns a lazy iterator over [`FileEntry`] results. Errors are yielded
    /// as [`ScanError`] values rather than stopping iteration.
    ///
    /// ```no_run
    /// use dupescan::scanner::{Walker, WalkerConfig};
    /// use std::path::Path;
    ///
    /// let walker = Walker::new(Path::new("."), WalkerConfig::default());
    /// let files: Vec<_> = walker.walk().filter_map(Result::ok).collect();
    /// println!("Found {} files", files.len());
    /// ```
    pub fn walk(&self) -> impl Iterator<Item = Result<FileEntry, ScanError>> + '_ {
        let ignore = &self.config.ignore;

        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                if ignore.is_ignored(entry.path()) {
                    log::debug!("Ignoring {}", entry.path().display());
                    return false;
                }
                true
            })
            .filter_map(move |entry_result| match entry_result {
                Ok(entry) => self.process_entry(entry).map(Ok),
                Err(e) => Some(Err(self.handle_walkdir_error(e))),
            })
    }

    /// Turn a directory entry into a candidate file, or skip it.
    fn process_entry(&self, entry: DirEntry) -> Option<FileEntry> {
        let file_type = entry.file_type();

        if file_type.is_dir() {
            return None;
        }

        let size = if file_type.is_file() {
            entry.metadata().map(|m| m.len()).unwrap_or(0)
        } else if file_type.is_symlink() {
            match std::fs::metadata(entry.path()) {
                Ok(target) if target.is_dir() => {
                    log::trace!("Skipping directory symlink: {}", entry.path().display());
                    return None;
                }
                Ok(target) => target.len(),
                // Dangling link: still a candidate, hashing reports the failure
                Err(_) => 0,
            }
        } else {
            log::debug!("Skipping special file: {}", entry.path().display());
            return None;
        };

        Some(FileEntry::new(entry.into_path(), size))
    }

    /// Handle walkdir errors.
    fn handle_walkdir_error(&self, error: walkdir::Error) -> ScanError {
        use std::io::ErrorKind;

        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);

        match error.io_error().map(std::io::Error::kind) {
            Some(ErrorKind::PermissionDenied) => {
                log::warn!("Permission denied: {}", path.display());
                ScanError::PermissionDenied(path)
            }
            Some(ErrorKind::NotFound) => {
                log::debug!("Path not found (may have been deleted): {}", path.display());
                ScanError::NotFound(path)
            }
            _ => {
                log::warn!("Walker error for {}: {}", path.display(), error);
                ScanError::Io {
                    path,
                    source: std::io::Error::other(error.to_string()),
                }
            }
        }
    }
}
