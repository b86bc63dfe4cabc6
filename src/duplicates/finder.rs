//! Duplicate finder implementation.
//!
//! # Overview
//!
//! This module orchestrates the duplicate detection pipeline:
//! 1. **Walk** - Collect every candidate file under the root (lazy walker,
//!    collected so progress can show a total)
//! 2. **Hash** - Compute the SHA-256 of each file's full content
//! 3. **Group** - Keep digests shared by two or more files
//!
//! Files that cannot be read are logged and left out; they neither form nor
//! break a group. All digests and paths stay in memory until the scan ends,
//! so memory grows linearly with the number of files under the root.
//!
//! # Example
//!
//! ```no_run
//! use dupescan::duplicates::DuplicateFinder;
//! use std::path::Path;
//!
//! let finder = DuplicateFinder::with_defaults();
//! let (groups, summary) = finder.find_duplicates(Path::new(".")).unwrap();
//!
//! println!("Found {} duplicate groups", groups.len());
//! println!("Reclaimable space: {}", summary.reclaimable_display());
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use bytesize::ByteSize;

use super::groups::{DuplicateGroup, HashGrouper};
use crate::progress::{ProgressCallback, PHASE_HASHING, PHASE_WALKING};
use crate::scanner::{FileEntry, HashError, Hasher, ScanError, Walker, WalkerConfig, CHUNK_SIZE};

/// Configuration for the duplicate finder.
#[derive(Clone)]
pub struct FinderConfig {
    /// Walker configuration (ignored directories).
    pub walker_config: WalkerConfig,
    /// Bytes read per chunk while hashing.
    pub chunk_size: usize,
    /// Optional progress callback.
    pub progress_callback: Option<Arc<dyn ProgressCallback>>,
}

impl std::fmt::Debug for FinderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinderConfig")
            .field("walker_config", &self.walker_config)
            .field("chunk_size", &self.chunk_size)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<callback>"),
            )
            .finish()
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            walker_config: WalkerConfig::default(),
            chunk_size: CHUNK_SIZE,
            progress_callback: None,
        }
    }
}

impl FinderConfig {
    /// Set the walker configuration.
    #[must_use]
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    /// Set the hashing chunk size.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Set the progress callback.
    #[must_use]
    pub fn with_progress_callback(mut self, callback: Arc<dyn ProgressCallback>) -> Self {
        self.progress_callback = Some(callback);
        self
    }
}

/// Summary statistics from a duplicate scan.
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// Total number of candidate files discovered
    pub total_files: usize,
    /// Total size of all discovered files in bytes
    pub total_size: u64,
    /// Number of files hashed successfully
    pub hashed_files: usize,
    /// Number of files that could not be read
    pub failed_files: usize,
    /// Number of confirmed duplicate groups
    pub duplicate_groups: usize,
    /// Total number of duplicate files (excluding originals)
    pub duplicate_files: usize,
    /// Total space that can be reclaimed by removing duplicates
    pub reclaimable_space: u64,
    /// Duration of the entire scan
    pub scan_duration: Duration,
    /// Traversal errors encountered below the root
    pub scan_errors: Vec<ScanError>,
    /// Per-file read errors encountered while hashing
    pub hash_errors: Vec<HashError>,
}

impl ScanSummary {
    /// Format reclaimable space as human-readable string.
    #[must_use]
    pub fn reclaimable_display(&self) -> String {
        ByteSize::b(self.reclaimable_space).to_string()
    }

    /// Format total size as human-readable string.
    #[must_use]
    pub fn total_size_display(&self) -> String {
        ByteSize::b(self.total_size).to_string()
    }

    /// Whether any file or directory could not be read.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.scan_errors.is_empty() || !self.hash_errors.is_empty()
    }
}

/// Errors that can occur during duplicate finding.
#[derive(thiserror::Error, Debug)]
pub enum FinderError {
    /// The provided path does not exist.
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    /// The provided path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Duplicate finder that runs the walk → hash → group pipeline.
///
/// ```no_run
/// use dupescan::duplicates::{DuplicateFinder, FinderConfig};
/// use dupescan::scanner::{IgnoreSet, WalkerConfig};
/// use std::path::Path;
///
/// let ignore: IgnoreSet = ["/data/backups"].into_iter().collect();
/// let config = FinderConfig::default().with_walker_config(WalkerConfig::new(ignore));
/// let finder = DuplicateFinder::new(config);
///
/// let (groups, summary) = finder.find_duplicates(Path::new("/data")).unwrap();
/// println!("{} groups, {} files scanned", groups.len(), summary.total_files);
/// ```
pub struct DuplicateFinder {
    config: FinderConfig,
    hasher: Hasher,
}

impl DuplicateFinder {
    /// Create a new duplicate finder with the given configuration.
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        let hasher = Hasher::with_chunk_size(config.chunk_size);
        Self { config, hasher }
    }

    /// Create a new duplicate finder with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(FinderConfig::default())
    }

    /// Find all duplicate files under `path`.
    ///
    /// # Errors
    ///
    /// Returns `FinderError` if the path is empty, does not exist, or is not
    /// a directory. Unreadable files and directories below the root are not
    /// errors; they are recorded in the returned [`ScanSummary`].
    pub fn find_duplicates(
        &self,
        path: &Path,
    ) -> Result<(Vec<DuplicateGroup>, ScanSummary), FinderError> {
        let start_time = Instant::now();

        if path.as_os_str().is_empty() || !path.exists() {
            return Err(FinderError::PathNotFound(path.to_path_buf()));
        }
        if !path.is_dir() {
            return Err(FinderError::NotADirectory(path.to_path_buf()));
        }

        log::info!("Starting duplicate scan of {}", path.display());

        if let Some(ref callback) = self.config.progress_callback {
            callback.on_phase_start(PHASE_WALKING, 0);
        }

        let walker = Walker::new(path, self.config.walker_config.clone());
        let mut files = Vec::new();
        let mut scan_errors = Vec::new();

        for result in walker.walk() {
            match result {
                Ok(file) => {
                    if let Some(ref callback) = self.config.progress_callback {
                        callback.on_progress(files.len() + 1, &file.path.to_string_lossy());
                    }
                    files.push(file);
                }
                Err(e) => scan_errors.push(e),
            }
        }

        if let Some(ref callback) = self.config.progress_callback {
            callback.on_phase_end(PHASE_WALKING);
        }

        log::debug!("Discovered {} candidate files", files.len());

        let (groups, mut summary) = self.find_duplicates_from_files(files);
        summary.scan_errors = scan_errors;
        summary.scan_duration = start_time.elapsed();

        log::info!(
            "Scanned {} files ({}): {} duplicate groups, {} reclaimable, {} unreadable, {:.2?}",
            summary.total_files,
            summary.total_size_display(),
            summary.duplicate_groups,
            summary.reclaimable_display(),
            summary.failed_files + summary.scan_errors.len(),
            summary.scan_duration,
        );

        Ok((groups, summary))
    }

    /// Hash and group an already-collected list of files.
    ///
    /// Files that fail to hash are logged at `warn` and left out of every
    /// group.
    #[must_use]
    pub fn find_duplicates_from_files(
        &self,
        files: Vec<FileEntry>,
    ) -> (Vec<DuplicateGroup>, ScanSummary) {
        let start_time = Instant::now();
        let mut summary = ScanSummary {
            total_files: files.len(),
            total_size: files.iter().map(|f| f.size).sum(),
            ..Default::default()
        };

        if let Some(ref callback) = self.config.progress_callback {
            callback.on_phase_start(PHASE_HASHING, files.len());
        }

        let mut grouper = HashGrouper::new();

        for (i, file) in files.into_iter().enumerate() {
            if let Some(ref callback) = self.config.progress_callback {
                callback.on_progress(i + 1, &file.path.to_string_lossy());
            }

            match self.hasher.full_hash(&file.path) {
                Ok(hash) => {
                    log::trace!("Hashed {}", file.path.display());
                    summary.hashed_files += 1;
                    grouper.add(hash, file);
                }
                Err(e) => {
                    log::warn!("Error reading file {}: {}", file.path.display(), e);
                    summary.failed_files += 1;
                    summary.hash_errors.push(e);
                }
            }
        }

        if let Some(ref callback) = self.config.progress_callback {
            callback.on_phase_end(PHASE_HASHING);
        }

        log::debug!(
            "{} distinct digests across {} hashed files",
            grouper.distinct_hashes(),
            grouper.file_count()
        );
        let groups = grouper.into_duplicates();
        summary.duplicate_groups = groups.len();
        summary.duplicate_files = groups.iter().map(DuplicateGroup::duplicate_count).sum();
        summary.reclaimable_space = groups.iter().map(DuplicateGroup::wasted_space).sum();
        summary.scan_duration = start_time.elapsed();

        (groups, summary)
    }
}
