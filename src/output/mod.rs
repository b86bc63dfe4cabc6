//! Output formatters for duplicate scan results.
//!
//! This module provides the two outputs of a scan:
//! - [`json`]: the report file, a digest → paths mapping
//! - [`console`]: the human-readable listing
//!
//! [`Reporter`] combines them: it saves the report file, prints the listing,
//! then prints whether the save succeeded. A failed save never stops the
//! listing.
//!
//! # Example
//!
//! ```no_run
//! use dupescan::duplicates::DuplicateFinder;
//! use dupescan::output::Reporter;
//! use std::path::Path;
//!
//! let finder = DuplicateFinder::with_defaults();
//! let (groups, _summary) = finder.find_duplicates(Path::new(".")).unwrap();
//!
//! let reporter = Reporter::new("duplicates.json");
//! reporter.report(&groups, &mut std::io::stdout()).unwrap();
//! ```

pub mod console;
pub mod json;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

// Re-export main types
pub use console::{ConsoleOutput, GROUP_SEPARATOR, NO_DUPLICATES_MESSAGE};
pub use json::{JsonDuplicateGroup, JsonReport};

use crate::duplicates::DuplicateGroup;

/// Default report file name, relative to the current directory.
pub const DEFAULT_OUTPUT_FILE: &str = "duplicates.json";

/// Errors that can occur while writing the report file.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error while writing or reading the report file
    #[error("{path}: {source}")]
    Io {
        /// Report file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Result of the report-file step.
#[derive(Debug)]
pub enum SaveStatus {
    /// The report was written to this path.
    Saved(PathBuf),
    /// The report could not be written.
    Failed(ReportError),
}

/// Writes the report file and the console listing.
#[derive(Debug, Clone)]
pub struct Reporter {
    output_path: PathBuf,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_FILE)
    }
}

impl Reporter {
    /// Create a reporter writing to `output_path`.
    #[must_use]
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    /// Where the report file is written.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Save the report file, print the listing and the save status to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `out` fails. A failed save is
    /// reported through the returned [`SaveStatus`].
    pub fn report<W: Write>(&self, groups: &[DuplicateGroup], out: &mut W) -> io::Result<SaveStatus> {
        let status = match JsonReport::new(groups).save(&self.output_path) {
            Ok(()) => SaveStatus::Saved(self.output_path.clone()),
            Err(e) => {
                log::error!("Failed to write {}: {}", self.output_path.display(), e);
                SaveStatus::Failed(e)
            }
        };

        ConsoleOutput::new(groups).write_to(out)?;

        match status {
            SaveStatus::Saved(ref path) => writeln!(out, "Results saved to {}", path.display())?,
            SaveStatus::Failed(ref e) => writeln!(out, "Error saving results: {}", e)?,
        }

        Ok(status)
    }
}
