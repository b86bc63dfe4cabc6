//! JSON report of duplicate groups.
//!
//! # Output Schema
//!
//! A single object mapping each shared digest to the paths that produced it,
//! in discovery order. Groups appear in the order their digest was first
//! seen. Indentation is four spaces.
//!
//! ```json
//! {
//!     "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824": [
//!         "photos/a.txt",
//!         "photos/b.txt"
//!     ]
//! }
//! ```
//!
//! A scan without duplicates produces `{}`.

use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::ser::{Serialize, Serializer};
use serde_json::ser::PrettyFormatter;

use super::ReportError;
use crate::duplicates::DuplicateGroup;

/// Indentation used by the pretty printer.
const INDENT: &[u8] = b"    ";

/// A single duplicate group in JSON format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonDuplicateGroup {
    /// SHA-256 hash as hexadecimal string (64 characters)
    pub hash: String,
    /// Paths of all files in the group, as discovered
    pub files: Vec<String>,
}

impl JsonDuplicateGroup {
    /// Create a JSON duplicate group from a DuplicateGroup.
    #[must_use]
    pub fn from_duplicate_group(group: &DuplicateGroup) -> Self {
        Self {
            hash: group.hash_hex(),
            files: group
                .files
                .iter()
                .map(|f| f.path.to_string_lossy().into_owned())
                .collect(),
        }
    }
}

/// The complete report: an ordered digest → paths mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonReport {
    /// Groups in report order
    pub duplicates: Vec<JsonDuplicateGroup>,
}

impl Serialize for JsonReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.duplicates.iter().map(|g| (&g.hash, &g.files)))
    }
}

impl JsonReport {
    /// Build a report from duplicate groups.
    ///
    /// ```
    /// use dupescan::output::JsonReport;
    ///
    /// let mut buffer = Vec::new();
    /// JsonReport::new(&[]).write_to(&mut buffer).unwrap();
    /// assert_eq!(buffer, b"{}\n");
    /// ```
    #[must_use]
    pub fn new(groups: &[DuplicateGroup]) -> Self {
        Self {
            duplicates: groups
                .iter()
                .map(JsonDuplicateGroup::from_duplicate_group)
                .collect(),
        }
    }

    /// Write the pretty-printed report, followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        {
            let mut serializer = serde_json::Serializer::with_formatter(
                &mut *writer,
                PrettyFormatter::with_indent(INDENT),
            );
            self.serialize(&mut serializer)?;
        }
        writer.write_all(b"\n")
    }

    /// Write the report to `path`, replacing any previous contents.
    ///
    /// The report is written to a temporary file beside `path` and then
    /// renamed over it, so readers never observe a partial report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the temporary file cannot be created or
    /// written, or the rename fails.
    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        let io_err = |source: std::io::Error| ReportError::Io {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            self.write_to(&mut writer).map_err(io_err)?;
            writer.flush().map_err(io_err)?;
        }
        temp.as_file().sync_all().map_err(io_err)?;
        set_report_permissions(temp.as_file(), path).map_err(io_err)?;

        temp.persist(path).map_err(|e| io_err(e.error))?;
        log::debug!("Wrote report to {}", path.display());
        Ok(())
    }

    /// Read a report written by [`JsonReport::save`].
    ///
    /// Keys come back sorted; in-group path order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<BTreeMap<String, Vec<String>>, ReportError> {
        let content = fs::read_to_string(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Give the new report the permissions of the file it replaces, or the usual
/// `0644` when there is none (temporary files start out as `0600`).
#[cfg(unix)]
fn set_report_permissions(file: &fs::File, target: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match fs::metadata(target) {
        Ok(existing) => existing.permissions(),
        Err(_) => fs::Permissions::from_mode(0o644),
    };
    file.set_permissions(permissions)
}

#[cfg(not(unix))]
fn set_report_permissions(_file: &fs::File, _target: &Path) -> std::io::Result<()> {
    Ok(())
}
