//! Plain-text listing of duplicate groups for the terminal.
//!
//! Each group's paths are printed one per line, followed by a line of 40
//! dashes. With no groups, a single notice is printed instead.

use std::io::{self, Write};

use crate::duplicates::DuplicateGroup;

/// Line printed after each group.
pub const GROUP_SEPARATOR: &str = "----------------------------------------";

/// Notice printed when the scan found nothing.
pub const NO_DUPLICATES_MESSAGE: &str = "No duplicate files found.";

/// Console formatter over a borrowed set of groups.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleOutput<'a> {
    groups: &'a [DuplicateGroup],
}

impl<'a> ConsoleOutput<'a> {
    /// Create a console formatter.
    #[must_use]
    pub fn new(groups: &'a [DuplicateGroup]) -> Self {
        Self { groups }
    }

    /// Write the listing.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        if self.groups.is_empty() {
            return writeln!(writer, "{}", NO_DUPLICATES_MESSAGE);
        }

        for group in self.groups {
            for file in &group.files {
                writeln!(writer, "{}", file.path.display())?;
            }
            writeln!(writer, "{}", GROUP_SEPARATOR)?;
        }
        Ok(())
    }
}
