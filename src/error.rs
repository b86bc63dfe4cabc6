//! Process exit codes.

/// Exit codes for dupescan.
///
/// - 0: the scan completed, with or without duplicates, even if the report
///   file could not be written
/// - 1: the scan could not run (bad root, no input, bad configuration)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// The scan completed.
    Success = 0,
    /// An error prevented the scan.
    GeneralError = 1,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix used in error messages.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "DS000",
            Self::GeneralError => "DS001",
        }
    }
}
