//! Interactive collection of the scan target and ignored directories.
//!
//! The questions go through [`InputProvider`], so the same dialogue runs
//! against the terminal ([`Prompter::stdio`]) or in-memory buffers.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::scanner::IgnoreSet;

pub const ROOT_PROMPT: &str = "Enter the target directory path: ";
pub const IGNORE_QUESTION: &str = "Do you want to ignore specific directories? (yes/no): ";
pub const IGNORE_INSTRUCTIONS: &str =
    "Enter directories to ignore (one per line). Type 'done' when finished:";
pub const IGNORE_PROMPT: &str = "Ignore path: ";

/// Line-based question and answer channel.
pub trait InputProvider {
    /// Show `message` and read one answer, trimmed.
    ///
    /// Returns `Ok(None)` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>>;

    /// Show a line of text that expects no answer.
    fn notice(&mut self, message: &str) -> io::Result<()>;
}

/// [`InputProvider`] over any reader and writer.
#[derive(Debug)]
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter reading answers from `reader`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect what was shown.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter on the process terminal.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InputProvider for Prompter<R, W> {
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", message)?;
        self.writer.flush()
    }
}

/// What the user asked to scan.
#[derive(Debug, Clone, Default)]
pub struct ScanRequest {
    /// Directory to scan, as typed.
    pub root: PathBuf,
    /// Directories to leave out.
    pub ignore: IgnoreSet,
}

/// Run the dialogue: target directory, whether to ignore anything, then
/// ignore paths until `done`.
///
/// An empty target, or end of input in its place, is passed through as an
/// empty path; rejecting it is up to the scan. End of input while reading
/// ignore paths finishes the list, and blank lines are skipped.
///
/// # Errors
///
/// Returns an error if reading from or writing to the terminal fails.
pub fn gather_request<P: InputProvider + ?Sized>(input: &mut P) -> io::Result<ScanRequest> {
    let root = input.prompt(ROOT_PROMPT)?.unwrap_or_default();
    let mut request = ScanRequest {
        root: PathBuf::from(root),
        ignore: IgnoreSet::new(),
    };

    let wants_ignore = input
        .prompt(IGNORE_QUESTION)?
        .is_some_and(|answer| is_yes(&answer));
    if !wants_ignore {
        return Ok(request);
    }

    input.notice(IGNORE_INSTRUCTIONS)?;
    while let Some(line) = input.prompt(IGNORE_PROMPT)? {
        if line.eq_ignore_ascii_case("done") {
            break;
        }
        if line.is_empty() {
            continue;
        }
        if request.ignore.insert(&line) {
            log::debug!("Ignoring {}", line);
        }
    }

    Ok(request)
}

fn is_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}
