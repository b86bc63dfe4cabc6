//! Orchestration of a scan: gather the request, find duplicates, report.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::config::Config;
use crate::duplicates::{DuplicateFinder, FinderConfig, ScanSummary};
use crate::error::ExitCode;
use crate::output::{Reporter, SaveStatus};
use crate::progress::Progress;
use crate::prompt::{gather_request, InputProvider, ScanRequest};
use crate::scanner::WalkerConfig;

pub const COMPLETED_MESSAGE: &str = "Duplicate file scan completed.";

/// Prefix of the console line reporting a root that cannot be scanned.
pub const ERROR_PREFIX: &str = "Error: ";

/// A configured scan runner.
#[derive(Debug, Clone)]
pub struct App {
    config: Config,
    show_progress: bool,
}

impl App {
    /// Create a runner. The progress bar is shown only when `config` allows
    /// it and `quiet` is off.
    #[must_use]
    pub fn new(config: Config, quiet: bool) -> Self {
        let show_progress = config.progress && !quiet;
        Self {
            config,
            show_progress,
        }
    }

    /// Work out what to scan: the path given on the command line, or the
    /// answers to the interactive prompts. Configured ignores apply either way.
    ///
    /// # Errors
    ///
    /// Fails if the terminal cannot be read or written.
    pub fn request<P: InputProvider + ?Sized>(&self, cli: &Cli, input: &mut P) -> Result<ScanRequest> {
        let mut request = match cli.path {
            Some(ref path) => ScanRequest {
                root: path.clone(),
                ..ScanRequest::default()
            },
            None => gather_request(input)?,
        };
        request.ignore.extend(self.config.ignore.iter());
        Ok(request)
    }

    /// Scan `request.root` and write the listing and status lines to `out`.
    ///
    /// A root that is missing or not a directory is reported on `out` and
    /// ends the run without a report file. Like unreadable files and an
    /// unwritable report file, it does not change the exit status.
    ///
    /// # Errors
    ///
    /// Fails only if `out` cannot be written.
    pub fn run<W: Write>(&self, request: ScanRequest, out: &mut W) -> Result<ExitCode> {
        if !request.ignore.is_empty() {
            log::info!("Ignoring {} directories", request.ignore.len());
            for dir in request.ignore.iter() {
                log::debug!("Ignored directory: {}", dir.display());
            }
        }

        let finder_config = FinderConfig::default()
            .with_walker_config(WalkerConfig::new(request.ignore))
            .with_progress_callback(Arc::new(Progress::new(!self.show_progress)));
        let finder = DuplicateFinder::new(finder_config);

        let (groups, summary) = match finder.find_duplicates(&request.root) {
            Ok(found) => found,
            Err(e) => {
                log::debug!("Cannot scan {}: {}", display_root(&request.root), e);
                writeln!(out, "{}{}", ERROR_PREFIX, e).context("Failed to print results")?;
                return Ok(ExitCode::Success);
            }
        };
        log_errors(&summary);

        let reporter = Reporter::new(&self.config.output);
        log::debug!("Writing report to {}", reporter.output_path().display());
        let status = reporter
            .report(&groups, out)
            .context("Failed to print results")?;

        write_completion(out, &status).context("Failed to print results")?;
        Ok(ExitCode::Success)
    }
}

fn write_completion<W: Write>(out: &mut W, status: &SaveStatus) -> std::io::Result<()> {
    match status {
        SaveStatus::Saved(path) => writeln!(out, "{} Results saved to {}", COMPLETED_MESSAGE, path.display())?,
        SaveStatus::Failed(_) => writeln!(out, "{}", COMPLETED_MESSAGE)?,
    }
    out.flush()
}

fn log_errors(summary: &ScanSummary) {
    if !summary.has_errors() {
        return;
    }
    log::warn!(
        "{} files and {} directory entries could not be read",
        summary.failed_files,
        summary.scan_errors.len()
    );
}

/// Scan the directories named on the command line, or asked for on `input`,
/// and print the results to `out`.
///
/// # Errors
///
/// See [`App::request`] and [`App::run`].
pub fn scan<P, W>(cli: &Cli, config: Config, input: &mut P, out: &mut W) -> Result<ExitCode>
where
    P: InputProvider + ?Sized,
    W: Write,
{
    let app = App::new(config, cli.quiet);
    let request = app.request(cli, input)?;
    log::debug!("Scanning {}", display_root(&request.root));
    app.run(request, out)
}

fn display_root(root: &Path) -> String {
    if root.as_os_str().is_empty() {
        "<empty path>".to_string()
    } else {
        root.display().to_string()
    }
}
