//! dupescan - duplicate file finder
//!
//! Walks a directory tree, hashes every file with SHA-256 and reports the
//! files whose contents are identical, on the console and as a JSON report.
//!
//! The pipeline is split into:
//! - [`scanner`]: traversal with ignored directories, content hashing
//! - [`duplicates`]: grouping by digest and the scan driver
//! - [`output`]: the JSON report and console listing
//! - [`app`]: prompts, configuration and reporting glued together

pub mod app;
pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod progress;
pub mod prompt;
pub mod scanner;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::ExitCode;
use crate::prompt::Prompter;

/// Run dupescan with parsed command-line arguments.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the terminal cannot
/// be read or written. Problems with the scanned directory are reported on
/// the console instead.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.apply_cli(&cli);
    log::debug!("Effective configuration: {:?}", config);

    let mut input = Prompter::stdio();
    let mut out = std::io::stdout();
    app::scan(&cli, config, &mut input, &mut out)
}
