//! Command-line interface definitions for dupescan.
//!
//! Without a path argument dupescan asks for the directory and the
//! directories to ignore on the terminal. Passing a path skips the prompts.
//!
//! ```bash
//! # Interactive
//! dupescan
//!
//! # Non-interactive, ignoring two directories
//! dupescan ~/Photos -i ~/Photos/.thumbnails -i ~/Photos/exports
//!
//! # Custom report path, debug logging
//! dupescan -v ~/Downloads --output /tmp/dupes.json
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Find duplicate files by content.
///
/// Every file under the target directory is hashed with SHA-256 and files
/// sharing a digest are reported, both on the console and in a JSON file.
#[derive(Debug, Parser)]
#[command(name = "dupescan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan (prompted for when omitted)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Directory to exclude, with everything below it (repeatable)
    #[arg(short, long = "ignore", value_name = "DIR")]
    pub ignore: Vec<PathBuf>,

    /// Report file path [default: duplicates.json]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Do not show the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Configuration file to use instead of the platform default
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
