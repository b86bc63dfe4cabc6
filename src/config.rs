//! Application configuration.
//!
//! Settings are layered with `figment`, later layers winning:
//!
//! 1. built-in defaults
//! 2. `config.toml` in the platform config directory, or the file given
//!    with `--config`
//! 3. `DUPESCAN_*` environment variables (e.g. `DUPESCAN_OUTPUT=out.json`,
//!    `DUPESCAN_IGNORE=[/a, /b]`)
//! 4. command-line flags ([`Config::apply_cli`])
//!
//! ```toml
//! output = "reports/duplicates.json"
//! progress = false
//! ignore = ["/home/me/.cache", "/home/me/node_modules"]
//! ```

use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::output::DEFAULT_OUTPUT_FILE;

/// Prefix of the environment variables read into [`Config`].
pub const ENV_PREFIX: &str = "DUPESCAN_";

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors raised while loading configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    /// A layer holds a value of the wrong type or malformed TOML.
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report file path.
    pub output: PathBuf,
    /// Show the progress bar.
    pub progress: bool,
    /// Directories always excluded from scans.
    pub ignore: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            progress: true,
            ignore: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// A missing default config file is not an error; a missing `explicit`
    /// file is.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `explicit` does not exist or a layer
    /// cannot be parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Some(path.to_path_buf())
            }
            None => Self::default_path(),
        };

        match file {
            Some(ref path) => log::debug!("Reading configuration from {}", path.display()),
            None => log::debug!("No configuration directory available"),
        }

        Self::figment(file.as_deref())
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| ConfigError::Invalid(Box::new(e)))
    }

    /// Defaults plus the TOML file at `file`, without the environment layer.
    #[must_use]
    pub fn figment(file: Option<&Path>) -> Figment {
        let figment = Figment::from(Serialized::defaults(Self::default()));
        match file {
            Some(path) => figment.merge(Toml::file(path)),
            None => figment,
        }
    }

    /// The platform-specific default config file path.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "dupescan").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Overlay command-line flags.
    ///
    /// `--output` replaces the configured path, `--no-progress` turns the
    /// bar off, and `--ignore` directories are added to the configured ones.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref output) = cli.output {
            self.output = output.clone();
        }
        if cli.no_progress {
            self.progress = false;
        }
        self.ignore.extend(cli.ignore.iter().cloned());
    }
}
