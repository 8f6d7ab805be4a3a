//! Layered configuration for the `taskboard` binary.
//!
//! Priority, highest first: CLI flags (and their environment variables),
//! the TOML config file, compiled defaults. A missing default config file is
//! not an error; an explicit `--config` path that can't be read is.

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

const DEFAULT_POLL_TIMEOUT_MS: u64 = 250;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),
}

#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(about = "Keyword-prioritized tasks with a weekly calendar", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a TOML config file
    #[arg(long, global = true, env = "TASKBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "taskboard_core=trace"
    #[arg(long, global = true, env = "TASKBOARD_LOG")]
    pub log_level: Option<String>,

    /// Log file path (defaults to taskboard.log in the temp dir)
    #[arg(long, global = true, env = "TASKBOARD_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Open the terminal board
    Tui,
    /// Show the priority tier each text would get
    Classify {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        texts: Vec<String>,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    ui: UiFileConfig,
    logging: LoggingFileConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UiFileConfig {
    poll_timeout_ms: Option<u64>,
    show_completed: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LoggingFileConfig {
    level: Option<String>,
    file: Option<PathBuf>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub poll_timeout_ms: u64,
    pub show_completed: bool,
    pub log_level: String,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_timeout_ms: DEFAULT_POLL_TIMEOUT_MS,
            show_completed: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: std::env::temp_dir().join("taskboard.log"),
        }
    }
}

impl Config {
    pub fn load(args: &CliArgs) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => read_config_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => read_config_file(&path)?,
                _ => ConfigFile::default(),
            },
        };
        Ok(Self::resolve(file, args))
    }

    /// Defaults plus CLI flags, for when the config file is unusable.
    pub fn load_defaults(args: &CliArgs) -> Self {
        Self::resolve(ConfigFile::default(), args)
    }

    fn resolve(file: ConfigFile, args: &CliArgs) -> Self {
        let defaults = Self::default();
        Self {
            poll_timeout_ms: file.ui.poll_timeout_ms.unwrap_or(defaults.poll_timeout_ms),
            show_completed: file.ui.show_completed.unwrap_or(defaults.show_completed),
            log_level: args
                .log_level
                .clone()
                .or(file.logging.level)
                .unwrap_or(defaults.log_level),
            log_file: args
                .log_file
                .clone()
                .or(file.logging.file)
                .unwrap_or(defaults.log_file),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("taskboard").join("config.toml"))
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&contents)?)
}
