mod classify;
mod config;
mod tui;

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::config::{CliArgs, Commands, Config};

fn main() -> Result<()> {
    let cli = CliArgs::parse();

    let config = match Config::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: {e}; using defaults");
            Config::load_defaults(&cli)
        }
    };

    // Logs go to a file, the terminal belongs to the board.
    let _log_guard = init_logging(&config.log_level, &config.log_file);
    tracing::info!("taskboard starting");

    match cli.command {
        Some(Commands::Classify { texts }) => {
            classify::show_classification(&texts);
        }
        Some(Commands::Tui) | None => {
            tui::run(&config)?;
        }
    }
    Ok(())
}

/// Returns a guard that must live until exit so buffered lines get flushed.
/// Logging is skipped, with a warning, when the log file can't be opened.
fn init_logging(level: &str, log_path: &Path) -> Option<WorkerGuard> {
    let file_appender = match build_file_appender(log_path) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            return None;
        }
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

fn build_file_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let file_name = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("invalid log file path {}", log_path.display()))?;
    let log_dir = match log_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(log_dir)
        .with_context(|| format!("cannot open log file {}", log_path.display()))
}
