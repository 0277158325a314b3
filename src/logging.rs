use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const FILTER_ENV: &str = "BUDGETRACK_LOG";
const FILE_ENV: &str = "BUDGETRACK_LOG_FILE";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// One-shot commands log to stderr.
pub(crate) fn init_cli() {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// The TUI owns the terminal, so it only logs when `BUDGETRACK_LOG_FILE` is set.
pub(crate) fn init_tui() -> Result<()> {
    let Some(path) = std::env::var_os(FILE_ENV) else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.to_string_lossy()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
