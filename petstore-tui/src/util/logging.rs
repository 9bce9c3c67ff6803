//! Logging setup
//!
//! The terminal belongs to the UI, so log output goes to a daily rolling
//! file instead. `log` records from the core crate are bridged into tracing
//! by the subscriber.

use std::path::Path;

use anyhow::{anyhow, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "petstore-tui.log";

/// Install the global subscriber writing under `log_dir`.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. Keep the returned
/// guard alive until exit so buffered lines are flushed.
pub fn init_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;

    Ok(guard)
}

/// Route panic reports to the log file.
///
/// Panics caught by an error boundary would otherwise print over the UI.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}
