//! Logging setup: console plus a plain-text log file

use anyhow::Context;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_DIR_VAR: &str = "JOBALERTS_LOG_DIR";
const LOG_FILE: &str = "bot.log";
const DEFAULT_FILTER: &str = "info";

/// Initialise the global subscriber.
///
/// Events go to stderr and to `bot.log` in `JOBALERTS_LOG_DIR` (default: the
/// working directory). Keep the returned guard alive until shutdown so
/// buffered lines are flushed.
pub fn init_logging() -> anyhow::Result<WorkerGuard> {
    let dir = std::env::var(LOG_DIR_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory: {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
