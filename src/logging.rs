use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TICKETBOARD_LOG";
const DEFAULT_FILTER: &str = "info";
const LOG_FILE_PREFIX: &str = "ticketboard.log";

/// Send tracing output to a daily rolling JSON file under `logs_dir`.
///
/// The terminal belongs to the TUI, so nothing is written to stdout/stderr.
/// The returned guard flushes pending lines when dropped and must be held
/// for the life of the program. Returns `None` if the directory or the log
/// file cannot be opened; the app then runs without logs.
pub fn init_logging(logs_dir: &Path, config_level: Option<&str>) -> Option<WorkerGuard> {
    if std::fs::create_dir_all(logs_dir).is_err() {
        return None;
    }

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(logs_dir)
        .ok()?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry()
        .with(build_env_filter(config_level))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_target(true),
        );

    // Already set (e.g. in tests): keep the guard anyway.
    let _ = tracing::subscriber::set_global_default(subscriber);

    Some(guard)
}

/// Precedence: `TICKETBOARD_LOG` > config `log_level` > `info`.
fn build_env_filter(config_level: Option<&str>) -> EnvFilter {
    let from_env = std::env::var(LOG_ENV).ok();
    pick_filter(from_env.as_deref(), config_level)
}

fn pick_filter(from_env: Option<&str>, config_level: Option<&str>) -> EnvFilter {
    [from_env, config_level]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .find_map(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
