// src/log.rs
use std::{fs, io, path::Path};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::config::consts::{LOG_DIR, LOG_FILE, LOG_FILTER};

/// Install the file logger (`.store/debug.log`).
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the background writer. With `to_stderr`, warnings and
/// errors are mirrored to the terminal as well (CLI).
pub fn init(to_stderr: bool) -> io::Result<WorkerGuard> {
    fs::create_dir_all(LOG_DIR)?;

    let appender = tracing_appender::rolling::never(Path::new(LOG_DIR), LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_filter(EnvFilter::new(LOG_FILTER));

    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .without_time()
            .with_filter(EnvFilter::new("warn"))
    });

    // A second init (tests, re-entry) is harmless: keep the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    Ok(guard)
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
