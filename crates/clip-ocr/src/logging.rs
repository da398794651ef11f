//! Tracing setup: console output plus a daily rolling JSON log file.
//!
//! Launched from Finder the accessory has no terminal, so the file layer is
//! where diagnostics end up.

use crate::config::Config;

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set.
pub(crate) const DEFAULT_FILTER: &str = "clip_ocr=debug,clip_ocr_core=debug";

/// Directory for rolling log files.
pub(crate) fn log_dir() -> Option<PathBuf> {
    Config::project_dirs().map(|dirs| dirs.data_dir().join("logs"))
}

/// Install the global subscriber.
///
/// Falls back to console-only logging if the log directory is unusable.
pub(crate) fn init(log_dir: Option<&Path>) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_appender = log_dir.and_then(|dir| {
        RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("clip-ocr")
            .filename_suffix("log")
            .build(dir)
            .map_err(|e| eprintln!("File logging disabled: {}", e))
            .ok()
    });

    let file_layer = file_appender.map(|appender| {
        fmt::layer()
            .json()
            .with_writer(appender)
            .with_ansi(false)
    });

    let console_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();
}
