//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber that carries all diagnostic
//! output. Because the terminal is owned by the UI renderer, log lines go to
//! a file in the data directory instead of stdout.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file-based log output.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters events based on the configured trace level
/// 2. Formats them with the standard compact formatter (ANSI disabled)
/// 3. Appends to `regbrowse.log` in the data directory
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `RUST_LOG` environment variable (highest priority)
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if the directory or log file cannot be created
///   (observability is optional)
/// - Idempotent: safe to call multiple times (only the first call takes
///   effect)
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = config.data_dir.clone();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let log_path = data_dir.join(crate::infrastructure::paths::LOG_FILE);
    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
    else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(std::sync::Mutex::new(log_file));

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    let _ = subscriber.try_init();
}
