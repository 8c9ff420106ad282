//! Logging and tracing initialization.
//!
//! Diagnostics go to stderr by default; when `LoggingConfig.file` is set
//! the subscriber appends to that file instead (ANSI disabled), which is
//! how headless render jobs keep their logs.

use std::fs::{File, OpenOptions};
use std::sync::Mutex;

use crate::config::LoggingConfig;

/// Initialize the tracing subscriber with the given configuration.
///
/// `RUST_LOG` overrides the configured level filter. Safe to call more
/// than once; only the first call installs a subscriber.
pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true);

    match open_log_file(config) {
        Some(file) => {
            let builder = builder.with_writer(Mutex::new(file)).with_ansi(false);
            if config.json {
                tracing::subscriber::set_global_default(builder.json().finish()).ok();
            } else {
                tracing::subscriber::set_global_default(builder.finish()).ok();
            }
        }
        None => {
            if config.json {
                tracing::subscriber::set_global_default(builder.json().finish()).ok();
            } else {
                tracing::subscriber::set_global_default(builder.finish()).ok();
            }
        }
    }
}

/// Initialize logging with defaults (useful for tests and quick scripts).
pub fn init_default_logging() {
    init_logging(&LoggingConfig::default());
}

/// Open the configured log file for appending, creating parent directories.
/// Falls back to stderr (returns `None`) if the file cannot be opened.
fn open_log_file(config: &LoggingConfig) -> Option<File> {
    let path = config.file.as_ref()?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).ok();
        }
    }
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("Failed to open log file {path:?}: {e}");
            None
        }
    }
}
