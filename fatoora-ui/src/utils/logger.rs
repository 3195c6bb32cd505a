//! Logging Infrastructure
//!
//! Structured logging setup for both interactive and headless runs. An
//! explicit `RUST_LOG` always wins over the configured level.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with defaults
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("info")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    // Daily rolling file when a log directory is configured and exists
    if let Some(dir) = log_dir
        && Path::new(dir).exists()
    {
        let file_appender = tracing_appender::rolling::daily(dir, "fatoora-front");
        subscriber.with_writer(file_appender).init();
        return;
    }

    subscriber.init();
}
