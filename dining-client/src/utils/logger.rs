//! Logging Infrastructure
//!
//! Structured logging through `tracing`. Stderr by default so log lines do
//! not interleave with the shell output on stdout; a daily rolling file when
//! a log directory is configured.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` wins over `log_level` when set. Returns `false` when a global
/// subscriber was already installed; that one stays in place, so tests and
/// embedders that set up tracing first can still call this.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) -> bool {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "dining-client");
            let installed = subscriber
                .with_ansi(false)
                .with_writer(file_appender)
                .try_init()
                .is_ok();
            return report(installed);
        }
    }

    report(subscriber.with_writer(std::io::stderr).try_init().is_ok())
}

fn report(installed: bool) -> bool {
    if !installed {
        tracing::debug!("Logger already initialized, keeping existing subscriber");
    }
    installed
}
