//! Application logging functionality
//!
//! Logs go to stderr, and with `--log-file` also to a daily file under
//! ~/.config/mtex/logs/.

use crate::core::config_file::ConfigFile;
use anyhow::Context;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::config_dir().join("logs")
}

/// Initialize the logs directory
pub fn initialize_logs_directory() -> anyhow::Result<PathBuf> {
    let logs_dir = logs_dir();
    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create logs directory {:?}", logs_dir))?;
    Ok(logs_dir)
}

/// Filter used when `RUST_LOG` is not set.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "mtex=info",
        1 => "mtex=debug",
        _ => "mtex=trace",
    }
}

/// Install the global subscriber. The returned guard flushes the log file
/// when dropped and must be held until the program ends.
pub fn init(verbose: u8, log_file: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter());

    let (file_layer, guard) = if log_file {
        let dir = initialize_logs_directory()?;
        let appender = tracing_appender::rolling::daily(dir, "mtex.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(filter());
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install the log subscriber")?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(default_directive(0), "mtex=info");
        assert_eq!(default_directive(1), "mtex=debug");
        assert_eq!(default_directive(5), "mtex=trace");
    }

    #[test]
    fn test_logs_live_in_config_dir() {
        assert!(logs_dir().starts_with(ConfigFile::config_dir()));
        assert!(logs_dir().ends_with("mtex/logs"));
    }
}
