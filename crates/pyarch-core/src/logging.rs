//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "PYARCH_LOG";

const LOG_FILE_NAME: &str = "pyarchitect.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/pyarchitect/logs/` because the TUI
/// owns stdout and headless mode prints NDJSON there.
/// Log level is controlled by the `PYARCH_LOG` environment variable.
///
/// # Examples
/// ```bash
/// PYARCH_LOG=debug pyarchitect
/// PYARCH_LOG=pyarch_genai=trace pyarchitect
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_filter()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("PyArchitect starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Filter used when `PYARCH_LOG` is unset or invalid
fn default_filter() -> &'static str {
    "pyarchitect=info,pyarch_core=info,pyarch_genai=info,pyarch_app=info,pyarch_tui=info,warn"
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("pyarchitect").join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_under_app_directory() {
        let path = get_current_log_file().unwrap();
        assert!(path.ends_with("pyarchitect/logs/pyarchitect.log"));
    }

    #[test]
    fn test_default_filter_parses() {
        let filter = EnvFilter::try_new(default_filter());
        assert!(filter.is_ok());
    }
}
