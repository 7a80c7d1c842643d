use std::io;
use std::path::{Path, PathBuf};
use std::sync::Once;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Log file name inside the log directory
pub const LOG_FILE_NAME: &str = "uni-bijoy.log";

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file in the given directory (the TUI owns the terminal)
    File(PathBuf),
    /// Write to stderr (one-shot commands)
    Stderr,
}

impl LogTarget {
    fn default_filter(&self) -> &'static str {
        match self {
            LogTarget::File(_) => "uni_bijoy=info",
            LogTarget::Stderr => "uni_bijoy=warn",
        }
    }
}

/// Install the global tracing subscriber. Only the first call has any effect.
///
/// The filter comes from `RUST_LOG` when set.
pub fn init_tracing(target: LogTarget) -> Result<()> {
    if let LogTarget::File(dir) = &target {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(target.default_filter()));

        let result = match &target {
            LogTarget::File(dir) => {
                let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
                tracing_subscriber::fmt()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_env_filter(filter)
                    .try_init()
            }
            LogTarget::Stderr => tracing_subscriber::fmt()
                .with_writer(io::stderr)
                .with_target(false)
                .with_env_filter(filter)
                .try_init(),
        };

        // Another subscriber (e.g. a test harness) already owns the global slot
        let _ = result;
    });

    Ok(())
}

/// Full path of the log file for a directory target
pub fn log_file_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters() {
        assert_eq!(LogTarget::Stderr.default_filter(), "uni_bijoy=warn");
        assert_eq!(LogTarget::File(PathBuf::from("/tmp")).default_filter(), "uni_bijoy=info");
    }

    #[test]
    fn test_init_creates_log_directory_and_is_idempotent() {
        let temp = tempfile::TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("logs");

        init_tracing(LogTarget::File(dir.clone())).unwrap();
        assert!(dir.is_dir());

        // Second call must not panic even though a subscriber is installed
        init_tracing(LogTarget::Stderr).unwrap();
    }

    #[test]
    fn test_log_file_path() {
        let path = log_file_path(Path::new("/var/log/app"));
        assert_eq!(path, PathBuf::from("/var/log/app/uni-bijoy.log"));
    }
}
