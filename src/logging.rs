use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log level.
pub const LOG_ENV: &str = "SLASHPAD_LOG";

const LOG_FILE_NAME: &str = "slashpad.log";

/// `~/.local/state/slashpad/slashpad.log`
pub fn default_log_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".local");
        path.push("state");
        path.push("slashpad");
        path.push(LOG_FILE_NAME);
        path
    })
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs a file-backed subscriber. The terminal belongs to the UI, so
/// nothing is ever written to stdout or stderr.
///
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init(level: &str, path: &Path) -> Result<Option<WorkerGuard>> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .map_or_else(|| LOG_FILE_NAME.into(), |name| name.to_os_string());

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    match tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
    {
        Ok(()) => Ok(Some(guard)),
        // Someone else already installed a subscriber; theirs wins.
        Err(_) => Ok(None),
    }
}

/// Like [`init`], but a log sink that cannot be opened only costs the log
/// file. One line goes to stderr before the terminal is taken over.
pub fn init_or_disable(level: &str, path: Option<&Path>) -> Option<WorkerGuard> {
    let path = path?;
    match init(level, path) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("slashpad: file logging disabled: {err:#}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("app.log");
        let guard = init("debug", &path).unwrap();
        tracing::info!("hello");
        drop(guard);
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn test_unwritable_log_directory_disables_logging() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("app.log");

        assert!(init("info", &path).is_err());
        assert!(init_or_disable("info", Some(&path)).is_none());
        assert!(init_or_disable("info", None).is_none());
    }
}
