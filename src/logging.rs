use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

const DEFAULT_FILTER: &str = "resort_explorer=info";

pub fn default_log_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "resort-explorer", "resort-explorer")
        .map(|dirs| dirs.data_local_dir().join("logs").join("resort-explorer.log"))
}

fn open_log_file(path: &Path) -> std::io::Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::OpenOptions::new().create(true).append(true).open(path)
}

/// Route `tracing` output to a log file; the terminal belongs to the UI.
///
/// When no file can be opened, events are discarded rather than written
/// over the interface.
pub fn init(path: Option<PathBuf>) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let opened = path
        .or_else(default_log_path)
        .map(|p| open_log_file(&p).map(|file| (p, file)));

    let mut log_path = None;
    let (writer, guard) = match opened {
        Some(Ok((p, file))) => {
            log_path = Some(p);
            tracing_appender::non_blocking(file)
        }
        Some(Err(e)) => {
            eprintln!("Warning: cannot open log file ({e}); logging disabled");
            tracing_appender::non_blocking(std::io::sink())
        }
        None => tracing_appender::non_blocking(std::io::sink()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    let _ = LOG_GUARD.set(guard);

    if let Some(p) = log_path {
        tracing::info!(path = %p.display(), "logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("logs").join("app.log");
        assert!(open_log_file(&path).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resort-explorer.log");
        std::fs::write(&path, "first\n").unwrap();

        let mut file = open_log_file(&path).unwrap();
        std::io::Write::write_all(&mut file, b"second\n").unwrap();
        drop(file);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }
}
