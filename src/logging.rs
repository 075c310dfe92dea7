//! `tracing` subscriber setup.
//!
//! The interactive view owns stdout, so it logs to a file. `--once` logs to
//! stderr. Both read their filter from `GIMME_LOG`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const ENV_LOG: &str = "GIMME_LOG";
pub const ENV_LOG_FILE: &str = "GIMME_LOG_FILE";
pub const DEFAULT_FILTER: &str = "info";

/// Filter from `GIMME_LOG`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `<cache dir>/gimme/gimme.log`, if the platform has a cache directory.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("gimme").join("gimme.log"))
}

/// `GIMME_LOG_FILE` if set and non-blank, else [`default_log_path`].
pub fn log_path_from_env() -> Option<PathBuf> {
    match std::env::var(ENV_LOG_FILE) {
        Ok(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
        _ => default_log_path(),
    }
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to `path`.
pub fn init_file(path: &Path) -> Result<()> {
    let file = open_log_file(path)?;
    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;
    Ok(())
}

/// Install the global subscriber writing to stderr.
pub fn init_stderr() -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_open_log_file_creates_parents_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("gimme.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());

        fs::write(&path, "first\n").unwrap();
        let mut file = open_log_file(&path).unwrap();
        io::Write::write_all(&mut file, b"second\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_file_layer_writes_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gimme.log");
        let file = open_log_file(&path).unwrap();

        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        );
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(count = 2, "Fetched categories");
        });

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Fetched categories"));
        assert!(contents.contains("count=2"));
        assert!(!contents.contains('\x1b'));
    }

    #[test]
    fn test_default_log_path_shape() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("gimme/gimme.log"));
        }
    }

    #[test]
    #[serial]
    fn test_log_path_from_env_override() {
        std::env::set_var(ENV_LOG_FILE, "/tmp/custom-gimme.log");
        assert_eq!(
            log_path_from_env(),
            Some(PathBuf::from("/tmp/custom-gimme.log"))
        );

        std::env::set_var(ENV_LOG_FILE, "  ");
        assert_eq!(log_path_from_env(), default_log_path());

        std::env::remove_var(ENV_LOG_FILE);
        assert_eq!(log_path_from_env(), default_log_path());
    }

    #[test]
    #[serial]
    fn test_env_filter_defaults_to_info() {
        std::env::remove_var(ENV_LOG);
        assert_eq!(env_filter().to_string(), "info");

        std::env::set_var(ENV_LOG, "gimme=debug");
        assert_eq!(env_filter().to_string(), "gimme=debug");
        std::env::remove_var(ENV_LOG);
    }
}
