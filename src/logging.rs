//! Tracing subscriber setup.
//!
//! The TUI owns stdout, so log lines go to a file:
//! `<data_local_dir>/swipedeck/swipedeck.log` unless `SWIPEDECK_LOG_FILE`
//! says otherwise. The filter comes from `SWIPEDECK_LOG` (EnvFilter syntax).

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::DeckConfig;
use crate::error::DeckResult;

const LOG_DIR: &str = "swipedeck";
const LOG_FILE: &str = "swipedeck.log";

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub filter: String,
    pub file: Option<PathBuf>,
}

impl LogConfig {
    /// Target file: the explicit override, else the platform data directory.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.file.clone().or_else(default_log_path)
    }

    /// Parsed filter; an invalid directive falls back to the default.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter)
            .unwrap_or_else(|_| EnvFilter::new(DeckConfig::default().log_filter))
    }
}

impl From<&DeckConfig> for LogConfig {
    fn from(config: &DeckConfig) -> Self {
        Self {
            filter: config.log_filter.clone(),
            file: config.log_file.clone(),
        }
    }
}

/// `<data_local_dir>/swipedeck/swipedeck.log`, if the platform has one.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(LOG_DIR).join(LOG_FILE))
}

fn open_log_file(path: &Path) -> DeckResult<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

/// Install the global subscriber. Returns the file being written.
///
/// Fails if the log file cannot be opened; the caller decides whether to run
/// without logs. A second call is a no-op.
pub fn init_logging(config: &LogConfig) -> DeckResult<Option<PathBuf>> {
    let Some(path) = config.resolved_path() else {
        return Ok(None);
    };
    let file = open_log_file(&path)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(
            "swipedeck {} logging to {}",
            env!("CARGO_PKG_VERSION"),
            path.display()
        );
    }
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_deck_config() {
        let config = DeckConfig::default().with_log_file("/tmp/deck.log");
        let log = LogConfig::from(&config);
        assert_eq!(log.filter, "swipedeck=info");
        assert_eq!(log.resolved_path(), Some(PathBuf::from("/tmp/deck.log")));
    }

    #[test]
    fn test_default_path_layout() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("swipedeck/swipedeck.log"));
        }
    }

    #[test]
    fn test_invalid_filter_falls_back() {
        let log = LogConfig {
            filter: "swipedeck=notalevel".to_string(),
            file: None,
        };
        assert_eq!(log.env_filter().to_string(), "swipedeck=info");
    }

    #[test]
    fn test_open_log_file_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deck.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
