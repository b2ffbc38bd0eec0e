use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

use crate::model::config::LogConfig;

/// Environment variable that overrides `log.level`
pub const LOG_ENV: &str = "TUDO_LOG";

/// Resolve the log file: the configured one, else `tudo.log` beside the data file.
pub fn log_path(config: &LogConfig, data_path: &Path) -> PathBuf {
    config.file.clone().unwrap_or_else(|| {
        data_path
            .parent()
            .unwrap_or(Path::new("."))
            .join("tudo.log")
    })
}

/// Install a file-backed subscriber. The terminal belongs to the TUI, so
/// nothing is written to stdout/stderr. Returns false if the file could not
/// be opened or a subscriber was already set.
pub fn init_logging(config: &LogConfig, data_path: &Path) -> bool {
    let path = log_path(config, data_path);
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(_) => return false,
    };

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_defaults_next_to_data() {
        let config = LogConfig::default();
        assert_eq!(
            log_path(&config, Path::new("/data/tudo/lists.json")),
            PathBuf::from("/data/tudo/tudo.log")
        );
    }

    #[test]
    fn log_path_prefers_configured_file() {
        let config = LogConfig {
            file: Some(PathBuf::from("/var/log/tudo.log")),
            ..Default::default()
        };
        assert_eq!(
            log_path(&config, Path::new("/data/lists.json")),
            PathBuf::from("/var/log/tudo.log")
        );
    }
}
