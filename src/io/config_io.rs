use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Error type for loading tudo.toml
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Default config file path, respecting XDG_CONFIG_HOME
pub fn config_path() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", ".config")
        .join("tudo")
        .join("tudo.toml")
}

/// Default data file path, respecting XDG_DATA_HOME
pub fn default_data_path() -> PathBuf {
    xdg_dir("XDG_DATA_HOME", ".local/share")
        .join("tudo")
        .join("lists.json")
}

fn xdg_dir(var: &str, home_fallback: &str) -> PathBuf {
    std::env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| dirs_home().join(home_fallback))
}

fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read the config from `path`. A missing file yields the defaults.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}
