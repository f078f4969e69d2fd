//! Optional TOML defaults for the CLI. Command-line flags take precedence.
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::output::Format;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Contents of a config file.
///
/// ```toml
/// format = "json"
/// pretty = true
/// deny_violations = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub format: Option<Format>,
    pub pretty: bool,
    pub deny_violations: bool,
}

impl Config {
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Effective options after merging flags over the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub format: Format,
    pub pretty: bool,
    pub deny_violations: bool,
}

impl Settings {
    pub fn resolve(
        format: Option<Format>,
        pretty: bool,
        deny_violations: bool,
        config: &Config,
    ) -> Settings {
        Settings {
            format: format.or(config.format).unwrap_or_default(),
            pretty: pretty || config.pretty,
            deny_violations: deny_violations || config.deny_violations,
        }
    }
}
