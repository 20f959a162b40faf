use crate::difficulty::Difficulty;
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// The difficulty selected when the menu first appears
    pub(crate) difficulty: Difficulty,

    /// Whether to ring the terminal bell on eating & crashing
    pub(crate) sound: bool,

    /// Settings about the log file
    pub(crate) log: LogConfig,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            difficulty: Difficulty::default(),
            sound: true,
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("moving-snake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from the default path.  If the file does not exist
    /// or there is no default path on this system, a default `Config` value
    /// is returned.
    pub(crate) fn load_default() -> Result<Config, ConfigError> {
        match Config::default_path() {
            Ok(path) => Config::load(&path, true),
            Err(ConfigError::NoPath) => Ok(Config::default()),
            Err(e) => Err(e),
        }
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct LogConfig {
    /// File to write log messages to.  If not set, nothing is logged.
    pub(crate) file: Option<PathBuf>,

    /// Least severe level of message to log
    pub(crate) level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
