//! Runtime configuration resolved from environment variables.
//!
//! | variable                  | default                           |
//! |---------------------------|-----------------------------------|
//! | `FOCUSMATE_DB_PATH`       | `<temp_dir>/focusmate.sqlite3`    |
//! | `FOCUSMATE_LOG_LEVEL`     | `default_log_level()`             |
//! | `FOCUSMATE_LOG_DIR`       | unset (file logging disabled)     |
//! | `FOCUSMATE_JOURNAL_LIMIT` | 10, capped at 50                  |
//!
//! Blank values count as unset.

use crate::logging::{default_log_level, normalize_level, LoggingError};
use crate::repo::journal_repo::normalize_journal_limit;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "FOCUSMATE_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "FOCUSMATE_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "FOCUSMATE_LOG_DIR";
pub const ENV_JOURNAL_LIMIT: &str = "FOCUSMATE_JOURNAL_LIMIT";

const DEFAULT_DB_FILE_NAME: &str = "focusmate.sqlite3";

#[derive(Debug)]
pub enum ConfigError {
    InvalidLogLevel(LoggingError),
    /// Log directory must be absolute.
    RelativeLogDir(String),
    InvalidJournalLimit(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(err) => write!(f, "{ENV_LOG_LEVEL}: {err}"),
            Self::RelativeLogDir(value) => {
                write!(f, "{ENV_LOG_DIR} must be an absolute path, got `{value}`")
            }
            Self::InvalidJournalLimit(value) => write!(
                f,
                "{ENV_JOURNAL_LIMIT} must be a non-negative integer, got `{value}`"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidLogLevel(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: &'static str,
    pub log_dir: Option<PathBuf>,
    /// Already normalized; at most 50.
    pub journal_limit: u32,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level(),
            log_dir: None,
            journal_limit: normalize_journal_limit(None),
        }
    }
}

impl CoreConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(path) = read(ENV_DB_PATH) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = normalize_level(&level).map_err(ConfigError::InvalidLogLevel)?;
        }
        if let Some(dir) = read(ENV_LOG_DIR) {
            let dir = PathBuf::from(dir);
            if !dir.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir.display().to_string()));
            }
            config.log_dir = Some(dir);
        }
        if let Some(limit) = read(ENV_JOURNAL_LIMIT) {
            let parsed = limit
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidJournalLimit(limit.clone()))?;
            config.journal_limit = normalize_journal_limit(Some(parsed));
        }

        Ok(config)
    }
}
