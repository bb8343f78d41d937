//! Runtime configuration from environment variables.
//!
//! # Responsibility
//! - Resolve data file, logging and history settings with sane defaults.
//!
//! # Invariants
//! - `history_limit` is at least 1.
//! - `log_level` is always a normalized level string.

use crate::history::undo::DEFAULT_HISTORY_LIMIT;
use crate::logging::{default_log_level, normalize_level};
use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_DATA_FILE: &str = "INTERNWATCH_DATA_FILE";
pub const ENV_LOG_LEVEL: &str = "INTERNWATCH_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "INTERNWATCH_LOG_DIR";
pub const ENV_HISTORY_LIMIT: &str = "INTERNWATCH_HISTORY_LIMIT";

const DEFAULT_DATA_FILE: &str = "data/internwatch.json";

/// Top-level configuration for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON file holding the applicant book.
    pub data_file: PathBuf,
    pub log_level: &'static str,
    /// File logging is off when unset.
    pub log_dir: Option<PathBuf>,
    /// Snapshots kept per undo/redo direction.
    pub history_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: default_log_level(),
            log_dir: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let data_file = non_blank(ENV_DATA_FILE)
            .map(PathBuf::from)
            .unwrap_or(defaults.data_file);

        let log_level = match non_blank(ENV_LOG_LEVEL) {
            Some(value) => {
                normalize_level(&value).map_err(|_| ConfigError::InvalidLogLevel(value))?
            }
            None => defaults.log_level,
        };

        let log_dir = non_blank(ENV_LOG_DIR).map(PathBuf::from);

        let history_limit = match non_blank(ENV_HISTORY_LIMIT) {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(limit) if limit >= 1 => limit,
                _ => return Err(ConfigError::InvalidHistoryLimit(value)),
            },
            None => defaults.history_limit,
        };

        Ok(Self {
            data_file,
            log_level,
            log_dir,
            history_limit,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    InvalidHistoryLimit(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidLogLevel(value) => write!(
                f,
                "{ENV_LOG_LEVEL} must be one of trace|debug|info|warn|error, got `{value}`"
            ),
            ConfigError::InvalidHistoryLimit(value) => write!(
                f,
                "{ENV_HISTORY_LIMIT} must be a positive integer, got `{value}`"
            ),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.data_file, PathBuf::from("data/internwatch.json"));
    }

    #[test]
    fn overrides_are_applied_and_normalized() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_DATA_FILE, "/tmp/applicants.json"),
            (ENV_LOG_LEVEL, "Warning"),
            (ENV_LOG_DIR, "/tmp/internwatch-logs"),
            (ENV_HISTORY_LIMIT, "5"),
        ]))
        .unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/applicants.json"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/internwatch-logs")));
        assert_eq!(config.history_limit, 5);
    }

    #[test]
    fn zero_history_limit_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_HISTORY_LIMIT, "0")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidHistoryLimit("0".to_string()));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "chatty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(_)));
    }
}
