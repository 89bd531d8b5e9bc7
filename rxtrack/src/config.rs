//! Configuration module for rxtrack.
//!
//! This module handles parsing configuration from environment variables.
//!
//! # Environment Variables
//!
//! | Variable | Required | Default | Description |
//! |----------|----------|---------|-------------|
//! | `RXTRACK_DATA_DIR` | No | `~/.rxtrack` | Directory holding the list files |
//! | `RXTRACK_PREFS_PATH` | No | `<data dir>/preferences.json` | User preferences file |
//! | `RXTRACK_LOG_FORMAT` | No | `text` | `text` or `json` |
//!
//! Log verbosity is controlled separately through `RUST_LOG`.
//!
//! # Example
//!
//! ```no_run
//! use rxtrack::config::Config;
//!
//! let config = Config::from_env().expect("Failed to load configuration");
//! println!("Preferences: {}", config.prefs_path.display());
//! ```

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use directories::BaseDirs;
use thiserror::Error;

/// Default data directory name relative to home.
const DEFAULT_DATA_DIR: &str = ".rxtrack";

/// Preferences file name inside the data directory.
pub const PREFS_FILE: &str = "preferences.json";

const ENV_DATA_DIR: &str = "RXTRACK_DATA_DIR";
const ENV_PREFS_PATH: &str = "RXTRACK_PREFS_PATH";
const ENV_LOG_FORMAT: &str = "RXTRACK_LOG_FORMAT";

/// Errors that can occur during configuration parsing.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has an invalid value.
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to determine home directory.
    #[error("failed to determine home directory")]
    NoHomeDirectory,
}

/// Output format for log lines on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected 'text' or 'json', got '{other}'")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Configuration for rxtrack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the prescription list files when no preferences
    /// file says otherwise.
    pub data_dir: PathBuf,

    /// Path of the user preferences file.
    pub prefs_path: PathBuf,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Config {
    /// Creates a new `Config` by parsing environment variables.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if:
    /// - `RXTRACK_LOG_FORMAT` is set to something other than `text` or `json`
    /// - `RXTRACK_DATA_DIR` or `RXTRACK_PREFS_PATH` is set but empty
    /// - The home directory cannot be determined and `RXTRACK_DATA_DIR` is unset
    pub fn from_env() -> Result<Self, ConfigError> {
        // Optional: RXTRACK_DATA_DIR (default: ~/.rxtrack)
        let data_dir = match non_empty_path(ENV_DATA_DIR)? {
            Some(dir) => dir,
            None => BaseDirs::new()
                .ok_or(ConfigError::NoHomeDirectory)?
                .home_dir()
                .join(DEFAULT_DATA_DIR),
        };

        // Optional: RXTRACK_PREFS_PATH (default: <data dir>/preferences.json)
        let prefs_path = non_empty_path(ENV_PREFS_PATH)?.unwrap_or_else(|| data_dir.join(PREFS_FILE));

        // Optional: RXTRACK_LOG_FORMAT (default: text)
        let log_format = match env::var(ENV_LOG_FORMAT) {
            Ok(val) => val.parse().map_err(|message| ConfigError::InvalidValue {
                key: ENV_LOG_FORMAT.to_string(),
                message,
            })?,
            Err(_) => LogFormat::default(),
        };

        Ok(Self {
            data_dir,
            prefs_path,
            log_format,
        })
    }
}

fn non_empty_path(key: &str) -> Result<Option<PathBuf>, ConfigError> {
    match env::var(key) {
        Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "path must not be empty".to_string(),
        }),
        Ok(val) => Ok(Some(PathBuf::from(val))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    /// Helper to run tests with isolated environment variables.
    /// Clears all RXTRACK_* vars before the test and restores them after.
    fn with_clean_env<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let saved_vars: Vec<(String, String)> = env::vars()
            .filter(|(k, _)| k.starts_with("RXTRACK_"))
            .collect();

        for (key, _) in &saved_vars {
            env::remove_var(key);
        }

        let result = f();

        for (key, _) in env::vars().filter(|(k, _)| k.starts_with("RXTRACK_")) {
            env::remove_var(key);
        }
        for (key, value) in saved_vars {
            env::set_var(key, value);
        }

        result
    }

    #[test]
    #[serial]
    fn test_defaults() {
        with_clean_env(|| {
            let config = Config::from_env().expect("should parse empty environment");

            assert!(config.data_dir.ends_with(DEFAULT_DATA_DIR));
            assert_eq!(config.prefs_path, config.data_dir.join(PREFS_FILE));
            assert_eq!(config.log_format, LogFormat::Text);
        });
    }

    #[test]
    #[serial]
    fn test_full_config() {
        with_clean_env(|| {
            env::set_var("RXTRACK_DATA_DIR", "/var/lib/rxtrack");
            env::set_var("RXTRACK_PREFS_PATH", "/etc/rxtrack/prefs.json");
            env::set_var("RXTRACK_LOG_FORMAT", "JSON");

            let config = Config::from_env().expect("should parse full config");

            assert_eq!(config.data_dir, PathBuf::from("/var/lib/rxtrack"));
            assert_eq!(config.prefs_path, PathBuf::from("/etc/rxtrack/prefs.json"));
            assert_eq!(config.log_format, LogFormat::Json);
        });
    }

    #[test]
    #[serial]
    fn test_prefs_path_follows_data_dir() {
        with_clean_env(|| {
            env::set_var("RXTRACK_DATA_DIR", "/srv/rx");

            let config = Config::from_env().unwrap();

            assert_eq!(config.prefs_path, PathBuf::from("/srv/rx/preferences.json"));
        });
    }

    #[test]
    #[serial]
    fn test_invalid_log_format() {
        with_clean_env(|| {
            env::set_var("RXTRACK_LOG_FORMAT", "xml");

            let err = Config::from_env().unwrap_err();

            assert!(
                matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "RXTRACK_LOG_FORMAT")
            );
            assert!(err.to_string().contains("got 'xml'"));
        });
    }

    #[test]
    #[serial]
    fn test_empty_data_dir_rejected() {
        with_clean_env(|| {
            env::set_var("RXTRACK_DATA_DIR", "  ");

            let err = Config::from_env().unwrap_err();

            assert!(
                matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "RXTRACK_DATA_DIR")
            );
        });
    }

    #[test]
    fn test_log_format_parse_and_display() {
        assert_eq!("text".parse::<LogFormat>(), Ok(LogFormat::Text));
        assert_eq!(" Json ".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert!("yaml".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_no_home_directory_display() {
        assert_eq!(
            ConfigError::NoHomeDirectory.to_string(),
            "failed to determine home directory"
        );
    }
}
