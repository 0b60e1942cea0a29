//! Configuration management for the contact book bot.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Every setting has a default, so an empty environment is valid.

use crate::error::{ConfigError, ConfigResult};
use crate::models::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use std::env;
use std::str::FromStr;

/// Largest accepted birthday window, one leap year.
pub const MAX_BIRTHDAY_WINDOW_DAYS: u32 = 366;

/// Configuration for the contact book bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default window for the `birthdays` command in days (default: 7)
    pub birthday_window_days: u32,

    /// Maximum number of `search` results to return (default: 5)
    pub max_match_results: usize,

    /// Fuzzy match confidence threshold (0-100, default: 30)
    pub match_confidence_threshold: u8,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: default birthday window (default: 7, max: 366)
    /// - `MAX_MATCH_RESULTS`: max search results (default: 5, min: 1)
    /// - `MATCH_CONFIDENCE_THRESHOLD`: min confidence score (default: 30)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy does not print to stdout, which carries the bot replies
        let _ = dotenvy::dotenv();

        let birthday_window_days =
            Self::parse_env("BIRTHDAY_WINDOW_DAYS", DEFAULT_BIRTHDAY_WINDOW_DAYS)?;
        if birthday_window_days > MAX_BIRTHDAY_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be at most {}", MAX_BIRTHDAY_WINDOW_DAYS),
            });
        }

        let max_match_results: usize = Self::parse_env("MAX_MATCH_RESULTS", 5)?;
        if max_match_results == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_MATCH_RESULTS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let match_confidence_threshold: u8 = Self::parse_env("MATCH_CONFIDENCE_THRESHOLD", 30)?;

        if match_confidence_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "MATCH_CONFIDENCE_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_window_days,
            max_match_results,
            match_confidence_threshold,
            log_level,
        })
    }

    /// Parse an environment variable as an unsigned number, or use `default`
    /// when it is unset.
    fn parse_env<T: FromStr>(var_name: &str, default: T) -> ConfigResult<T> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            max_match_results: 5,
            match_confidence_threshold: 30,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 4] = [
        "BIRTHDAY_WINDOW_DAYS",
        "MAX_MATCH_RESULTS",
        "MATCH_CONFIDENCE_THRESHOLD",
        "LOG_LEVEL",
    ];

    // Clears every config variable on creation and on drop
    struct EnvGuard;

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.birthday_window_days, 7);
        assert_eq!(config.max_match_results, 5);
        assert_eq!(config.match_confidence_threshold, 30);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "14");
        guard.set("MAX_MATCH_RESULTS", "10");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.birthday_window_days, 14);
        assert_eq!(config.max_match_results, 10);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_window_too_large() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "400");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "BIRTHDAY_WINDOW_DAYS");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_confidence_threshold() {
        let mut guard = EnvGuard::new();
        guard.set("MATCH_CONFIDENCE_THRESHOLD", "150");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "MATCH_CONFIDENCE_THRESHOLD");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_number() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "42");

        assert_eq!(Config::parse_env::<u32>("BIRTHDAY_WINDOW_DAYS", 7).unwrap(), 42);
        assert_eq!(Config::parse_env::<u32>("NONEXISTENT_CONTACT_BOOK_VAR", 7).unwrap(), 7);
    }

    #[test]
    #[serial]
    fn test_parse_env_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("MAX_MATCH_RESULTS", "not-a-number");

        assert!(Config::parse_env::<usize>("MAX_MATCH_RESULTS", 5).is_err());
    }

    #[test]
    #[serial]
    fn test_config_zero_match_results_rejected() {
        let mut guard = EnvGuard::new();
        guard.set("MAX_MATCH_RESULTS", "0");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "MAX_MATCH_RESULTS");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }
}
