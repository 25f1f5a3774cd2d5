//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment variables.
//! Everything is optional; defaults match the original console bot.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the address book process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage artifact path; `None` means "next to the executable"
    pub storage_path: Option<PathBuf>,

    /// Records per page for `show all` (default: 2)
    pub page_size: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: storage file path (default: exe-colocated)
    /// - `ADDRESS_BOOK_PAGE_SIZE`: page size for listings (default: 2)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let storage_path = env::var("ADDRESS_BOOK_PATH").ok().map(PathBuf::from);

        let page_size = Self::parse_env_usize("ADDRESS_BOOK_PAGE_SIZE", 2)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            storage_path,
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_path: None,
            page_size: 2,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_defaults() {
        env::remove_var("ADDRESS_BOOK_PATH");
        env::remove_var("ADDRESS_BOOK_PAGE_SIZE");
        env::remove_var("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert!(config.storage_path.is_none());
        assert_eq!(config.page_size, 2);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_PATH", "/tmp/contacts.bin");
        guard.set("ADDRESS_BOOK_PAGE_SIZE", "5");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(
            config.storage_path,
            Some(PathBuf::from("/tmp/contacts.bin"))
        );
        assert_eq!(config.page_size, 5);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_rejects_invalid_page_size() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_PAGE_SIZE", "zero");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "ADDRESS_BOOK_PAGE_SIZE");
        }
    }

    #[test]
    #[serial]
    fn test_config_rejects_zero_page_size() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_PAGE_SIZE", "0");

        assert!(Config::from_env().is_err());
    }
}
