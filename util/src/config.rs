//! Application configuration loaded from the environment.
//!
//! `AppConfig` is read once during bootstrap and handed to whatever needs it.
//! Every value has a development default, so an empty environment still yields
//! a runnable configuration; only malformed values are reported as errors.

use std::env;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {key} has invalid value {value:?}")]
    Invalid { key: String, value: String },
}

/// Process-level settings shared by the `api`, `seeder` and `migration` binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub seed_on_startup: bool,
}

impl AppConfig {
    /// Loads `.env` (if present) and reads the configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            env: var_or("APP_ENV", "development"),
            project_name: var_or("PROJECT_NAME", "travel-api"),
            log_level: var_or("LOG_LEVEL", "api=info,seeder=info"),
            log_file: var_or("LOG_FILE", "api.log"),
            log_to_stdout: parse_var("LOG_TO_STDOUT", false)?,
            database_path: var_or("DATABASE_PATH", "data/travel.db"),
            host: var_or("HOST", "127.0.0.1"),
            port: parse_var("PORT", 3000)?,
            seed_on_startup: parse_var("SEED_ON_STARTUP", true)?,
        })
    }

    /// SeaORM connection URL for `database_path`.
    ///
    /// Values that already look like a DSN are passed through; anything else is
    /// treated as a SQLite file path opened in read-write-create mode.
    pub fn database_url(&self) -> String {
        database_url(&self.database_path)
    }
}

pub fn database_url(path_or_url: &str) -> String {
    if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
    {
        path_or_url.to_string()
    } else {
        format!("sqlite://{path_or_url}?mode=rwc")
    }
}

/// Returns the variable's value, or `default` when it is unset or blank.
pub fn var_or(key: &str, default: &str) -> String {
    optional_var(key).unwrap_or_else(|| default.to_string())
}

/// Returns the trimmed value of a set, non-blank variable.
pub fn optional_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses a variable into `T`, falling back to `default` when it is unset.
pub fn parse_var<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match optional_var(key) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
            key: key.to_string(),
            value,
        }),
    }
}

/// Like [`parse_var`] but without a default.
pub fn parse_optional_var<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match optional_var(key) {
        None => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| ConfigError::Invalid {
            key: key.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set(key: &str, value: &str) {
        unsafe {
            env::set_var(key, value);
        }
    }

    fn unset(key: &str) {
        unsafe {
            env::remove_var(key);
        }
    }

    #[test]
    fn database_url_wraps_plain_paths() {
        assert_eq!(database_url("data/travel.db"), "sqlite://data/travel.db?mode=rwc");
        assert_eq!(database_url("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(
            database_url("postgres://u:p@localhost/travel"),
            "postgres://u:p@localhost/travel"
        );
    }

    #[test]
    #[serial]
    fn parse_var_uses_default_when_unset_or_blank() {
        unset("UTIL_TEST_PORT");
        assert_eq!(parse_var("UTIL_TEST_PORT", 8080u16), Ok(8080));

        set("UTIL_TEST_PORT", "   ");
        assert_eq!(parse_var("UTIL_TEST_PORT", 8080u16), Ok(8080));
        unset("UTIL_TEST_PORT");
    }

    #[test]
    #[serial]
    fn parse_var_reports_malformed_values() {
        set("UTIL_TEST_PORT", "eighty");
        let err = parse_var("UTIL_TEST_PORT", 8080u16).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "UTIL_TEST_PORT".into(),
                value: "eighty".into()
            }
        );
        unset("UTIL_TEST_PORT");
    }

    #[test]
    #[serial]
    fn parse_optional_var_distinguishes_missing_from_present() {
        unset("UTIL_TEST_SEED");
        assert_eq!(parse_optional_var::<u64>("UTIL_TEST_SEED"), Ok(None));

        set("UTIL_TEST_SEED", " 42 ");
        assert_eq!(parse_optional_var::<u64>("UTIL_TEST_SEED"), Ok(Some(42)));
        unset("UTIL_TEST_SEED");
    }
}
