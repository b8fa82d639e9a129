//! Environment-driven configuration shared by the service binaries.
//!
//! Every config struct implements [`FromEnv`] and falls back to a sensible
//! default when its variable is unset, so a bare `cargo run` works locally.

pub mod server;
pub mod tracing;

use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Deployment mode, read from `APP_ENV`.
///
/// Production hides internal error details from HTTP responses and switches
/// logging to JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        env::var("APP_ENV")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// The mode `APP_ENV` names explicitly; `None` when unset or unrecognized.
    pub fn explicit_from_env() -> Option<Self> {
        env::var("APP_ENV")
            .ok()
            .and_then(|value| Self::parse_explicit(&value))
    }

    pub fn parse_explicit(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("production") {
            Some(Environment::Production)
        } else if value.eq_ignore_ascii_case("development") {
            Some(Environment::Development)
        } else {
            None
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl FromStr for Environment {
    type Err = std::convert::Infallible;

    /// Only `production` (any case) selects production mode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("production") {
            Ok(Environment::Production)
        } else {
            Ok(Environment::Development)
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Helper to load an environment variable with a default value
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Helper to load an environment variable or return error
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Load and parse an environment variable, using `default` when it is unset.
pub fn env_parse<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
            assert!(env.is_development());
            assert!(!env.is_production());
        });
    }

    #[test]
    fn test_environment_production_case_insensitive() {
        for value in ["production", "PRODUCTION", "Production"] {
            temp_env::with_var("APP_ENV", Some(value), || {
                assert_eq!(Environment::from_env(), Environment::Production);
            });
        }
    }

    #[test]
    fn test_environment_unknown_defaults_to_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_explicit_environment() {
        temp_env::with_var_unset("APP_ENV", || {
            assert_eq!(Environment::explicit_from_env(), None);
        });
        temp_env::with_var("APP_ENV", Some("Development"), || {
            assert_eq!(Environment::explicit_from_env(), Some(Environment::Development));
        });
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::explicit_from_env(), None);
        });
        assert_eq!(Environment::parse_explicit(" production "), Some(Environment::Production));
    }

    #[test]
    fn test_environment_display() {
        assert_eq!(Environment::Production.to_string(), "production");
        assert_eq!(Environment::Development.to_string(), "development");
    }

    #[test]
    fn test_env_or_default() {
        temp_env::with_var("USERS_TEST_VAR", Some("set"), || {
            assert_eq!(env_or_default("USERS_TEST_VAR", "default"), "set");
        });
        temp_env::with_var_unset("USERS_TEST_VAR", || {
            assert_eq!(env_or_default("USERS_TEST_VAR", "default"), "default");
        });
    }

    #[test]
    fn test_env_required_missing() {
        temp_env::with_var_unset("USERS_MISSING_REQUIRED", || {
            let err = env_required("USERS_MISSING_REQUIRED").unwrap_err();
            assert!(err.to_string().contains("USERS_MISSING_REQUIRED"));
            assert!(err.to_string().contains("required"));
        });
    }

    #[test]
    fn test_env_parse() {
        temp_env::with_var("USERS_PARSE_VAR", Some(" 42 "), || {
            assert_eq!(env_parse::<u16>("USERS_PARSE_VAR", 1).unwrap(), 42);
        });
        temp_env::with_var_unset("USERS_PARSE_VAR", || {
            assert_eq!(env_parse::<u16>("USERS_PARSE_VAR", 7).unwrap(), 7);
        });
        temp_env::with_var("USERS_PARSE_VAR", Some("nope"), || {
            let err = env_parse::<u16>("USERS_PARSE_VAR", 1).unwrap_err();
            assert!(matches!(err, ConfigError::ParseError { ref key, .. } if key == "USERS_PARSE_VAR"));
        });
    }
}
