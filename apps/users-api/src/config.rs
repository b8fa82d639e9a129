use core_config::{FromEnv, server::ServerConfig};

pub use core_config::Environment;

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub environment: Environment,
    /// Echo internal error detail in 500 bodies. Only set when `APP_ENV`
    /// explicitly selects development.
    pub expose_error_detail: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=3000 unless set

        let expose_error_detail =
            Environment::explicit_from_env() == Some(Environment::Development);

        Ok(Self {
            server,
            environment,
            expose_error_detail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(["APP_ENV", "HOST", "PORT"], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.environment, Environment::Development);
            assert_eq!(config.server.address(), "0.0.0.0:3000");
            assert!(!config.expose_error_detail);
        });
    }

    #[test]
    fn test_reads_environment() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("HOST", Some("127.0.0.1")),
                ("PORT", Some("8081")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.environment, Environment::Production);
                assert_eq!(config.server.port, 8081);
                assert!(!config.expose_error_detail);
            },
        );
    }

    #[test]
    fn test_explicit_development_exposes_error_detail() {
        temp_env::with_var("APP_ENV", Some("development"), || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.environment, Environment::Development);
            assert!(config.expose_error_detail);
        });
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        temp_env::with_var("PORT", Some("not-a-port"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
