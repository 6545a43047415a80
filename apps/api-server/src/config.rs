//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use signup_infra::{DatabaseConfig, PasswordPolicy};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the server on the in-memory repository.
    pub database: Option<DatabaseConfig>,
    pub password_policy: PasswordPolicy,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup, falling back to defaults
    /// for keys that are unset or malformed.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database = lookup("DATABASE_URL").map(|url| {
            let defaults = DatabaseConfig::new(url);
            DatabaseConfig {
                max_connections: parse_var(
                    &lookup,
                    "DB_MAX_CONNECTIONS",
                    defaults.max_connections,
                ),
                min_connections: parse_var(
                    &lookup,
                    "DB_MIN_CONNECTIONS",
                    defaults.min_connections,
                ),
                ..defaults
            }
        });

        let password_policy = PasswordPolicy {
            min_length: parse_var(
                &lookup,
                "PASSWORD_MIN_LENGTH",
                PasswordPolicy::default().min_length,
            ),
            ..PasswordPolicy::default()
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_var(&lookup, "PORT", 8080),
            database,
            password_policy,
        }
    }
}

/// Read and parse `key`, falling back to `default` when unset or malformed.
fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
