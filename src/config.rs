use std::env;

use thiserror::Error;

const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_POOL_SIZE: u32 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub log_filter: String,
    pub pool_size: u32,
}

impl Settings {
    /// Loads settings from the process environment, reading `.env` first if
    /// one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let pool_size = match lookup("DB_POOL_SIZE") {
            None => DEFAULT_POOL_SIZE,
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(ConfigError::Invalid {
                    key: "DB_POOL_SIZE",
                    value: raw,
                })?,
        };

        Ok(Self {
            database_url,
            log_filter,
            pool_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn applies_defaults() {
        let settings = load(&[("DATABASE_URL", "postgres://localhost/orders")]).unwrap();
        assert_eq!(settings.database_url, "postgres://localhost/orders");
        assert_eq!(settings.log_filter, "info");
        assert_eq!(settings.pool_size, 10);
    }

    #[test]
    fn reads_overrides() {
        let settings = load(&[
            ("DATABASE_URL", "postgres://db/orders"),
            ("RUST_LOG", "debug"),
            ("DB_POOL_SIZE", "4"),
        ])
        .unwrap();
        assert_eq!(settings.log_filter, "debug");
        assert_eq!(settings.pool_size, 4);
    }

    #[test]
    fn database_url_is_required() {
        assert_eq!(load(&[]), Err(ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn rejects_invalid_pool_size() {
        for raw in ["zero", "0", "-3"] {
            assert_eq!(
                load(&[("DATABASE_URL", "postgres://db"), ("DB_POOL_SIZE", raw)]),
                Err(ConfigError::Invalid {
                    key: "DB_POOL_SIZE",
                    value: raw.to_string(),
                })
            );
        }
    }
}
