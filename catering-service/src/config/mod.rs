use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct CateringConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub database: DatabaseConfig,
}

/// MongoDB settings. A missing URL or name leaves the store unavailable
/// instead of aborting startup.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
    pub timeout_secs: u64,
}

impl CateringConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env, PORT and APP__ prefix)
        let common_config = core_config::Config::load()?;

        Ok(CateringConfig {
            common: common_config,
            database: DatabaseConfig::from_env()?,
        })
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(DatabaseConfig {
            url: get_env("DATABASE_URL"),
            name: get_env("DATABASE_NAME"),
            timeout_secs: parse_timeout(get_env("DATABASE_TIMEOUT_SECS").as_deref())?,
        })
    }
}

fn get_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|val| !val.trim().is_empty())
}

fn parse_timeout(raw: Option<&str>) -> Result<u64, AppError> {
    match raw {
        None => Ok(5),
        Some(val) => val.trim().parse().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "DATABASE_TIMEOUT_SECS must be a whole number of seconds, got {:?}: {}",
                val,
                e
            ))
        }),
    }
}
