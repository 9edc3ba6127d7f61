use crate::error::{AppError, Result};
use dashmap::DashMap;
use std::env;
use std::sync::Arc;

pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SEED_COUNT: u32 = 10;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration service
///
/// A key/value snapshot of the process environment. `.env` is loaded first
/// when present, so values there fill in whatever the shell did not set.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Ignoring unreadable .env file: {}", e);
            }
        }

        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }

    fn parse_or<T: std::str::FromStr>(&self, key: &str, default: T) -> Result<T>
    where
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map_err(|e| AppError::config(key, format!("{raw:?}: {e}"))),
            None => Ok(default),
        }
    }
}

/// Typed application settings read from a [`ConfigService`].
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub seed_count: u32,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_config(config: &ConfigService) -> Result<Self> {
        Ok(Self {
            database_url: config
                .get("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: config
                .get("HOST")
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: config.parse_or("PORT", DEFAULT_PORT)?,
            seed_count: config.parse_or("SEED_COUNT", DEFAULT_SEED_COUNT)?,
            log_filter: config
                .get("RUST_LOG")
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_count: DEFAULT_SEED_COUNT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
