//! Application configuration
//!
//! All settings come from environment variables, read once at startup and
//! carried in the application state.

use std::str::FromStr;

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

/// Settings for the running service
#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub app_env: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub max_workers: usize,
}

impl Config {
    /// Read the configuration from the environment
    pub fn from_env() -> Self {
        Self {
            app_name: env_or("APP_NAME", "SimpleTaskManager"),
            app_env: env_or("APP_ENV", "development"),
            host: env_or("APP_HOST", "0.0.0.0"),
            port: env_parse("APP_PORT", 5000),
            log_level: env_or("LOG_LEVEL", "INFO"),
            max_workers: env_parse("MAX_WORKERS", 4),
        }
    }

    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }

    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }
}
