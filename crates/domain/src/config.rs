//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_END_HOUR, DEFAULT_START_HOUR};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Daily working window used to generate slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,
    #[serde(default = "default_end_hour")]
    pub end_hour: u32,
}

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub address: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

fn default_pool_size() -> u32 {
    4
}

fn default_start_hour() -> u32 {
    DEFAULT_START_HOUR
}

fn default_end_hour() -> u32 {
    DEFAULT_END_HOUR
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self { start_hour: default_start_hour(), end_hour: default_end_hour() }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: "127.0.0.1:8080".to_string() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheduler: SchedulerConfig::default(),
            database: DatabaseConfig { path: "aura.db".to_string(), pool_size: default_pool_size() },
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
