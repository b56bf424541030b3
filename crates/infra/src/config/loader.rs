//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `AURA_DB_PATH` is not set, falls back to loading from file
//! 3. Searches multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `AURA_DB_PATH`: Database file path (required)
//! - `AURA_DB_POOL_SIZE`: Connection pool size
//! - `AURA_SERVER_ADDRESS`: HTTP listen address
//! - `AURA_SCHEDULER_START_HOUR`: First bookable hour of the day
//! - `AURA_SCHEDULER_END_HOUR`: Last bookable hour of the day
//! - `AURA_LOG_LEVEL`: Default log filter when `RUST_LOG` is unset
//! - `AURA_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader searches `config.{json,toml}` and `aura.{json,toml}` in the
//! current directory, its two parents, and the same set relative to the
//! executable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use aura_domain::{AuraError, Config, DatabaseConfig, LoggingConfig, Result, SchedulerConfig, ServerConfig};

const CONFIG_FILE_NAMES: [&str; 4] = ["config.json", "config.toml", "aura.json", "aura.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variable is missing or a value is malformed, falls back to a config file.
///
/// # Errors
/// Returns `AuraError::Config` if neither source yields a configuration.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Only `AURA_DB_PATH` is required; every other setting falls back to its
/// default.
///
/// # Errors
/// Returns `AuraError::Config` if `AURA_DB_PATH` is missing or a numeric
/// variable does not parse.
pub fn load_from_env() -> Result<Config> {
    let defaults = Config::default();

    let database = DatabaseConfig {
        path: env_var("AURA_DB_PATH")?,
        pool_size: env_parse("AURA_DB_POOL_SIZE", "pool size")?
            .unwrap_or(defaults.database.pool_size),
    };

    let scheduler = SchedulerConfig {
        start_hour: env_parse("AURA_SCHEDULER_START_HOUR", "start hour")?
            .unwrap_or(defaults.scheduler.start_hour),
        end_hour: env_parse("AURA_SCHEDULER_END_HOUR", "end hour")?
            .unwrap_or(defaults.scheduler.end_hour),
    };

    let server = ServerConfig {
        address: std::env::var("AURA_SERVER_ADDRESS").unwrap_or(defaults.server.address),
    };

    let logging = LoggingConfig {
        level: std::env::var("AURA_LOG_LEVEL").unwrap_or(defaults.logging.level),
        json: env_bool("AURA_LOG_JSON", defaults.logging.json),
    };

    Ok(Config { scheduler, database, server, logging })
}

/// Load configuration from a file
///
/// If `path` is `None`, searches the standard locations. Supports JSON and
/// TOML (detected by file extension).
///
/// # Errors
/// Returns `AuraError::Config` if the file is missing, unreadable, or does
/// not deserialize into [`Config`].
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(AuraError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => find_config_file().ok_or_else(|| {
            AuraError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| AuraError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| AuraError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| AuraError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(AuraError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Search the standard locations for a config file
///
/// Returns the first existing candidate, or `None`.
pub fn find_config_file() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        roots.push(exe_dir);
    }

    roots
        .iter()
        .flat_map(|root| [root.clone(), root.join(".."), root.join("../..")])
        .flat_map(|dir| CONFIG_FILE_NAMES.map(|name| dir.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| AuraError::Config(format!("Missing required environment variable: {key}")))
}

/// Parse an optional variable; unset yields `None`, garbage is an error.
fn env_parse<T>(key: &str, what: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AuraError::Config(format!("Invalid {what}: {e}"))),
        Err(_) => Ok(None),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
