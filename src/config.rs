//! Configuration handling for sqlrun
//!
//! Connection pools are defined by name in a TOML file, alongside an
//! optional logging section. The CLI resolves its first argument against
//! the `[pools]` table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;

use crate::error::{Error, Result};

/// Load configuration from a TOML file
pub fn load_from_file(path: &str) -> Result<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read config file {}: {}", path, e)))?;

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| Error::Config(format!("Failed to parse config file {}: {}", path, e)))?;

    Ok(config)
}

/// Represents the complete sqlrun configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub pools: HashMap<String, PoolConfig>,
    pub logging: Option<LoggingConfig>,
}

impl Config {
    /// Look up a named connection pool definition
    pub fn pool(&self, name: &str) -> Result<&PoolConfig> {
        self.pools
            .get(name)
            .ok_or_else(|| Error::Config(format!("No connection pool named '{}' is defined", name)))
    }
}

/// Connection pool configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PoolConfig {
    pub driver: String,
    pub url: String,
    pub pool_size: Option<u32>,
    pub timeout_seconds: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
    pub format: String,
    pub stdout: bool,
}
