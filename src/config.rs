//! Configuration Module
//!
//! Explicit option structs for the cache and the virtual scroller, plus the
//! service configuration loaded from the environment or a JSON file.

use std::env;
use std::fs;

use serde::Deserialize;

use crate::error::{CacheError, Result};

/// Default cache capacity
pub const DEFAULT_MAX_SIZE: usize = 100;
/// Default entry lifetime: one hour
pub const DEFAULT_TTL_MS: u64 = 60 * 60 * 1000;
/// Default sweep interval: one hour
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 60 * 60;
pub const DEFAULT_SERVER_PORT: u16 = 3000;
/// Default row height in pixels
pub const DEFAULT_ROW_HEIGHT: f64 = 80.0;
/// Rows rendered past the bottom edge of the viewport
pub const DEFAULT_BUFFER_ROWS: usize = 1;

// == Cache Options ==
/// Every recognised cache option. Unknown keys are rejected on parse.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheOptions {
    /// Maximum number of live entries
    pub max_size: usize,
    /// Entry lifetime in milliseconds
    pub ttl_ms: u64,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            ttl_ms: DEFAULT_TTL_MS,
        }
    }
}

impl CacheOptions {
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(CacheError::InvalidConfig(
                "max_size must be at least 1".to_string(),
            ));
        }
        if self.ttl_ms == 0 {
            return Err(CacheError::InvalidConfig(
                "ttl_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

// == Scroller Options ==
/// Every recognised virtual scroller option. Unknown keys are rejected on
/// parse. Geometry is not validated; see `VirtualScroller`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollerOptions {
    /// Fixed height of every row
    pub row_height: f64,
    /// Extra rows materialized after the last visible one
    pub buffer_rows: usize,
}

impl Default for ScrollerOptions {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            buffer_rows: DEFAULT_BUFFER_ROWS,
        }
    }
}

impl ScrollerOptions {
    /// Default options with a different row height.
    pub fn with_row_height(row_height: f64) -> Self {
        Self {
            row_height,
            ..Self::default()
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables or a JSON file,
/// with the defaults above.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Shared cache settings
    pub cache: CacheOptions,
    /// HTTP server port
    pub server_port: u16,
    /// Background sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Cache capacity (default: 100)
    /// - `CACHE_TTL_MS` - Entry lifetime in milliseconds (default: 3600000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 3600)
    pub fn from_env() -> Self {
        Self {
            cache: CacheOptions {
                max_size: env_or("MAX_ENTRIES", DEFAULT_MAX_SIZE),
                ttl_ms: env_or("CACHE_TTL_MS", DEFAULT_TTL_MS),
            },
            server_port: env_or("SERVER_PORT", DEFAULT_SERVER_PORT),
            cleanup_interval: env_or("CLEANUP_INTERVAL", DEFAULT_CLEANUP_INTERVAL_SECS),
        }
    }

    /// Parses a JSON configuration. Missing fields take their defaults,
    /// unknown fields are an error.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CacheError::InvalidConfig(e.to_string()))
    }

    /// Loads the JSON file named by `KRK_CONFIG` when set, the environment
    /// otherwise, and validates the result.
    pub fn load() -> Result<Self> {
        let config = match env::var("KRK_CONFIG") {
            Ok(path) => {
                let raw = fs::read_to_string(&path).map_err(|e| {
                    CacheError::InvalidConfig(format!("cannot read {}: {}", path, e))
                })?;
                Self::from_json(&raw)?
            }
            Err(_) => Self::from_env(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.cache.validate()?;
        if self.cleanup_interval == 0 {
            return Err(CacheError::InvalidConfig(
                "cleanup_interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache: CacheOptions::default(),
            server_port: DEFAULT_SERVER_PORT,
            cleanup_interval: DEFAULT_CLEANUP_INTERVAL_SECS,
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
