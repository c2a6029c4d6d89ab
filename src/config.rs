//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::fdc::FdcConfig;

/// Default Food Data Central endpoint
pub const DEFAULT_FDC_API_URL: &str = "https://api.nal.usda.gov/fdc/v1/";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries each cache can hold
    pub cache_size: usize,
    /// Default TTL in seconds for cached lookups
    pub cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Food Data Central base URL, with trailing slash
    pub fdc_api_url: String,
    /// Food Data Central API key
    pub fdc_api_key: String,
    /// Upper bound in seconds on a single Food Data Central call
    pub fdc_timeout: u64,
    /// Directory of the persistent store; empty keeps results in memory only
    pub storage_dir: String,
    /// Seconds in-flight requests get to finish after a shutdown signal
    pub shutdown_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_SIZE` - Maximum entries per cache (default: 1000)
    /// - `CACHE_TTL` - Default TTL in seconds (default: 86400)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `FDC_API_URL` - Food Data Central base URL
    /// - `FDC_API_KEY` - Food Data Central API key (default: empty)
    /// - `FDC_TIMEOUT` - Upstream request timeout in seconds (default: 10)
    /// - `STORAGE_DIR` - Persistent store directory (default: data)
    /// - `SHUTDOWN_TIMEOUT` - Graceful shutdown bound in seconds (default: 5)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_size: parse_var("CACHE_SIZE").unwrap_or(defaults.cache_size),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            fdc_api_url: env::var("FDC_API_URL").unwrap_or(defaults.fdc_api_url),
            fdc_api_key: env::var("FDC_API_KEY").unwrap_or(defaults.fdc_api_key),
            fdc_timeout: parse_var("FDC_TIMEOUT").unwrap_or(defaults.fdc_timeout),
            storage_dir: env::var("STORAGE_DIR").unwrap_or(defaults.storage_dir),
            shutdown_timeout: parse_var("SHUTDOWN_TIMEOUT").unwrap_or(defaults.shutdown_timeout),
        }
    }

    /// Cache parameters derived from this configuration.
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig::new(self.cache_size, Duration::from_secs(self.cache_ttl))
    }

    /// Food Data Central connection settings.
    pub fn fdc_config(&self) -> FdcConfig {
        FdcConfig {
            api_url: self.fdc_api_url.clone(),
            api_key: self.fdc_api_key.clone(),
            timeout: Duration::from_secs(self.fdc_timeout),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_size: 1000,
            cache_ttl: 24 * 60 * 60,
            server_port: 3000,
            cleanup_interval: 60,
            fdc_api_url: DEFAULT_FDC_API_URL.to_string(),
            fdc_api_key: String::new(),
            fdc_timeout: 10,
            storage_dir: "data".to_string(),
            shutdown_timeout: 5,
        }
    }
}
