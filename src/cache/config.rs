//! Cache configuration.

use std::time::Duration;

use crate::error::CacheError;

/// Sizing and expiry parameters for a cache instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of live entries
    pub capacity: usize,
    /// TTL applied when an entry is added without an explicit one
    pub default_ttl: Duration,
}

impl CacheConfig {
    pub fn new(capacity: usize, default_ttl: Duration) -> Self {
        Self {
            capacity,
            default_ttl,
        }
    }

    /// Rejects a zero capacity or a zero default TTL.
    pub fn validate(&self) -> Result<(), CacheError> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidConfiguration(
                "capacity must be greater than zero".to_string(),
            ));
        }
        if self.default_ttl.is_zero() {
            return Err(CacheError::InvalidConfiguration(
                "default TTL must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
