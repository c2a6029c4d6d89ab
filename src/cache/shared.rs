//! Shared Cache Handle
//!
//! Thread-safe, cloneable wrapper around a [`CacheStore`].

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::cache::{CacheConfig, CacheStats, CacheStore, Clock};
use crate::error::CacheError;

// == Cache ==
/// Bounded LRU cache with per-entry expiry, safe to share across tasks.
///
/// A single mutex guards the key index and the recency list together. Every
/// operation holds it for its whole critical section and never performs I/O
/// while holding it. Cloning produces another handle to the same cache.
#[derive(Debug)]
pub struct Cache<V> {
    inner: Arc<Mutex<CacheStore<V>>>,
}

impl<V> Clone for Cache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: Clone> Cache<V> {
    /// Creates a cache using the system clock.
    pub fn new(config: CacheConfig) -> Result<Self, CacheError> {
        CacheStore::new(config).map(Self::from_store)
    }

    /// Creates a cache reading time from `clock`.
    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Result<Self, CacheError> {
        CacheStore::with_clock(config, clock).map(Self::from_store)
    }

    fn from_store(store: CacheStore<V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Returns the live value for `key`, marking it most recently used.
    pub fn get(&self, key: &str) -> Option<V> {
        self.inner.lock().get(key)
    }

    /// Inserts or overwrites `key` with the default TTL.
    pub fn add(&self, key: impl Into<String>, value: V) {
        self.inner.lock().add(key, value);
    }

    /// Inserts or overwrites `key`, expiring after `ttl`.
    pub fn add_with_ttl(&self, key: impl Into<String>, value: V, ttl: Duration) {
        self.inner.lock().add_with_ttl(key, value, ttl);
    }

    /// Drops `key` if present.
    pub fn remove(&self, key: &str) -> bool {
        self.inner.lock().remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().contains(key)
    }

    /// Purges every expired entry, returning how many were dropped.
    pub fn cleanup_expired(&self) -> usize {
        self.inner.lock().cleanup_expired()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        self.inner.lock().assert_consistent();
    }
}
