//! Cache Store Module
//!
//! Main cache engine combining a key index with LRU ordering and TTL expiration.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::trace;

use crate::cache::clock::duration_ms;
use crate::cache::lru::NodeId;
use crate::cache::{CacheConfig, CacheEntry, CacheStats, Clock, LruTracker, SystemClock};
use crate::error::CacheError;

// == Cache Store ==
/// Single-threaded cache storage with LRU eviction and TTL support.
///
/// Wrap it in [`crate::cache::Cache`] to share it between tasks.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key to node lookup
    index: HashMap<String, NodeId>,
    /// Entries in recency order
    lru: LruTracker<V>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// TTL for entries added without an explicit one
    default_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore using the system clock.
    ///
    /// Fails with [`CacheError::InvalidConfiguration`] if the capacity or the
    /// default TTL is zero.
    pub fn new(config: CacheConfig) -> Result<Self, CacheError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a new CacheStore reading time from `clock`.
    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Result<Self, CacheError> {
        config.validate()?;

        Ok(Self {
            index: HashMap::with_capacity(config.capacity),
            lru: LruTracker::with_capacity(config.capacity),
            stats: CacheStats::default(),
            capacity: config.capacity,
            default_ttl: config.default_ttl,
            clock,
        })
    }

    // == Add ==
    /// Stores a value under `key` with the default TTL.
    pub fn add(&mut self, key: impl Into<String>, value: V) {
        let ttl = self.default_ttl;
        self.add_with_ttl(key, value, ttl);
    }

    /// Stores a value under `key` that expires after `ttl`.
    ///
    /// If the key already exists, the value is overwritten and the TTL is reset
    /// without affecting any other entry. If the key is new and the cache is at
    /// capacity, the least recently used entry is dropped first.
    pub fn add_with_ttl(&mut self, key: impl Into<String>, value: V, ttl: Duration) {
        let key = key.into();
        let now = self.clock.now_ms();
        let entry = CacheEntry::new(value, now, duration_ms(ttl));

        if let Some(&id) = self.index.get(&key) {
            if let Some(slot) = self.lru.entry_mut(id) {
                *slot = entry;
            }
            self.lru.touch(id);
            return;
        }

        if self.index.len() >= self.capacity {
            self.make_room(now);
        }

        let id = self.lru.push_front(key.clone(), entry);
        self.index.insert(key, id);
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if found and not expired, marking it most recently
    /// used. Expired entries are removed and counted as misses.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let Some(&id) = self.index.get(key) else {
            self.stats.record_miss();
            return None;
        };

        let now = self.clock.now_ms();
        let expired = self.lru.entry(id).map_or(true, |entry| entry.is_expired(now));
        if expired {
            self.drop_node(key, id);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            trace!(key, "expired on read");
            return None;
        }

        self.lru.touch(id);
        self.stats.record_hit();
        self.lru.entry(id).map(|entry| entry.value.clone())
    }

    // == Contains ==
    /// Reports whether `key` holds a live entry without touching recency.
    pub fn contains(&self, key: &str) -> bool {
        let now = self.clock.now_ms();
        self.index
            .get(key)
            .and_then(|&id| self.lru.entry(id))
            .is_some_and(|entry| !entry.is_expired(now))
    }

    // == Remove ==
    /// Removes an entry by key. Returns whether anything was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.index.get(key).copied() {
            Some(id) => {
                self.drop_node(key, id);
                true
            }
            None => false,
        }
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let expired: Vec<(String, NodeId)> = self
            .index
            .iter()
            .filter(|&(_, &id)| self.lru.entry(id).map_or(true, |e| e.is_expired(now)))
            .map(|(key, &id)| (key.clone(), id))
            .collect();

        let count = expired.len();
        for (key, id) in expired {
            self.drop_node(&key, id);
        }

        self.stats.record_expirations(count);
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.index.len())
    }

    /// Keys from most to least recently used, expired ones included.
    pub fn keys(&self) -> Vec<String> {
        self.lru.iter().map(|(key, _)| key.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    // Frees one slot: an already expired LRU entry goes first, otherwise the
    // live LRU entry is evicted.
    fn make_room(&mut self, now: u64) {
        let Some(oldest) = self.lru.oldest() else {
            return;
        };

        let expired = self.lru.entry(oldest).is_some_and(|e| e.is_expired(now));
        if let Some((key, _)) = self.lru.remove(oldest) {
            self.index.remove(&key);
            if expired {
                self.stats.record_expirations(1);
                trace!(key = %key, "reaped expired entry");
            } else {
                self.stats.record_eviction();
                trace!(key = %key, "evicted least recently used entry");
            }
        }
    }

    fn drop_node(&mut self, key: &str, id: NodeId) {
        self.index.remove(key);
        self.lru.remove(id);
    }
}

#[cfg(test)]
impl<V> CacheStore<V> {
    /// Asserts that the index and the recency list describe the same entries.
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.index.len(), self.lru.len(), "index/list length mismatch");
        assert!(self.index.len() <= self.capacity, "capacity exceeded");
        for (key, &id) in &self.index {
            assert_eq!(self.lru.key(id), Some(key.as_str()), "orphaned index entry");
        }
        assert_eq!(self.lru.iter().count(), self.lru.len(), "broken list links");
    }
}
