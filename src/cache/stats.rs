//! Cache counters reported by `/v1/cache/stats`.

use serde::Serialize;

/// Lookup and removal counters of one cache.
///
/// A miss is counted for absent keys and for entries found expired on read.
/// `expirations` covers every entry dropped because its TTL elapsed, whether
/// noticed on read, reaped on a full insert, or swept by the cleanup task.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Live entries pushed out to make room
    pub evictions: u64,
    pub expirations: u64,
    /// Entries held when the snapshot was taken
    pub total_entries: usize,
}

impl CacheStats {
    /// Fraction of lookups that were hits; 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64,
        }
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }

    /// Copy of the counters with `total_entries` filled in.
    pub(crate) fn snapshot(&self, total_entries: usize) -> Self {
        Self {
            total_entries,
            ..self.clone()
        }
    }
}
