//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and evictions.

use serde::Serialize;

// == Cache Counters ==
/// Running counters owned by a cache. Reset by `clear()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheCounters {
    /// Lookups that returned a live value
    pub hits: u64,
    /// Lookups that found nothing or an expired entry
    pub misses: u64,
    /// Entries removed to make room for a new key
    pub evictions: u64,
    /// Entries removed because their TTL elapsed (on read or by sweep)
    pub expirations: u64,
}

impl CacheCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }

    // == Hit Ratio ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Cache Stats ==
/// Point-in-time snapshot returned by `TtlCache::stats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    /// Current number of entries, expired-but-unswept ones included
    pub size: usize,
    pub hit_count: u64,
    pub miss_count: u64,
    /// hit_count / (hit_count + miss_count), 0.0 before any lookup
    pub hit_ratio: f64,
    pub evictions: u64,
    pub expirations: u64,
    /// Configured capacity
    pub max_size: usize,
    /// Configured time-to-live in milliseconds
    pub ttl_ms: u64,
}

impl CacheStats {
    /// Builds a snapshot from the live counters and cache geometry.
    pub fn snapshot(counters: &CacheCounters, size: usize, max_size: usize, ttl_ms: u64) -> Self {
        Self {
            size,
            hit_count: counters.hits,
            miss_count: counters.misses,
            hit_ratio: counters.hit_ratio(),
            evictions: counters.evictions,
            expirations: counters.expirations,
            max_size,
            ttl_ms,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_new() {
        let counters = CacheCounters::new();
        assert_eq!(counters.hits, 0);
        assert_eq!(counters.misses, 0);
        assert_eq!(counters.evictions, 0);
        assert_eq!(counters.expirations, 0);
    }

    #[test]
    fn test_hit_ratio_no_requests() {
        let counters = CacheCounters::new();
        assert_eq!(counters.hit_ratio(), 0.0);
    }

    #[test]
    fn test_hit_ratio_all_hits() {
        let mut counters = CacheCounters::new();
        counters.record_hit();
        counters.record_hit();
        counters.record_hit();
        assert_eq!(counters.hit_ratio(), 1.0);
    }

    #[test]
    fn test_hit_ratio_all_misses() {
        let mut counters = CacheCounters::new();
        counters.record_miss();
        counters.record_miss();
        assert_eq!(counters.hit_ratio(), 0.0);
    }

    #[test]
    fn test_hit_ratio_mixed() {
        let mut counters = CacheCounters::new();
        counters.record_hit();
        counters.record_miss();
        counters.record_miss();
        counters.record_miss();
        assert_eq!(counters.hit_ratio(), 0.25);
    }

    #[test]
    fn test_record_eviction_and_expirations() {
        let mut counters = CacheCounters::new();
        counters.record_eviction();
        counters.record_eviction();
        counters.record_expirations(3);
        assert_eq!(counters.evictions, 2);
        assert_eq!(counters.expirations, 3);
    }

    #[test]
    fn test_snapshot_copies_counters() {
        let mut counters = CacheCounters::new();
        counters.record_hit();
        counters.record_miss();

        let stats = CacheStats::snapshot(&counters, 4, 10, 1_000);

        assert_eq!(stats.size, 4);
        assert_eq!(stats.hit_count, 1);
        assert_eq!(stats.miss_count, 1);
        assert_eq!(stats.hit_ratio, 0.5);
        assert_eq!(stats.max_size, 10);
        assert_eq!(stats.ttl_ms, 1_000);
    }

    #[test]
    fn test_stats_serialize() {
        let stats = CacheStats::snapshot(&CacheCounters::new(), 0, 10, 1_000);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["hit_ratio"], 0.0);
        assert_eq!(json["max_size"], 10);
    }
}
