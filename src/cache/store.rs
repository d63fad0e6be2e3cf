//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with FIFO insertion tracking
//! and TTL expiration.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheCounters, CacheEntry, CacheStats, InsertionOrder};
use crate::config::CacheOptions;

// == Lookup ==
/// Outcome of a cache lookup that keeps "never set" apart from "expired".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<V> {
    /// Live value found
    Hit(V),
    /// Key was never set, or was deleted, evicted or swept
    Absent,
    /// Key was present but older than the TTL; it has now been removed
    Expired,
}

impl<V> Lookup<V> {
    /// Collapses both kinds of miss into `None`.
    pub fn into_option(self) -> Option<V> {
        match self {
            Lookup::Hit(value) => Some(value),
            Lookup::Absent | Lookup::Expired => None,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, Lookup::Hit(_))
    }
}

// == TTL Cache ==
/// Bounded key-value store with FIFO eviction and a single TTL.
///
/// Eviction removes the oldest *inserted* key. Reads never change the
/// eviction order, and overwriting a key keeps its original position while
/// refreshing its insertion timestamp.
///
/// Every operation has a `*_at` twin taking `now` in Unix milliseconds; the
/// plain versions read the system clock.
#[derive(Debug)]
pub struct TtlCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Insertion order for eviction
    order: InsertionOrder,
    /// Hit/miss/eviction counters
    counters: CacheCounters,
    /// Maximum number of entries, at least 1
    max_size: usize,
    /// Time-to-live applied to every entry, in milliseconds
    ttl_ms: u64,
}

impl<V: Clone> TtlCache<V> {
    // == Constructor ==
    /// Creates a new cache. A `max_size` of zero is raised to one.
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries the cache can hold
    /// * `ttl_ms` - Lifetime of every entry in milliseconds
    pub fn new(max_size: usize, ttl_ms: u64) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            counters: CacheCounters::new(),
            max_size: max_size.max(1),
            ttl_ms,
        }
    }

    /// Creates a new cache from configured options.
    pub fn from_options(options: &CacheOptions) -> Self {
        Self::new(options.max_size, options.ttl_ms)
    }

    // == Set ==
    /// Stores a value, evicting the oldest-inserted entry when a new key
    /// arrives at capacity.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        self.set_at(key, value, current_timestamp_ms());
    }

    pub fn set_at(&mut self, key: impl Into<String>, value: V, now: u64) {
        let key = key.into();

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.value = value;
            entry.inserted_at = now;
            return;
        }

        if self.entries.len() >= self.max_size {
            self.evict_oldest();
        }

        let seq = self.order.push(&key);
        self.entries.insert(key, CacheEntry::new(value, now, seq));
    }

    // == Get ==
    /// Retrieves a live value, `None` when absent or expired.
    ///
    /// An expired entry is removed as a side effect. Counts as a hit or a
    /// miss.
    pub fn get(&mut self, key: &str) -> Option<V> {
        self.get_at(key, current_timestamp_ms())
    }

    pub fn get_at(&mut self, key: &str, now: u64) -> Option<V> {
        self.lookup_at(key, now).into_option()
    }

    // == Lookup ==
    /// Like `get`, but reports whether a miss was an absent or an expired key.
    pub fn lookup(&mut self, key: &str) -> Lookup<V> {
        self.lookup_at(key, current_timestamp_ms())
    }

    pub fn lookup_at(&mut self, key: &str, now: u64) -> Lookup<V> {
        let ttl_ms = self.ttl_ms;
        let found = self
            .entries
            .get(key)
            .map(|entry| (!entry.is_expired(now, ttl_ms)).then(|| entry.value.clone()));

        match found {
            Some(Some(value)) => {
                self.counters.record_hit();
                Lookup::Hit(value)
            }
            Some(None) => {
                self.remove_entry(key);
                self.counters.record_expirations(1);
                self.counters.record_miss();
                Lookup::Expired
            }
            None => {
                self.counters.record_miss();
                Lookup::Absent
            }
        }
    }

    // == Contains ==
    /// Reports whether a live entry exists, without touching the counters or
    /// removing anything.
    pub fn contains_key(&self, key: &str) -> bool {
        self.contains_key_at(key, current_timestamp_ms())
    }

    pub fn contains_key_at(&self, key: &str, now: u64) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired(now, self.ttl_ms))
    }

    // == Delete ==
    /// Removes an entry by key. Returns whether anything was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.remove_entry(key)
    }

    // == Clear ==
    /// Empties the cache and resets every counter.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.counters = CacheCounters::new();
    }

    // == Cleanup ==
    /// Removes every expired entry. Returns the number removed.
    pub fn cleanup(&mut self) -> usize {
        self.cleanup_at(current_timestamp_ms())
    }

    pub fn cleanup_at(&mut self, now: u64) -> usize {
        let ttl_ms = self.ttl_ms;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now, ttl_ms));
        let removed = before - self.entries.len();

        if removed > 0 {
            self.counters.record_expirations(removed);
            self.compact_order();
        }
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats::snapshot(&self.counters, self.entries.len(), self.max_size, self.ttl_ms)
    }

    // == Keys ==
    /// Returns stored keys oldest insertion first, expired ones included
    /// until they are read or swept.
    pub fn keys(&self) -> Vec<String> {
        self.order
            .iter()
            .filter(|(seq, key)| is_live(&self.entries, key, *seq))
            .map(|(_, key)| key.to_string())
            .collect()
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    fn evict_oldest(&mut self) {
        let entries = &self.entries;
        if let Some(key) = self.order.pop_oldest(|k, seq| is_live(entries, k, seq)) {
            self.entries.remove(&key);
            self.counters.record_eviction();
            debug!(key = %key, "Evicted oldest cache entry");
        }
    }

    fn remove_entry(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.compact_order();
        }
        removed
    }

    fn compact_order(&mut self) {
        let entries = &self.entries;
        self.order
            .maybe_compact(entries.len(), |k, seq| is_live(entries, k, seq));
    }
}

/// A queue slot is live while the map holds the key under the same `seq`.
fn is_live<V>(entries: &HashMap<String, CacheEntry<V>>, key: &str, seq: u64) -> bool {
    entries.get(key).is_some_and(|entry| entry.seq == seq)
}
