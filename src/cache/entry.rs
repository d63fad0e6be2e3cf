//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and the time helpers
//! used for TTL checks.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// Represents a single cache entry with its value and insertion metadata.
///
/// Entries carry no TTL of their own; the owning cache applies one TTL to
/// every entry.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Insertion timestamp (Unix milliseconds), refreshed on overwrite
    pub inserted_at: u64,
    /// Insertion sequence number, fixed for the lifetime of the key
    pub seq: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry inserted at `now`.
    pub fn new(value: V, now: u64, seq: u64) -> Self {
        Self {
            value,
            inserted_at: now,
            seq,
        }
    }

    // == Age ==
    /// Milliseconds elapsed since insertion. A clock that moved backwards
    /// yields zero.
    pub fn age_ms(&self, now: u64) -> u64 {
        now.saturating_sub(self.inserted_at)
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl_ms`.
    ///
    /// Boundary condition: an entry whose age is exactly `ttl_ms` is still
    /// live. It expires once the age is strictly greater.
    pub fn is_expired(&self, now: u64, ttl_ms: u64) -> bool {
        self.age_ms(now) > ttl_ms
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A system clock set before the epoch reads as `0`.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
