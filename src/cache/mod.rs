//! Cache Module
//!
//! Provides a bounded in-memory cache with TTL expiration and FIFO eviction.

mod entry;
mod order;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use order::InsertionOrder;
pub use stats::{CacheCounters, CacheStats};
pub use store::{Lookup, TtlCache};
