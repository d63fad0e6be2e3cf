//! Insertion Order Module
//!
//! Tracks the order in which keys were first inserted, for FIFO eviction.

use std::collections::VecDeque;

/// Stale slots tolerated on top of twice the live entry count before the
/// queue is compacted.
const COMPACT_SLACK: usize = 16;

// == Insertion Order ==
/// Queue of `(seq, key)` slots in insertion order.
///
/// - Front = oldest insertion
/// - Back = newest insertion
///
/// Removing a key from the cache does not touch the queue. The slot goes
/// stale and is skipped when it reaches the front, so every operation stays
/// O(1) amortized. A slot is live only while the cache still holds the key
/// with the same `seq`.
#[derive(Debug, Default)]
pub struct InsertionOrder {
    /// Slots by insertion time
    queue: VecDeque<(u64, String)>,
    /// Sequence number handed to the next insertion
    next_seq: u64,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            next_seq: 0,
        }
    }

    // == Push ==
    /// Records a fresh insertion of `key` and returns its sequence number.
    pub fn push(&mut self, key: &str) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push_back((seq, key.to_string()));
        seq
    }

    // == Pop Oldest ==
    /// Removes and returns the oldest live key.
    ///
    /// Stale slots at the front are discarded on the way. Returns None when
    /// no live slot remains.
    pub fn pop_oldest<F>(&mut self, mut is_live: F) -> Option<String>
    where
        F: FnMut(&str, u64) -> bool,
    {
        while let Some((seq, key)) = self.queue.pop_front() {
            if is_live(&key, seq) {
                return Some(key);
            }
        }
        None
    }

    // == Compact ==
    /// Drops stale slots once they dominate the queue.
    pub fn maybe_compact<F>(&mut self, live_entries: usize, mut is_live: F)
    where
        F: FnMut(&str, u64) -> bool,
    {
        if self.queue.len() > live_entries * 2 + COMPACT_SLACK {
            self.queue.retain(|(seq, key)| is_live(key, *seq));
        }
    }

    // == Iterate ==
    /// Iterates over every slot, live or stale, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &str)> {
        self.queue.iter().map(|(seq, key)| (*seq, key.as_str()))
    }

    // == Slots ==
    /// Number of slots currently queued, including stale ones.
    pub fn slots(&self) -> usize {
        self.queue.len()
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
