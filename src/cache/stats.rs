//! Cache Statistics Module
//!
//! Lookup and eviction counters kept by whoever owns the live snapshot.
//! They sit beside a `Cache`, never inside it, so a miss leaves the snapshot
//! itself unchanged.

use serde::Serialize;

// == Cache Stats ==
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Lookups that found their key
    pub hits: u64,
    /// Lookups that did not
    pub misses: u64,
    /// Entries removed by the LRU selector
    pub evictions: u64,
    /// Entries stored when the counters were read
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Recording ==
    /// Counts one lookup outcome.
    pub fn record_lookup(&mut self, hit: bool) {
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    /// Counts an insert, adding an eviction if one happened.
    pub fn record_insert(&mut self, evicted: bool) {
        if evicted {
            self.evictions += 1;
        }
    }

    // == Reading ==
    /// Copy of the counters tagged with the current entry count.
    pub fn with_total(&self, total_entries: usize) -> Self {
        Self {
            total_entries,
            ..*self
        }
    }

    /// hits / (hits + misses), or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }
}
