//! Cache Module
//!
//! Pure LRU cache engine: entry table, recency clock and LRU selector.

mod clock;
mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use clock::RecencyClock;
pub use entry::{Entry, Stamp};
pub use stats::CacheStats;
pub use store::{Cache, EvictionTrigger};

// == Public Constants ==
/// Maximum key length accepted by the HTTP host, in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum value size accepted by the HTTP host, in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB
