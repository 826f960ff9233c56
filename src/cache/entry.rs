//! Cache Entry Module
//!
//! Defines the recency stamp and the per-key record held in the entry table.

use std::sync::Arc;

// == Stamp ==
/// A logical timestamp produced by the recency clock.
///
/// Smaller stamps were written earlier. Stamps are never reused within one
/// cache lineage, so two live entries never carry the same stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Stamp(pub(crate) u64);

impl Stamp {
    /// Returns the raw clock value this stamp was taken from.
    pub fn get(self) -> u64 {
        self.0
    }
}

// == Cache Entry ==
/// A stored value together with the stamp of its last write or read.
///
/// The value sits behind an `Arc`, so snapshots derived from one another
/// share it instead of copying it.
#[derive(Debug, PartialEq, Eq)]
pub struct Entry<V> {
    /// The stored value
    pub value: Arc<V>,
    /// Recency stamp of the last insert or successful get
    pub stamp: Stamp,
}

impl<V> Clone for Entry<V> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            stamp: self.stamp,
        }
    }
}

impl<V> Entry<V> {
    // == Constructor ==
    /// Creates an entry stamped at `stamp`.
    pub fn new(value: V, stamp: Stamp) -> Self {
        Self {
            value: Arc::new(value),
            stamp,
        }
    }
}
