//! LRU Selector Module
//!
//! Picks the eviction victim from the entry table.

use std::collections::BTreeMap;

use crate::cache::Entry;

// == Least Recent ==
/// Returns the key whose entry carries the smallest stamp.
///
/// Scans every entry. Equal stamps resolve to the first key in ascending
/// key order, which is the table's iteration order. Returns None when the
/// table is empty.
pub fn least_recent<K: Ord, V>(items: &BTreeMap<K, Entry<V>>) -> Option<&K> {
    items
        .iter()
        .min_by_key(|(_, entry)| entry.stamp)
        .map(|(key, _)| key)
}
