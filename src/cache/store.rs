//! Cache Store Module
//!
//! Capacity-bounded LRU cache with value semantics. Every write hands back a
//! new `Cache`; the receiver is left as it was, so older snapshots stay valid.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cache::lru::least_recent;
use crate::cache::{Entry, RecencyClock};
use crate::error::ParseTriggerError;

// == Eviction Trigger ==
/// Condition under which `insert` removes the least recently used entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionTrigger {
    /// Evict when a new key arrives and the table already holds `capacity`
    /// entries. Overwriting an existing key never evicts.
    #[default]
    Occupancy,
    /// Evict whenever the recency clock has reached `capacity`, whether or
    /// not the table is full. Repeated overwrites of one key advance the
    /// clock and can therefore evict unrelated entries early.
    Clock,
}

impl fmt::Display for EvictionTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvictionTrigger::Occupancy => f.write_str("occupancy"),
            EvictionTrigger::Clock => f.write_str("clock"),
        }
    }
}

impl FromStr for EvictionTrigger {
    type Err = ParseTriggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "occupancy" => Ok(EvictionTrigger::Occupancy),
            "clock" => Ok(EvictionTrigger::Clock),
            _ => Err(ParseTriggerError(s.to_string())),
        }
    }
}

// == Cache ==
/// LRU cache snapshot.
///
/// The entry table is ordered by key, so `to_dict` and eviction tie-breaks
/// follow ascending key order.
#[derive(Debug, PartialEq, Eq)]
pub struct Cache<K, V> {
    /// Key -> (value, recency stamp); shared between snapshots until a write
    items: Arc<BTreeMap<K, Entry<V>>>,
    /// Fixed at construction
    capacity: usize,
    /// Source of recency stamps
    clock: RecencyClock,
    /// When to consult the LRU selector
    trigger: EvictionTrigger,
}

impl<K, V> Clone for Cache<K, V> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            capacity: self.capacity,
            clock: self.clock,
            trigger: self.trigger,
        }
    }
}

impl<K: Ord, V> Default for Cache<K, V> {
    fn default() -> Self {
        Self::empty(0)
    }
}

impl<K: Ord, V> Cache<K, V> {
    // == Constructors ==
    /// Creates an empty cache using the occupancy trigger.
    ///
    /// A capacity of zero is accepted: every insert of a new key then tries
    /// to evict first, so the cache never holds more than one entry.
    pub fn empty(capacity: usize) -> Self {
        Self::with_trigger(capacity, EvictionTrigger::default())
    }

    /// Creates an empty cache with an explicit eviction trigger.
    pub fn with_trigger(capacity: usize, trigger: EvictionTrigger) -> Self {
        Self {
            items: Arc::new(BTreeMap::new()),
            capacity,
            clock: RecencyClock::new(),
            trigger,
        }
    }

    // == Accessors ==
    /// Capacity given at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current clock reading. Advances once per insert and per hit.
    pub fn clock(&self) -> u64 {
        self.clock.now()
    }

    pub fn trigger(&self) -> EvictionTrigger {
        self.trigger
    }

    /// Number of stored entries (not the clock value).
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Membership test. Leaves recency untouched.
    pub fn member<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.items.contains_key(key)
    }

    /// Reads a value without promoting it.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.items.get(key).map(|entry| entry.value.as_ref())
    }

    /// Key the next eviction would remove, if any.
    pub fn least_recent(&self) -> Option<&K> {
        least_recent(&*self.items)
    }

    /// Iterates over `(key, value)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.items
            .iter()
            .map(|(key, entry)| (key, entry.value.as_ref()))
    }

    /// Stamps of all live entries, in key order.
    #[cfg(test)]
    pub(crate) fn stamps(&self) -> Vec<crate::cache::Stamp> {
        self.items.values().map(|entry| entry.stamp).collect()
    }

    // == Eviction Check ==
    fn should_evict(&self, key: &K) -> bool {
        match self.trigger {
            EvictionTrigger::Occupancy => {
                !self.items.contains_key(key) && self.items.len() >= self.capacity
            }
            EvictionTrigger::Clock => self.clock.reached(self.capacity),
        }
    }

    fn derive(&self, items: BTreeMap<K, Entry<V>>, clock: RecencyClock) -> Self {
        Self {
            items: Arc::new(items),
            capacity: self.capacity,
            clock,
            trigger: self.trigger,
        }
    }
}

impl<K: Ord + Clone, V> Cache<K, V> {
    // == Insert ==
    /// Returns a new cache holding `key -> value`, stamped at the current
    /// clock, with the clock advanced by one.
    ///
    /// Overwrites the value and stamp if `key` is already present. May evict
    /// the least recently used entry first, depending on the trigger.
    pub fn insert(&self, key: K, value: V) -> Self {
        self.write(key, value).0
    }

    // Copies the table's keys and value handles; stored values are shared.
    fn write(&self, key: K, value: V) -> (Self, Option<(K, Arc<V>)>) {
        let mut items = BTreeMap::clone(&self.items);

        let evicted = if self.should_evict(&key) {
            least_recent(&items)
                .cloned()
                .and_then(|victim| items.remove_entry(&victim))
                .map(|(victim, entry)| (victim, entry.value))
        } else {
            None
        };

        let (stamp, clock) = self.clock.tick();
        items.insert(key, Entry::new(value, stamp));

        (self.derive(items, clock), evicted)
    }
}

impl<K: Ord + Clone, V: Clone> Cache<K, V> {
    /// Like `insert`, also reporting the pair that was evicted to make room.
    ///
    /// Under the clock trigger the victim can be `key` itself when it is the
    /// oldest entry; it is reported and then written back with the new value.
    pub fn insert_evicting(&self, key: K, value: V) -> (Self, Option<(K, V)>) {
        let (cache, evicted) = self.write(key, value);
        let evicted = evicted.map(|(victim, value)| (victim, unshare(value)));
        (cache, evicted)
    }

    // == Get ==
    /// Looks up `key`, promoting it to most recently used on a hit.
    ///
    /// A hit returns a copy of the value and a new cache where the entry
    /// carries the current stamp and the clock has advanced. A miss returns
    /// this cache, sharing its table, and None.
    pub fn get<Q>(&self, key: &Q) -> (Self, Option<V>)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(entry) = self.items.get(key) else {
            return (self.clone(), None);
        };
        let value = V::clone(&entry.value);

        let (stamp, clock) = self.clock.tick();
        let mut items = BTreeMap::clone(&self.items);
        if let Some(entry) = items.get_mut(key) {
            entry.stamp = stamp;
        }

        (self.derive(items, clock), Some(value))
    }

    // == Export ==
    /// Projects the table onto a plain key -> value map, dropping stamps.
    pub fn to_dict(&self) -> BTreeMap<K, V> {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

fn unshare<V: Clone>(value: Arc<V>) -> V {
    Arc::try_unwrap(value).unwrap_or_else(|shared| V::clone(&shared))
}
