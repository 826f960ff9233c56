//! Scenario Tests for the Cache API
//!
//! Walks the public library surface through small end-to-end histories.

use std::collections::BTreeMap;

use mini_lru::{Cache, EvictionTrigger};

// == Eviction ==

#[test]
fn test_third_insert_evicts_oldest() {
    let cache = Cache::empty(2)
        .insert("a", 1)
        .insert("b", 2)
        .insert("c", 3);

    assert_eq!(cache.size(), 2);
    assert!(!cache.member("a"));
    assert!(cache.member("b"));
    assert!(cache.member("c"));
}

#[test]
fn test_promoted_key_survives_next_eviction() {
    let cache = Cache::empty(2).insert("a", 1).insert("b", 2);

    let (cache, value) = cache.get("a");
    assert_eq!(value, Some(1));

    let cache = cache.insert("c", 3);
    assert!(cache.member("a"));
    assert!(!cache.member("b"));
}

// == Lookup ==

#[test]
fn test_get_hit() {
    let (cache, value) = Cache::empty(5).insert("x", 10).get("x");

    assert_eq!(value, Some(10));
    assert_eq!(cache.size(), 1);
}

#[test]
fn test_get_miss_on_empty() {
    let cache: Cache<&str, i32> = Cache::empty(5);
    let (after, value) = cache.get("missing");

    assert_eq!(value, None);
    assert_eq!(after, cache);
}

// == Export ==

#[test]
fn test_to_dict() {
    let dict = Cache::empty(3).insert("a", 1).insert("b", 2).to_dict();

    let expected: BTreeMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(dict, expected);
}

// == Snapshots ==

#[test]
fn test_branching_histories_are_independent() {
    let base = Cache::empty(2).insert("a", 1).insert("b", 2);

    let (promoted, _) = base.get("a");
    let left = promoted.insert("c", 3);
    let right = base.insert("c", 3);

    assert!(left.member("a") && !left.member("b"));
    assert!(!right.member("a") && right.member("b"));
    assert_eq!(base.size(), 2);
    assert_eq!(base.clock(), 2);
}

// == Eviction Trigger ==

#[test]
fn test_overwrites_only_evict_under_clock_trigger() {
    let history = |trigger| {
        Cache::with_trigger(2, trigger)
            .insert("keep", 0)
            .insert("hot", 1)
            .insert("hot", 2)
            .insert("hot", 3)
    };

    let occupancy = history(EvictionTrigger::Occupancy);
    assert_eq!(occupancy.size(), 2);
    assert!(occupancy.member("keep"));

    let clock = history(EvictionTrigger::Clock);
    assert_eq!(clock.size(), 1);
    assert!(!clock.member("keep"));
    assert_eq!(clock.peek("hot"), Some(&3));
}
