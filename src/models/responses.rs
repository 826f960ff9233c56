//! Response DTOs for the cache host API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cache::{CacheStats, EvictionTrigger};

/// Response body for GET /get/:key
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    pub key: String,
    pub value: String,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response body for PUT /set
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The key that was written
    pub key: String,
    /// Key removed to make room, if any
    pub evicted: Option<String>,
}

impl SetResponse {
    pub fn new(key: impl Into<String>, evicted: Option<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' set successfully", key),
            key,
            evicted,
        }
    }
}

/// Response body for GET /member/:key
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub key: String,
    pub member: bool,
}

/// Response body for GET /size
#[derive(Debug, Clone, Serialize)]
pub struct SizeResponse {
    /// Entries currently stored
    pub size: usize,
    /// Capacity fixed at startup
    pub capacity: usize,
    /// Recency clock reading
    pub clock: u64,
    /// Active eviction trigger
    pub trigger: EvictionTrigger,
}

/// Response body for GET /dict: the key -> value export, sorted by key
pub type DictResponse = BTreeMap<String, String>;

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub total_entries: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
