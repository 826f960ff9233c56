//! API Handlers
//!
//! HTTP request handlers for each cache host endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::cache::{Cache, CacheStats};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    DictResponse, GetResponse, HealthResponse, MemberResponse, SetRequest, SetResponse,
    SizeResponse, StatsResponse,
};

/// The live snapshot and the counters that describe its history.
#[derive(Debug)]
pub struct Hosted {
    /// Current cache snapshot; replaced wholesale on every write
    pub cache: Cache<String, String>,
    pub stats: CacheStats,
}

/// Application state shared across all handlers.
///
/// `Cache` has no internal locking. Writers take the write lock, derive the
/// next snapshot and swap it in, so updates are serialized here.
#[derive(Clone)]
pub struct AppState {
    pub hosted: Arc<RwLock<Hosted>>,
}

impl AppState {
    /// Creates a new AppState hosting the given snapshot.
    pub fn new(cache: Cache<String, String>) -> Self {
        Self {
            hosted: Arc::new(RwLock::new(Hosted {
                cache,
                stats: CacheStats::new(),
            })),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Cache::with_trigger(
            config.capacity,
            config.eviction_trigger,
        ))
    }
}

/// Handler for PUT /set
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let mut hosted = state.hosted.write().await;
    let (next, evicted) = hosted.cache.insert_evicting(req.key.clone(), req.value);
    hosted.cache = next;

    // The clock trigger may pick the key being overwritten; it stays stored.
    let evicted = evicted
        .map(|(victim, _)| victim)
        .filter(|victim| *victim != req.key);
    hosted.stats.record_insert(evicted.is_some());

    if let Some(victim) = &evicted {
        debug!(key = %req.key, evicted = %victim, "evicted least recently used entry");
    }

    Ok(Json(SetResponse::new(req.key, evicted)))
}

/// Handler for GET /get/:key
///
/// Takes the write lock: a hit promotes the key and advances the clock.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let mut hosted = state.hosted.write().await;
    let (next, value) = hosted.cache.get(key.as_str());
    hosted.cache = next;
    hosted.stats.record_lookup(value.is_some());

    match value {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(ApiError::NotFound(key)),
    }
}

/// Handler for GET /member/:key
pub async fn member_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<MemberResponse> {
    let hosted = state.hosted.read().await;
    let member = hosted.cache.member(key.as_str());

    Json(MemberResponse { key, member })
}

/// Handler for GET /size
pub async fn size_handler(State(state): State<AppState>) -> Json<SizeResponse> {
    let hosted = state.hosted.read().await;
    let cache = &hosted.cache;

    Json(SizeResponse {
        size: cache.size(),
        capacity: cache.capacity(),
        clock: cache.clock(),
        trigger: cache.trigger(),
    })
}

/// Handler for GET /dict
pub async fn dict_handler(State(state): State<AppState>) -> Json<DictResponse> {
    let hosted = state.hosted.read().await;
    Json(hosted.cache.to_dict())
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let hosted = state.hosted.read().await;
    let stats = hosted.stats.with_total(hosted.cache.size());

    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
