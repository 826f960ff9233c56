//! API Routes
//!
//! Configures the Axum router with all cache host endpoints.

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    dict_handler, get_handler, health_handler, member_handler, set_handler, size_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /set` - Insert a key-value pair
/// - `GET /get/:key` - Look up and promote a key
/// - `GET /member/:key` - Membership test, no promotion
/// - `GET /size` - Entry count, capacity and clock
/// - `GET /dict` - Key -> value export
/// - `GET /stats` - Hit/miss/eviction counters
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/set", put(set_handler))
        .route("/get/:key", get(get_handler))
        .route("/member/:key", get(member_handler))
        .route("/size", get(size_handler))
        .route("/dict", get(dict_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
